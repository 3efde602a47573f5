//! Tests for game state transitions.

use bevy::prelude::*;
use pretty_assertions::assert_eq;
use space_invader::gameplay::Game;
use space_invader::screens::{GameState, InGameState};

use crate::{create_game_app, start_in_game};

#[test]
fn game_initializes_in_loading_state() {
    let app = create_game_app();
    let state = app.world().resource::<State<GameState>>();
    assert_eq!(*state.get(), GameState::Loading);
}

#[test]
fn entering_in_game_starts_a_fresh_game() {
    let mut app = create_game_app();
    start_in_game(&mut app);

    let state = app.world().resource::<State<GameState>>();
    assert_eq!(*state.get(), GameState::InGame);
    let game = app.world().resource::<Game>();
    assert!(!game.is_game_over());
    assert_eq!(
        *app.world().resource::<State<InGameState>>().get(),
        InGameState::Playing
    );
}
