//! In-game screen: the game-over overlay.
//!
//! The game loop itself lives in `gameplay`; this plugin only reacts to
//! `InGameState` changes.

use bevy::prelude::*;

use super::{GameState, InGameState};
use crate::theme::{palette, widget};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(InGameState::GameOver), spawn_game_over_overlay);
}

fn spawn_game_over_overlay(mut commands: Commands) {
    commands.spawn((
        widget::ui_root("Game Over Overlay", palette::OVERLAY_BACKDROP),
        GlobalZIndex(1),
        DespawnOnExit(GameState::InGame),
        children![
            widget::header("GAME OVER", palette::GAME_OVER_TEXT),
            widget::label("Close the window to quit"),
        ],
    ));
}
