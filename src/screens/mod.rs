//! Screen states and their plugins.

mod in_game;
mod loading;

use bevy::prelude::*;

/// Primary game states.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Textures are loading.
    #[default]
    Loading,
    /// The game loop is running.
    InGame,
}

/// Sub-states within `InGame`. Only exists while `GameState::InGame` is active.
#[derive(SubStates, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[source(GameState = GameState::InGame)]
pub enum InGameState {
    #[default]
    Playing,
    /// The player has been hit. There is no way back to `Playing`.
    GameOver,
}

pub fn plugin(app: &mut App) {
    app.init_state::<GameState>();
    app.add_sub_state::<InGameState>();
    app.add_plugins((loading::plugin, in_game::plugin));
}
