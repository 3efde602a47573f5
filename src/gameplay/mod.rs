//! Gameplay: the simulation core and the systems that drive it each frame.
//!
//! Entities are plain structs owned by the [`Game`] resource rather than ECS
//! entities. One frame runs input sampling, one [`Game::update`], then the
//! render pass ([`Game::render`] into the [`Frame`]) and presentation.

pub mod body;
pub mod bullet;
pub mod canvas;
pub mod controls;
pub mod enemy;
pub mod explosion;
pub mod game;
pub mod player;
pub mod sprite;

use bevy::prelude::*;

pub use canvas::{Canvas, Frame};
pub use controls::{Controls, Key};
pub use game::Game;
pub use sprite::{SpriteTexture, SpriteTextures, TextureId};

use crate::GameSet;
use crate::screens::{GameState, InGameState};

/// Starts a fresh run.
fn start_game(mut commands: Commands, textures: Res<SpriteTextures>) {
    commands.insert_resource(Game::new(&textures));
    info!("game started");
}

fn advance_game(controls: Res<Controls>, mut game: ResMut<Game>) {
    game.update(&controls, &mut rand::rng());
}

/// Mirrors the game's own game-over flag into `InGameState`.
fn detect_game_over(
    game: Res<Game>,
    state: Res<State<InGameState>>,
    mut next_state: ResMut<NextState<InGameState>>,
) {
    if game.is_game_over() && *state.get() == InGameState::Playing {
        next_state.set(InGameState::GameOver);
    }
}

fn draw_frame(mut game: ResMut<Game>, mut frame: ResMut<Frame>) {
    frame.clear();
    game.render(&mut *frame);
}

pub fn plugin(app: &mut App) {
    app.register_type::<Game>()
        .register_type::<Controls>()
        .register_type::<Frame>()
        .register_type::<SpriteTextures>()
        .register_type::<canvas::SpriteSlot>()
        .init_resource::<Controls>()
        .init_resource::<Frame>();

    app.add_systems(OnEnter(GameState::InGame), start_game);

    app.add_systems(
        Update,
        (
            controls::sample_controls.in_set(GameSet::Input),
            (advance_game, detect_game_over)
                .chain()
                .in_set(GameSet::Simulation),
            (draw_frame, canvas::present_frame)
                .chain()
                .in_set(GameSet::Render),
        )
            .run_if(in_state(GameState::InGame)),
    );
}
