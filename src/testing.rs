//! Testing utilities for Bevy systems and the simulation core.

#![cfg(test)]

use bevy::ecs::query::QueryFilter;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use crate::gameplay::{SpriteTextures, TextureId};
use crate::screens::{GameState, InGameState};

/// Texture sizes used across tests. The enemy is the 50×50 box used by the
/// collision scenarios.
///
/// The bullet must stay under 46.67 px (14 px once scaled by `BULLET_SCALE`):
/// a bullet starting at y = 50 reaches y = -14 after 8 updates and is only
/// disposed once it is fully above the window.
pub fn test_textures() -> SpriteTextures {
    SpriteTextures::from_sizes(|id| match id {
        TextureId::Background => Vec2::splat(256.0),
        TextureId::Player => Vec2::new(99.0, 75.0),
        TextureId::Bullet => Vec2::splat(40.0),
        TextureId::Enemy => Vec2::splat(50.0),
        TextureId::Explosion => Vec2::splat(400.0),
    })
}

/// Minimal app with both state layers registered.
pub fn create_base_test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(StatesPlugin);
    app.init_state::<GameState>();
    app.add_sub_state::<InGameState>();
    app
}

/// Moves the app into `GameState::InGame` and applies the transition.
pub fn transition_to_ingame(app: &mut App) {
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::InGame);
    app.update();
}

/// Asserts how many entities match `F`.
pub fn assert_entity_count<F: QueryFilter>(app: &mut App, expected: usize) {
    let mut query = app.world_mut().query_filtered::<Entity, F>();
    let actual = query.iter(app.world()).count();
    assert_eq!(
        actual,
        expected,
        "expected {expected} entities matching {}, found {actual}",
        std::any::type_name::<F>()
    );
}
