//! Space Invaders: a small 2D arcade shooter.

pub mod assets;
mod camera;
pub mod gameplay;
pub mod screens;
#[cfg(test)]
pub mod testing;
pub mod theme;

use bevy::prelude::*;

// === Draw Layers ===

/// Base depth of the gameplay sprite pool.
pub const Z_SPRITES: f32 = 0.0;

/// Ordering of the per-frame work in `Update`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameSet {
    /// Keyboard sampling.
    Input,
    /// One step of the game loop.
    Simulation,
    /// Render pass and presentation.
    Render,
}

pub fn plugin(app: &mut App) {
    app.configure_sets(
        Update,
        (GameSet::Input, GameSet::Simulation, GameSet::Render).chain(),
    );
    app.add_plugins((
        camera::plugin,
        theme::plugin,
        screens::plugin,
        assets::plugin,
        gameplay::plugin,
    ));
}
