//! The single 2D camera. It persists across all states and looks at the
//! window center, so one world unit is one window pixel.

use bevy::prelude::*;

pub fn plugin(app: &mut App) {
    app.register_type::<MainCamera>();
    app.add_systems(Startup, spawn_camera);
}

/// Marker for the global camera.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct MainCamera;

fn spawn_camera(mut commands: Commands) {
    commands.spawn((Name::new("Main Camera"), MainCamera, Camera2d));
}

