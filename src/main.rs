//! Space Invaders entry point.

use bevy::prelude::*;
use bevy::window::PresentMode;
use space_invader::gameplay::body::{WINDOW_HEIGHT, WINDOW_WIDTH};

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Space Invaders".to_string(),
                        resolution: (WINDOW_WIDTH as u32, WINDOW_HEIGHT as u32).into(),
                        resizable: false,
                        present_mode: PresentMode::AutoVsync,
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin::default_nearest()),
        )
        .add_plugins(space_invader::plugin)
        .run();
}
