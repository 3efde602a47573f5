//! End-to-end tests driving the public plugins in a headless app.

mod game_loop;
mod state_transitions;

use bevy::asset::AssetPlugin;
use bevy::input::InputPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use space_invader::assets::TextureHandles;
use space_invader::gameplay::{SpriteTextures, TextureId};
use space_invader::screens::GameState;

/// Headless app with states, input and the gameplay layer. Textures are
/// never loaded from disk: the texture bundle is inserted directly.
pub fn create_game_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(StatesPlugin);
    app.add_plugins(InputPlugin);
    app.add_plugins(AssetPlugin::default());
    app.init_asset::<Image>();
    app.add_plugins(space_invader::screens::plugin);
    app.add_plugins(space_invader::gameplay::plugin);
    app.configure_sets(
        Update,
        (
            space_invader::GameSet::Input,
            space_invader::GameSet::Simulation,
            space_invader::GameSet::Render,
        )
            .chain(),
    );
    app.insert_resource(SpriteTextures::from_sizes(|id| match id {
        TextureId::Background => Vec2::splat(256.0),
        TextureId::Player => Vec2::new(99.0, 75.0),
        // Under 46.67 px so a bullet fired near the top clears the window in 8 frames.
        TextureId::Bullet => Vec2::splat(40.0),
        TextureId::Enemy => Vec2::splat(50.0),
        TextureId::Explosion => Vec2::splat(400.0),
    }));
    app.insert_resource(TextureHandles::default());
    app
}

/// Skips loading and enters `InGame`.
pub fn start_in_game(app: &mut App) {
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::InGame);
    app.update();
}
