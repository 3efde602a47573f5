//! Loading screen: waits for every texture, then starts the game.

use bevy::asset::LoadState;
use bevy::prelude::*;

use super::GameState;
use crate::assets::{TextureHandles, texture_path};
use crate::gameplay::TextureId;
use crate::theme::{palette, widget};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::Loading), setup_loading_screen)
        .add_systems(
            Update,
            check_loading_complete.run_if(in_state(GameState::Loading)),
        );
}

fn setup_loading_screen(mut commands: Commands) {
    commands.spawn((
        widget::ui_root("Loading Screen", Color::NONE),
        DespawnOnExit(GameState::Loading),
        children![widget::header("Loading...", palette::HEADER_TEXT)],
    ));
}

/// Moves to `InGame` once all textures are loaded. A texture that fails to
/// load is fatal: the app exits with an error.
fn check_loading_complete(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    images: Res<Assets<Image>>,
    handles: Option<Res<TextureHandles>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: MessageWriter<AppExit>,
) {
    let Some(handles) = handles else {
        return;
    };

    for id in TextureId::ALL {
        if let LoadState::Failed(err) = asset_server.load_state(handles.get(id).id()) {
            error!("failed to load texture {}: {err}", texture_path(id));
            exit.write(AppExit::error());
            return;
        }
    }

    if let Some(textures) = handles.sprite_textures(&images) {
        info!("textures loaded");
        commands.insert_resource(textures);
        next_state.set(GameState::InGame);
    }
}
