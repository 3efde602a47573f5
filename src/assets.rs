//! Texture loading and the sprite texture bundle.

use bevy::prelude::*;

use crate::gameplay::{SpriteTextures, TextureId};
use crate::screens::GameState;

/// Path of each texture, relative to the `assets/` directory.
#[must_use]
pub const fn texture_path(id: TextureId) -> &'static str {
    match id {
        TextureId::Background => "backgrounds/purple.png",
        TextureId::Player => "ships/player.png",
        TextureId::Bullet => "ships/bullet.png",
        TextureId::Enemy => "enemies/enemy.png",
        TextureId::Explosion => "explosions/atlas.png",
    }
}

/// Image handles for every texture the game draws.
#[derive(Resource, Debug, Clone, Default)]
pub struct TextureHandles {
    pub background: Handle<Image>,
    pub player: Handle<Image>,
    pub bullet: Handle<Image>,
    pub enemy: Handle<Image>,
    pub explosion: Handle<Image>,
}

impl TextureHandles {
    #[must_use]
    pub const fn get(&self, id: TextureId) -> &Handle<Image> {
        match id {
            TextureId::Background => &self.background,
            TextureId::Player => &self.player,
            TextureId::Bullet => &self.bullet,
            TextureId::Enemy => &self.enemy,
            TextureId::Explosion => &self.explosion,
        }
    }

    /// Builds the texture bundle once every image is available.
    #[must_use]
    pub fn sprite_textures(&self, images: &Assets<Image>) -> Option<SpriteTextures> {
        if TextureId::ALL
            .iter()
            .any(|&id| images.get(self.get(id)).is_none())
        {
            return None;
        }
        Some(SpriteTextures::from_sizes(|id| {
            images
                .get(self.get(id))
                .map_or(Vec2::ZERO, Image::size_f32)
        }))
    }
}

fn load_textures(mut commands: Commands, asset_server: Res<AssetServer>) {
    let load = |id| asset_server.load(texture_path(id));
    commands.insert_resource(TextureHandles {
        background: load(TextureId::Background),
        player: load(TextureId::Player),
        bullet: load(TextureId::Bullet),
        enemy: load(TextureId::Enemy),
        explosion: load(TextureId::Explosion),
    });
}

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::Loading), load_textures);
}
