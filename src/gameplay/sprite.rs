//! Texture identities and sizes shared by every entity.

use bevy::prelude::*;

/// The five textures the game draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum TextureId {
    Background,
    Player,
    Bullet,
    Enemy,
    Explosion,
}

impl TextureId {
    /// All texture ids, in load order.
    pub const ALL: [Self; 5] = [
        Self::Background,
        Self::Player,
        Self::Bullet,
        Self::Enemy,
        Self::Explosion,
    ];
}

/// A texture reference plus its pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct SpriteTexture {
    pub id: TextureId,
    pub size: Vec2,
}

/// Every texture the game needs, built once after loading and passed by
/// reference into entity constructors.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct SpriteTextures {
    pub background: SpriteTexture,
    pub player: SpriteTexture,
    pub bullet: SpriteTexture,
    pub enemy: SpriteTexture,
    pub explosion: SpriteTexture,
}

impl SpriteTextures {
    /// Builds the bundle from a size lookup.
    pub fn from_sizes(mut size_of: impl FnMut(TextureId) -> Vec2) -> Self {
        let mut texture = |id| SpriteTexture { id, size: size_of(id) };
        Self {
            background: texture(TextureId::Background),
            player: texture(TextureId::Player),
            bullet: texture(TextureId::Bullet),
            enemy: texture(TextureId::Enemy),
            explosion: texture(TextureId::Explosion),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_sizes_assigns_each_id_its_own_size() {
        let textures = SpriteTextures::from_sizes(|id| match id {
            TextureId::Background => Vec2::new(256.0, 256.0),
            TextureId::Player => Vec2::new(99.0, 75.0),
            TextureId::Bullet => Vec2::new(91.0, 91.0),
            TextureId::Enemy => Vec2::new(104.0, 84.0),
            TextureId::Explosion => Vec2::new(400.0, 400.0),
        });

        assert_eq!(textures.player.size, Vec2::new(99.0, 75.0));
        assert_eq!(textures.bullet.size, Vec2::new(91.0, 91.0));
        let ids = [
            textures.background.id,
            textures.player.id,
            textures.bullet.id,
            textures.enemy.id,
            textures.explosion.id,
        ];
        assert_eq!(ids, TextureId::ALL);
    }
}
