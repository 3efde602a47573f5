//! Descending enemy ships.

use bevy::prelude::*;
use rand::Rng;

use super::body::{Body, WINDOW_HEIGHT, WINDOW_WIDTH};
use super::canvas::Canvas;
use super::explosion::Explosion;
use super::sprite::{SpriteTexture, SpriteTextures};

// === Constants ===

/// Pixels moved downward per frame.
pub const ENEMY_SPEED: f32 = 2.0;

#[derive(Debug, Clone, PartialEq, Reflect)]
pub struct Enemy {
    body: Body,
    texture: SpriteTexture,
    explosion_texture: SpriteTexture,
    explosion: Explosion,
    disposed: bool,
}

impl Enemy {
    /// Spawns fully above the window at a uniformly random column.
    #[must_use]
    pub fn spawn(textures: &SpriteTextures, rng: &mut impl Rng) -> Self {
        let size = textures.enemy.size;
        let max_x = (WINDOW_WIDTH - size.x).max(0.0);
        let x = rng.random_range(0.0..=max_x);
        Self::at(Vec2::new(x, -size.y), textures)
    }

    #[must_use]
    pub fn at(position: Vec2, textures: &SpriteTextures) -> Self {
        Self {
            body: Body::new(position, textures.enemy.size),
            texture: textures.enemy,
            explosion_texture: textures.explosion,
            explosion: Explosion::default(),
            disposed: false,
        }
    }

    #[must_use]
    pub const fn body(&self) -> &Body {
        &self.body
    }

    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.body.position
    }

    pub fn update(&mut self) {
        if self.disposed || self.explosion.is_exploding() {
            return;
        }
        self.body.position.y += ENEMY_SPEED;
        if self.body.position.y > WINDOW_HEIGHT {
            self.disposed = true;
        }
    }

    pub const fn explode(&mut self) {
        self.explosion.trigger();
    }

    #[must_use]
    pub const fn is_exploding(&self) -> bool {
        self.explosion.is_exploding()
    }

    #[must_use]
    pub const fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Draws the ship or its next explosion frame; a finished explosion disposes it.
    pub fn render(&mut self, canvas: &mut impl Canvas) {
        if let Some(frame) = self.explosion.advance() {
            canvas.draw_sprite(&self.explosion_texture, Some(frame), self.body.position, 1.0);
            if self.explosion.is_done() {
                self.disposed = true;
            }
        } else if !self.explosion.is_done() {
            canvas.draw_sprite(&self.texture, None, self.body.position, 1.0);
        }
    }
}
