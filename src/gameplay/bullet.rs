//! Player projectiles.

use bevy::prelude::*;

use super::body::Body;
use super::canvas::Canvas;
use super::enemy::Enemy;
use super::explosion::Explosion;
use super::sprite::{SpriteTexture, SpriteTextures};

// === Constants ===

/// Pixels moved upward per frame.
pub const BULLET_SPEED: f32 = 8.0;

/// Draw scale applied to the bullet texture (and its explosion frames).
pub const BULLET_SCALE: f32 = 0.3;

#[derive(Debug, Clone, PartialEq, Reflect)]
pub struct Bullet {
    body: Body,
    speed: f32,
    texture: SpriteTexture,
    explosion_texture: SpriteTexture,
    explosion: Explosion,
    disposed: bool,
}

impl Bullet {
    /// Creates a bullet whose bottom edge is centered on `muzzle`.
    #[must_use]
    pub fn new(muzzle: Vec2, speed: f32, textures: &SpriteTextures) -> Self {
        let size = textures.bullet.size * BULLET_SCALE;
        let position = Vec2::new(muzzle.x - size.x / 2.0, muzzle.y - size.y);
        Self::at(position, speed, textures)
    }

    /// Creates a bullet with its top-left corner at `position`.
    #[must_use]
    pub fn at(position: Vec2, speed: f32, textures: &SpriteTextures) -> Self {
        Self {
            body: Body::new(position, textures.bullet.size * BULLET_SCALE),
            speed,
            texture: textures.bullet,
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
        self.body.position.y -= self.speed;
        if self.body.position.y < -self.body.size.y {
            self.disposed = true;
        }
    }

    /// Tests this bullet against `enemy` and starts the bullet's explosion on a hit.
    ///
    /// Only the bullet's top edge is compared vertically (`top <= enemy bottom`),
    /// so a fast bullet can pass through a short enemy between frames. Neither an
    /// exploding bullet nor an exploding enemy ever registers a hit.
    pub fn is_hit(&mut self, enemy: &Enemy) -> bool {
        if self.explosion.is_exploding() || enemy.is_exploding() {
            return false;
        }
        let target = enemy.body();
        let hit = self.body.top() <= target.bottom()
            && self.body.right() > target.left()
            && self.body.left() < target.right();
        if hit {
            self.explosion.trigger();
        }
        hit
    }

    #[must_use]
    pub const fn is_exploding(&self) -> bool {
        self.explosion.is_exploding()
    }

    #[must_use]
    pub const fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn render(&mut self, canvas: &mut impl Canvas) {
        if let Some(frame) = self.explosion.advance() {
            canvas.draw_sprite(
                &self.explosion_texture,
                Some(frame),
                self.body.position,
                BULLET_SCALE,
            );
            if self.explosion.is_done() {
                self.disposed = true;
            }
        } else if !self.explosion.is_done() {
            canvas.draw_sprite(&self.texture, None, self.body.position, BULLET_SCALE);
        }
    }
}
