//! The keyboard-controlled ship.

use bevy::prelude::*;

use super::body::{Body, WINDOW_HEIGHT, WINDOW_WIDTH};
use super::canvas::Canvas;
use super::controls::{Controls, Key};
use super::explosion::Explosion;
use super::sprite::{SpriteTexture, SpriteTextures};

// === Constants ===

/// Pixels moved per frame along each held direction.
pub const PLAYER_SPEED: f32 = 4.0;

#[derive(Debug, Clone, PartialEq, Reflect)]
pub struct Player {
    body: Body,
    texture: SpriteTexture,
    explosion_texture: SpriteTexture,
    explosion: Explosion,
}

impl Player {
    /// Creates the player centered in the window.
    #[must_use]
    pub fn new(textures: &SpriteTextures) -> Self {
        let size = textures.player.size;
        let center = Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT) / 2.0;
        Self::at(center - size / 2.0, textures)
    }

    #[must_use]
    pub fn at(position: Vec2, textures: &SpriteTextures) -> Self {
        Self {
            body: Body::new(position, textures.player.size),
            texture: textures.player,
            explosion_texture: textures.explosion,
            explosion: Explosion::default(),
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

    /// Point bullets leave from: top edge, horizontally centered.
    #[must_use]
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(self.body.position.x + self.body.size.x / 2.0, self.body.position.y)
    }

    /// Moves in every held direction at full speed, keeping the sprite in the window.
    ///
    /// Diagonal input is not normalized. A ship that has started exploding
    /// no longer moves.
    pub fn update(&mut self, controls: &Controls) {
        if self.explosion.is_exploding() || self.explosion.is_done() {
            return;
        }

        let mut delta = Vec2::ZERO;
        if controls.is_down(Key::Left) {
            delta.x -= PLAYER_SPEED;
        }
        if controls.is_down(Key::Right) {
            delta.x += PLAYER_SPEED;
        }
        if controls.is_down(Key::Up) {
            delta.y -= PLAYER_SPEED;
        }
        if controls.is_down(Key::Down) {
            delta.y += PLAYER_SPEED;
        }

        let max = (Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT) - self.body.size).max(Vec2::ZERO);
        self.body.position = (self.body.position + delta).clamp(Vec2::ZERO, max);
    }

    pub const fn explode(&mut self) {
        self.explosion.trigger();
    }

    #[must_use]
    pub const fn is_exploding(&self) -> bool {
        self.explosion.is_exploding()
    }

    /// True once the explosion animation has played to the end.
    #[must_use]
    pub const fn is_destroyed(&self) -> bool {
        self.explosion.is_done()
    }

    /// Draws the ship, or the next explosion frame. Nothing is drawn once destroyed.
    pub fn render(&mut self, canvas: &mut impl Canvas) {
        if let Some(frame) = self.explosion.advance() {
            canvas.draw_sprite(&self.explosion_texture, Some(frame), self.body.position, 1.0);
        } else if !self.explosion.is_done() {
            canvas.draw_sprite(&self.texture, None, self.body.position, 1.0);
        }
    }
}
