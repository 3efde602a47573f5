//! The per-frame game loop: spawning, movement, collisions and disposal.

use bevy::prelude::*;
use rand::Rng;

use super::body::{WINDOW_HEIGHT, WINDOW_WIDTH};
use super::bullet::{BULLET_SPEED, Bullet};
use super::canvas::Canvas;
use super::controls::{Controls, Key};
use super::enemy::Enemy;
use super::player::Player;
use super::sprite::SpriteTextures;

// === Constants ===

/// Enemies alive at once.
pub const MAX_ENEMIES: usize = 3;

/// All simulation state for one run. Game over is permanent.
#[derive(Resource, Debug, Clone, Reflect)]
#[reflect(Resource)]
pub struct Game {
    textures: SpriteTextures,
    player: Player,
    bullets: Vec<Bullet>,
    enemies: Vec<Enemy>,
    /// Set while the fire key is held after a shot; one bullet per press.
    fire_latched: bool,
    game_over: bool,
}

impl Game {
    #[must_use]
    pub fn new(textures: &SpriteTextures) -> Self {
        Self::with_player(Player::new(textures), textures)
    }

    #[must_use]
    pub fn with_player(player: Player, textures: &SpriteTextures) -> Self {
        Self {
            textures: *textures,
            player,
            bullets: Vec::new(),
            enemies: Vec::new(),
            fire_latched: false,
            game_over: false,
        }
    }

    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    #[must_use]
    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    #[must_use]
    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn add_enemy(&mut self, enemy: Enemy) {
        self.enemies.push(enemy);
    }

    pub fn add_bullet(&mut self, bullet: Bullet) {
        self.bullets.push(bullet);
    }

    /// Advances the simulation by one frame. Step order is observable and fixed.
    pub fn update(&mut self, controls: &Controls, rng: &mut impl Rng) {
        self.player.update(controls);
        for bullet in &mut self.bullets {
            bullet.update();
        }
        for enemy in &mut self.enemies {
            enemy.update();
        }

        self.fire(controls.is_down(Key::Fire));
        self.bullets.retain(|bullet| !bullet.is_disposed());

        if !self.game_over && self.enemies.len() < MAX_ENEMIES {
            let enemy = Enemy::spawn(&self.textures, rng);
            debug!("enemy spawned at x = {:.0}", enemy.position().x);
            self.enemies.push(enemy);
        }
        self.enemies.retain(|enemy| !enemy.is_disposed());

        self.resolve_bullet_hits();
        self.resolve_player_collisions();
    }

    /// Fires on the first frame of a press; holding the key does not refire.
    fn fire(&mut self, fire_down: bool) {
        if self.game_over || !fire_down {
            self.fire_latched = false;
            return;
        }
        if !self.fire_latched {
            self.bullets
                .push(Bullet::new(self.player.muzzle(), BULLET_SPEED, &self.textures));
            self.fire_latched = true;
            debug!("bullet fired ({} in flight)", self.bullets.len());
        }
    }

    fn resolve_bullet_hits(&mut self) {
        for bullet in &mut self.bullets {
            for enemy in &mut self.enemies {
                if bullet.is_hit(enemy) {
                    enemy.explode();
                    debug!("enemy destroyed at {:?}", enemy.position());
                }
            }
        }
    }

    fn resolve_player_collisions(&mut self) {
        for enemy in &mut self.enemies {
            if enemy.is_exploding() || self.player.is_exploding() || self.player.is_destroyed()
            {
                continue;
            }
            if self.player.body().overlaps(enemy.body()) {
                self.player.explode();
                enemy.explode();
                self.game_over = true;
                info!("player destroyed, game over");
            }
        }
    }

    /// Draws the frame in back-to-front order and advances explosion animations.
    pub fn render(&mut self, canvas: &mut impl Canvas) {
        let background = self.textures.background;
        let cover = (Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT) / background.size).max_element();
        canvas.draw_sprite(&background, None, Vec2::ZERO, cover.max(1.0));

        self.player.render(canvas);
        for enemy in &mut self.enemies {
            enemy.render(canvas);
        }
        for bullet in &mut self.bullets {
            bullet.render(canvas);
        }
    }
}
