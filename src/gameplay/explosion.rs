//! Explosion animation shared by the player, enemies and bullets.
//!
//! The explosion atlas is a 4×4 grid of 100×100 cells, of which the first
//! 14 are played in order. The animation clock is the render pass: each
//! [`Explosion::advance`] call samples one frame.

use bevy::prelude::*;

// === Constants ===

/// Number of atlas frames in one explosion.
pub const EXPLOSION_FRAME_COUNT: u32 = 14;

/// Atlas cells per row.
pub const EXPLOSION_FRAMES_PER_ROW: u32 = 4;

/// Edge length of one atlas cell (pixels).
pub const EXPLOSION_CELL_SIZE: f32 = 100.0;

/// Where an entity is in its explosion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum ExplosionState {
    #[default]
    None,
    /// Holds the index of the next frame to sample.
    Exploding(u32),
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub struct Explosion {
    state: ExplosionState,
}

impl Explosion {
    /// Starts (or restarts) the animation from the first frame.
    pub const fn trigger(&mut self) {
        self.state = ExplosionState::Exploding(0);
    }

    #[must_use]
    pub const fn state(&self) -> ExplosionState {
        self.state
    }

    #[must_use]
    pub const fn is_exploding(&self) -> bool {
        matches!(self.state, ExplosionState::Exploding(_))
    }

    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self.state, ExplosionState::Done)
    }

    /// Samples the current frame and steps to the next one.
    ///
    /// Returns the atlas source rect to draw, or `None` when not exploding.
    /// The call that samples the last frame moves the state to `Done`.
    pub fn advance(&mut self) -> Option<Rect> {
        let ExplosionState::Exploding(index) = self.state else {
            return None;
        };
        let next = index + 1;
        self.state = if next >= EXPLOSION_FRAME_COUNT {
            ExplosionState::Done
        } else {
            ExplosionState::Exploding(next)
        };
        Some(frame_rect(index))
    }
}

/// Atlas source rect for frame `index`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn frame_rect(index: u32) -> Rect {
    let col = (index % EXPLOSION_FRAMES_PER_ROW) as f32;
    let row = (index / EXPLOSION_FRAMES_PER_ROW) as f32;
    let min = Vec2::new(col, row) * EXPLOSION_CELL_SIZE;
    Rect::from_corners(min, min + Vec2::splat(EXPLOSION_CELL_SIZE))
}
