//! Screen-space bounding boxes.
//!
//! Coordinates are window pixels with the origin at the top-left corner and
//! y growing downward.

use bevy::prelude::*;

pub const WINDOW_WIDTH: f32 = 500.0;
pub const WINDOW_HEIGHT: f32 = 800.0;

/// Top-left anchored box.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct Body {
    pub position: Vec2,
    pub size: Vec2,
}

impl Body {
    #[must_use]
    pub const fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    #[must_use]
    pub fn left(&self) -> f32 {
        self.position.x
    }

    #[must_use]
    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    #[must_use]
    pub fn top(&self) -> f32 {
        self.position.y
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    /// Inclusive overlap on both axes; touching edges count.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.top() <= other.bottom()
            && other.top() <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f32, y: f32) -> Body {
        Body::new(Vec2::new(x, y), Vec2::splat(50.0))
    }

    #[test]
    fn overlapping_boxes_intersect_both_ways() {
        let a = square(0.0, 0.0);
        let b = square(25.0, 40.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn touching_edges_overlap() {
        assert!(square(0.0, 0.0).overlaps(&square(50.0, 0.0)));
    }

    #[test]
    fn separated_on_one_axis_do_not_overlap() {
        assert!(!square(0.0, 0.0).overlaps(&square(51.0, 0.0)));
        assert!(!square(0.0, 0.0).overlaps(&square(0.0, 60.0)));
    }
}
