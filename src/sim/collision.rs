//! Player footprint and overlap testing
//!
//! The footprint is the rectangular coordinate set around the player used
//! for overlap checks: ±80 pixels in x, ±20 in y, bounds inclusive. The
//! overlap test itself is plain interval arithmetic on truncated obstacle
//! coordinates; the materialized per-pixel sequences are kept available for
//! debugging and tests.

use glam::Vec2;

use crate::consts::{FOOTPRINT_HALF_X, FOOTPRINT_HALF_Y};

/// The player's collision footprint at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl Footprint {
    /// Build the footprint centered on a position. Callers rebuild this from
    /// the live position before every check; it is never cached.
    pub fn around(center: Vec2) -> Self {
        Self {
            x_min: center.x - FOOTPRINT_HALF_X,
            x_max: center.x + FOOTPRINT_HALF_X,
            y_min: center.y - FOOTPRINT_HALF_Y,
            y_max: center.y + FOOTPRINT_HALF_Y,
        }
    }

    /// Every covered x-coordinate, one per pixel column (161 values)
    pub fn xs(&self) -> impl Iterator<Item = f32> {
        let min = self.x_min;
        (0..=2 * FOOTPRINT_HALF_X as i32).map(move |k| min + k as f32)
    }

    /// Every covered y-coordinate, one per pixel row (41 values)
    pub fn ys(&self) -> impl Iterator<Item = f32> {
        let min = self.y_min;
        (0..=2 * FOOTPRINT_HALF_Y as i32).map(move |k| min + k as f32)
    }

    #[inline]
    fn spans_x(&self, x: f32) -> bool {
        x >= self.x_min && x <= self.x_max
    }

    #[inline]
    fn spans_y(&self, y: f32) -> bool {
        y >= self.y_min && y <= self.y_max
    }

    /// True when `point` overlaps the footprint on BOTH axes.
    ///
    /// Coordinates are truncated toward zero before the test, so an obstacle
    /// is judged by the pixel cell it occupies, not its fractional position.
    pub fn contains(&self, point: Vec2) -> bool {
        self.spans_x(point.x.trunc()) && self.spans_y(point.y.trunc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footprint_dimensions() {
        let fp = Footprint::around(Vec2::new(200.0, 380.0));
        assert_eq!(fp.xs().count(), 161);
        assert_eq!(fp.ys().count(), 41);
    }

    #[test]
    fn test_footprint_centered() {
        let fp = Footprint::around(Vec2::new(200.0, 380.0));
        let xs: Vec<f32> = fp.xs().collect();
        let ys: Vec<f32> = fp.ys().collect();
        assert_eq!(xs.first(), Some(&120.0));
        assert_eq!(xs.last(), Some(&280.0));
        assert_eq!(ys.first(), Some(&360.0));
        assert_eq!(ys.last(), Some(&400.0));
    }

    #[test]
    fn test_boundary_inclusive() {
        let fp = Footprint::around(Vec2::new(200.0, 380.0));
        // Exactly on each edge still collides
        assert!(fp.contains(Vec2::new(120.0, 380.0)));
        assert!(fp.contains(Vec2::new(280.0, 380.0)));
        assert!(fp.contains(Vec2::new(200.0, 360.0)));
        assert!(fp.contains(Vec2::new(200.0, 400.0)));
        // One pixel past each edge does not
        assert!(!fp.contains(Vec2::new(119.0, 380.0)));
        assert!(!fp.contains(Vec2::new(281.0, 380.0)));
        assert!(!fp.contains(Vec2::new(200.0, 359.0)));
        assert!(!fp.contains(Vec2::new(200.0, 401.0)));
    }

    #[test]
    fn test_truncation_toward_zero() {
        let fp = Footprint::around(Vec2::new(200.0, 380.0));
        // 280.9 truncates to 280, still on the edge
        assert!(fp.contains(Vec2::new(280.9, 400.9)));
        assert!(!fp.contains(Vec2::new(281.1, 380.0)));

        // Negative coordinates truncate up toward zero
        let fp = Footprint::around(Vec2::new(40.0, 380.0));
        assert!(fp.contains(Vec2::new(-40.7, 380.0))); // trunc -> -40, on the edge
        assert!(!fp.contains(Vec2::new(-41.2, 380.0))); // trunc -> -41, outside
    }

    #[test]
    fn test_single_axis_overlap_is_not_a_hit() {
        let fp = Footprint::around(Vec2::new(200.0, 380.0));
        assert!(!fp.contains(Vec2::new(200.0, 100.0))); // x overlaps, y far away
        assert!(!fp.contains(Vec2::new(480.0, 380.0))); // y overlaps, x far away
    }
}
