// Math utilities and helper functions

use glam::Vec2;
use parry2d::bounding_volume::Aabb;
use parry2d::math::Point;

/// Minimum overlap (in world units) for two rectangles to count as touching.
/// Edges that merely meet do not overlap.
const OVERLAP_EPSILON: f32 = 1e-4;

/// Axis-aligned rectangle with a top-left origin (+y points down)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Centre point of the rectangle
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Same rectangle moved by (dx, dy)
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Convert to a parry2d bounding box
    pub fn to_aabb(&self) -> Aabb {
        Aabb::new(
            Point::new(self.left(), self.top()),
            Point::new(self.right(), self.bottom()),
        )
    }

    /// Size of the overlapping region, if the rectangles overlap by more than
    /// a hair on both axes
    pub fn overlap(&self, other: &Rect) -> Option<Vec2> {
        let intersection = self.to_aabb().intersection(&other.to_aabb())?;
        let extents = intersection.extents();
        if extents.x > OVERLAP_EPSILON && extents.y > OVERLAP_EPSILON {
            Some(Vec2::new(extents.x, extents.y))
        } else {
            None
        }
    }

    /// Check for a strict overlap (touching edges do not count)
    pub fn intersects(&self, other: &Rect) -> bool {
        self.overlap(other).is_some()
    }

    /// Smallest translation that moves `self` out of `other`.
    /// Only one component is non-zero: the axis of least penetration.
    pub fn push_out(&self, other: &Rect) -> Option<Vec2> {
        let overlap = self.overlap(other)?;
        let mine = self.center();
        let theirs = other.center();

        if overlap.x < overlap.y {
            let dx = if mine.x < theirs.x { -overlap.x } else { overlap.x };
            Some(Vec2::new(dx, 0.0))
        } else {
            let dy = if mine.y < theirs.y { -overlap.y } else { overlap.y };
            Some(Vec2::new(0.0, dy))
        }
    }

    /// Horizontal extents overlap strictly
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.left() < other.right() - OVERLAP_EPSILON
            && self.right() > other.left() + OVERLAP_EPSILON
    }
}

/// Check if two f32 values are approximately equal
pub fn approx_equal(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 20.0, 4.0, 8.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.right(), 14.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.bottom(), 28.0);
        assert_eq!(rect.center(), Vec2::new(12.0, 24.0));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(a.push_out(&b).is_none());
    }

    #[test]
    fn test_overlap_extents() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(8.0, 5.0, 10.0, 10.0);
        let overlap = a.overlap(&b).unwrap();
        assert!(approx_equal(overlap.x, 2.0, 1e-5));
        assert!(approx_equal(overlap.y, 5.0, 1e-5));
    }

    #[test]
    fn test_push_out_picks_least_penetration() {
        // Sunk 2 units into the top of a wide floor
        let player = Rect::new(5.0, 0.0, 10.0, 20.0);
        let floor = Rect::new(0.0, 18.0, 100.0, 10.0);
        let push = player.push_out(&floor).unwrap();
        assert_eq!(push.x, 0.0);
        assert!(approx_equal(push.y, -2.0, 1e-5));

        // Clipping 1 unit into a tall wall on the right
        let wall = Rect::new(14.0, -50.0, 10.0, 100.0);
        let push = player.push_out(&wall).unwrap();
        assert!(approx_equal(push.x, -1.0, 1e-5));
        assert_eq!(push.y, 0.0);
    }

    #[test]
    fn test_overlaps_horizontally() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps_horizontally(&Rect::new(5.0, 100.0, 10.0, 1.0)));
        assert!(!a.overlaps_horizontally(&Rect::new(10.0, 100.0, 10.0, 1.0)));
    }

    #[test]
    fn test_approx_equal() {
        assert!(approx_equal(1.0, 1.00001, 0.0001));
        assert!(!approx_equal(1.0, 1.1, 0.01));
    }
}
