pub mod hit_testing;

use crate::point::Point;

/// Euclidean distance between two points
pub fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Axis-aligned box spanned by two opposite corners
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            left: a.x.min(b.x),
            right: a.x.max(b.x),
            top: a.y.max(b.y),
            bottom: a.y.min(b.y),
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// Strict interior test, edges are outside
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x > self.left && x < self.right && y < self.top && y > self.bottom
    }

    /// Corners in drawing order, starting top-left
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left, self.top),
            Point::new(self.right, self.top),
            Point::new(self.right, self.bottom),
            Point::new(self.left, self.bottom),
        ]
    }
}
