use serde::{Deserialize, Serialize};

use crate::geometry;

/// Radius within which a pointer press grabs a point
pub const POINT_RADIUS: f64 = 4.0;

/// A vertex in scene coordinates (y grows upward from the bottom of the canvas)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    pub fn set(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Hit test against the point's grab radius (boundary excluded)
    pub fn contains(&self, x: f64, y: f64) -> bool {
        geometry::hit_testing::within_radius(*self, Point::new(x, y), POINT_RADIUS)
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        geometry::distance(*self, other)
    }
}

impl From<Point> for kurbo::Point {
    fn from(p: Point) -> Self {
        kurbo::Point::new(p.x, p.y)
    }
}

impl From<kurbo::Point> for Point {
    fn from(p: kurbo::Point) -> Self {
        Point::new(p.x, p.y)
    }
}
