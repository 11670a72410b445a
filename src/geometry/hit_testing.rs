use crate::point::Point;

use super::distance;

/// True when `pos` lies strictly inside the circle of `radius` around `center`
pub fn within_radius(center: Point, pos: Point, radius: f64) -> bool {
    distance(center, pos) < radius
}

/// Index of the first point whose grab radius contains `(x, y)`
pub fn first_point_hit(points: &[Point], x: f64, y: f64) -> Option<usize> {
    points.iter().position(|p| p.contains(x, y))
}
