use crate::point::Point;

/// Radius given by the center (first point) and an edge point (second point)
pub(crate) fn radius(points: &[Point]) -> f64 {
    match points {
        [center, edge, ..] => center.distance_to(*edge),
        _ => 0.0,
    }
}
