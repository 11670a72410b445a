use crate::geometry::Bounds;
use crate::point::Point;

/// Adds the two derived corners to a rectangle given by two opposite corners,
/// so that every corner can be grabbed. Points 0 and 1 stay the opposite pair.
pub(crate) fn complete_corners(mut points: Vec<Point>) -> Vec<Point> {
    if points.len() == 2 {
        let (a, b) = (points[0], points[1]);
        points.push(Point::new(a.x, b.y));
        points.push(Point::new(b.x, a.y));
    }
    points
}

/// Index of the first stored corner that is not where `complete_corners`
/// would put it
pub(crate) fn skewed_corner(points: &[Point]) -> Option<usize> {
    match points {
        [a, b, c, d] => {
            if *c != Point::new(a.x, b.y) {
                Some(2)
            } else if *d != Point::new(b.x, a.y) {
                Some(3)
            } else {
                None
            }
        }
        _ => None,
    }
}

pub(crate) fn bounds(points: &[Point]) -> Bounds {
    match points {
        [a, b, ..] => Bounds::from_corners(*a, *b),
        [a] => Bounds::from_corners(*a, *a),
        [] => Bounds::default(),
    }
}

/// Drags one corner to `(x, y)`, pulling along every other corner that shares
/// its x or y coordinate so the edges stay axis aligned.
pub(crate) fn adjust_corners(points: &mut [Point], index: usize, x: f64, y: f64) {
    let dragged = points[index];
    for (i, corner) in points.iter_mut().enumerate() {
        if i == index {
            continue;
        }
        if corner.x == dragged.x {
            corner.set_x(x);
        }
        if corner.y == dragged.y {
            corner.set_y(y);
        }
    }
    points[index].set(x, y);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_corners_derives_remaining_pair() {
        let points = complete_corners(vec![Point::new(0.0, 0.0), Point::new(10.0, 20.0)]);
        assert_eq!(
            points,
            vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 20.0),
                Point::new(0.0, 20.0),
                Point::new(10.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_skewed_corner() {
        let mut points = complete_corners(vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)]);
        assert_eq!(skewed_corner(&points), None);
        points[3] = Point::new(-7.0, 3.0);
        assert_eq!(skewed_corner(&points), Some(3));
        points[2] = Point::new(50.0, 50.0);
        assert_eq!(skewed_corner(&points), Some(2));
    }

    #[test]
    fn test_adjust_keeps_opposite_corner() {
        let mut points = complete_corners(vec![Point::new(0.0, 0.0), Point::new(10.0, 20.0)]);
        adjust_corners(&mut points, 1, 15.0, 25.0);
        assert_eq!(points[0], Point::new(0.0, 0.0));
        assert_eq!(points[1], Point::new(15.0, 25.0));
        assert_eq!(points[2], Point::new(0.0, 25.0));
        assert_eq!(points[3], Point::new(15.0, 0.0));
    }
}
