use eframe_draw::shape::bezier;
use eframe_draw::{Point, Rgb, Shape, ShapeError, ShapeKind};

fn rectangle() -> Shape {
    let corners = vec![Point::new(100.0, 100.0), Point::new(200.0, 150.0)];
    Shape::new(ShapeKind::Rectangle, corners, Rgb::BLACK, true).unwrap()
}

#[test]
fn test_rectangle_gets_four_corners() {
    let rect = rectangle();
    assert_eq!(rect.num_points(), 4);
    assert_eq!(rect.point(2), Some(&Point::new(100.0, 150.0)));
    assert_eq!(rect.point(3), Some(&Point::new(200.0, 100.0)));
}

#[test]
fn test_move_preserves_rectangle_size() {
    let mut rect = rectangle();
    rect.move_to(2, 0.0, 0.0).unwrap();

    let bounds = rect.bounds().unwrap();
    assert_eq!(bounds.width(), 100.0);
    assert_eq!(bounds.height(), 50.0);
    assert_eq!(rect.point(2), Some(&Point::new(0.0, 0.0)));
    assert_eq!(rect.point(0), Some(&Point::new(0.0, -50.0)));
}

#[test]
fn test_adjust_keeps_opposite_corner() {
    let mut rect = rectangle();
    rect.adjust(1, 300.0, 250.0).unwrap();

    assert_eq!(rect.point(0), Some(&Point::new(100.0, 100.0)));
    assert_eq!(rect.point(2), Some(&Point::new(100.0, 250.0)));
    assert_eq!(rect.point(3), Some(&Point::new(300.0, 100.0)));
    assert!(rect.contains(250.0, 200.0));
    assert!(!rect.contains(100.0, 200.0));
}

#[test]
fn test_adjust_triangle_moves_single_vertex() {
    let points = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(5.0, 8.0)];
    let mut triangle = Shape::new(ShapeKind::Triangle, points, Rgb::BLACK, false).unwrap();
    triangle.adjust(2, 5.0, 20.0).unwrap();
    assert_eq!(
        triangle.points(),
        &[Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(5.0, 20.0)]
    );
}

#[test]
fn test_circle_radius_follows_adjust() {
    let points = vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)];
    let mut c = Shape::new(ShapeKind::Circle, points, Rgb::BLACK, true).unwrap();
    assert_eq!(c.radius(), Some(5.0));
    c.adjust(1, 0.0, 10.0).unwrap();
    assert_eq!(c.radius(), Some(10.0));
}

#[test]
fn test_bezier_endpoints() {
    let controls = [
        Point::new(300.0, 300.0),
        Point::new(400.0, 400.0),
        Point::new(500.0, 200.0),
        Point::new(600.0, 300.0),
    ];
    let curve = Shape::new(ShapeKind::BezierCurve, controls.to_vec(), Rgb::BLACK, true).unwrap();
    assert_eq!(curve.evaluate(0.0), Some(controls[0]));
    assert_eq!(curve.evaluate(1.0), Some(controls[3]));
    assert!(!curve.is_filled());
    assert_eq!(bezier::sample(controls, 32).len(), 33);
}

#[test]
fn test_wrong_point_count_is_rejected() {
    let err = Shape::new(ShapeKind::Pentagon, vec![Point::new(0.0, 0.0); 3], Rgb::BLACK, true).unwrap_err();
    assert_eq!(
        err,
        ShapeError::Arity {
            kind: ShapeKind::Pentagon,
            expected: 5,
            found: 3,
        }
    );
}

#[test]
fn test_vertex_out_of_range() {
    let mut line = Shape::new(
        ShapeKind::Line,
        vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)],
        Rgb::BLACK,
        false,
    )
    .unwrap();
    assert!(matches!(
        line.move_to(2, 5.0, 5.0),
        Err(ShapeError::VertexOutOfRange { index: 2, .. })
    ));
}

#[test]
fn test_four_corners_must_form_a_rectangle() {
    let corners = vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(50.0, 50.0),
        Point::new(-7.0, 3.0),
    ];
    let err = Shape::new(ShapeKind::Rectangle, corners, Rgb::BLACK, true).unwrap_err();
    assert_eq!(err, ShapeError::SkewedRectangle { corner: 2 });

    let corners = vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
        Point::new(10.0, 0.0),
    ];
    assert!(Shape::new(ShapeKind::Rectangle, corners, Rgb::BLACK, true).is_ok());
}
