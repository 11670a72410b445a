use log::debug;

mod kind;
pub mod bezier;
pub(crate) mod circle;
pub(crate) mod rectangle;

pub use kind::{RecordTag, ShapeKind, NONE_TAG};

use crate::color::Rgb;
use crate::error::ShapeError;
use crate::geometry::{hit_testing, Bounds};
use crate::point::{Point, POINT_RADIUS};
use crate::renderer::Canvas;

/// Colour of vertex handles and of the selection outline
pub const HANDLE_COLOR: Rgb = Rgb::BLACK;

/// Variant-specific data, including the cached values derived from the vertices
#[derive(Debug, Clone, Copy, PartialEq)]
enum Geometry {
    Line,
    BezierCurve,
    Rectangle(Bounds),
    Triangle,
    Pentagon,
    Circle { radius: f64 },
}

impl Geometry {
    fn for_kind(kind: ShapeKind, points: &[Point]) -> Self {
        match kind {
            ShapeKind::Line => Geometry::Line,
            ShapeKind::BezierCurve => Geometry::BezierCurve,
            ShapeKind::Rectangle => Geometry::Rectangle(rectangle::bounds(points)),
            ShapeKind::Triangle => Geometry::Triangle,
            ShapeKind::Pentagon => Geometry::Pentagon,
            ShapeKind::Circle => Geometry::Circle {
                radius: circle::radius(points),
            },
        }
    }

    fn kind(&self) -> ShapeKind {
        match self {
            Geometry::Line => ShapeKind::Line,
            Geometry::BezierCurve => ShapeKind::BezierCurve,
            Geometry::Rectangle(_) => ShapeKind::Rectangle,
            Geometry::Triangle => ShapeKind::Triangle,
            Geometry::Pentagon => ShapeKind::Pentagon,
            Geometry::Circle { .. } => ShapeKind::Circle,
        }
    }
}

/// A committed shape: owned vertices plus colour, fill and selection state
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    points: Vec<Point>,
    color: Rgb,
    filled: bool,
    selected: bool,
    geometry: Geometry,
}

impl Shape {
    /// Builds a shape of `kind` from exactly the points it needs.
    ///
    /// Rectangles take two opposite corners and derive the other two, or all
    /// four stored corners, which must line up with the first two. The fill
    /// flag is dropped for open kinds.
    pub fn new(kind: ShapeKind, points: Vec<Point>, color: Rgb, filled: bool) -> Result<Self, ShapeError> {
        if !kind.accepts(points.len()) {
            return Err(ShapeError::Arity {
                kind,
                expected: kind.arity(),
                found: points.len(),
            });
        }

        let points = match kind {
            ShapeKind::Rectangle => {
                if let Some(corner) = rectangle::skewed_corner(&points) {
                    return Err(ShapeError::SkewedRectangle { corner });
                }
                rectangle::complete_corners(points)
            }
            _ => points,
        };
        let geometry = Geometry::for_kind(kind, &points);

        Ok(Self {
            points,
            color,
            filled: filled && kind.is_closed(),
            selected: false,
            geometry,
        })
    }

    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn point(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    pub fn is_filled(&self) -> bool {
        self.filled
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Cached rectangle box, `None` for other kinds
    pub fn bounds(&self) -> Option<Bounds> {
        match self.geometry {
            Geometry::Rectangle(bounds) => Some(bounds),
            _ => None,
        }
    }

    /// Cached circle radius, `None` for other kinds
    pub fn radius(&self) -> Option<f64> {
        match self.geometry {
            Geometry::Circle { radius } => Some(radius),
            _ => None,
        }
    }

    /// Point on a Bezier curve at `t` in `[0, 1]`, `None` for other kinds
    pub fn evaluate(&self, t: f64) -> Option<Point> {
        match (self.geometry, self.points.as_slice()) {
            (Geometry::BezierCurve, [p0, p1, p2, p3]) => Some(bezier::evaluate([*p0, *p1, *p2, *p3], t)),
            _ => None,
        }
    }

    /// Index of the first vertex under `(x, y)`
    pub fn vertex_at(&self, x: f64, y: f64) -> Option<usize> {
        hit_testing::first_point_hit(&self.points, x, y)
    }

    /// Whole-shape hit test. Only rectangles support it (strict interior).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        match self.geometry {
            Geometry::Rectangle(bounds) => bounds.contains(x, y),
            _ => false,
        }
    }

    /// Rigid move: the dragged vertex lands on `(x, y)` and every other
    /// vertex keeps its offset from it.
    pub fn move_to(&mut self, vertex: usize, x: f64, y: f64) -> Result<(), ShapeError> {
        let anchor = *self.vertex(vertex)?;
        for (i, point) in self.points.iter_mut().enumerate() {
            if i == vertex {
                continue;
            }
            point.set(x + (point.x - anchor.x), y + (point.y - anchor.y));
        }
        self.points[vertex].set(x, y);
        self.refresh();
        Ok(())
    }

    /// Reshape by moving a single vertex. Rectangles drag the corners that
    /// share an edge with it; circles recompute their radius.
    pub fn adjust(&mut self, vertex: usize, x: f64, y: f64) -> Result<(), ShapeError> {
        self.vertex(vertex)?;
        match self.geometry {
            Geometry::Rectangle(_) => rectangle::adjust_corners(&mut self.points, vertex, x, y),
            _ => self.points[vertex].set(x, y),
        }
        self.refresh();
        Ok(())
    }

    /// Renders the shape, plus its vertex handles while selected
    pub fn draw(&self, canvas: &mut dyn Canvas, curve_resolution: usize) {
        match (self.geometry, self.points.as_slice()) {
            (Geometry::Line, [a, b]) => canvas.draw_line(*a, *b, self.color),
            (Geometry::BezierCurve, [p0, p1, p2, p3]) => {
                let samples = bezier::sample([*p0, *p1, *p2, *p3], curve_resolution);
                for pair in samples.windows(2) {
                    canvas.draw_line(pair[0], pair[1], self.color);
                }
            }
            (Geometry::Rectangle(bounds), _) => {
                canvas.draw_polygon(&bounds.corners(), self.color, self.filled);
                if self.selected && self.filled {
                    canvas.draw_polygon(&bounds.corners(), HANDLE_COLOR, false);
                }
            }
            (Geometry::Triangle | Geometry::Pentagon, points) => {
                canvas.draw_polygon(points, self.color, self.filled);
                if self.selected && self.filled {
                    canvas.draw_polygon(points, HANDLE_COLOR, false);
                }
            }
            (Geometry::Circle { radius }, [center, ..]) => {
                canvas.draw_circle(*center, radius, self.color, self.filled);
                if self.selected && self.filled {
                    canvas.draw_circle(*center, radius, HANDLE_COLOR, false);
                }
            }
            (geometry, points) => {
                debug!("skipping {} with {} vertices", geometry.kind(), points.len());
            }
        }

        if self.selected {
            draw_handles(canvas, &self.points);
        }
    }

    fn vertex(&self, index: usize) -> Result<&Point, ShapeError> {
        self.points.get(index).ok_or(ShapeError::VertexOutOfRange {
            kind: self.kind(),
            index,
            count: self.points.len(),
        })
    }

    /// Recomputes the cached rectangle box or circle radius
    fn refresh(&mut self) {
        self.geometry = Geometry::for_kind(self.kind(), &self.points);
    }
}

/// Draws a handle marker on each point
pub fn draw_handles(canvas: &mut dyn Canvas, points: &[Point]) {
    for point in points {
        canvas.draw_circle(*point, POINT_RADIUS, HANDLE_COLOR, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> Shape {
        Shape::new(
            ShapeKind::Line,
            vec![Point::new(250.0, 300.0), Point::new(400.0, 300.0)],
            Rgb::new(0.25, 0.5, 0.75),
            true,
        )
        .unwrap()
    }

    #[test]
    fn test_open_shapes_are_never_filled() {
        assert!(!line().is_filled());
    }

    #[test]
    fn test_arity_mismatch_is_rejected() {
        let err = Shape::new(ShapeKind::Triangle, vec![Point::new(0.0, 0.0)], Rgb::BLACK, true)
            .unwrap_err();
        assert_eq!(
            err,
            ShapeError::Arity {
                kind: ShapeKind::Triangle,
                expected: 3,
                found: 1
            }
        );
    }

    #[test]
    fn test_move_out_of_range_vertex() {
        let mut shape = line();
        let err = shape.move_to(2, 0.0, 0.0).unwrap_err();
        assert!(matches!(err, ShapeError::VertexOutOfRange { index: 2, count: 2, .. }));
        assert!(shape.adjust(5, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_new_shape_starts_unselected() {
        assert!(!line().is_selected());
    }

    #[test]
    fn test_evaluate_only_for_curves() {
        assert_eq!(line().evaluate(0.5), None);
    }
}
