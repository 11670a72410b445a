use log::debug;

use crate::color::Rgb;
use crate::error::{SceneError, ShapeError};
use crate::geometry::hit_testing;
use crate::point::Point;
use crate::shape::{Shape, ShapeKind};

/// Addresses a point owned by the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointRef {
    /// A placed point not yet claimed by a shape
    InProgress(usize),
    /// A vertex of a committed shape
    Vertex { shape: usize, vertex: usize },
}

/// What `Scene::undo` removed
#[derive(Debug, Clone, PartialEq)]
pub enum Undone {
    Point(Point),
    Shape(Shape),
}

/// Committed shapes (back to front) plus the points of the shape being placed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    shapes: Vec<Shape>,
    in_progress: Vec<Point>,
    selected_shape: Option<usize>,
    selected_point: Option<PointRef>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn in_progress(&self) -> &[Point] {
        &self.in_progress
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty() && self.in_progress.is_empty()
    }

    pub fn selected_shape_index(&self) -> Option<usize> {
        self.selected_shape
    }

    pub fn selected_point(&self) -> Option<PointRef> {
        self.selected_point
    }

    pub fn set_selected_point(&mut self, point: Option<PointRef>) {
        self.selected_point = point;
    }

    /// Finds the point under `(x, y)`. In-progress points win over shape
    /// vertices, and earlier shapes win over later ones.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<PointRef> {
        if let Some(i) = hit_testing::first_point_hit(&self.in_progress, x, y) {
            return Some(PointRef::InProgress(i));
        }
        self.shapes.iter().enumerate().find_map(|(shape, s)| {
            s.vertex_at(x, y)
                .map(|vertex| PointRef::Vertex { shape, vertex })
        })
    }

    /// Appends an in-progress point and returns how many are pending
    pub fn push_point(&mut self, point: Point) -> usize {
        self.in_progress.push(point);
        self.in_progress.len()
    }

    /// Moves the pending points into a new shape, which becomes the only
    /// selected one. On error the pending points are left in place.
    pub fn commit(&mut self, kind: ShapeKind, color: Rgb, filled: bool) -> Result<usize, ShapeError> {
        if !kind.accepts(self.in_progress.len()) {
            return Err(ShapeError::Arity {
                kind,
                expected: kind.arity(),
                found: self.in_progress.len(),
            });
        }
        let points = std::mem::take(&mut self.in_progress);
        let mut shape = Shape::new(kind, points, color, filled)?;
        self.deselect_all();
        shape.set_selected(true);
        self.shapes.push(shape);
        let index = self.shapes.len() - 1;
        self.selected_shape = Some(index);
        Ok(index)
    }

    /// Adds an already built shape without touching the selection
    pub fn add_shape(&mut self, shape: Shape) -> usize {
        self.shapes.push(shape);
        self.shapes.len() - 1
    }

    /// Selects one shape and deselects every other
    pub fn select(&mut self, index: usize) -> Result<(), SceneError> {
        if index >= self.shapes.len() {
            return Err(SceneError::NoSuchShape(index));
        }
        for (i, shape) in self.shapes.iter_mut().enumerate() {
            shape.set_selected(i == index);
        }
        self.selected_shape = Some(index);
        Ok(())
    }

    pub fn deselect_all(&mut self) {
        for shape in &mut self.shapes {
            shape.set_selected(false);
        }
        self.selected_shape = None;
    }

    /// Retargets the colour of the selected shape, if there is one
    pub fn recolor_selected(&mut self, color: Rgb) -> bool {
        match self.selected_shape.and_then(|i| self.shapes.get_mut(i)) {
            Some(shape) => {
                shape.set_color(color);
                true
            }
            None => false,
        }
    }

    /// Rigid move of the shape owning `vertex`
    pub fn move_shape(&mut self, shape: usize, vertex: usize, x: f64, y: f64) -> Result<(), SceneError> {
        self.shape_mut(shape)?.move_to(vertex, x, y)?;
        Ok(())
    }

    /// Reshape the shape owning `vertex`
    pub fn adjust_shape(&mut self, shape: usize, vertex: usize, x: f64, y: f64) -> Result<(), SceneError> {
        self.shape_mut(shape)?.adjust(vertex, x, y)?;
        Ok(())
    }

    /// Moves a bare in-progress point
    pub fn move_point(&mut self, index: usize, x: f64, y: f64) -> Result<(), SceneError> {
        let point = self
            .in_progress
            .get_mut(index)
            .ok_or(SceneError::NoSuchPoint(index))?;
        point.set(x, y);
        Ok(())
    }

    /// Removes the last pending point, or the last shape when none are pending
    pub fn undo(&mut self) -> Option<Undone> {
        if let Some(point) = self.in_progress.pop() {
            if let Some(PointRef::InProgress(i)) = self.selected_point {
                if i >= self.in_progress.len() {
                    self.selected_point = None;
                }
            }
            return Some(Undone::Point(point));
        }

        let shape = self.shapes.pop()?;
        let removed = self.shapes.len();
        if self.selected_shape == Some(removed) {
            self.selected_shape = None;
        }
        if let Some(PointRef::Vertex { shape, .. }) = self.selected_point {
            if shape == removed {
                self.selected_point = None;
            }
        }
        debug!("undo removed {}", shape.kind());
        Some(Undone::Shape(shape))
    }

    /// Drops the pending points only
    pub fn clear_in_progress(&mut self) {
        self.in_progress.clear();
        if matches!(self.selected_point, Some(PointRef::InProgress(_))) {
            self.selected_point = None;
        }
    }

    /// Drops every shape and pending point
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.in_progress.clear();
        self.selected_shape = None;
        self.selected_point = None;
    }

    fn shape_mut(&mut self, index: usize) -> Result<&mut Shape, SceneError> {
        self.shapes.get_mut(index).ok_or(SceneError::NoSuchShape(index))
    }
}
