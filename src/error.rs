use thiserror::Error;

use crate::shape::ShapeKind;

/// Errors raised while building or reshaping a shape
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    /// Wrong number of points for the shape kind
    #[error("{found} vertices passed to {kind} (expected {expected})")]
    Arity {
        kind: ShapeKind,
        expected: usize,
        found: usize,
    },
    /// A vertex index past the end of the shape's vertex list
    #[error("vertex {index} out of range for {kind} with {count} vertices")]
    VertexOutOfRange {
        kind: ShapeKind,
        index: usize,
        count: usize,
    },
    /// A stored rectangle corner that is off the box spanned by corners 0 and 1
    #[error("rectangle corner {corner} does not line up with corners 0 and 1")]
    SkewedRectangle { corner: usize },
}

/// Errors raised by scene mutations that address shapes or points by index
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("no shape at index {0}")]
    NoSuchShape(usize),
    #[error("no in-progress point at index {0}")]
    NoSuchPoint(usize),
    #[error(transparent)]
    Shape(#[from] ShapeError),
}
