//! The gesture state machine of the canvas.
//!
//! ```text
//!              pointer down on a point
//!   ┌────────┐ ─────────────────────────► ┌────────────┐
//!   │  Idle  │                            │  Dragging  │ ◄─┐ pointer move
//!   └────────┘ ◄───────────────────────── └────────────┘ ──┘
//!     │    ▲     pointer up (same button)
//!     └────┘
//!   pointer down on empty canvas: place a point, maybe commit a shape
//! ```
use eframe::egui::PointerButton;

use super::scene::PointRef;

/// How a drag reshapes the shape owning the grabbed vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragGesture {
    /// Translate every vertex together (primary button)
    Move,
    /// Move only the grabbed vertex (secondary button)
    Adjust,
}

impl DragGesture {
    pub fn from_button(button: PointerButton) -> Option<Self> {
        match button {
            PointerButton::Primary => Some(DragGesture::Move),
            PointerButton::Secondary => Some(DragGesture::Adjust),
            _ => None,
        }
    }

    pub fn button(&self) -> PointerButton {
        match self {
            DragGesture::Move => PointerButton::Primary,
            DragGesture::Adjust => PointerButton::Secondary,
        }
    }
}

/// The possible states of the editor canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EditorState {
    /// No drag in progress
    #[default]
    Idle,
    /// A point is grabbed and follows the pointer
    Dragging {
        target: PointRef,
        gesture: DragGesture,
    },
}

impl EditorState {
    /// Validates whether a transition to the new state is allowed
    pub fn can_transition_to(&self, next: &EditorState) -> bool {
        match (self, next) {
            (EditorState::Idle, EditorState::Dragging { .. }) => true,
            (EditorState::Dragging { .. }, EditorState::Idle) => true,
            (EditorState::Idle, EditorState::Idle) => true,
            // A new drag has to start from idle
            (EditorState::Dragging { .. }, EditorState::Dragging { .. }) => false,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, EditorState::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, EditorState::Dragging { .. })
    }

    /// The grabbed point and gesture while dragging
    pub fn drag(&self) -> Option<(PointRef, DragGesture)> {
        match self {
            EditorState::Dragging { target, gesture } => Some((*target, *gesture)),
            EditorState::Idle => None,
        }
    }
}
