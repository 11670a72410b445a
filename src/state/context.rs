//! The editor context: one object holding the scene, the current drawing
//! settings and the gesture state. Every pointer callback lands here and is
//! turned into scene mutations.
//!
//! # Gestures
//!
//! - `pointer_down`: grab a point under the pointer, or place a new one
//! - `pointer_move`: drag the grabbed point (rigid move or adjust)
//! - `pointer_up`: release the grabbed point
//!
//! Each returns an [`Outcome`] telling the caller whether to repaint.
use std::path::{Path, PathBuf};

use eframe::egui::PointerButton;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::editor_state::{DragGesture, EditorState};
use super::scene::{PointRef, Scene};
use crate::color::{Channel, Rgb, DEFAULT_COLOR};
use crate::point::Point;
use crate::shape::ShapeKind;

/// Default file the scene is saved to and loaded from
pub const DEFAULT_SAVE_FILE: &str = "save.txt";

/// What the caller should do after an event was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing visible changed
    Unchanged,
    /// The canvas needs repainting
    Redraw,
    /// The user asked to exit
    Quit,
}

impl Outcome {
    /// Combines two outcomes, keeping the strongest request
    pub fn merge(self, other: Outcome) -> Outcome {
        match (self, other) {
            (Outcome::Quit, _) | (_, Outcome::Quit) => Outcome::Quit,
            (Outcome::Redraw, _) | (_, Outcome::Redraw) => Outcome::Redraw,
            _ => Outcome::Unchanged,
        }
    }
}

/// Drawing mode, colour and fill preference applied to new shapes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawSettings {
    pub mode: ShapeKind,
    pub color: Rgb,
    pub filled: bool,
}

impl Default for DrawSettings {
    fn default() -> Self {
        Self {
            mode: ShapeKind::Line,
            color: DEFAULT_COLOR,
            filled: true,
        }
    }
}

/// Errors that can occur during state transitions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StateTransitionError {
    #[error("cannot go from {from:?} to {to:?}")]
    InvalidTransition { from: EditorState, to: EditorState },
}

#[derive(Debug, Clone)]
pub struct EditorContext {
    scene: Scene,
    settings: DrawSettings,
    state: EditorState,
    save_path: PathBuf,
}

impl Default for EditorContext {
    fn default() -> Self {
        Self::new(DrawSettings::default(), DEFAULT_SAVE_FILE)
    }
}

impl EditorContext {
    pub fn new(settings: DrawSettings, save_path: impl Into<PathBuf>) -> Self {
        Self {
            scene: Scene::new(),
            settings,
            state: EditorState::Idle,
            save_path: save_path.into(),
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn settings(&self) -> DrawSettings {
        self.settings
    }

    pub fn mode(&self) -> ShapeKind {
        self.settings.mode
    }

    pub fn color(&self) -> Rgb {
        self.settings.color
    }

    pub fn filled(&self) -> bool {
        self.settings.filled
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    /// Attempts to transition to a new state
    pub fn transition_to(&mut self, next: EditorState) -> Result<(), StateTransitionError> {
        if !self.state.can_transition_to(&next) {
            return Err(StateTransitionError::InvalidTransition {
                from: self.state,
                to: next,
            });
        }
        debug!("editor state {:?} -> {:?}", self.state, next);
        self.state = next;
        Ok(())
    }

    /// Ends any drag and forgets the grabbed point
    pub fn return_to_idle(&mut self) {
        self.state = EditorState::Idle;
        self.scene.set_selected_point(None);
    }

    /// Switches the drawing mode, discarding the points placed so far
    pub fn set_mode(&mut self, mode: ShapeKind) -> Outcome {
        if let Some((PointRef::InProgress(_), _)) = self.state.drag() {
            self.return_to_idle();
        }
        self.scene.clear_in_progress();
        self.settings.mode = mode;
        info!("drawing mode: {}", mode);
        Outcome::Redraw
    }

    /// Sets the current colour and recolours the selected shape
    pub fn set_color(&mut self, color: Rgb) -> Outcome {
        self.settings.color = color;
        self.scene.recolor_selected(color);
        Outcome::Redraw
    }

    /// Sets one colour channel, as the RGB sliders do
    pub fn set_channel(&mut self, channel: Channel, value: f64) -> Outcome {
        let color = self.settings.color.with_channel(channel, value);
        self.set_color(color)
    }

    pub fn set_filled(&mut self, filled: bool) -> Outcome {
        self.settings.filled = filled;
        Outcome::Redraw
    }

    /// Pointer pressed on the canvas at `pos` (scene coordinates)
    pub fn pointer_down(&mut self, pos: Point, button: PointerButton) -> Outcome {
        if self.state.is_dragging() {
            return Outcome::Unchanged;
        }
        let Some(gesture) = DragGesture::from_button(button) else {
            return Outcome::Unchanged;
        };

        match self.scene.hit_test(pos.x, pos.y) {
            Some(target) => self.grab(target, gesture),
            None if gesture == DragGesture::Move => self.place_point(pos),
            None => Outcome::Unchanged,
        }
    }

    /// Pointer moved to `pos`; drags the grabbed point if there is one
    pub fn pointer_move(&mut self, pos: Point) -> Outcome {
        let Some((target, gesture)) = self.state.drag() else {
            return Outcome::Unchanged;
        };

        let result = match (target, gesture) {
            (PointRef::Vertex { shape, vertex }, DragGesture::Move) => {
                self.scene.move_shape(shape, vertex, pos.x, pos.y)
            }
            (PointRef::Vertex { shape, vertex }, DragGesture::Adjust) => {
                self.scene.adjust_shape(shape, vertex, pos.x, pos.y)
            }
            (PointRef::InProgress(index), _) => self.scene.move_point(index, pos.x, pos.y),
        };

        match result {
            Ok(()) => Outcome::Redraw,
            Err(err) => {
                warn!("dropping drag: {}", err);
                self.return_to_idle();
                Outcome::Redraw
            }
        }
    }

    /// Pointer released; ends a drag started with the same button
    pub fn pointer_up(&mut self, button: PointerButton) -> Outcome {
        match self.state.drag() {
            Some((_, gesture)) if gesture.button() == button => {
                self.return_to_idle();
                Outcome::Redraw
            }
            _ => Outcome::Unchanged,
        }
    }

    fn grab(&mut self, target: PointRef, gesture: DragGesture) -> Outcome {
        match target {
            PointRef::Vertex { shape, .. } => {
                if let Err(err) = self.scene.select(shape) {
                    warn!("cannot select shape: {}", err);
                    return Outcome::Unchanged;
                }
            }
            PointRef::InProgress(_) => self.scene.deselect_all(),
        }

        let next = EditorState::Dragging { target, gesture };
        if let Err(err) = self.transition_to(next) {
            warn!("{}", err);
            return Outcome::Unchanged;
        }
        self.scene.set_selected_point(Some(target));
        Outcome::Redraw
    }

    fn place_point(&mut self, pos: Point) -> Outcome {
        if self.scene.in_progress().is_empty() {
            self.scene.deselect_all();
        }

        let mode = self.settings.mode;
        let placed = self.scene.push_point(pos);
        if placed >= mode.arity() {
            match self.scene.commit(mode, self.settings.color, self.settings.filled) {
                Ok(index) => info!("committed {} #{}", mode, index),
                Err(err) => warn!("shape rejected: {}", err),
            }
        } else {
            debug!("placed point {}/{} for {}", placed, mode.arity(), mode);
        }
        Outcome::Redraw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click(ctx: &mut EditorContext, x: f64, y: f64) {
        ctx.pointer_down(Point::new(x, y), PointerButton::Primary);
        ctx.pointer_up(PointerButton::Primary);
    }

    #[test]
    fn test_secondary_click_on_empty_canvas_places_nothing() {
        let mut ctx = EditorContext::default();
        let outcome = ctx.pointer_down(Point::new(10.0, 10.0), PointerButton::Secondary);
        assert_eq!(outcome, Outcome::Unchanged);
        assert!(ctx.scene().is_empty());
    }

    #[test]
    fn test_mode_change_discards_pending_points() {
        let mut ctx = EditorContext::default();
        ctx.set_mode(ShapeKind::Pentagon);
        click(&mut ctx, 10.0, 10.0);
        click(&mut ctx, 20.0, 10.0);
        assert_eq!(ctx.scene().in_progress().len(), 2);
        ctx.set_mode(ShapeKind::Circle);
        assert!(ctx.scene().in_progress().is_empty());
    }

    #[test]
    fn test_mode_change_cancels_drag_of_pending_point() {
        let mut ctx = EditorContext::default();
        ctx.set_mode(ShapeKind::Triangle);
        click(&mut ctx, 10.0, 10.0);
        ctx.pointer_down(Point::new(10.0, 10.0), PointerButton::Primary);
        assert!(ctx.state().is_dragging());
        ctx.set_mode(ShapeKind::Line);
        assert!(ctx.state().is_idle());
        assert_eq!(ctx.pointer_move(Point::new(50.0, 50.0)), Outcome::Unchanged);
    }

    #[test]
    fn test_dragging_pending_point() {
        let mut ctx = EditorContext::default();
        ctx.set_mode(ShapeKind::Triangle);
        click(&mut ctx, 10.0, 10.0);
        ctx.pointer_down(Point::new(11.0, 11.0), PointerButton::Primary);
        ctx.pointer_move(Point::new(40.0, 60.0));
        ctx.pointer_up(PointerButton::Primary);
        assert_eq!(ctx.scene().in_progress(), &[Point::new(40.0, 60.0)]);
        assert!(ctx.state().is_idle());
        assert_eq!(ctx.scene().selected_point(), None);
    }

    #[test]
    fn test_color_change_retargets_selected_shape() {
        let mut ctx = EditorContext::default();
        click(&mut ctx, 0.0, 0.0);
        click(&mut ctx, 100.0, 0.0);
        let red = Rgb::new(1.0, 0.0, 0.0);
        ctx.set_color(red);
        assert_eq!(ctx.scene().shapes()[0].color(), red);
        ctx.set_channel(Channel::Blue, 0.5);
        assert_eq!(ctx.scene().shapes()[0].color(), Rgb::new(1.0, 0.0, 0.5));
    }

    #[test]
    fn test_release_of_other_button_keeps_drag() {
        let mut ctx = EditorContext::default();
        click(&mut ctx, 0.0, 0.0);
        click(&mut ctx, 100.0, 0.0);
        ctx.pointer_down(Point::new(0.0, 0.0), PointerButton::Secondary);
        assert_eq!(ctx.pointer_up(PointerButton::Primary), Outcome::Unchanged);
        assert!(ctx.state().is_dragging());
        assert_eq!(ctx.pointer_up(PointerButton::Secondary), Outcome::Redraw);
    }

    #[test]
    fn test_outcome_merge() {
        assert_eq!(Outcome::Unchanged.merge(Outcome::Redraw), Outcome::Redraw);
        assert_eq!(Outcome::Redraw.merge(Outcome::Quit), Outcome::Quit);
        assert_eq!(Outcome::Unchanged.merge(Outcome::Unchanged), Outcome::Unchanged);
    }
}
