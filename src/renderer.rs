// src/renderer.rs
use eframe::egui::{self, Align2, Color32, FontId, Painter, Pos2, Rect, Stroke};

use crate::color::Rgb;
use crate::point::Point;
use crate::shape::{self, bezier::CURVE_RESOLUTION};
use crate::state::EditorContext;

/// Line width used for outlines and open shapes
pub const LINE_WIDTH: f32 = 1.5;

/// The drawing primitives shapes are rendered with.
///
/// All coordinates are scene coordinates, with y measured upward from the
/// bottom of the canvas.
pub trait Canvas {
    fn draw_polygon(&mut self, points: &[Point], color: Rgb, filled: bool);
    fn draw_line(&mut self, from: Point, to: Point, color: Rgb);
    fn draw_circle(&mut self, center: Point, radius: f64, color: Rgb, filled: bool);
    fn draw_text(&mut self, position: Point, text: &str);
}

/// Maps between scene coordinates and screen positions inside the canvas rect
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    rect: Rect,
}

impl CanvasTransform {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn to_screen(&self, point: Point) -> Pos2 {
        egui::pos2(
            self.rect.left() + point.x as f32,
            self.rect.bottom() - point.y as f32,
        )
    }

    pub fn to_scene(&self, pos: Pos2) -> Point {
        Point::new(
            f64::from(pos.x - self.rect.left()),
            f64::from(self.rect.bottom() - pos.y),
        )
    }
}

/// `Canvas` backed by an egui painter
pub struct PainterCanvas<'a> {
    painter: &'a Painter,
    transform: CanvasTransform,
}

impl<'a> PainterCanvas<'a> {
    pub fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self {
            painter,
            transform: CanvasTransform::new(rect),
        }
    }
}

impl Canvas for PainterCanvas<'_> {
    fn draw_polygon(&mut self, points: &[Point], color: Rgb, filled: bool) {
        let screen: Vec<Pos2> = points.iter().map(|p| self.transform.to_screen(*p)).collect();
        let color = color.to_color32();
        let shape = if filled {
            egui::Shape::convex_polygon(screen, color, Stroke::NONE)
        } else {
            egui::Shape::closed_line(screen, Stroke::new(LINE_WIDTH, color))
        };
        self.painter.add(shape);
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Rgb) {
        self.painter.line_segment(
            [self.transform.to_screen(from), self.transform.to_screen(to)],
            Stroke::new(LINE_WIDTH, color.to_color32()),
        );
    }

    fn draw_circle(&mut self, center: Point, radius: f64, color: Rgb, filled: bool) {
        let center = self.transform.to_screen(center);
        let radius = radius.max(0.0) as f32;
        if filled {
            self.painter.circle_filled(center, radius, color.to_color32());
        } else {
            self.painter
                .circle_stroke(center, radius, Stroke::new(LINE_WIDTH, color.to_color32()));
        }
    }

    fn draw_text(&mut self, position: Point, text: &str) {
        self.painter.text(
            self.transform.to_screen(position),
            Align2::LEFT_TOP,
            text,
            FontId::proportional(14.0),
            Color32::DARK_GRAY,
        );
    }
}

/// Draws the scene and the canvas overlay
#[derive(Debug, Clone)]
pub struct Renderer {
    curve_resolution: usize,
    show_hint: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(CURVE_RESOLUTION)
    }
}

impl Renderer {
    pub fn new(curve_resolution: usize) -> Self {
        Self {
            curve_resolution: curve_resolution.max(1),
            show_hint: true,
        }
    }

    pub fn set_show_hint(&mut self, show: bool) {
        self.show_hint = show;
    }

    /// Shapes back to front, then the in-progress points, then the mode hint
    /// anchored at the top-left corner of a canvas `canvas_height` tall.
    pub fn render(&self, editor: &EditorContext, canvas: &mut dyn Canvas, canvas_height: f64) {
        let scene = editor.scene();
        for shape in scene.shapes() {
            shape.draw(canvas, self.curve_resolution);
        }
        shape::draw_handles(canvas, scene.in_progress());

        if self.show_hint {
            let hint = format!(
                "{}  {}/{} points",
                editor.mode(),
                scene.in_progress().len(),
                editor.mode().arity()
            );
            canvas.draw_text(Point::new(8.0, canvas_height - 8.0), &hint);
        }
    }

    /// Renders into an egui painter covering `rect`
    pub fn render_to_painter(&self, editor: &EditorContext, painter: &Painter, rect: Rect) {
        painter.rect_filled(rect, 0.0, Color32::WHITE);
        let mut canvas = PainterCanvas::new(painter, rect);
        self.render(editor, &mut canvas, f64::from(rect.height()));
    }
}
