use eframe::egui;

use crate::input::{route_event, InputHandler};
use crate::renderer::{CanvasTransform, Renderer};
use crate::state::{EditorContext, Outcome};

/// Fills the remaining space with the drawing canvas, feeds it this frame's
/// input and paints the scene
pub fn canvas_panel(
    ctx: &egui::Context,
    editor: &mut EditorContext,
    input: &mut InputHandler,
    renderer: &Renderer,
) -> Outcome {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
            let rect = response.rect;
            input.set_canvas_rect(rect);

            let transform = CanvasTransform::new(rect);
            let outcome = input
                .process_input(ctx)
                .iter()
                .fold(Outcome::Unchanged, |outcome, event| {
                    outcome.merge(route_event(event, editor, &transform))
                });

            renderer.render_to_painter(editor, &painter, rect);
            outcome
        })
        .inner
}
