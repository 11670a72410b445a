use eframe::egui;

use crate::color::{Channel, ColorPreset};
use crate::command::Command;
use crate::components::ColorSwatch;
use crate::shape::ShapeKind;
use crate::state::EditorContext;

const SWATCHES_PER_ROW: usize = 4;

/// The interactive elements of the control panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Widget {
    ModeSelect(ShapeKind),
    ColorPreset(ColorPreset),
    RgbSlider { channel: Channel, value: f64 },
    Fill,
    Outline,
    Undo,
    Clear,
    Save,
    Load,
    Quit,
}

impl From<Widget> for Command {
    fn from(widget: Widget) -> Self {
        match widget {
            Widget::ModeSelect(kind) => Command::SetMode(kind),
            Widget::ColorPreset(preset) => Command::SetColor(preset.rgb()),
            Widget::RgbSlider { channel, value } => Command::SetChannel { channel, value },
            Widget::Fill => Command::SetFilled(true),
            Widget::Outline => Command::SetFilled(false),
            Widget::Undo => Command::Undo,
            Widget::Clear => Command::Clear,
            Widget::Save => Command::Save,
            Widget::Load => Command::Load,
            Widget::Quit => Command::Quit,
        }
    }
}

/// What the control panel produced this frame
pub struct ControlPanelOutput {
    pub commands: Vec<Command>,
    /// Screen area covered by the panel
    pub rect: egui::Rect,
}

pub fn control_panel(
    ctx: &egui::Context,
    editor: &EditorContext,
    width: f32,
    status: Option<&str>,
) -> ControlPanelOutput {
    let mut activated = Vec::new();

    let response = egui::SidePanel::left("control_panel")
        .resizable(false)
        .exact_width(width)
        .show(ctx, |ui| {
            ui.heading("Shape");
            for kind in ShapeKind::ALL {
                if ui.selectable_label(editor.mode() == kind, kind.label()).clicked() {
                    activated.push(Widget::ModeSelect(kind));
                }
            }
            ui.separator();

            ui.heading("Color");
            let current = ColorPreset::matching(editor.color());
            for row in ColorPreset::ALL.chunks(SWATCHES_PER_ROW) {
                ui.horizontal(|ui| {
                    for &preset in row {
                        if ColorSwatch::new(preset, current == Some(preset)).show(ui).clicked() {
                            activated.push(Widget::ColorPreset(preset));
                        }
                    }
                });
            }
            for channel in Channel::ALL {
                let mut value = editor.color().channel(channel);
                let slider = egui::Slider::new(&mut value, 0.0..=1.0).text(channel.label());
                if ui.add(slider).changed() {
                    activated.push(Widget::RgbSlider { channel, value });
                }
            }
            ui.separator();

            ui.horizontal(|ui| {
                if ui.radio(editor.filled(), "Fill").clicked() {
                    activated.push(Widget::Fill);
                }
                if ui.radio(!editor.filled(), "Outline").clicked() {
                    activated.push(Widget::Outline);
                }
            });
            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Undo").clicked() {
                    activated.push(Widget::Undo);
                }
                if ui.button("Clear").clicked() {
                    activated.push(Widget::Clear);
                }
            });
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    activated.push(Widget::Save);
                }
                if ui.button("Load").clicked() {
                    activated.push(Widget::Load);
                }
            });
            if ui.button("Quit").clicked() {
                activated.push(Widget::Quit);
            }

            if let Some(status) = status {
                ui.separator();
                ui.label(status);
            }
        });

    ControlPanelOutput {
        commands: activated.into_iter().map(Command::from).collect(),
        rect: response.response.rect,
    }
}
