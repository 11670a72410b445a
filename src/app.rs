use eframe::egui;
use log::error;

use crate::command::Command;
use crate::config::DrawConfig;
use crate::input::InputHandler;
use crate::panels;
use crate::renderer::Renderer;
use crate::state::{DrawSettings, EditorContext, Outcome};

pub struct DrawApp {
    editor: EditorContext,
    renderer: Renderer,
    input: InputHandler,
    control_panel_width: f32,
    /// Result of the last file command, shown under the panel buttons
    status: Option<String>,
}

impl DrawApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: DrawConfig) -> Self {
        // The mode, colour and fill survive restarts; the drawing does not
        let settings = cc
            .storage
            .and_then(|storage| eframe::get_value::<DrawSettings>(storage, eframe::APP_KEY))
            .unwrap_or_default();
        Self::with_settings(config, settings)
    }

    pub fn with_settings(config: DrawConfig, settings: DrawSettings) -> Self {
        Self {
            editor: EditorContext::new(settings, config.save_file),
            renderer: Renderer::new(config.curve_resolution),
            input: InputHandler::new(),
            control_panel_width: config.control_panel_width,
            status: None,
        }
    }

    pub fn editor(&self) -> &EditorContext {
        &self.editor
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Runs a command, recording failures and file operations in the status line
    pub fn execute(&mut self, command: Command) -> Outcome {
        match command.execute(&mut self.editor) {
            Ok(outcome) => {
                match command {
                    Command::Save => {
                        self.status = Some(format!("Saved to {}", self.editor.save_path().display()));
                    }
                    Command::Load => {
                        self.status = Some(if outcome == Outcome::Unchanged {
                            "Nothing to load".to_owned()
                        } else {
                            format!("Loaded {}", self.editor.save_path().display())
                        });
                    }
                    _ => {}
                }
                outcome
            }
            Err(err) => {
                error!("{:?} failed: {}", command, err);
                self.status = Some(err.to_string());
                // a failed load may still have replaced part of the scene
                Outcome::Redraw
            }
        }
    }
}

impl eframe::App for DrawApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.editor.settings());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let panel = panels::control_panel(
            ctx,
            &self.editor,
            self.control_panel_width,
            self.status.as_deref(),
        );
        self.input.set_control_panel_rect(panel.rect);

        let mut outcome = Outcome::Unchanged;
        for command in panel.commands {
            outcome = outcome.merge(self.execute(command));
        }
        outcome = outcome.merge(panels::canvas_panel(
            ctx,
            &mut self.editor,
            &mut self.input,
            &self.renderer,
        ));

        match outcome {
            Outcome::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
            Outcome::Redraw => ctx.request_repaint(),
            Outcome::Unchanged => {}
        }
    }
}
