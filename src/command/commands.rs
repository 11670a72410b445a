use log::info;
use serde::{Deserialize, Serialize};

use super::{CommandError, CommandResult};
use crate::color::{Channel, Rgb};
use crate::shape::ShapeKind;
use crate::state::{self, EditorContext, LoadOutcome, Outcome, Undone};

/// Commands issued by the control panel and the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Switch the shape placed by clicks on the canvas
    SetMode(ShapeKind),

    /// Set the drawing colour; also recolours the selected shape
    SetColor(Rgb),

    /// Set one channel of the drawing colour
    SetChannel { channel: Channel, value: f64 },

    /// Choose between filled and outlined closed shapes
    SetFilled(bool),

    /// Remove the last placed point, or the last shape
    Undo,

    /// Remove everything
    Clear,

    /// Write the scene to the save file
    Save,

    /// Replace the scene with the save file's contents
    Load,

    /// Exit the application
    Quit,
}

impl Command {
    /// Execute the command with the given context
    pub fn execute(&self, ctx: &mut EditorContext) -> CommandResult {
        match *self {
            Command::SetMode(mode) => Ok(ctx.set_mode(mode)),

            Command::SetColor(color) => Ok(ctx.set_color(color)),

            Command::SetChannel { channel, value } => {
                if !value.is_finite() {
                    return Err(CommandError::InvalidParameters(format!(
                        "{} channel value {}",
                        channel.label(),
                        value
                    )));
                }
                Ok(ctx.set_channel(channel, value))
            }

            Command::SetFilled(filled) => Ok(ctx.set_filled(filled)),

            Command::Undo => {
                ctx.return_to_idle();
                match ctx.scene_mut().undo() {
                    Some(Undone::Point(p)) => {
                        info!("undo: removed point ({}, {})", p.x, p.y);
                        Ok(Outcome::Redraw)
                    }
                    Some(Undone::Shape(shape)) => {
                        info!("undo: removed {}", shape.kind());
                        Ok(Outcome::Redraw)
                    }
                    None => Ok(Outcome::Unchanged),
                }
            }

            Command::Clear => {
                ctx.return_to_idle();
                ctx.scene_mut().clear();
                info!("scene cleared");
                Ok(Outcome::Redraw)
            }

            Command::Save => {
                state::save_scene(ctx.scene(), ctx.save_path())?;
                Ok(Outcome::Unchanged)
            }

            Command::Load => {
                ctx.return_to_idle();
                let path = ctx.save_path().to_path_buf();
                match state::load_scene(ctx.scene_mut(), &path)? {
                    LoadOutcome::Loaded { .. } => Ok(Outcome::Redraw),
                    LoadOutcome::NothingToLoad => Ok(Outcome::Unchanged),
                }
            }

            Command::Quit => {
                info!("quit requested");
                Ok(Outcome::Quit)
            }
        }
    }
}
