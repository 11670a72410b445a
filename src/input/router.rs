use log::{debug, error};

use super::{InputEvent, KeyPress};
use crate::command::Command;
use crate::renderer::CanvasTransform;
use crate::shape::ShapeKind;
use crate::state::{EditorContext, Outcome};

/// The command bound to a key, if any
pub fn key_command(key: KeyPress) -> Option<Command> {
    match key {
        KeyPress::Escape => Some(Command::Quit),
        KeyPress::Char(c) => ShapeKind::from_shortcut(c).map(Command::SetMode),
    }
}

/// Routes an input event to the editor.
///
/// Pointer presses only count inside the canvas; moves and releases are
/// followed anywhere so a drag can leave the canvas and still end.
pub fn route_event(event: &InputEvent, ctx: &mut EditorContext, transform: &CanvasTransform) -> Outcome {
    match event {
        InputEvent::PointerDown { location, button } => {
            if !location.is_in_canvas() {
                return Outcome::Unchanged;
            }
            ctx.pointer_down(transform.to_scene(location.position), *button)
        }
        InputEvent::PointerMove { location } => ctx.pointer_move(transform.to_scene(location.position)),
        InputEvent::PointerUp { button, .. } => ctx.pointer_up(*button),
        InputEvent::Key(key) => match key_command(*key) {
            Some(command) => {
                debug!("key {:?} -> {:?}", key, command);
                command.execute(ctx).unwrap_or_else(|err| {
                    error!("{:?} failed: {}", command, err);
                    Outcome::Redraw
                })
            }
            None => Outcome::Unchanged,
        },
    }
}
