use eframe::egui::{Context, Event, Key, PointerButton, Pos2, Rect};

mod router;
pub use router::{key_command, route_event};

/// Represents which panel an input event occurred in
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelKind {
    /// The drawing canvas
    Canvas,
    /// The control side panel
    ControlPanel,
    /// Anywhere else, and keyboard input
    Global,
}

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy)]
pub struct InputLocation {
    /// The position in screen coordinates
    pub position: Pos2,
    /// The panel in which the event occurred
    pub panel: PanelKind,
}

impl InputLocation {
    pub fn is_in_canvas(&self) -> bool {
        self.panel == PanelKind::Canvas
    }
}

/// A key the editor reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    /// A typed character
    Char(char),
    Escape,
}

/// Represents the input events the editor handles
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Mouse button was pressed
    PointerDown {
        location: InputLocation,
        button: PointerButton,
    },
    /// Mouse button was released
    PointerUp {
        location: InputLocation,
        button: PointerButton,
    },
    /// Mouse moved
    PointerMove { location: InputLocation },
    /// A key was pressed
    Key(KeyPress),
}

const BUTTONS: [PointerButton; 3] = [
    PointerButton::Primary,
    PointerButton::Secondary,
    PointerButton::Middle,
];

/// Converts raw egui input into `InputEvent`s
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Option<Rect>,
    control_panel_rect: Option<Rect>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the canvas rectangle
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = Some(rect);
    }

    /// Update the control panel rectangle
    pub fn set_control_panel_rect(&mut self, rect: Rect) {
        self.control_panel_rect = Some(rect);
    }

    fn determine_panel(&self, pos: Pos2) -> PanelKind {
        if self.canvas_rect.is_some_and(|rect| rect.contains(pos)) {
            PanelKind::Canvas
        } else if self.control_panel_rect.is_some_and(|rect| rect.contains(pos)) {
            PanelKind::ControlPanel
        } else {
            PanelKind::Global
        }
    }

    fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            position: pos,
            panel: self.determine_panel(pos),
        }
    }

    /// Process this frame's egui input and generate `InputEvent`s.
    ///
    /// Keys are skipped while a text field has keyboard focus.
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let keyboard_free = !ctx.wants_keyboard_input();

        ctx.input(|input| {
            let hover = input.pointer.hover_pos();
            if let Some(pos) = hover {
                if Some(pos) != self.last_pointer_pos {
                    events.push(InputEvent::PointerMove {
                        location: self.make_location(pos),
                    });
                }
            }
            self.last_pointer_pos = hover;

            if let Some(pos) = hover.or(input.pointer.interact_pos()) {
                for button in BUTTONS {
                    if input.pointer.button_pressed(button) {
                        events.push(InputEvent::PointerDown {
                            location: self.make_location(pos),
                            button,
                        });
                    }
                    if input.pointer.button_released(button) {
                        events.push(InputEvent::PointerUp {
                            location: self.make_location(pos),
                            button,
                        });
                    }
                }
            }

            if keyboard_free {
                for event in &input.events {
                    match event {
                        Event::Text(text) => {
                            events.extend(text.chars().map(|c| InputEvent::Key(KeyPress::Char(c))));
                        }
                        Event::Key {
                            key: Key::Escape,
                            pressed: true,
                            ..
                        } => events.push(InputEvent::Key(KeyPress::Escape)),
                        _ => {}
                    }
                }
            }
        });

        events
    }
}
