//! Canvas input events and their translation from raw egui input.
use egui::{Context, Key, Modifiers, PointerButton, Pos2, Rect};

use crate::element::clamp_pos;

/// Input delivered to the editor. Positions are canvas percent, already clamped.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed over the canvas
    PointerDown {
        pos: Pos2,
        /// Precision modifier held: squares, circles, 45° lines
        precision: bool,
    },
    /// Pointer moved, with or without the button held
    PointerMove { pos: Pos2, precision: bool },
    /// Primary button released
    PointerUp { pos: Pos2, precision: bool },
    /// Key was pressed
    KeyDown { key: Key, modifiers: Modifiers },
}

/// Map a screen position into canvas percent, `(screen - origin) / size × 100`,
/// clamped to the canvas
pub fn to_canvas_percent(screen: Pos2, canvas: Rect) -> Pos2 {
    if canvas.width() <= 0.0 || canvas.height() <= 0.0 {
        return Pos2::ZERO;
    }
    clamp_pos(Pos2::new(
        (screen.x - canvas.min.x) / canvas.width() * 100.0,
        (screen.y - canvas.min.y) / canvas.height() * 100.0,
    ))
}

/// Inverse of [`to_canvas_percent`]
pub fn to_screen(percent: Pos2, canvas: Rect) -> Pos2 {
    Pos2::new(
        canvas.min.x + percent.x / 100.0 * canvas.width(),
        canvas.min.y + percent.y / 100.0 * canvas.height(),
    )
}

/// Handles converting raw egui input into canvas InputEvents
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    pressed_on_canvas: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process raw egui input for a canvas occupying `canvas` on screen.
    /// Key presses are only forwarded when `keyboard` is true.
    pub fn process_input(&mut self, ctx: &Context, canvas: Rect, keyboard: bool) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let precision = input.modifiers.shift;
            let hover = input.pointer.hover_pos().or(self.last_pointer_pos);

            if input.pointer.button_pressed(PointerButton::Primary) {
                if let Some(pos) = hover.filter(|pos| canvas.contains(*pos)) {
                    self.pressed_on_canvas = true;
                    events.push(InputEvent::PointerDown {
                        pos: to_canvas_percent(pos, canvas),
                        precision,
                    });
                }
            }

            if let Some(pos) = input.pointer.hover_pos() {
                if Some(pos) != self.last_pointer_pos {
                    events.push(InputEvent::PointerMove {
                        pos: to_canvas_percent(pos, canvas),
                        precision,
                    });
                }
                self.last_pointer_pos = Some(pos);
            }

            if input.pointer.button_released(PointerButton::Primary) && self.pressed_on_canvas {
                self.pressed_on_canvas = false;
                if let Some(pos) = hover {
                    events.push(InputEvent::PointerUp {
                        pos: to_canvas_percent(pos, canvas),
                        precision,
                    });
                }
            }

            if keyboard {
                for event in &input.raw.events {
                    if let egui::Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } = event
                    {
                        events.push(InputEvent::KeyDown {
                            key: *key,
                            modifiers: *modifiers,
                        });
                    }
                }
            }
        });

        events
    }
}
