use std::collections::HashSet;

use super::types::{
    InputEvent,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
    TouchEvent,
    TouchPhase,
};

/// Current input state for a single window.
///
/// Holds "is down" information and the current pointer position. The first
/// touch contact is treated as the primary pointer; further fingers are
/// tracked but never promoted.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Pointer position in logical pixels.
    pub pointer_pos: Option<(f32, f32)>,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,

    /// Finger id that currently acts as the primary pointer.
    pub primary_touch: Option<u64>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state.
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // On focus loss, clear "down" state so nothing stays stuck mid-press.
                    self.buttons_down.clear();
                    self.primary_touch = None;
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y }) => {
                self.pointer_pos = Some((*x, *y));
                match state {
                    MouseButtonState::Pressed => {
                        self.buttons_down.insert(*button);
                    }
                    MouseButtonState::Released => {
                        self.buttons_down.remove(button);
                    }
                }
            }

            InputEvent::Touch(TouchEvent { id, phase, x, y }) => match phase {
                TouchPhase::Started => {
                    if self.primary_touch.is_none() {
                        self.primary_touch = Some(*id);
                        self.pointer_pos = Some((*x, *y));
                    }
                }
                TouchPhase::Moved => {
                    if self.is_primary_touch(*id) {
                        self.pointer_pos = Some((*x, *y));
                    }
                }
                TouchPhase::Ended | TouchPhase::Cancelled => {
                    if self.is_primary_touch(*id) {
                        self.primary_touch = None;
                        self.pointer_pos = Some((*x, *y));
                    }
                }
            },
        }
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }

    pub fn is_primary_touch(&self, id: u64) -> bool {
        self.primary_touch == Some(id)
    }

    /// `true` while the primary button or the primary finger is down.
    pub fn primary_down(&self) -> bool {
        self.button_down(MouseButton::Left) || self.primary_touch.is_some()
    }
}
