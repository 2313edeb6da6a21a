use std::collections::HashSet;

use crate::coords::Vec2;

use super::types::{InputEvent, Key, KeyState, Modifiers, MouseButton};

/// Held keys and buttons, pointer position and modifiers for the overlay window.
#[derive(Debug, Default)]
pub struct InputState {
    modifiers: Modifiers,
    focused: bool,
    pointer: Option<Vec2>,
    keys_down: HashSet<Key>,
    buttons_down: HashSet<MouseButton>,
}

impl InputState {
    pub fn apply_event(&mut self, ev: InputEvent) {
        match ev {
            InputEvent::ModifiersChanged(m) => self.modifiers = m,
            InputEvent::Focused(f) => {
                self.focused = f;
                if !f {
                    // Releases are not delivered to unfocused windows.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }
            InputEvent::PointerMoved { x, y } => self.pointer = Some(Vec2::new(x, y)),
            InputEvent::PointerLeft => self.pointer = None,
            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => {
                    self.keys_down.insert(key);
                }
                KeyState::Released => {
                    self.keys_down.remove(&key);
                }
            },
            InputEvent::PointerButton { button, state } => match state {
                KeyState::Pressed => {
                    self.buttons_down.insert(button);
                }
                KeyState::Released => {
                    self.buttons_down.remove(&button);
                }
            },
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    pub fn shift_down(&self) -> bool {
        self.modifiers.shift
    }

    pub fn ctrl_down(&self) -> bool {
        self.modifiers.ctrl
    }

    #[inline]
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    #[inline]
    pub fn focused(&self) -> bool {
        self.focused
    }

    /// Last known pointer position, `None` once the pointer left the window.
    #[inline]
    pub fn pointer_position(&self) -> Option<Vec2> {
        self.pointer
    }
}
