use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{
    InputEvent,
    Key,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};

/// Current input state for the window.
///
/// Holds "is down" information and the current pointer position.
/// Per-frame transitions are recorded into an [`InputFrame`].
#[derive(Debug, Default)]
pub struct InputState {
    /// Current modifier state.
    pub modifiers: Modifiers,

    /// Whether the window is focused.
    pub focused: bool,

    /// Pointer position in logical pixels, `None` while the pointer is
    /// outside the window.
    pub pointer_pos: Option<(f32, f32)>,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies a platform-agnostic input event and writes transition deltas
    /// to `frame`.
    ///
    /// Key-repeat and duplicate press events collapse into a single entry in
    /// the frame's pressed set, so consumers see one edge per physical press.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = m;
            }

            InputEvent::Focused(f) => {
                self.focused = f;
                if !f {
                    // On focus loss, clear "down" sets. Avoids stuck
                    // keys/buttons when focus changes mid-press.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((x, y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key {
                key,
                state,
                modifiers,
            } => {
                self.modifiers = modifiers;

                match state {
                    KeyState::Pressed => {
                        if self.keys_down.insert(key) {
                            frame.keys_pressed.insert(key);
                        }
                    }
                    KeyState::Released => {
                        if self.keys_down.remove(&key) {
                            frame.keys_released.insert(key);
                        }
                    }
                }
            }

            InputEvent::PointerButton(PointerButtonEvent {
                button,
                state,
                x,
                y,
                modifiers,
            }) => {
                self.pointer_pos = Some((x, y));
                self.modifiers = modifiers;

                match state {
                    MouseButtonState::Pressed => {
                        if self.buttons_down.insert(button) {
                            frame.buttons_pressed.insert(button);
                        }
                    }
                    MouseButtonState::Released => {
                        if self.buttons_down.remove(&button) {
                            frame.buttons_released.insert(button);
                        }
                    }
                }
            }
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(button: MouseButton, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button,
            state: MouseButtonState::Pressed,
            x,
            y,
            modifiers: Modifiers::default(),
        })
    }

    fn release(button: MouseButton, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button,
            state: MouseButtonState::Released,
            x,
            y,
            modifiers: Modifiers::default(),
        })
    }

    // ── edge triggers ─────────────────────────────────────────────────────

    #[test]
    fn click_is_a_single_edge() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(MouseButton::Left, 10.0, 10.0));
        assert!(frame.buttons_pressed.contains(&MouseButton::Left));
        assert!(state.button_down(MouseButton::Left));

        // A duplicate press (e.g. event replay) must not retrigger.
        frame.clear();
        state.apply_event(&mut frame, press(MouseButton::Left, 10.0, 10.0));
        assert!(frame.buttons_pressed.is_empty());
    }

    #[test]
    fn release_clears_held_state() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(MouseButton::Left, 0.0, 0.0));
        state.apply_event(&mut frame, release(MouseButton::Left, 0.0, 0.0));

        assert!(!state.button_down(MouseButton::Left));
        assert!(frame.buttons_released.contains(&MouseButton::Left));
    }

    #[test]
    fn key_repeat_collapses_to_one_press() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        for _ in 0..3 {
            state.apply_event(
                &mut frame,
                InputEvent::Key {
                    key: Key::Escape,
                    state: KeyState::Pressed,
                    modifiers: Modifiers::default(),
                },
            );
        }

        assert_eq!(frame.keys_pressed.len(), 1);
        assert!(state.key_down(Key::Escape));
    }

    // ── pointer tracking ──────────────────────────────────────────────────

    #[test]
    fn pointer_position_follows_events() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(
            &mut frame,
            InputEvent::PointerMoved(PointerMoveEvent { x: 3.0, y: 4.0 }),
        );
        assert_eq!(state.pointer_pos, Some((3.0, 4.0)));

        state.apply_event(&mut frame, InputEvent::PointerLeft);
        assert_eq!(state.pointer_pos, None);
    }

    // ── focus ─────────────────────────────────────────────────────────────

    #[test]
    fn focus_loss_drops_held_buttons() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(MouseButton::Left, 0.0, 0.0));
        state.apply_event(&mut frame, InputEvent::Focused(false));

        assert!(!state.button_down(MouseButton::Left));
        assert!(state.keys_down.is_empty());
    }
}
