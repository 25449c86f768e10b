use std::collections::HashSet;

use super::types::{Key, MouseButton};

/// Per-frame input transitions.
///
/// [`InputState`](super::InputState) answers "is it down right now";
/// `InputFrame` answers "did it go down (or up) this frame". The runtime
/// clears it after each frame is consumed, so membership in a set is an
/// edge trigger, never a level.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Keys pressed this frame.
    pub keys_pressed: HashSet<Key>,

    /// Keys released this frame.
    pub keys_released: HashSet<Key>,

    /// Mouse buttons pressed this frame.
    pub buttons_pressed: HashSet<MouseButton>,

    /// Mouse buttons released this frame.
    pub buttons_released: HashSet<MouseButton>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
    }
}
