//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types; the
//! runtime translates window system events into [`InputEvent`]s. Current
//! state (held keys/buttons, pointer position) lives in [`InputState`];
//! per-frame transitions (the click edge the demo commits on) live in
//! [`InputFrame`].

mod frame;
mod state;
mod types;

pub(crate) mod platform;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{
    InputEvent,
    Key,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};
