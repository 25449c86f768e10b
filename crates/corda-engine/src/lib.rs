//! Corda engine crate.
//!
//! Owns the platform + GPU runtime pieces (window loop, device, input,
//! line rendering) used by the sketching demo on top.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
