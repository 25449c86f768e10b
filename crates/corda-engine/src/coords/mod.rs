//! Coordinate and color types shared by the runtime and renderers.
//!
//! Two CPU spaces exist side by side:
//! - Logical pixels (DPI-aware, origin top-left, +Y down) for input.
//! - Centered NDC (origin mid-window, +Y up, z = 0) for geometry handed
//!   to the line pipeline. [`Viewport::to_ndc`] converts between them.

mod color;
mod vec2;
mod viewport;

pub use color::ColorRgba;
pub use vec2::Vec2;
pub use viewport::Viewport;
