//! Core engine-facing contracts.
//!
//! The stable interface between the runtime (platform loop) and the
//! application on top. Application code receives its capabilities
//! (window, GPU, input, time) through [`FrameCtx`] rather than reaching
//! for globals.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
