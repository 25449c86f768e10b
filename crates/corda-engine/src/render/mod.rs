//! GPU rendering subsystem.
//!
//! One renderer lives here: line strips with per-vertex color, fed from
//! fixed-capacity vertex buffers. Geometry arrives already in NDC, so the
//! pipeline binds no uniforms and the vertex stage is a passthrough.

mod ctx;
mod strip;

pub use ctx::{RenderCtx, RenderTarget};
pub use strip::{LineStripRenderer, LineVertex, StripBuffer, StripDraw};
