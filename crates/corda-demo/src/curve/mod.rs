//! Curve core: the control-point ring buffer and the cubic Bézier
//! resampler. Pure in-memory arithmetic; everything here is total, and
//! the render layer only ever borrows the results.

mod bezier;
mod ring;

pub use bezier::resample;
pub use ring::PointRing;

use corda_engine::coords::ColorRgba;

/// How many placed points the ring keeps before recycling slots.
pub const CONTROL_CAPACITY: usize = 80;

/// Polyline resolution: samples per curve, endpoints included.
pub const CURVE_SAMPLES: usize = 28;

/// Color tag for placed control points (and the control polygon).
pub const CONTROL_COLOR: ColorRgba = ColorRgba::new(0.0, 0.0, 1.0, 1.0);

/// Color tag for synthesized curve samples.
pub const CURVE_COLOR: ColorRgba = ColorRgba::new(0.0, 1.0, 1.0, 1.0);
