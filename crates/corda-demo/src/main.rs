//! Corda: click to place control points, watch the cubic Bézier follow.
//!
//! Left click commits a control point; the candidate point tracks the
//! cursor between clicks. From the second point on, the curve through the
//! first four slots is resampled and drawn every frame. Escape quits.

use anyhow::Result;
use winit::dpi::LogicalSize;

use corda_engine::device::GpuInit;
use corda_engine::logging::{LoggingConfig, init_logging};
use corda_engine::window::{Runtime, RuntimeConfig};

mod app;
mod curve;

use app::SketchApp;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "Corda".to_string(),
        initial_size: LogicalSize::new(1024.0, 600.0),
    };

    Runtime::run(config, GpuInit::default(), SketchApp::new())
}
