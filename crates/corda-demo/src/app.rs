use corda_engine::coords::{ColorRgba, Viewport};
use corda_engine::core::{App, AppControl, FrameCtx};
use corda_engine::input::{Key, MouseButton};
use corda_engine::render::{LineStripRenderer, LineVertex, StripBuffer, StripDraw};

use crate::curve::{self, PointRing};

/// Window clear color, a dark warm grey that keeps both strip colors legible.
const CLEAR_COLOR: ColorRgba = ColorRgba::from_srgb_u8(49, 47, 47);

/// Interaction phase, derived from how many points have been committed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Phase {
    /// Nothing placed yet.
    Idle,
    /// One point placed: the candidate tracks the cursor, no curve yet.
    Tracking,
    /// Two or more points: the polyline is recomputed and drawn every frame.
    CurveActive,
}

fn phase_for(committed: usize) -> Phase {
    match committed {
        0 => Phase::Idle,
        1 => Phase::Tracking,
        _ => Phase::CurveActive,
    }
}

/// The sketching application: owns the control-point ring, the derived
/// polyline, and the GPU-side strip resources.
///
/// Both CPU buffers live here; the render layer only borrows their
/// contents during upload.
pub struct SketchApp {
    ring: PointRing<{ curve::CONTROL_CAPACITY }>,
    polyline: [LineVertex; curve::CURVE_SAMPLES],
    phase: Phase,

    renderer: LineStripRenderer,
    control_vbo: Option<StripBuffer>,
    curve_vbo: Option<StripBuffer>,
}

impl SketchApp {
    pub fn new() -> Self {
        Self {
            ring: PointRing::new(),
            polyline: [LineVertex::default(); curve::CURVE_SAMPLES],
            phase: Phase::Idle,
            renderer: LineStripRenderer::new(),
            control_vbo: None,
            curve_vbo: None,
        }
    }

    fn update_phase(&mut self) {
        let next = phase_for(self.ring.len());
        if next != self.phase {
            log::debug!("phase {:?} -> {:?}", self.phase, next);
            self.phase = next;
        }
    }
}

impl App for SketchApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input_frame.keys_pressed.contains(&Key::Escape) {
            return AppControl::Exit;
        }

        let (w, h) = ctx.window.logical_size();
        let viewport = Viewport::new(w, h);

        // The candidate vertex follows the cursor until committed.
        if let Some((mx, my)) = ctx.input.pointer_pos {
            let ndc = viewport.to_ndc(mx, my);
            self.ring.preview(LineVertex::new(
                [ndc.x, ndc.y, 0.0],
                curve::CONTROL_COLOR.to_array(),
            ));
        }

        // A left-click edge commits whatever the candidate slot holds.
        if ctx.input_frame.buttons_pressed.contains(&MouseButton::Left)
            && ctx.input.pointer_pos.is_some()
        {
            self.ring.commit();
            log::debug!(
                "placed control point {}/{}",
                self.ring.len(),
                self.ring.capacity()
            );
        }

        self.update_phase();

        if self.phase == Phase::CurveActive {
            self.polyline = curve::resample(&self.ring);
        }

        let ring = &self.ring;
        let polyline = &self.polyline;
        let phase = self.phase;
        let renderer = &mut self.renderer;
        let control_vbo = &mut self.control_vbo;
        let curve_vbo = &mut self.curve_vbo;

        ctx.render(CLEAR_COLOR, |rctx, target| {
            let control = control_vbo.get_or_insert_with(|| {
                StripBuffer::new(rctx.device, curve::CONTROL_CAPACITY, "corda control strip")
            });
            let curve = curve_vbo.get_or_insert_with(|| {
                StripBuffer::new(rctx.device, curve::CURVE_SAMPLES, "corda curve strip")
            });

            control.upload(rctx.queue, ring.slots());
            curve.upload(rctx.queue, polyline);

            // The control polygon shows committed points only; the curve
            // strip joins in once there is something to interpolate.
            let mut strips = Vec::with_capacity(2);
            strips.push(StripDraw {
                buffer: control,
                vertex_count: ring.len() as u32,
            });
            if phase == Phase::CurveActive {
                strips.push(StripDraw {
                    buffer: curve,
                    vertex_count: curve::CURVE_SAMPLES as u32,
                });
            }

            renderer.render(rctx, target, &strips);
        })
    }
}

impl Default for SketchApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_tracks_commit_count() {
        assert_eq!(phase_for(0), Phase::Idle);
        assert_eq!(phase_for(1), Phase::Tracking);
        assert_eq!(phase_for(2), Phase::CurveActive);
        assert_eq!(phase_for(curve::CONTROL_CAPACITY), Phase::CurveActive);
    }

    #[test]
    fn previews_alone_never_change_phase() {
        // Commits are the only transition driver.
        let mut app = SketchApp::new();
        app.ring.preview(LineVertex::default());
        app.update_phase();
        assert_eq!(app.phase, Phase::Idle);

        app.ring.commit();
        app.ring.commit();
        app.update_phase();
        assert_eq!(app.phase, Phase::CurveActive);
    }
}
