use corda_engine::render::LineVertex;

use super::{CURVE_COLOR, PointRing};

/// Cubic Bernstein blend along one axis.
///
/// `B(t) = (1-t)³·p1 + 3t(1-t)²·p2 + 3t²(1-t)·p3 + t³·p4`
///
/// Exact at the ends: `t = 0` returns `p1` and `t = 1` returns `p4` with
/// no rounding, since the other basis terms vanish.
pub fn bezier_axis(p1: f32, p2: f32, p3: f32, p4: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    u * u * u * p1 + 3.0 * t * u * u * p2 + 3.0 * t * t * u * p3 + t * t * t * p4
}

/// Blends slots `P1..P4` at parameter `t` into a curve-colored vertex.
///
/// The curve is planar: x and y blend independently, z stays 0.
fn curve_point(p1: &LineVertex, p2: &LineVertex, p3: &LineVertex, p4: &LineVertex, t: f32) -> LineVertex {
    let x = bezier_axis(p1.position[0], p2.position[0], p3.position[0], p4.position[0], t);
    let y = bezier_axis(p1.position[1], p2.position[1], p3.position[1], p4.position[1], t);

    LineVertex::new([x, y, 0.0], CURVE_COLOR.to_array())
}

/// Recomputes the fixed-size polyline from the ring.
///
/// The blend window is always slots 0–3, regardless of how many points are
/// committed: uncommitted slots contribute whatever they hold (zero until
/// first touched), and points placed past the fourth never change the
/// curve's shape. Two overrides anchor the polyline visually:
///
/// - sample `0` is slot 0 verbatim, keeping its control color,
/// - the last sample is the most recently committed point (ring index
///   `count - 1`) verbatim, so the curve always ends under the newest
///   click even when that point is outside the blend window.
///
/// Pure arithmetic over the ring's current contents; recomputing from an
/// unchanged ring yields bit-identical output.
pub fn resample<const N: usize, const M: usize>(ring: &PointRing<N>) -> [LineVertex; M] {
    debug_assert!(N >= 4, "blend window needs four slots");
    debug_assert!(M >= 2, "a polyline needs both endpoints");

    let slots = ring.slots();
    let mut out = [LineVertex::default(); M];

    out[0] = slots[0];

    let step = 1.0 / (M as f32 - 1.0);
    for (i, sample) in out.iter_mut().enumerate().take(M - 1).skip(1) {
        *sample = curve_point(&slots[0], &slots[1], &slots[2], &slots[3], i as f32 * step);
    }

    out[M - 1] = *ring.slot(ring.len().saturating_sub(1));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::CONTROL_COLOR;

    const SAMPLES: usize = 28;

    fn control(x: f32, y: f32) -> LineVertex {
        LineVertex::new([x, y, 0.0], CONTROL_COLOR.to_array())
    }

    fn place(ring: &mut PointRing<80>, vertex: LineVertex) {
        ring.preview(vertex);
        ring.commit();
    }

    // ── pure blend ────────────────────────────────────────────────────────

    #[test]
    fn blend_hits_endpoints_exactly() {
        // Independent of the endpoint snap: the polynomial itself must
        // return p1 at t=0 and p4 at t=1, bit-exact.
        assert_eq!(bezier_axis(5.0, -3.0, 7.0, 11.0, 0.0), 5.0);
        assert_eq!(bezier_axis(5.0, -3.0, 7.0, 11.0, 1.0), 11.0);
    }

    #[test]
    fn blend_midpoint_of_straight_line() {
        // Equally spaced collinear controls trace the line itself.
        let mid = bezier_axis(0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0, 0.5);
        assert!((mid - 0.5).abs() < 1e-6);
    }

    // ── endpoint snapping ─────────────────────────────────────────────────

    #[test]
    fn two_points_snap_both_ends() {
        let mut ring: PointRing<80> = PointRing::new();
        place(&mut ring, control(0.0, 0.0));
        place(&mut ring, control(1.0, 1.0));

        let out: [LineVertex; SAMPLES] = resample(&ring);

        // First sample is slot 0 verbatim: position and control color.
        assert_eq!(out[0], control(0.0, 0.0));
        // Last sample is the newest committed point, never a blend result,
        // regardless of the defaults still sitting in slots 2–3.
        assert_eq!(out[SAMPLES - 1].position, [1.0, 1.0, 0.0]);
    }

    #[test]
    fn stale_window_slots_read_as_zero() {
        let mut ring: PointRing<80> = PointRing::new();
        place(&mut ring, control(1.0, 1.0));
        place(&mut ring, control(1.0, 1.0));

        let out: [LineVertex; SAMPLES] = resample(&ring);

        // With P3 = P4 = origin, the interior blend is (1-t)³ + 3t(1-t)²
        // per axis, so the untouched slots really do join the window.
        // t is derived exactly as the resampler derives it, so the
        // comparison can stay bit-exact.
        let t = 13.0 * (1.0 / (SAMPLES as f32 - 1.0));
        let expected = bezier_axis(1.0, 1.0, 0.0, 0.0, t);
        assert_eq!(out[13].position[0], expected);
        assert_eq!(out[13].position[1], expected);
    }

    // ── sampling ──────────────────────────────────────────────────────────

    #[test]
    fn interior_parameterization_is_uniform() {
        let mut ring: PointRing<80> = PointRing::new();
        place(&mut ring, control(0.0, 0.0));
        place(&mut ring, control(1.0 / 3.0, 0.0));
        place(&mut ring, control(2.0 / 3.0, 0.0));
        place(&mut ring, control(1.0, 0.0));

        // Equally spaced control x-coordinates make x(t) = t, so each
        // interior sample's x reads back its own parameter.
        let out: [LineVertex; SAMPLES] = resample(&ring);

        let mut prev = out[0].position[0];
        for (i, sample) in out.iter().enumerate().take(SAMPLES - 1).skip(1) {
            let t = i as f32 / (SAMPLES as f32 - 1.0);
            assert!((sample.position[0] - t).abs() < 1e-5, "sample {i}");
            assert!(sample.position[0] > prev, "monotone at {i}");
            assert_eq!(sample.position[2], 0.0);
            assert_eq!(sample.color, CURVE_COLOR.to_array());
            prev = sample.position[0];
        }
    }

    #[test]
    fn points_past_the_window_only_move_the_tail() {
        let mut ring: PointRing<80> = PointRing::new();
        for i in 0..4 {
            place(&mut ring, control(i as f32, 0.0));
        }
        let before: [LineVertex; SAMPLES] = resample(&ring);

        place(&mut ring, control(40.0, 40.0));
        let after: [LineVertex; SAMPLES] = resample(&ring);

        // Interior samples still blend slots 0–3 only.
        assert_eq!(before[1..SAMPLES - 1], after[1..SAMPLES - 1]);
        // The snapped tail follows the fifth point.
        assert_eq!(after[SAMPLES - 1].position, [40.0, 40.0, 0.0]);
    }

    #[test]
    fn resampling_is_deterministic() {
        let mut ring: PointRing<80> = PointRing::new();
        place(&mut ring, control(-0.8, -0.3));
        place(&mut ring, control(-0.2, 0.9));
        place(&mut ring, control(0.4, -0.7));

        let a: [LineVertex; SAMPLES] = resample(&ring);
        let b: [LineVertex; SAMPLES] = resample(&ring);

        assert_eq!(a, b);
    }
}
