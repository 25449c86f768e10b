use super::Vec2;

/// Window size in logical pixels.
///
/// Carries the conversion from cursor coordinates (top-left origin, +Y
/// down) to the centered NDC space the line pipeline consumes (+Y up).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Maps a logical-pixel position to centered NDC.
    ///
    /// The window center maps to the origin; the left/right edges map to
    /// x = -1/+1 and the top/bottom edges to y = +1/-1.
    #[inline]
    pub fn to_ndc(self, x: f32, y: f32) -> Vec2 {
        let cx = self.width * 0.5;
        let cy = self.height * 0.5;
        Vec2::new((x - cx) / cx, (cy - y) / cy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VP: Viewport = Viewport::new(1024.0, 600.0);

    // ── to_ndc ────────────────────────────────────────────────────────────

    #[test]
    fn center_maps_to_origin() {
        assert_eq!(VP.to_ndc(512.0, 300.0), Vec2::zero());
    }

    #[test]
    fn top_left_corner() {
        assert_eq!(VP.to_ndc(0.0, 0.0), Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn bottom_right_corner() {
        assert_eq!(VP.to_ndc(1024.0, 600.0), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn y_axis_points_up() {
        // Moving the cursor down the window decreases NDC y.
        let upper = VP.to_ndc(512.0, 100.0);
        let lower = VP.to_ndc(512.0, 500.0);
        assert!(upper.y > lower.y);
    }

    // ── is_valid ──────────────────────────────────────────────────────────

    #[test]
    fn zero_size_is_invalid() {
        assert!(!Viewport::new(0.0, 600.0).is_valid());
        assert!(!Viewport::new(1024.0, 0.0).is_valid());
        assert!(VP.is_valid());
    }
}
