//! Scroll position to visual property mapping.

/// How far a section has scrolled past the top of the viewport.
///
/// 0.0 while the section's top edge is at or below the viewport top, 1.0
/// once its bottom edge has passed it. `top_px` is the bounding-rect top,
/// which goes negative as the page scrolls down.
pub fn section_progress(top_px: f64, height_px: f64) -> f64 {
    if height_px <= 0.0 || !top_px.is_finite() {
        return 0.0;
    }
    (-top_px / height_px).clamp(0.0, 1.0)
}

/// Linear interpolation from `from` to `to`, clamped to the output range.
pub fn map_range(value: f64, from: (f64, f64), to: (f64, f64)) -> f64 {
    let span = from.1 - from.0;
    if span == 0.0 {
        return to.0;
    }
    let t = ((value - from.0) / span).clamp(0.0, 1.0);
    to.0 + (to.1 - to.0) * t
}

/// Hero background drift: slides down half its height and fades out by the
/// time the hero is half scrolled away.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    pub offset_pct: f64,
    pub opacity: f64,
}

impl Parallax {
    pub fn from_progress(progress: f64) -> Self {
        Self {
            offset_pct: map_range(progress, (0.0, 1.0), (0.0, 50.0)),
            opacity: map_range(progress, (0.0, 0.5), (1.0, 0.0)),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "transform: translateY({:.2}%); opacity: {:.3};",
            self.offset_pct, self.opacity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_tracks_scroll_past_top() {
        assert_eq!(section_progress(0.0, 800.0), 0.0);
        assert_eq!(section_progress(120.0, 800.0), 0.0);
        assert_eq!(section_progress(-400.0, 800.0), 0.5);
        assert_eq!(section_progress(-800.0, 800.0), 1.0);
        assert_eq!(section_progress(-5000.0, 800.0), 1.0);
    }

    #[test]
    fn progress_of_empty_section_is_zero() {
        assert_eq!(section_progress(-100.0, 0.0), 0.0);
        assert_eq!(section_progress(f64::NAN, 100.0), 0.0);
    }

    #[test]
    fn map_range_clamps_and_inverts() {
        assert_eq!(map_range(0.25, (0.0, 0.5), (1.0, 0.0)), 0.5);
        assert_eq!(map_range(0.9, (0.0, 0.5), (1.0, 0.0)), 0.0);
        assert_eq!(map_range(-1.0, (0.0, 1.0), (0.0, 50.0)), 0.0);
        assert_eq!(map_range(3.0, (2.0, 2.0), (7.0, 9.0)), 7.0);
    }

    #[test]
    fn hero_parallax() {
        let top = Parallax::from_progress(0.0);
        assert_eq!(top, Parallax { offset_pct: 0.0, opacity: 1.0 });

        let half = Parallax::from_progress(0.5);
        assert_eq!(half.offset_pct, 25.0);
        assert_eq!(half.opacity, 0.0);

        assert_eq!(
            Parallax::from_progress(0.2).style(),
            "transform: translateY(10.00%); opacity: 0.600;"
        );
    }
}
