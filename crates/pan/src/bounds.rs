use foundation::Span1;

/// Allowed range for the content offset.
///
/// When the content is wider than the viewport the range is
/// `[viewport - content, 0]`; otherwise it collapses to the single centered
/// offset and panning is disabled.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PanBounds {
    span: Span1,
    viewport_width: f64,
    content_width: f64,
}

impl Default for PanBounds {
    fn default() -> Self {
        Self::compute(0.0, 0.0)
    }
}

impl PanBounds {
    /// Computes bounds from measured widths.
    ///
    /// Zero, negative or non-finite measurements are treated as 0 and yield a
    /// centered, non-pannable range.
    pub fn compute(viewport_width: f64, content_width: f64) -> Self {
        let viewport_width = sanitize_width(viewport_width);
        let content_width = sanitize_width(content_width);
        let centered = (viewport_width - content_width) / 2.0;

        let span = if viewport_width == 0.0 || content_width <= viewport_width {
            Span1::point(centered)
        } else {
            Span1::new(viewport_width - content_width, 0.0)
        };

        Self {
            span,
            viewport_width,
            content_width,
        }
    }

    pub fn min_x(&self) -> f64 {
        self.span.min
    }

    pub fn max_x(&self) -> f64 {
        self.span.max
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    pub fn content_width(&self) -> f64 {
        self.content_width
    }

    pub fn is_pannable(&self) -> bool {
        !self.span.is_point()
    }

    /// Offset that centers the content in the viewport.
    ///
    /// For pannable content this lies inside the bounds.
    pub fn centered(&self) -> f64 {
        self.span.clamp((self.viewport_width - self.content_width) / 2.0)
    }

    pub fn contains(&self, x: f64) -> bool {
        self.span.contains(x)
    }

    pub fn clamp(&self, x: f64) -> f64 {
        if x.is_nan() {
            return self.centered();
        }
        self.span.clamp(x)
    }

    /// The bound `x` lies beyond, if any.
    pub fn violated_bound(&self, x: f64) -> Option<f64> {
        self.span.violated_bound(x)
    }
}

fn sanitize_width(w: f64) -> f64 {
    if w.is_finite() && w > 0.0 { w } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::PanBounds;

    #[test]
    fn wide_content_pans_between_edges() {
        let b = PanBounds::compute(800.0, 1600.0);
        assert_eq!(b.min_x(), -800.0);
        assert_eq!(b.max_x(), 0.0);
        assert!(b.is_pannable());
        assert_eq!(b.centered(), -400.0);
    }

    #[test]
    fn narrow_content_is_centered() {
        let b = PanBounds::compute(800.0, 500.0);
        assert_eq!(b.min_x(), 150.0);
        assert_eq!(b.max_x(), 150.0);
        assert!(!b.is_pannable());
        assert_eq!(b.clamp(-1000.0), 150.0);
    }

    #[test]
    fn equal_widths_do_not_pan() {
        let b = PanBounds::compute(800.0, 800.0);
        assert_eq!(b.min_x(), 0.0);
        assert!(!b.is_pannable());
    }

    #[test]
    fn degenerate_measurements_never_produce_nan() {
        for (vw, cw) in [
            (0.0, 0.0),
            (-10.0, 400.0),
            (f64::NAN, 400.0),
            (800.0, f64::INFINITY),
            (800.0, -5.0),
        ] {
            let b = PanBounds::compute(vw, cw);
            assert!(b.min_x().is_finite());
            assert!(b.max_x().is_finite());
            assert!(!b.is_pannable());
            assert!(b.clamp(f64::NAN).is_finite());
        }
    }

    #[test]
    fn violated_bound_reports_nearest_edge() {
        let b = PanBounds::compute(800.0, 1600.0);
        assert_eq!(b.violated_bound(40.0), Some(0.0));
        assert_eq!(b.violated_bound(-850.0), Some(-800.0));
        assert_eq!(b.violated_bound(-400.0), None);
    }
}
