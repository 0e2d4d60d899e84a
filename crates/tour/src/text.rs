/// Placeholder in side panel HTML replaced by the scene's entry count.
pub const HOTSPOT_COUNT_PLACEHOLDER: &str = "{{hotspotCount}}";

/// Substitutes every `{{hotspotCount}}` in `html`.
pub fn render_hotspot_count(html: &str, count: usize) -> String {
    html.replace(HOTSPOT_COUNT_PLACEHOLDER, &count.to_string())
}

/// Scroll geometry of a scrollable panel body, in CSS px.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_height: f64,
    pub scroll_top: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    pub fn is_scrollable(&self) -> bool {
        self.scroll_height > self.client_height
    }

    pub fn is_at_bottom(&self, tolerance_px: f64) -> bool {
        self.scroll_height - self.scroll_top <= self.client_height + tolerance_px
    }

    /// The "more below" hint shows while there is unseen content.
    pub fn indicator_visible(&self, tolerance_px: f64) -> bool {
        self.is_scrollable() && !self.is_at_bottom(tolerance_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_every_placeholder() {
        let html = "<p>{{hotspotCount}} works, {{hotspotCount}} stories</p>";
        assert_eq!(render_hotspot_count(html, 7), "<p>7 works, 7 stories</p>");
        assert_eq!(render_hotspot_count("<p>none</p>", 3), "<p>none</p>");
    }

    #[test]
    fn indicator_tracks_scroll_position() {
        let mut m = ScrollMetrics {
            scroll_height: 1000.0,
            scroll_top: 0.0,
            client_height: 400.0,
        };
        assert!(m.indicator_visible(10.0));

        m.scroll_top = 589.0;
        assert!(m.indicator_visible(10.0));
        m.scroll_top = 590.0;
        assert!(!m.indicator_visible(10.0));
    }

    #[test]
    fn content_that_fits_has_no_indicator() {
        let m = ScrollMetrics {
            scroll_height: 400.0,
            scroll_top: 0.0,
            client_height: 400.0,
        };
        assert!(!m.is_scrollable());
        assert!(!m.indicator_visible(10.0));
    }
}
