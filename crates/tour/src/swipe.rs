use pan::PointerSample;

use crate::config::SwipeConfig;
use crate::floors::FloorDirection;

/// Detects quick vertical swipes used to change floors.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SwipeTracker {
    start: Option<PointerSample>,
}

impl SwipeTracker {
    pub fn begin(&mut self, sample: PointerSample) {
        self.start = Some(sample);
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }

    /// Ends the gesture. Swiping up moves one floor up.
    pub fn end(&mut self, sample: PointerSample, config: &SwipeConfig) -> Option<FloorDirection> {
        let start = self.start.take()?;
        if !config.enabled {
            return None;
        }
        let rise = start.y - sample.y;
        let drift = (sample.x - start.x).abs();
        let duration = sample.timestamp_ms - start.timestamp_ms;

        if rise.abs() <= config.min_distance_px
            || duration >= config.max_duration_ms
            || drift >= rise.abs()
        {
            return None;
        }
        Some(if rise > 0.0 {
            FloorDirection::Up
        } else {
            FloorDirection::Down
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(from: (f64, f64, f64), to: (f64, f64, f64)) -> Option<FloorDirection> {
        let mut s = SwipeTracker::default();
        s.begin(PointerSample::new(from.0, from.1, from.2));
        s.end(PointerSample::new(to.0, to.1, to.2), &SwipeConfig::default())
    }

    #[test]
    fn quick_vertical_swipes_change_floor() {
        assert_eq!(swipe((100.0, 400.0, 0.0), (105.0, 300.0, 200.0)), Some(FloorDirection::Up));
        assert_eq!(swipe((100.0, 300.0, 0.0), (90.0, 400.0, 200.0)), Some(FloorDirection::Down));
    }

    #[test]
    fn short_slow_or_sideways_gestures_are_ignored() {
        assert_eq!(swipe((0.0, 400.0, 0.0), (0.0, 350.0, 100.0)), None);
        assert_eq!(swipe((0.0, 400.0, 0.0), (0.0, 200.0, 500.0)), None);
        assert_eq!(swipe((0.0, 400.0, 0.0), (300.0, 300.0, 100.0)), None);
    }

    #[test]
    fn end_without_begin_or_disabled_is_none() {
        let mut s = SwipeTracker::default();
        assert_eq!(s.end(PointerSample::new(0.0, 0.0, 0.0), &SwipeConfig::default()), None);

        let off = SwipeConfig {
            enabled: false,
            ..SwipeConfig::default()
        };
        s.begin(PointerSample::new(0.0, 400.0, 0.0));
        assert_eq!(s.end(PointerSample::new(0.0, 100.0, 50.0), &off), None);
    }
}
