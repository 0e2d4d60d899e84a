/// Closed 1-D interval `[min, max]`.
///
/// Construction orders the endpoints, so `min <= max` always holds for
/// finite inputs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Span1 {
    pub min: f64,
    pub max: f64,
}

impl Span1 {
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Span1 { min: a, max: b }
        } else {
            Span1 { min: b, max: a }
        }
    }

    pub fn point(v: f64) -> Self {
        Span1 { min: v, max: v }
    }

    pub fn is_point(&self) -> bool {
        self.min == self.max
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    pub fn clamp(&self, v: f64) -> f64 {
        v.max(self.min).min(self.max)
    }

    /// The endpoint `v` has crossed, if any.
    pub fn violated_bound(&self, v: f64) -> Option<f64> {
        if v > self.max {
            Some(self.max)
        } else if v < self.min {
            Some(self.min)
        } else {
            None
        }
    }
}
