/// A pointer position normalized at the input boundary.
///
/// Touch and mouse events both reduce to client coordinates plus the event
/// timestamp in milliseconds.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
    pub timestamp_ms: f64,
}

impl PointerSample {
    pub fn new(x: f64, y: f64, timestamp_ms: f64) -> Self {
        Self { x, y, timestamp_ms }
    }
}

/// What the pointer went down on.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum PointerTarget {
    /// The scene surface; panning may start.
    #[default]
    Surface,
    /// A hotspot marker; the press belongs to the marker, not to panning.
    Hotspot,
}

/// The device behind a press. Only touch presses may become floor swipes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointerKind {
    Touch,
    Mouse,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerDown {
    pub sample: PointerSample,
    pub target: PointerTarget,
    pub kind: PointerKind,
    /// False for secondary mouse buttons.
    pub primary: bool,
}

impl PointerDown {
    pub fn touch(sample: PointerSample, target: PointerTarget) -> Self {
        Self {
            sample,
            target,
            kind: PointerKind::Touch,
            primary: true,
        }
    }

    /// `button` follows `MouseEvent.button`: 0 is the primary button.
    pub fn mouse(sample: PointerSample, target: PointerTarget, button: i16) -> Self {
        Self {
            sample,
            target,
            kind: PointerKind::Mouse,
            primary: button == 0,
        }
    }

    pub fn starts_pan(&self) -> bool {
        self.primary && self.target == PointerTarget::Surface
    }

    pub fn is_touch(&self) -> bool {
        self.kind == PointerKind::Touch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hotspot_presses_do_not_pan() {
        let s = PointerSample::new(10.0, 0.0, 0.0);
        assert!(PointerDown::touch(s, PointerTarget::Surface).starts_pan());
        assert!(!PointerDown::touch(s, PointerTarget::Hotspot).starts_pan());
    }

    #[test]
    fn only_primary_mouse_button_pans() {
        let s = PointerSample::new(10.0, 0.0, 0.0);
        assert!(PointerDown::mouse(s, PointerTarget::Surface, 0).starts_pan());
        assert!(!PointerDown::mouse(s, PointerTarget::Surface, 2).starts_pan());
    }
}
