use pan::{PointerDown, PointerSample, PointerTarget};
use web_sys::{Event, MouseEvent, TouchEvent};

use crate::dom::closest;

/// Presses on a marker belong to the marker, not to panning.
pub fn pointer_target(event: &Event) -> PointerTarget {
    if closest(event, ".hotspot").is_some() {
        PointerTarget::Hotspot
    } else {
        PointerTarget::Surface
    }
}

/// First active touch, or the first changed touch for `touchend`.
pub fn touch_sample(event: &TouchEvent, changed: bool) -> Option<PointerSample> {
    let list = if changed {
        event.changed_touches()
    } else {
        event.touches()
    };
    let touch = list.get(0)?;
    Some(PointerSample::new(
        f64::from(touch.client_x()),
        f64::from(touch.client_y()),
        event.time_stamp(),
    ))
}

pub fn mouse_sample(event: &MouseEvent) -> PointerSample {
    PointerSample::new(
        f64::from(event.client_x()),
        f64::from(event.client_y()),
        event.time_stamp(),
    )
}

pub fn touch_down(event: &TouchEvent) -> Option<PointerDown> {
    let sample = touch_sample(event, false)?;
    Some(PointerDown::touch(sample, pointer_target(event)))
}

pub fn mouse_down(event: &MouseEvent) -> PointerDown {
    PointerDown::mouse(mouse_sample(event), pointer_target(event), event.button())
}

/// The hotspot group a `mouseout` leaves, from the group of the element left
/// (base or child) and the group of the element entered. Moving between the
/// base and a child of the same group stays inside it.
pub fn group_left(from: Option<usize>, to: Option<usize>) -> Option<usize> {
    let from = from?;
    (to != Some(from)).then_some(from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaving_a_child_for_the_background_leaves_its_group() {
        assert_eq!(group_left(Some(0), None), Some(0));
        assert_eq!(group_left(Some(0), Some(1)), Some(0));
    }

    #[test]
    fn moving_inside_a_group_keeps_it() {
        assert_eq!(group_left(Some(2), Some(2)), None);
        assert_eq!(group_left(None, Some(2)), None);
    }
}
