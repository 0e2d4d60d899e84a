use formats::HotspotPosition;
use tour::{HotspotConfig, HotspotGroup, ModalState, ModalStateChanged, SceneChanged, ScrollMetrics};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::config::UiMessages;
use crate::dom::{Dom, set_text, toggle_class};

/// CSS transform for a horizontal content offset.
pub fn translate3d(x: f64) -> String {
    let x = if x.is_finite() { x } else { 0.0 };
    format!("translate3d({x}px, 0, 0)")
}

/// CSS position of a marker: a percentage of the image plus a pixel offset.
pub fn marker_coord(percent: f64, offset_px: f64) -> String {
    if offset_px == 0.0 {
        format!("{percent}%")
    } else {
        format!("calc({percent}% + {offset_px}px)")
    }
}

pub fn render_offset(dom: &Dom, x: f64) {
    if let Some(container) = &dom.pan_container {
        let _ = container.style().set_property("transform", &translate3d(x));
    }
}

/// Sizes the marker layer to the displayed image.
pub fn fit_layer_to_image(dom: &Dom) {
    if let (Some(layer), Some(img)) = (&dom.hotspot_layer, &dom.scene_image) {
        let _ = layer
            .style()
            .set_property("width", &format!("{}px", img.offset_width()));
    }
}

fn marker(dom: &Dom, position: HotspotPosition, dx: f64, dy: f64) -> Option<HtmlElement> {
    let el: HtmlElement = dom.document.create_element("div").ok()?.dyn_into().ok()?;
    el.set_class_name("hotspot");
    let style = el.style();
    let _ = style.set_property("left", &marker_coord(position.x, dx));
    let _ = style.set_property("top", &marker_coord(position.y, dy));
    Some(el)
}

/// Rebuilds every marker of the active scene.
///
/// Bases carry `data-hotspot`; fanned-out children also carry `data-entry`.
pub fn render_hotspots(dom: &Dom, groups: &[HotspotGroup], config: &HotspotConfig) {
    let Some(layer) = &dom.hotspot_layer else {
        return;
    };
    layer.set_inner_html("");
    for (index, group) in groups.iter().enumerate() {
        let Some(base) = marker(dom, group.position(), 0.0, 0.0) else {
            continue;
        };
        let _ = base.set_attribute("data-hotspot", &index.to_string());
        let _ = base
            .class_list()
            .toggle_with_force("hotspot--collapsed", group.is_expanded());
        let _ = layer.append_child(&base);

        for (entry, offset) in group.child_offsets(config).into_iter().enumerate() {
            let Some(child) = marker(dom, group.position(), offset.x, offset.y) else {
                continue;
            };
            let _ = child.set_attribute("data-hotspot", &index.to_string());
            let _ = child.set_attribute("data-entry", &entry.to_string());
            let _ = layer.append_child(&child);
        }
    }
}

/// Shows a label bubble inside `marker`, replacing any other tooltip.
pub fn show_tooltip(dom: &Dom, marker: &Element, text: &str) {
    hide_tooltips(dom);
    if let Ok(tip) = dom.document.create_element("div") {
        tip.set_class_name("tooltip");
        tip.set_text_content(Some(text));
        let _ = marker.append_child(&tip);
    }
}

pub fn hide_tooltips(dom: &Dom) {
    for tip in dom.query_all("#hotspotLayer .tooltip") {
        tip.remove();
    }
}

/// Navigation buttons and floor arrows for the new scene.
pub fn render_scene_nav(dom: &Dom, event: &SceneChanged) {
    for button in dom.query_all("[data-scene]") {
        let active = button.get_attribute("data-scene").as_deref() == Some(event.key.as_str());
        let _ = button.class_list().toggle_with_force("active", active);
    }

    toggle_class(dom.floor_arrows.as_ref(), "visible", event.floors.is_visible());
    set_disabled(dom.floor_up.as_ref(), !event.floors.can_go_up());
    set_disabled(dom.floor_down.as_ref(), !event.floors.can_go_down());
}

fn set_disabled(el: Option<&Element>, disabled: bool) {
    if let Some(el) = el {
        let _ = el.toggle_attribute_with_force("disabled", disabled);
    }
}

/// Mirrors modal state onto the page. Returns the URL of the entry text to
/// load, if an entry was opened.
pub fn render_modal(dom: &Dom, event: &ModalStateChanged, messages: &UiMessages) -> Option<String> {
    let open = event.modal.is_open();
    if let Some(body) = dom.document.body() {
        let _ = body.class_list().toggle_with_force("modal-open", open);
    }
    toggle_class(dom.modal.as_ref(), "is-open", matches!(event.modal, ModalState::Entry { .. }));
    toggle_class(dom.info_modal.as_ref(), "is-open", event.modal == ModalState::Info);
    render_sidepanel_open(dom, event.sidepanel_open);

    let entry = event.entry.as_ref()?;
    set_text(dom.modal_title.as_ref(), entry.display_title());
    set_text(dom.modal_author.as_ref(), &entry.author);
    if let Some(pdf) = &dom.modal_pdf {
        let _ = match &entry.pdf {
            Some(href) => pdf.set_attribute("href", href),
            None => pdf.remove_attribute("href"),
        };
    }
    toggle_class(dom.modal_indicator.as_ref(), "visible", false);
    match &entry.text {
        Some(url) => {
            set_text(dom.modal_text.as_ref(), &messages.loading);
            Some(url.clone())
        }
        None => {
            set_text(dom.modal_text.as_ref(), "");
            None
        }
    }
}

pub fn render_sidepanel_open(dom: &Dom, open: bool) {
    toggle_class(dom.sidepanel.as_ref(), "sidepanel--open", open);
    toggle_class(dom.sidepanel_overlay.as_ref(), "active", open);
}

pub fn render_dropdown_open(dom: &Dom, open: bool) {
    toggle_class(dom.dropdown.as_ref(), "open", open);
}

pub fn scroll_metrics(el: &Element) -> ScrollMetrics {
    ScrollMetrics {
        scroll_height: f64::from(el.scroll_height()),
        scroll_top: f64::from(el.scroll_top()),
        client_height: f64::from(el.client_height()),
    }
}

/// Shows the "more below" hint on `indicator` while `container` has unseen
/// content.
pub fn update_indicator(container: Option<&Element>, indicator: Option<&Element>, tolerance_px: f64) {
    let visible = container.is_some_and(|c| scroll_metrics(c).indicator_visible(tolerance_px));
    toggle_class(indicator, "visible", visible);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_uses_translate3d() {
        assert_eq!(translate3d(-400.0), "translate3d(-400px, 0, 0)");
        assert_eq!(translate3d(12.5), "translate3d(12.5px, 0, 0)");
        assert_eq!(translate3d(f64::NAN), "translate3d(0px, 0, 0)");
    }

    #[test]
    fn marker_coordinates_add_pixel_offsets() {
        assert_eq!(marker_coord(40.0, 0.0), "40%");
        assert_eq!(marker_coord(40.5, 45.0), "calc(40.5% + 45px)");
        assert_eq!(marker_coord(10.0, -22.5), "calc(10% + -22.5px)");
    }
}
