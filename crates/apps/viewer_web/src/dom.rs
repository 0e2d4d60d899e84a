use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, HtmlImageElement, Window};

/// Elements the viewer talks to. Anything missing disables its feature.
#[derive(Debug, Clone)]
pub struct Dom {
    pub window: Window,
    pub document: Document,
    pub pan_viewport: Option<HtmlElement>,
    pub pan_container: Option<HtmlElement>,
    pub scene_image: Option<HtmlImageElement>,
    pub hotspot_layer: Option<HtmlElement>,
    pub scene: Option<Element>,
    pub modal: Option<Element>,
    pub modal_title: Option<Element>,
    pub modal_author: Option<Element>,
    pub modal_pdf: Option<Element>,
    pub modal_text: Option<Element>,
    pub modal_body: Option<Element>,
    pub modal_indicator: Option<Element>,
    pub info_modal: Option<Element>,
    pub info_button: Option<Element>,
    pub info_text: Option<Element>,
    pub info_indicator: Option<Element>,
    pub sidepanel: Option<Element>,
    pub sidepanel_title: Option<Element>,
    pub sidepanel_text: Option<Element>,
    pub sidepanel_toggle: Option<Element>,
    pub sidepanel_content: Option<Element>,
    pub sidepanel_indicator: Option<Element>,
    pub sidepanel_overlay: Option<Element>,
    pub floor_arrows: Option<Element>,
    pub floor_up: Option<Element>,
    pub floor_down: Option<Element>,
    pub dropdown: Option<Element>,
    pub dropdown_trigger: Option<Element>,
}

impl Dom {
    pub fn lookup() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let by_id = |id: &str| document.get_element_by_id(id);
        let query = |sel: &str| document.query_selector(sel).ok().flatten();
        let dropdown = query(".scene-nav-dropdown");
        let dropdown_trigger = dropdown
            .as_ref()
            .and_then(|d| d.query_selector(".dropdown-trigger").ok().flatten());

        let dom = Self {
            pan_viewport: by_id("panViewport").and_then(|e| e.dyn_into().ok()),
            pan_container: by_id("panContainer").and_then(|e| e.dyn_into().ok()),
            scene_image: by_id("sceneImage").and_then(|e| e.dyn_into().ok()),
            hotspot_layer: by_id("hotspotLayer").and_then(|e| e.dyn_into().ok()),
            scene: by_id("scene"),
            modal: by_id("modal"),
            modal_title: by_id("modalTitle"),
            modal_author: by_id("modalAuthor"),
            modal_pdf: by_id("modalPdf"),
            modal_text: by_id("modalText"),
            modal_body: query("#modal .modal-body"),
            modal_indicator: query("#modal .scroll-indicator"),
            info_modal: by_id("infoModal"),
            info_button: by_id("infoBtn"),
            info_text: by_id("infoText"),
            info_indicator: query("#infoModal .scroll-indicator"),
            sidepanel: by_id("sidepanel"),
            sidepanel_title: by_id("sidepanelTitle"),
            sidepanel_text: by_id("sidepanelText"),
            sidepanel_toggle: by_id("sidepanelToggle"),
            sidepanel_content: query(".sidepanel-content"),
            sidepanel_indicator: query(".scroll-indicator-sidepanel"),
            sidepanel_overlay: None,
            floor_arrows: query(".floor-nav-arrows"),
            floor_up: by_id("floorUp"),
            floor_down: by_id("floorDown"),
            dropdown,
            dropdown_trigger,
            window,
            document,
        };
        Some(dom)
    }

    /// Panning needs the viewport, the moving container and the image.
    pub fn can_pan(&self) -> bool {
        self.pan_viewport.is_some() && self.pan_container.is_some() && self.scene_image.is_some()
    }

    /// Creates the dimming overlay behind the side panel.
    pub fn attach_sidepanel_overlay(&mut self) {
        if self.sidepanel.is_none() {
            return;
        }
        let Ok(overlay) = self.document.create_element("div") else {
            return;
        };
        overlay.set_class_name("sidepanel-overlay");
        if let Some(body) = self.document.body()
            && body.append_child(&overlay).is_ok()
        {
            self.sidepanel_overlay = Some(overlay);
        }
    }

    pub fn remove_sidepanel_overlay(&self) {
        if let Some(overlay) = &self.sidepanel_overlay {
            overlay.remove();
        }
    }

    pub fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    pub fn set_css_var(&self, name: &str, value: &str) {
        if let Some(root) = self
            .document
            .document_element()
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
        {
            let _ = root.style().set_property(name, value);
        }
    }
}

pub fn toggle_class(el: Option<&Element>, class: &str, on: bool) {
    if let Some(el) = el {
        let _ = el.class_list().toggle_with_force(class, on);
    }
}

pub fn set_text(el: Option<&Element>, text: &str) {
    if let Some(el) = el {
        el.set_text_content(Some(text));
    }
}

pub fn set_html(el: Option<&Element>, html: &str) {
    if let Some(el) = el {
        el.set_inner_html(html);
    }
}

/// The element's layout width in CSS px, 0 when it is missing.
pub fn offset_width(el: Option<&HtmlElement>) -> f64 {
    el.map_or(0.0, |e| f64::from(e.offset_width()))
}

/// `performance.now()`, or `Date.now()` where it is unavailable.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map_or_else(js_sys::Date::now, |p| p.now())
}

/// One-shot timer. The callback runs once after `delay_ms`.
pub fn set_timeout(window: &Window, delay_ms: i32, f: impl FnOnce() + 'static) {
    let callback = Closure::once_into_js(f);
    let _ = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay_ms);
}

/// A registered event listener, removed again when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new(target: &EventTarget, event: &'static str, f: impl FnMut(Event) + 'static) -> Self {
        Self::with_passive(target, event, None, f)
    }

    /// Like [`Listener::new`] with an explicit `passive` flag, for touch
    /// handlers that must (or must not) be able to call `preventDefault`.
    pub fn with_passive(
        target: &EventTarget,
        event: &'static str,
        passive: Option<bool>,
        f: impl FnMut(Event) + 'static,
    ) -> Self {
        let callback = Closure::<dyn FnMut(Event)>::new(f);
        let func = callback.as_ref().unchecked_ref();
        let added = match passive {
            Some(passive) => {
                let options = AddEventListenerOptions::new();
                options.set_passive(passive);
                target.add_event_listener_with_callback_and_add_event_listener_options(
                    event, func, &options,
                )
            }
            None => target.add_event_listener_with_callback(event, func),
        };
        if let Err(err) = added {
            tracing::warn!(event, ?err, "addEventListener failed");
        }
        Self {
            target: target.clone(),
            event,
            callback,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

impl std::fmt::Debug for Listener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener").field("event", &self.event).finish()
    }
}

/// The nearest ancestor-or-self of the event target matching `selector`.
pub fn closest(event: &Event, selector: &str) -> Option<Element> {
    event
        .target()?
        .dyn_into::<Element>()
        .ok()?
        .closest(selector)
        .ok()
        .flatten()
}

/// Whether the event target is exactly `el`.
pub fn targets(event: &Event, el: Option<&Element>) -> bool {
    match (event.target(), el) {
        (Some(target), Some(el)) => {
            let el: &EventTarget = el.as_ref();
            &target == el
        }
        _ => false,
    }
}
