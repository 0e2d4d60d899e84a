use std::cell::Cell;
use std::rc::Rc;

use formats::TourManifest;
use pan::PointerSample;
use runtime::AnimationTicket;
use tour::{
    FloorDirection, HotspotMode, HotspotReaction, ModalState, ModalStateChanged, SceneChanged,
    ScheduledCollapse, SidePanelView, Viewer, ViewerError,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, MouseEvent, TouchEvent};

use crate::config::WebConfig;
use crate::dom::{Dom, Listener, closest, now_ms, offset_width, set_html, set_text, set_timeout, targets, toggle_class};
use crate::fetch::fetch_text;
use crate::input::{group_left, mouse_down, mouse_sample, touch_down, touch_sample};
use crate::render::{
    fit_layer_to_image, hide_tooltips, render_dropdown_open, render_hotspots, render_modal,
    render_offset, render_scene_nav, render_sidepanel_open, show_tooltip, update_indicator,
};
use crate::with_app;

struct FrameLoop {
    ticket: Option<AnimationTicket>,
    handle: Option<i32>,
    callback: Closure<dyn FnMut(f64)>,
}

/// Everything one initialized page owns. Dropping it detaches the viewer.
pub struct App {
    pub dom: Rc<Dom>,
    pub config: Rc<WebConfig>,
    pub viewer: Viewer,
    listeners: Vec<Listener>,
    frame: FrameLoop,
    /// Bumped on every scene load so timers armed for an older scene expire.
    scene_epoch: u64,
    image_ready: bool,
}

impl App {
    pub fn new(mut dom: Dom, config: WebConfig) -> Self {
        dom.attach_sidepanel_overlay();
        let dom = Rc::new(dom);
        let config = Rc::new(config);

        let mut viewer = Viewer::new(config.viewer);
        {
            let dom = dom.clone();
            viewer.on_scene_change(move |event: &SceneChanged| render_scene_nav(&dom, event));
        }
        {
            let dom = dom.clone();
            let config = config.clone();
            let generation = Rc::new(Cell::new(0u64));
            viewer.on_modal_change(move |event: &ModalStateChanged| {
                modal_changed(&dom, &config, &generation, event);
            });
        }

        Self {
            dom,
            config,
            viewer,
            listeners: Vec::new(),
            frame: FrameLoop {
                ticket: None,
                handle: None,
                callback: Closure::new(on_frame),
            },
            scene_epoch: 0,
            image_ready: false,
        }
    }

    /// Registers every page listener. Missing elements skip their listeners.
    pub fn wire(&mut self) {
        let dom = self.dom.clone();
        let mut ls = Vec::new();
        let window: &web_sys::EventTarget = dom.window.as_ref();

        if dom.can_pan()
            && let Some(viewport) = &dom.pan_viewport
        {
            ls.push(Listener::with_passive(viewport, "touchstart", Some(true), |e| {
                if let Some(down) = e.dyn_ref::<TouchEvent>().and_then(touch_down) {
                    with_app(|app| app.pointer_down(down));
                }
            }));
            ls.push(Listener::with_passive(viewport, "touchmove", Some(false), |e| {
                let Some(sample) = e.dyn_ref::<TouchEvent>().and_then(|t| touch_sample(t, false)) else {
                    return;
                };
                if with_app(|app| app.pointer_move(sample)).unwrap_or(false) {
                    e.prevent_default();
                }
            }));
            ls.push(Listener::new(viewport, "touchend", |e| {
                if let Some(sample) = e.dyn_ref::<TouchEvent>().and_then(|t| touch_sample(t, true)) {
                    with_app(|app| app.pointer_up(sample));
                }
            }));
            ls.push(Listener::new(viewport, "touchcancel", |_| {
                with_app(|app| app.pointer_cancel());
            }));
            ls.push(Listener::new(viewport, "mousedown", |e| {
                let Some(mouse) = e.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let down = mouse_down(mouse);
                if down.starts_pan() {
                    // Keeps the browser from starting a native image drag.
                    e.prevent_default();
                }
                with_app(|app| app.pointer_down(down));
            }));
            ls.push(Listener::new(window, "mousemove", |e| {
                let Some(mouse) = e.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let sample = mouse_sample(mouse);
                if with_app(|app| app.pointer_move(sample)).unwrap_or(false) {
                    e.prevent_default();
                }
            }));
            ls.push(Listener::new(window, "mouseup", |e| {
                if let Some(mouse) = e.dyn_ref::<MouseEvent>() {
                    let sample = mouse_sample(mouse);
                    with_app(|app| app.pointer_up(sample));
                }
            }));
        }

        if let Some(img) = &dom.scene_image {
            ls.push(Listener::new(img, "load", |_| {
                with_app(|app| app.image_loaded());
            }));
        }

        if let Some(layer) = &dom.hotspot_layer {
            ls.push(Listener::new(layer, "click", |e| {
                with_app(|app| app.hotspot_clicked(&e));
            }));
            ls.push(Listener::new(layer, "mouseover", |e| {
                with_app(|app| app.hotspot_hovered(&e));
            }));
            ls.push(Listener::new(layer, "mouseout", |e| {
                with_app(|app| app.hotspot_left(&e));
            }));
        }

        for close in dom.query_all(".close") {
            ls.push(Listener::new(&close, "click", |_| {
                with_app(|app| app.viewer.close_modal());
            }));
        }
        ls.push(Listener::new(window, "click", |e| {
            with_app(|app| {
                if targets(&e, app.dom.modal.as_ref()) || targets(&e, app.dom.info_modal.as_ref()) {
                    app.viewer.close_modal();
                }
            });
        }));
        if let Some(info) = &dom.info_button {
            ls.push(Listener::new(info, "click", |_| {
                with_app(|app| app.viewer.open_info());
            }));
        }

        for button in dom.query_all("[data-scene]") {
            ls.push(Listener::new(&button, "click", |e| {
                let key = e
                    .current_target()
                    .and_then(|t| t.dyn_into::<Element>().ok())
                    .and_then(|el| el.get_attribute("data-scene"));
                if let Some(key) = key {
                    // Failures are logged by `scene_loaded`.
                    with_app(|app| app.load_scene(&key).ok());
                }
            }));
        }

        for (button, direction) in [
            (&dom.floor_up, FloorDirection::Up),
            (&dom.floor_down, FloorDirection::Down),
        ] {
            if let Some(button) = button {
                ls.push(Listener::new(button, "click", move |e| {
                    e.stop_propagation();
                    with_app(|app| app.navigate_floor(direction));
                }));
            }
        }

        if let Some(trigger) = &dom.dropdown_trigger {
            ls.push(Listener::new(trigger, "click", |e| {
                e.stop_propagation();
                with_app(|app| {
                    let open = app.viewer.toggle_dropdown();
                    render_dropdown_open(&app.dom, open);
                });
            }));
            ls.push(Listener::new(&dom.document, "click", |e| {
                with_app(|app| {
                    let inside = match (&app.dom.dropdown, e.target()) {
                        (Some(dropdown), Some(target)) => {
                            dropdown.contains(target.dyn_ref::<web_sys::Node>())
                        }
                        _ => false,
                    };
                    if !inside && app.viewer.close_dropdown() {
                        render_dropdown_open(&app.dom, false);
                    }
                });
            }));
        }

        if let Some(toggle) = &dom.sidepanel_toggle {
            ls.push(Listener::new(toggle, "click", |e| {
                e.stop_propagation();
                with_app(|app| {
                    let open = app.viewer.toggle_sidepanel();
                    render_sidepanel_open(&app.dom, open);
                });
            }));
        }
        if let Some(overlay) = &dom.sidepanel_overlay {
            ls.push(Listener::new(overlay, "click", |_| {
                with_app(|app| {
                    app.viewer.close_sidepanel();
                    render_sidepanel_open(&app.dom, false);
                });
            }));
        }

        let tolerance = self.config.viewer.scroll_tolerance_px;
        for (container, indicator) in [
            (&dom.modal_body, &dom.modal_indicator),
            (&dom.info_text, &dom.info_indicator),
            (&dom.sidepanel_content, &dom.sidepanel_indicator),
        ] {
            if let (Some(container), Some(_)) = (container, indicator) {
                let watched = container.clone();
                let indicator = indicator.clone();
                ls.push(Listener::new(container, "scroll", move |_| {
                    update_indicator(Some(&watched), indicator.as_ref(), tolerance);
                }));
            }
        }

        for event in ["resize", "orientationchange"] {
            ls.push(Listener::new(window, event, |_| {
                with_app(|app| app.resized());
            }));
        }

        self.listeners = ls;
        set_viewport_height(&dom);
    }

    // --- Scenes ---

    pub fn load_scene(&mut self, key: &str) -> Result<(), ViewerError> {
        let loaded = self.viewer.select_scene(key);
        render_dropdown_open(&self.dom, false);
        let failed = loaded.as_ref().err().cloned();
        self.scene_loaded(loaded);
        failed.map_or(Ok(()), Err)
    }

    fn navigate_floor(&mut self, direction: FloorDirection) {
        match self.viewer.navigate_floor(direction) {
            Ok(Some(event)) => self.scene_loaded(Ok(event)),
            Ok(None) => {}
            Err(err) => self.scene_loaded(Err(err)),
        }
    }

    /// Drops the old markers and fades the scene out, then swaps the image.
    pub fn scene_loaded(&mut self, loaded: Result<SceneChanged, ViewerError>) {
        let event = match loaded {
            Ok(event) => event,
            Err(err) => {
                tracing::warn!(%err, "scene not loaded");
                return;
            }
        };
        self.stop_animation();
        render_offset(&self.dom, self.viewer.pan().offset());
        self.scene_epoch += 1;
        self.image_ready = false;
        toggle_class(self.dom.scene.as_ref(), "hidden", true);
        hide_tooltips(&self.dom);
        if let Some(layer) = &self.dom.hotspot_layer {
            layer.set_inner_html("");
        }

        let epoch = self.scene_epoch;
        set_timeout(&self.dom.window, self.config.fade_ms, move || {
            with_app(|app| {
                if app.scene_epoch == epoch {
                    app.swap_scene(&event);
                }
            });
        });
    }

    fn swap_scene(&mut self, event: &SceneChanged) {
        if let Some(img) = &self.dom.scene_image {
            img.set_src(&event.image);
        }
        self.show_sidepanel(event);
        toggle_class(self.dom.scene.as_ref(), "hidden", false);
    }

    fn show_sidepanel(&self, event: &SceneChanged) {
        let dom = &self.dom;
        let messages = &self.config.messages;
        match &event.sidepanel {
            SidePanelView::Content { title, text_file } => {
                set_text(dom.sidepanel_title.as_ref(), title);
                set_html(dom.sidepanel_text.as_ref(), &paragraph(&messages.loading));

                let url = text_file.clone();
                let epoch = self.scene_epoch;
                spawn_local(async move {
                    let fetched = fetch_text(&url).await;
                    with_app(|app| {
                        if app.scene_epoch != epoch {
                            return;
                        }
                        let dom = &app.dom;
                        match fetched {
                            Ok(html) => {
                                let html = app.viewer.render_sidepanel_html(&html);
                                set_html(dom.sidepanel_text.as_ref(), &html);
                                app.check_indicator_later(
                                    dom.sidepanel_content.clone(),
                                    dom.sidepanel_indicator.clone(),
                                );
                            }
                            Err(err) => {
                                tracing::warn!(%err, url, "side panel text not loaded");
                                let msg = paragraph(&app.config.messages.sidepanel_error);
                                set_html(dom.sidepanel_text.as_ref(), &msg);
                            }
                        }
                    });
                });
            }
            SidePanelView::Fallback => {
                set_text(dom.sidepanel_title.as_ref(), &messages.sidepanel_fallback_title);
                set_html(dom.sidepanel_text.as_ref(), &paragraph(&messages.sidepanel_fallback));
            }
        }
    }

    fn image_loaded(&mut self) {
        fit_layer_to_image(&self.dom);
        self.image_ready = true;
        let (vw, cw) = self.measure();
        let x = self.viewer.content_loaded(vw, cw);
        self.stop_animation();
        render_offset(&self.dom, x);
        self.render_markers();
    }

    fn resized(&mut self) {
        set_viewport_height(&self.dom);
        let complete = self.dom.scene_image.as_ref().is_some_and(|img| img.complete());
        if !self.image_ready || !complete {
            return;
        }
        fit_layer_to_image(&self.dom);
        let (vw, cw) = self.measure();
        let x = self.viewer.resize(vw, cw);
        if !self.viewer.pan().is_animating() {
            self.stop_animation();
        }
        render_offset(&self.dom, x);
    }

    /// Re-measures and clamps the offset. Returns the offset.
    pub fn update_bounds(&mut self) -> f64 {
        let (vw, cw) = self.measure();
        let x = self.viewer.resize(vw, cw);
        if !self.viewer.pan().is_animating() {
            self.stop_animation();
        }
        render_offset(&self.dom, x);
        x
    }

    fn measure(&self) -> (f64, f64) {
        let content = self.dom.scene_image.as_ref().map(|img| img.offset_width());
        (
            offset_width(self.dom.pan_viewport.as_ref()),
            content.map_or(0.0, f64::from),
        )
    }

    // --- Pointer ---

    fn pointer_down(&mut self, down: pan::PointerDown) {
        if self.viewer.pointer_down(down) {
            self.stop_animation();
        }
    }

    fn pointer_move(&mut self, sample: PointerSample) -> bool {
        match self.viewer.pointer_move(sample) {
            Some(x) => {
                render_offset(&self.dom, x);
                true
            }
            None => false,
        }
    }

    fn pointer_up(&mut self, sample: PointerSample) {
        let release = self.viewer.pointer_up(sample);
        if let Some(ticket) = release.animation {
            self.start_animation(ticket);
        }
        if let Some(direction) = release.swipe {
            self.navigate_floor(direction);
        }
    }

    fn pointer_cancel(&mut self) {
        if let Some(ticket) = self.viewer.pointer_cancel() {
            self.start_animation(ticket);
        }
    }

    // --- Frames ---

    fn start_animation(&mut self, ticket: AnimationTicket) {
        self.frame.ticket = Some(ticket);
        self.request_frame();
    }

    fn request_frame(&mut self) {
        if self.frame.handle.is_some() {
            return;
        }
        let callback = self.frame.callback.as_ref().unchecked_ref();
        match self.dom.window.request_animation_frame(callback) {
            Ok(handle) => self.frame.handle = Some(handle),
            Err(err) => tracing::warn!(?err, "requestAnimationFrame failed"),
        }
    }

    fn stop_animation(&mut self) {
        self.frame.ticket = None;
        if let Some(handle) = self.frame.handle.take() {
            let _ = self.dom.window.cancel_animation_frame(handle);
        }
    }

    fn advance_frame(&mut self, now_ms: f64) {
        self.frame.handle = None;
        let Some(ticket) = self.frame.ticket else {
            return;
        };
        let outcome = self.viewer.tick(ticket, now_ms);
        render_offset(&self.dom, self.viewer.pan().offset());
        if outcome.is_continue() {
            self.request_frame();
        } else {
            self.frame.ticket = None;
        }
    }

    // --- Hotspots ---

    fn render_markers(&self) {
        if self.image_ready {
            render_hotspots(&self.dom, self.viewer.hotspots(), &self.config.viewer.hotspots);
        }
    }

    fn hotspot_clicked(&mut self, event: &Event) {
        let Some(marker) = closest(event, "[data-hotspot]") else {
            return;
        };
        event.stop_propagation();
        let Some(index) = data_index(&marker, "data-hotspot") else {
            return;
        };
        let now = now_ms();
        let reaction = match data_index(&marker, "data-entry") {
            Some(entry) => self.viewer.tap_hotspot_child(index, entry),
            None => self.viewer.tap_hotspot(index, now),
        };
        self.hotspot_reacted(index, now, reaction);
    }

    fn hotspot_hovered(&mut self, event: &Event) {
        if self.config.viewer.hotspots.mode != HotspotMode::Hover {
            return;
        }
        let Some(marker) = closest(event, "[data-hotspot]") else {
            return;
        };
        let Some(index) = data_index(&marker, "data-hotspot") else {
            return;
        };
        let entry = data_index(&marker, "data-entry");
        if entry.is_none() {
            let now = now_ms();
            let reaction = self.viewer.hover_hotspot(index, now);
            self.hotspot_reacted(index, now, reaction);
        }

        let label = self
            .viewer
            .hotspot(index)
            .and_then(|g| g.label(entry.unwrap_or(0)))
            .map(str::to_string);
        if let (Some(label), Some(target)) = (label, self.marker_element(index, entry)) {
            show_tooltip(&self.dom, &target, &label);
        }
    }

    fn hotspot_left(&mut self, event: &Event) {
        if self.config.viewer.hotspots.mode != HotspotMode::Hover {
            return;
        }
        hide_tooltips(&self.dom);
        let from = closest(event, "[data-hotspot]").and_then(|el| data_index(&el, "data-hotspot"));
        let to = event
            .dyn_ref::<MouseEvent>()
            .and_then(|m| m.related_target())
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest("[data-hotspot]").ok().flatten())
            .and_then(|el| data_index(&el, "data-hotspot"));
        let Some(index) = group_left(from, to) else {
            return;
        };
        let reaction = self.viewer.leave_hotspot(index);
        self.hotspot_reacted(index, now_ms(), reaction);
    }

    fn hotspot_reacted(&mut self, index: usize, now: f64, reaction: Result<HotspotReaction, ViewerError>) {
        match reaction {
            Ok(HotspotReaction::Expanded { collapse }) => {
                if let Some(collapse) = collapse {
                    self.schedule_collapse(index, now, collapse);
                }
                self.render_markers();
            }
            Ok(HotspotReaction::Collapsed | HotspotReaction::OpenEntry(_)) => self.render_markers(),
            Ok(HotspotReaction::Ignored) => {}
            Err(err) => tracing::warn!(%err, "hotspot interaction ignored"),
        }
    }

    fn schedule_collapse(&self, index: usize, armed_at: f64, collapse: ScheduledCollapse) {
        let epoch = self.scene_epoch;
        // The timer firing is what proves the delay elapsed.
        let due = armed_at + collapse.delay_ms;
        let delay = collapse.delay_ms.ceil() as i32;
        set_timeout(&self.dom.window, delay, move || {
            with_app(|app| {
                if app.scene_epoch != epoch {
                    return;
                }
                if let Ok(true) = app.viewer.collapse_hotspot(index, collapse.token, due) {
                    app.render_markers();
                }
            });
        });
    }

    fn marker_element(&self, index: usize, entry: Option<usize>) -> Option<Element> {
        let layer = self.dom.hotspot_layer.as_ref()?;
        let selector = match entry {
            Some(entry) => format!(r#"[data-hotspot="{index}"][data-entry="{entry}"]"#),
            None => format!(r#"[data-hotspot="{index}"]:not([data-entry])"#),
        };
        layer.query_selector(&selector).ok().flatten()
    }

    // --- Text loading ---

    fn check_indicator_later(&self, container: Option<Element>, indicator: Option<Element>) {
        let tolerance = self.config.viewer.scroll_tolerance_px;
        set_timeout(&self.dom.window, self.config.indicator_check_ms, move || {
            update_indicator(container.as_ref(), indicator.as_ref(), tolerance);
        });
    }

    /// Fetches the tour description and shows the default scene.
    pub fn load_tour(&self) {
        let url = self.config.data_url.clone();
        spawn_local(async move {
            let manifest = match fetch_text(&url).await {
                Ok(text) => TourManifest::from_json_str(&text).map_err(|e| e.to_string()),
                Err(err) => Err(err.to_string()),
            };
            with_app(|app| match manifest {
                Ok(manifest) => {
                    let loaded = app.viewer.load_tour(manifest);
                    app.scene_loaded(loaded);
                }
                Err(err) => {
                    tracing::warn!(%err, url, "tour description not loaded");
                    app.show_load_error();
                }
            });
        });
    }

    fn show_load_error(&self) {
        let Some(scene) = &self.dom.scene else {
            return;
        };
        if let Ok(note) = self.dom.document.create_element("div") {
            note.set_class_name("load-error");
            note.set_text_content(Some(&self.config.messages.tour_data_error));
            let _ = scene.append_child(&note);
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.stop_animation();
        self.listeners.clear();
        self.dom.remove_sidepanel_overlay();
    }
}

fn on_frame(now_ms: f64) {
    with_app(|app| app.advance_frame(now_ms));
}

fn data_index(el: &Element, attr: &str) -> Option<usize> {
    el.get_attribute(attr)?.parse().ok()
}

fn paragraph(text: &str) -> String {
    format!("<p>{text}</p>")
}

/// Exposes `1vh` of the real inner height as `--vh` for mobile browsers.
fn set_viewport_height(dom: &Dom) {
    let height = dom
        .window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    dom.set_css_var("--vh", &format!("{}px", height * 0.01));
}

/// Renders modal changes and starts loading the text they show.
fn modal_changed(dom: &Rc<Dom>, config: &Rc<WebConfig>, generation: &Rc<Cell<u64>>, event: &ModalStateChanged) {
    generation.set(generation.get().wrapping_add(1));
    let entry_url = render_modal(dom, event, &config.messages);

    let target = match event.modal {
        ModalState::Entry { .. } => entry_url.map(|url| (url, TextTarget::Entry)),
        ModalState::Info => {
            set_text(dom.info_text.as_ref(), &config.messages.loading);
            toggle_class(dom.info_indicator.as_ref(), "visible", false);
            Some((config.info_url.clone(), TextTarget::Info))
        }
        ModalState::Closed => None,
    };
    let Some((url, target)) = target else {
        return;
    };

    let dom = dom.clone();
    let config = config.clone();
    let generation = generation.clone();
    let expected = generation.get();
    spawn_local(async move {
        let fetched = fetch_text(&url).await;
        if generation.get() != expected {
            return;
        }
        let (container, scroller, indicator, error) = match target {
            TextTarget::Entry => (
                &dom.modal_text,
                &dom.modal_body,
                &dom.modal_indicator,
                &config.messages.entry_text_error,
            ),
            TextTarget::Info => (
                &dom.info_text,
                &dom.info_text,
                &dom.info_indicator,
                &config.messages.info_error,
            ),
        };
        match fetched {
            Ok(html) => {
                set_html(container.as_ref(), &html);
                let scroller = scroller.clone();
                let indicator = indicator.clone();
                let tolerance = config.viewer.scroll_tolerance_px;
                set_timeout(&dom.window, config.indicator_check_ms, move || {
                    update_indicator(scroller.as_ref(), indicator.as_ref(), tolerance);
                });
            }
            Err(err) => {
                tracing::warn!(%err, url, "modal text not loaded");
                set_text(container.as_ref(), error);
            }
        }
    });
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum TextTarget {
    Entry,
    Info,
}
