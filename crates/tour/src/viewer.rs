use formats::{EntrySpec, SceneSpec, TourDataError, TourManifest};
use pan::{PanConfig, PanController, PointerDown, PointerSample, PointerTarget};
use runtime::{AnimationTicket, DelayToken, ObserverId, Observers, StepOutcome};

use crate::config::ViewerConfig;
use crate::floors::{FloorDirection, FloorNav};
use crate::hotspot::{HotspotGroup, HotspotReaction};
use crate::panels::{ModalState, Panels};
use crate::swipe::SwipeTracker;
use crate::text::{ScrollMetrics, render_hotspot_count};

#[derive(Debug, Clone, PartialEq)]
pub enum ViewerError {
    NoTour,
    UnknownScene(String),
    UnknownHotspot(usize),
    UnknownEntry { hotspot: usize, entry: usize },
    Data(TourDataError),
}

impl std::fmt::Display for ViewerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewerError::NoTour => write!(f, "no tour loaded"),
            ViewerError::UnknownScene(key) => write!(f, "unknown scene '{key}'"),
            ViewerError::UnknownHotspot(i) => write!(f, "unknown hotspot #{i}"),
            ViewerError::UnknownEntry { hotspot, entry } => {
                write!(f, "hotspot #{hotspot} has no entry #{entry}")
            }
            ViewerError::Data(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ViewerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ViewerError::Data(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TourDataError> for ViewerError {
    fn from(e: TourDataError) -> Self {
        ViewerError::Data(e)
    }
}

/// Side panel contents for the active scene.
#[derive(Debug, Clone, PartialEq)]
pub enum SidePanelView {
    /// Title plus the URL of the HTML body to fetch.
    Content { title: String, text_file: String },
    /// The scene has no side panel text.
    Fallback,
}

/// Emitted after a scene became active.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneChanged {
    pub key: String,
    pub image: String,
    pub hotspot_entry_count: usize,
    pub floors: FloorNav,
    pub sidepanel: SidePanelView,
}

/// Emitted whenever a modal opens or closes.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalStateChanged {
    pub modal: ModalState,
    /// The entry shown when `modal` is [`ModalState::Entry`].
    pub entry: Option<EntrySpec>,
    pub sidepanel_open: bool,
}

/// Result of releasing the pointer over the scene.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Release {
    /// Pan animation to drive with [`Viewer::tick`].
    pub animation: Option<AnimationTicket>,
    /// A floor swipe was recognized.
    pub swipe: Option<FloorDirection>,
}

/// The whole viewer state for one page.
#[derive(Debug)]
pub struct Viewer {
    config: ViewerConfig,
    tour: Option<TourManifest>,
    current: Option<String>,
    pan: PanController,
    hotspots: Vec<HotspotGroup>,
    /// Markers only take input once the scene image they sit on is loaded.
    markers_live: bool,
    floors: FloorNav,
    panels: Panels,
    swipe: SwipeTracker,
    scene_observers: Observers<SceneChanged>,
    modal_observers: Observers<ModalStateChanged>,
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

impl Viewer {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            pan: PanController::new(config.pan),
            config,
            tour: None,
            current: None,
            hotspots: Vec::new(),
            markers_live: false,
            floors: FloorNav::default(),
            panels: Panels::default(),
            swipe: SwipeTracker::default(),
            scene_observers: Observers::new(),
            modal_observers: Observers::new(),
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn set_pan_config(&mut self, pan: PanConfig) {
        self.pan.set_config(pan);
        self.config.pan = *self.pan.config();
    }

    pub fn pan(&self) -> &PanController {
        &self.pan
    }

    pub fn on_scene_change(&mut self, callback: impl FnMut(&SceneChanged) + 'static) -> ObserverId {
        self.scene_observers.subscribe(callback)
    }

    pub fn on_modal_change(
        &mut self,
        callback: impl FnMut(&ModalStateChanged) + 'static,
    ) -> ObserverId {
        self.modal_observers.subscribe(callback)
    }

    pub fn remove_scene_observer(&mut self, id: ObserverId) -> bool {
        self.scene_observers.unsubscribe(id)
    }

    pub fn remove_modal_observer(&mut self, id: ObserverId) -> bool {
        self.modal_observers.unsubscribe(id)
    }

    // --- Tour and scenes ---

    /// Installs a tour description and activates its default scene.
    pub fn load_tour(&mut self, tour: TourManifest) -> Result<SceneChanged, ViewerError> {
        tour.validate()?;
        let default_scene = tour.default_scene().to_string();
        self.tour = Some(tour);
        self.current = None;
        self.load_scene(&default_scene)
    }

    pub fn tour(&self) -> Option<&TourManifest> {
        self.tour.as_ref()
    }

    pub fn current_key(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn current_scene(&self) -> Option<&SceneSpec> {
        self.tour.as_ref()?.scene(self.current.as_deref()?)
    }

    /// Makes `key` the active scene.
    ///
    /// Unknown keys leave the viewer untouched. Otherwise the pan offset is
    /// reset, markers and floor arrows are rebuilt, and scene observers run in
    /// registration order.
    pub fn load_scene(&mut self, key: &str) -> Result<SceneChanged, ViewerError> {
        let tour = self.tour.as_ref().ok_or(ViewerError::NoTour)?;
        let scene = tour
            .scene(key)
            .ok_or_else(|| ViewerError::UnknownScene(key.to_string()))?;

        let event = SceneChanged {
            key: key.to_string(),
            image: scene.image.clone(),
            hotspot_entry_count: scene.hotspot_entry_count(),
            floors: FloorNav::for_scene(tour, key),
            sidepanel: match &scene.sidepanel_content {
                Some(content) => SidePanelView::Content {
                    title: content.title.clone(),
                    text_file: content.text_file.clone(),
                },
                None => SidePanelView::Fallback,
            },
        };
        self.hotspots = scene.hotspots.iter().map(HotspotGroup::new).collect();
        self.markers_live = false;

        self.pan.reset();
        self.swipe.cancel();
        self.floors = event.floors.clone();
        self.current = Some(key.to_string());

        tracing::debug!(
            scene = key,
            hotspots = self.hotspots.len(),
            entries = event.hotspot_entry_count,
            floor = self.floors.is_visible(),
            "scene loaded"
        );
        self.scene_observers.notify(&event);
        Ok(event)
    }

    /// Scene picked from the navigation menu; closes the menu.
    pub fn select_scene(&mut self, key: &str) -> Result<SceneChanged, ViewerError> {
        self.panels.close_dropdown();
        self.load_scene(key)
    }

    pub fn floors(&self) -> &FloorNav {
        &self.floors
    }

    /// Moves one floor. `Ok(None)` at either end of the group.
    pub fn navigate_floor(
        &mut self,
        direction: FloorDirection,
    ) -> Result<Option<SceneChanged>, ViewerError> {
        let Some(key) = self.floors.adjacent(direction).map(str::to_string) else {
            return Ok(None);
        };
        self.load_scene(&key).map(Some)
    }

    /// Sum of entries over the active scene's hotspots.
    pub fn hotspot_entry_count(&self) -> usize {
        self.current_scene().map_or(0, SceneSpec::hotspot_entry_count)
    }

    /// Side panel HTML with the entry count substituted.
    pub fn render_sidepanel_html(&self, html: &str) -> String {
        render_hotspot_count(html, self.hotspot_entry_count())
    }

    pub fn scroll_indicator_visible(&self, metrics: &ScrollMetrics) -> bool {
        metrics.indicator_visible(self.config.scroll_tolerance_px)
    }

    // --- Panning ---

    /// The scene image finished loading: measure and center it. Hotspots of
    /// the scene accept input from here on.
    pub fn content_loaded(&mut self, viewport_width: f64, content_width: f64) -> f64 {
        self.markers_live = self.current.is_some();
        self.pan.content_loaded(viewport_width, content_width)
    }

    pub fn resize(&mut self, viewport_width: f64, content_width: f64) -> f64 {
        self.pan.measure(viewport_width, content_width)
    }

    pub fn pointer_down(&mut self, down: PointerDown) -> bool {
        if self.floors.is_visible() && down.is_touch() && down.target == PointerTarget::Surface {
            self.swipe.begin(down.sample);
        } else {
            self.swipe.cancel();
        }
        self.pan.pointer_down(down)
    }

    pub fn pointer_move(&mut self, sample: PointerSample) -> Option<f64> {
        self.pan.pointer_move(sample)
    }

    pub fn pointer_up(&mut self, sample: PointerSample) -> Release {
        Release {
            animation: self.pan.pointer_up(),
            swipe: self.swipe.end(sample, &self.config.swipe),
        }
    }

    pub fn pointer_cancel(&mut self) -> Option<AnimationTicket> {
        self.swipe.cancel();
        self.pan.pointer_cancel()
    }

    pub fn tick(&mut self, ticket: AnimationTicket, now_ms: f64) -> StepOutcome {
        self.pan.tick(ticket, now_ms)
    }

    // --- Hotspots ---

    pub fn hotspots(&self) -> &[HotspotGroup] {
        &self.hotspots
    }

    pub fn hotspot(&self, index: usize) -> Option<&HotspotGroup> {
        self.hotspots.get(index)
    }

    /// Taps before the scene content is loaded hit markers of the previous
    /// scene and are ignored.
    pub fn tap_hotspot(&mut self, index: usize, now_ms: f64) -> Result<HotspotReaction, ViewerError> {
        if !self.markers_live {
            return Ok(HotspotReaction::Ignored);
        }
        let config = self.config.hotspots;
        let reaction = self.group_mut(index)?.tap_base(now_ms, &config);
        self.follow_reaction(index, reaction)
    }

    pub fn tap_hotspot_child(
        &mut self,
        index: usize,
        entry: usize,
    ) -> Result<HotspotReaction, ViewerError> {
        if !self.markers_live {
            return Ok(HotspotReaction::Ignored);
        }
        let reaction = self.group_mut(index)?.tap_child(entry);
        self.follow_reaction(index, reaction)
    }

    pub fn hover_hotspot(&mut self, index: usize, now_ms: f64) -> Result<HotspotReaction, ViewerError> {
        if !self.markers_live {
            return Ok(HotspotReaction::Ignored);
        }
        let config = self.config.hotspots;
        Ok(self.group_mut(index)?.pointer_enter(now_ms, &config))
    }

    pub fn leave_hotspot(&mut self, index: usize) -> Result<HotspotReaction, ViewerError> {
        let config = self.config.hotspots;
        Ok(self.group_mut(index)?.pointer_leave(&config))
    }

    /// Forwards an idle-collapse timer. Returns `true` if the fan closed.
    pub fn collapse_hotspot(
        &mut self,
        index: usize,
        token: DelayToken,
        now_ms: f64,
    ) -> Result<bool, ViewerError> {
        Ok(self.group_mut(index)?.collapse_due(token, now_ms))
    }

    fn group_mut(&mut self, index: usize) -> Result<&mut HotspotGroup, ViewerError> {
        self.hotspots
            .get_mut(index)
            .ok_or(ViewerError::UnknownHotspot(index))
    }

    fn follow_reaction(
        &mut self,
        index: usize,
        reaction: HotspotReaction,
    ) -> Result<HotspotReaction, ViewerError> {
        if let HotspotReaction::OpenEntry(entry) = reaction {
            self.open_entry(index, entry)?;
        }
        Ok(reaction)
    }

    // --- Panels ---

    pub fn panels(&self) -> &Panels {
        &self.panels
    }

    pub fn entry(&self, hotspot: usize, entry: usize) -> Result<&EntrySpec, ViewerError> {
        let scene = self.current_scene().ok_or(ViewerError::NoTour)?;
        let spot = scene
            .hotspots
            .get(hotspot)
            .ok_or(ViewerError::UnknownHotspot(hotspot))?;
        spot.entries
            .get(entry)
            .ok_or(ViewerError::UnknownEntry { hotspot, entry })
    }

    /// Opens the detail view for one entry of the active scene.
    pub fn open_entry(&mut self, hotspot: usize, entry: usize) -> Result<(), ViewerError> {
        let spec = self.entry(hotspot, entry)?.clone();
        self.panels.open_modal(ModalState::Entry { hotspot, entry });
        self.notify_modal(Some(spec));
        Ok(())
    }

    pub fn open_info(&mut self) {
        self.panels.open_modal(ModalState::Info);
        self.notify_modal(None);
    }

    pub fn close_modal(&mut self) -> bool {
        let was_open = self.panels.close_modal();
        if was_open {
            self.notify_modal(None);
        }
        was_open
    }

    pub fn toggle_sidepanel(&mut self) -> bool {
        self.panels.toggle_sidepanel()
    }

    pub fn close_sidepanel(&mut self) -> bool {
        self.panels.close_sidepanel()
    }

    pub fn toggle_dropdown(&mut self) -> bool {
        self.panels.toggle_dropdown()
    }

    pub fn close_dropdown(&mut self) -> bool {
        self.panels.close_dropdown()
    }

    fn notify_modal(&mut self, entry: Option<EntrySpec>) {
        let event = ModalStateChanged {
            modal: self.panels.modal(),
            entry,
            sidepanel_open: self.panels.is_sidepanel_open(),
        };
        tracing::debug!(modal = ?event.modal, "modal state changed");
        self.modal_observers.notify(&event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HotspotConfig;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    const TOUR: &str = r#"{
        "meta": { "defaultScene": "hall" },
        "scenes": {
            "hall": {
                "image": "img/hall.jpg",
                "hotspots": [
                    { "position": { "x": 20, "y": 40 },
                      "entries": [ { "label": "Fresco", "author": "A. Painter",
                                     "text": "texts/fresco.html", "pdf": "pdf/fresco.pdf" } ] },
                    { "position": { "x": 70, "y": 55 },
                      "entries": [ { "label": "Bust" }, { "label": "Plinth" }, { "label": "Coin" } ] }
                ],
                "sidepanelContent": { "title": "Main hall", "textFile": "texts/hall.html" }
            },
            "first":  { "image": "img/1.jpg", "floorGroup": "upper_floors", "floorOrder": 1 },
            "second": { "image": "img/2.jpg", "floorGroup": "upper_floors", "floorOrder": 2 }
        }
    }"#;

    fn loaded() -> Viewer {
        let mut v = Viewer::default();
        v.load_tour(TourManifest::from_json_str(TOUR).unwrap()).unwrap();
        v
    }

    /// A loaded tour whose default scene image is on screen.
    fn shown() -> Viewer {
        let mut v = loaded();
        v.content_loaded(800.0, 1600.0);
        v
    }

    fn touch(x: f64, y: f64, t: f64) -> PointerDown {
        PointerDown::touch(PointerSample::new(x, y, t), PointerTarget::Surface)
    }

    #[test]
    fn load_tour_activates_default_scene() {
        let v = loaded();
        assert_eq!(v.current_key(), Some("hall"));
        assert_eq!(v.hotspots().len(), 2);
        assert_eq!(v.hotspot_entry_count(), 4);
        assert!(!v.floors().is_visible());
    }

    #[test]
    fn scenes_without_a_tour_are_rejected() {
        let mut v = Viewer::default();
        assert_eq!(v.load_scene("hall"), Err(ViewerError::NoTour));
    }

    #[test]
    fn unknown_scene_leaves_state_untouched() {
        let mut v = loaded();
        let calls = Rc::new(RefCell::new(0));
        let seen = calls.clone();
        v.on_scene_change(move |_| *seen.borrow_mut() += 1);

        let err = v.load_scene("roof").unwrap_err();
        assert_eq!(err, ViewerError::UnknownScene("roof".to_string()));
        assert_eq!(err.to_string(), "unknown scene 'roof'");
        assert_eq!(v.current_key(), Some("hall"));
        assert_eq!(v.hotspots().len(), 2);
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn scene_observers_run_in_registration_order() {
        let mut v = loaded();
        let log = Rc::new(RefCell::new(Vec::new()));
        for name in ["first", "second", "third"] {
            let log = log.clone();
            v.on_scene_change(move |e: &SceneChanged| log.borrow_mut().push(format!("{name}:{}", e.key)));
        }

        let event = v.load_scene("second").unwrap();
        assert_eq!(
            *log.borrow(),
            vec!["first:second", "second:second", "third:second"]
        );
        assert_eq!(event.image, "img/2.jpg");
        assert_eq!(event.sidepanel, SidePanelView::Fallback);
        assert_eq!(event.hotspot_entry_count, 0);
        assert!(event.floors.is_visible());
    }

    #[test]
    fn removed_observer_is_not_called() {
        let mut v = loaded();
        let calls = Rc::new(RefCell::new(0));
        let seen = calls.clone();
        let id = v.on_scene_change(move |_| *seen.borrow_mut() += 1);
        assert!(v.remove_scene_observer(id));
        assert!(!v.remove_scene_observer(id));
        v.load_scene("first").unwrap();
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn scene_change_resets_pan() {
        let mut v = loaded();
        assert_eq!(v.content_loaded(800.0, 1600.0), -400.0);
        v.pointer_down(touch(0.0, 0.0, 0.0));
        v.pointer_move(PointerSample::new(-100.0, 0.0, 2000.0));
        assert_eq!(v.pan().offset(), -500.0);

        v.load_scene("first").unwrap();
        assert_eq!(v.pan().offset(), 0.0);
        assert!(!v.pan().is_dragging());
    }

    #[test]
    fn sidepanel_template_uses_entry_count() {
        let v = loaded();
        assert_eq!(
            v.render_sidepanel_html("<p>{{hotspotCount}} points</p>"),
            "<p>4 points</p>"
        );
        match &v.current_scene().unwrap().sidepanel_content {
            Some(content) => assert_eq!(content.text_file, "texts/hall.html"),
            None => panic!("hall has side panel content"),
        }
    }

    #[test]
    fn single_entry_hotspot_opens_modal_and_closes_side_panel() {
        let mut v = shown();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        v.on_modal_change(move |e: &ModalStateChanged| sink.borrow_mut().push(e.clone()));

        assert!(v.toggle_sidepanel());
        assert_eq!(v.tap_hotspot(0, 0.0).unwrap(), HotspotReaction::OpenEntry(0));

        let events = events.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].modal, ModalState::Entry { hotspot: 0, entry: 0 });
        assert!(!events[0].sidepanel_open);
        let entry = events[0].entry.as_ref().unwrap();
        assert_eq!(entry.display_title(), "Fresco");
        assert_eq!(entry.pdf.as_deref(), Some("pdf/fresco.pdf"));
    }

    #[test]
    fn multi_entry_hotspot_fans_out_then_child_opens_entry() {
        let mut v = shown();
        let reaction = v.tap_hotspot(1, 0.0).unwrap();
        assert!(matches!(reaction, HotspotReaction::Expanded { collapse: Some(_) }));
        assert_eq!(v.panels().modal(), ModalState::Closed);
        assert_eq!(v.hotspot(1).unwrap().child_offsets(&HotspotConfig::default()).len(), 3);

        assert_eq!(v.tap_hotspot_child(1, 2).unwrap(), HotspotReaction::OpenEntry(2));
        assert_eq!(v.panels().modal(), ModalState::Entry { hotspot: 1, entry: 2 });
        assert!(!v.hotspot(1).unwrap().is_expanded());
        assert_eq!(v.entry(1, 2).unwrap().label, "Coin");
    }

    #[test]
    fn idle_timer_collapses_fan() {
        let mut v = shown();
        let HotspotReaction::Expanded { collapse: Some(c) } = v.tap_hotspot(1, 100.0).unwrap() else {
            panic!("expected fan to open");
        };
        assert!(v.collapse_hotspot(1, c.token, 100.0 + c.delay_ms).unwrap());
        assert!(!v.hotspot(1).unwrap().is_expanded());
    }

    #[test]
    fn markers_of_the_previous_scene_are_inert_until_the_image_loads() {
        let mut v = shown();
        v.load_scene("first").unwrap();
        assert!(v.hotspots().is_empty());
        assert_eq!(v.tap_hotspot(1, 0.0), Ok(HotspotReaction::Ignored));
        assert_eq!(v.tap_hotspot_child(1, 2), Ok(HotspotReaction::Ignored));
        assert_eq!(v.panels().modal(), ModalState::Closed);

        v.load_scene("hall").unwrap();
        assert_eq!(v.tap_hotspot(0, 0.0), Ok(HotspotReaction::Ignored));
        v.content_loaded(800.0, 1600.0);
        assert_eq!(v.tap_hotspot(0, 0.0), Ok(HotspotReaction::OpenEntry(0)));
    }

    #[test]
    fn unknown_hotspot_or_entry_is_an_error() {
        let mut v = shown();
        assert_eq!(v.tap_hotspot(9, 0.0), Err(ViewerError::UnknownHotspot(9)));
        assert_eq!(
            v.open_entry(1, 5),
            Err(ViewerError::UnknownEntry { hotspot: 1, entry: 5 })
        );
        assert_eq!(v.panels().modal(), ModalState::Closed);
    }

    #[test]
    fn info_modal_and_close_notify_observers() {
        let mut v = loaded();
        let states = Rc::new(RefCell::new(Vec::new()));
        let sink = states.clone();
        v.on_modal_change(move |e: &ModalStateChanged| sink.borrow_mut().push(e.modal));

        v.open_info();
        assert!(v.close_modal());
        assert!(!v.close_modal());
        assert_eq!(*states.borrow(), vec![ModalState::Info, ModalState::Closed]);
    }

    #[test]
    fn dropdown_selection_closes_menu() {
        let mut v = loaded();
        assert!(v.toggle_dropdown());
        v.select_scene("first").unwrap();
        assert!(!v.panels().is_dropdown_open());
        assert_eq!(v.current_key(), Some("first"));
    }

    #[test]
    fn floor_navigation_walks_the_group() {
        let mut v = loaded();
        v.load_scene("first").unwrap();
        assert!(v.floors().can_go_up());
        assert!(!v.floors().can_go_down());

        let up = v.navigate_floor(FloorDirection::Up).unwrap().unwrap();
        assert_eq!(up.key, "second");
        assert_eq!(v.navigate_floor(FloorDirection::Up).unwrap(), None);
        assert_eq!(v.current_key(), Some("second"));
    }

    #[test]
    fn vertical_swipe_on_floor_scene_reports_direction() {
        let mut v = loaded();
        v.load_scene("first").unwrap();
        v.content_loaded(800.0, 1600.0);

        v.pointer_down(touch(200.0, 500.0, 0.0));
        v.pointer_move(PointerSample::new(202.0, 420.0, 100.0));
        let release = v.pointer_up(PointerSample::new(203.0, 380.0, 150.0));
        assert_eq!(release.swipe, Some(FloorDirection::Up));
    }

    #[test]
    fn mouse_drag_never_changes_floor() {
        let mut v = loaded();
        v.load_scene("first").unwrap();
        v.content_loaded(800.0, 1600.0);

        let press = PointerSample::new(200.0, 500.0, 0.0);
        assert!(v.pointer_down(PointerDown::mouse(press, PointerTarget::Surface, 0)));
        let release = v.pointer_up(PointerSample::new(202.0, 400.0, 120.0));
        assert_eq!(release.swipe, None);
    }

    #[test]
    fn swipe_is_ignored_outside_floor_scenes() {
        let mut v = loaded();
        v.content_loaded(800.0, 1600.0);
        v.pointer_down(touch(200.0, 500.0, 0.0));
        let release = v.pointer_up(PointerSample::new(200.0, 300.0, 100.0));
        assert_eq!(release.swipe, None);
        assert_eq!(release.animation, None);
    }

    #[test]
    fn pan_config_updates_are_sanitized() {
        let mut v = loaded();
        let mut pan = PanConfig::default();
        pan.deceleration = 3.0;
        v.set_pan_config(pan);
        assert_eq!(v.config().pan.deceleration, 0.995);
        assert_eq!(v.pan().config().deceleration, 0.995);
    }
}
