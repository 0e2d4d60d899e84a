//! Browser front end of the tour viewer.
//!
//! The page calls [`init`] once the DOM is ready. All state lives in one
//! [`App`] held by the module until [`teardown`].

use std::cell::RefCell;

use console_error_panic_hook::set_once;
use pan::PanConfig;
use wasm_bindgen::prelude::*;

mod app;
mod config;
mod dom;
mod fetch;
mod input;
mod logging;
mod render;

use app::App;
pub use config::{UiMessages, WebConfig};

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// Runs `f` on the live app.
///
/// Returns `None` before `init`, after `teardown`, or when called re-entrantly
/// from inside another app callback.
fn with_app<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut App) -> R,
{
    APP.try_with(|cell| {
        let mut slot = cell.try_borrow_mut().ok()?;
        slot.as_mut().map(f)
    })
    .ok()
    .flatten()
}

fn not_ready() -> JsValue {
    JsValue::from_str("viewer not initialized")
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    set_once();
    Ok(())
}

/// Looks up the page, registers listeners and fetches the tour description.
///
/// `config_json` may override any [`WebConfig`] field. Calling `init` again
/// replaces the previous instance.
#[wasm_bindgen]
pub fn init(config_json: Option<String>) -> Result<(), JsValue> {
    let config = WebConfig::from_json(config_json.as_deref())
        .map_err(|e| JsValue::from_str(&format!("invalid viewer config: {e}")))?;
    logging::init_logging(&config.log);
    teardown();

    let dom = dom::Dom::lookup().ok_or_else(|| JsValue::from_str("no document"))?;
    if !dom.can_pan() {
        tracing::warn!("pan targets missing; panning disabled");
    }
    let mut app = App::new(dom, config);
    app.wire();

    APP.with(|cell| -> Result<(), JsValue> {
        let mut slot = cell.try_borrow_mut().map_err(|_| not_ready())?;
        *slot = Some(app);
        Ok(())
    })?;
    with_app(|app| app.load_tour());
    tracing::info!("viewer initialized");
    Ok(())
}

/// Removes every listener and drops all viewer state.
#[wasm_bindgen]
pub fn teardown() {
    let previous = APP
        .try_with(|cell| cell.try_borrow_mut().ok().and_then(|mut slot| slot.take()))
        .ok()
        .flatten();
    if previous.is_some() {
        drop(previous);
        tracing::debug!("viewer torn down");
    }
}

/// Switches to the scene `key` (fade, image swap, markers).
#[wasm_bindgen]
pub fn load_scene(key: &str) -> Result<(), JsValue> {
    with_app(|app| app.load_scene(key))
        .ok_or_else(not_ready)?
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Current horizontal content offset in px.
#[wasm_bindgen]
pub fn pan_offset() -> f64 {
    with_app(|app| app.viewer.pan().offset()).unwrap_or(0.0)
}

/// Re-measures viewport and image, clamps and renders. Returns the offset.
#[wasm_bindgen]
pub fn update_bounds() -> f64 {
    with_app(|app| app.update_bounds()).unwrap_or(0.0)
}

// ── Pan configuration WASM exports ──────────────────────────────────────────

/// Pan config as a JSON string.
#[wasm_bindgen]
pub fn get_pan_config() -> String {
    let config = with_app(|app| *app.viewer.pan().config()).unwrap_or_default();
    serde_json::to_string(&config).unwrap_or_default()
}

/// Updates one pan config field by key; values are clamped to safe ranges.
#[wasm_bindgen]
pub fn set_pan_config(key: &str, value: f64) -> Result<(), JsValue> {
    with_app(|app| {
        let mut config = *app.viewer.pan().config();
        if !config.set_field(key, value) {
            return Err(JsValue::from_str(&format!("unknown pan config key '{key}'")));
        }
        app.viewer.set_pan_config(config);
        Ok(())
    })
    .ok_or_else(not_ready)?
}

/// Restores the pan config given at `init`, or the defaults.
#[wasm_bindgen]
pub fn reset_pan_config() -> Result<(), JsValue> {
    with_app(|app| {
        let initial = app.config.viewer.pan;
        app.viewer.set_pan_config(initial);
    })
    .ok_or_else(not_ready)
}

/// Pan config defaults, for settings UIs.
#[wasm_bindgen]
pub fn default_pan_config() -> String {
    serde_json::to_string(&PanConfig::default()).unwrap_or_default()
}
