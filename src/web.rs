//! Browser entry points exported through `wasm-bindgen`.
//!
//! SYSTEM CONTEXT
//! ==============
//! `start` runs when the module is instantiated. It builds the page's manager
//! over `localStorage` and the `<html>` element's inline style, then defers
//! `initialize` to `DOMContentLoaded`. Page scripts call `changeTheme` from
//! the picker's change handler; this module never wires that listener.
//!
//! An optional `<script type="application/json" id="themeConfig">` element
//! supplies a [`ThemeConfig`] document. A malformed one is logged and the
//! default configuration is used instead.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::config::ThemeConfig;
use crate::error::BackendError;
use crate::manager::{DocumentState, ThemePreferenceManager};
use crate::picker::{ElementPicker, SelectorControl};
use crate::store::LocalStorageStore;
use crate::style::DocumentRootStyle;

const CONFIG_ELEMENT_ID: &str = "themeConfig";

type BrowserManager = ThemePreferenceManager<LocalStorageStore, DocumentRootStyle>;

thread_local! {
    static MANAGER: RefCell<Option<BrowserManager>> = const { RefCell::new(None) };
}

/// Render a thrown JS value for an error message.
pub(crate) fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

fn to_js(err: BackendError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("console logger already installed");
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Err(to_js(BackendError::Unavailable { backend: "document" }));
    };

    let config_text = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    let config = ThemeConfig::from_page_json(config_text.as_deref());
    let store = LocalStorageStore::open().map_err(to_js)?;
    let style = DocumentRootStyle::open().map_err(to_js)?;
    MANAGER.with(|slot| *slot.borrow_mut() = Some(ThemePreferenceManager::new(config, store, style)));

    let state = match document.ready_state().as_str() {
        "loading" => DocumentState::Loading,
        _ => DocumentState::Parsed,
    };
    if state.defers_initialize() {
        let on_ready = Closure::once_into_js(move |_event: web_sys::Event| initialize_page());
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        initialize_page();
    }
    Ok(())
}

/// Persist `color` as the theme preference and apply it.
#[wasm_bindgen(js_name = changeTheme)]
pub fn change_theme(color: &str) -> Result<(), JsValue> {
    with_manager(|manager| manager.change(color))?;
    Ok(())
}

/// Apply `color` without persisting it.
#[wasm_bindgen(js_name = applyTheme)]
pub fn apply_theme(color: &str) -> Result<(), JsValue> {
    with_manager(|manager| manager.apply(color))?;
    Ok(())
}

/// Recognized theme names in palette order, for building picker options.
#[wasm_bindgen(js_name = availableThemes)]
pub fn available_themes() -> Result<Vec<String>, JsValue> {
    with_manager(|manager| Ok(manager.config().palette.names().map(ToString::to_string).collect()))
}

/// The theme currently in effect, if the page has initialized.
#[wasm_bindgen(js_name = currentTheme)]
pub fn current_theme() -> Result<Option<String>, JsValue> {
    with_manager(|manager| Ok(manager.current().map(ToString::to_string)))
}

fn initialize_page() {
    MANAGER.with(|slot| {
        let mut slot = slot.borrow_mut();
        let Some(manager) = slot.as_mut() else {
            log::warn!("page ready before theme manager was built");
            return;
        };
        let mut picker = ElementPicker::find(&manager.config().picker_id);
        match manager.initialize(picker.as_mut().map(|p| p as &mut dyn SelectorControl)) {
            Ok(theme) => log::info!("theme {theme} applied"),
            Err(err) => log::error!("theme initialization failed: {err}"),
        }
    });
}

fn with_manager<R>(f: impl FnOnce(&mut BrowserManager) -> Result<R, BackendError>) -> Result<R, JsValue> {
    MANAGER.with(|slot| {
        let mut slot = slot.borrow_mut();
        let Some(manager) = slot.as_mut() else {
            return Err(JsValue::from_str("theme manager is not running"));
        };
        f(manager).map_err(to_js)
    })
}
