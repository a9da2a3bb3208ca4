//! Browser bindings: localStorage-backed store, DOM-backed surface, and the
//! page mount that wires them to a controller. `wasm32` only.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::controller::ThemeController;
use crate::error::{SetupError, StorageError};
use crate::store::PreferenceStore;
use crate::surface::ThemeSurface;

/// Id of the toggle control the surrounding page markup must supply.
pub const TOGGLE_ID: &str = "theme-toggle";

/// Preference store over `window.localStorage`. The storage handle is
/// fetched per operation; an environment without it (privacy mode, sandboxed
/// frame) degrades to reads of `None` and rejected writes.
#[derive(Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;
        storage.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| StorageError::WriteRejected(format!("{err:?}")))
    }
}

/// Theme surface over the body's classList and the toggle's text content.
pub struct DomSurface {
    body: HtmlElement,
    toggle: Element,
}

impl ThemeSurface for DomSurface {
    fn add_class(&self, class: &str) {
        let _ = self.body.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.body.class_list().remove_1(class);
    }

    fn set_toggle_text(&self, text: &str) {
        self.toggle.set_text_content(Some(text));
    }
}

/// Wire the controller into the page: locate the toggle control and the
/// body, attach the click handler, then restore and apply the persisted
/// theme. Call once the document's structural content is available.
///
/// A missing toggle or body is fatal: there is nothing to attach to.
pub fn mount() -> Result<(), SetupError> {
    let window = web_sys::window().ok_or(SetupError::NoWindow)?;
    let document = window.document().ok_or(SetupError::NoDocument)?;
    let toggle = document
        .get_element_by_id(TOGGLE_ID)
        .ok_or(SetupError::MissingToggle)?;
    let body = document.body().ok_or(SetupError::MissingBody)?;

    let surface = DomSurface {
        body,
        toggle: toggle.clone(),
    };
    let controller = Rc::new(RefCell::new(ThemeController::new(
        LocalStorageStore::new(),
        surface,
    )));

    let handler = {
        let controller = Rc::clone(&controller);
        Closure::<dyn FnMut()>::new(move || controller.borrow_mut().handle_click())
    };
    toggle
        .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
        .map_err(|err| SetupError::AttachHandler(format!("{err:?}")))?;
    // The handler lives for the page's lifetime.
    handler.forget();

    controller.borrow_mut().init();
    Ok(())
}

/// JS-visible entry point for pages that load the module directly.
#[wasm_bindgen(js_name = "mountThemeToggle")]
pub fn mount_theme_toggle() -> Result<(), JsValue> {
    mount().map_err(|err| JsValue::from_str(&err.to_string()))
}
