//! navtoggle-web - Browser bindings for navtoggle
//!
//! Wires a static page's hamburger menu from WASM, or renders the menu
//! reactively with the [`components::NavBar`] Leptos component.
//!
//! ```js
//! import init, { initMenuOnReady } from "./navtoggle_web.js";
//! await init();
//! initMenuOnReady();
//! ```

pub mod components;
pub mod dom;

pub use components::{NavBar, NavLink};
pub use dom::{document, DomDocument, DomElement};

use navtoggle_core::{MenuConfig, MenuToggleController, ToggleError};
use wasm_bindgen::prelude::*;

/// Wire the menu now, using the default selectors.
#[wasm_bindgen(js_name = initMenu)]
pub fn init_menu() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    attach(MenuConfig::default()).map_err(to_js_error)
}

/// Wire the menu now, with a JSON `MenuConfig`.
#[wasm_bindgen(js_name = initMenuWithConfig)]
pub fn init_menu_with_config(config_json: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let config = MenuConfig::from_json(config_json).map_err(to_js_error)?;
    attach(config).map_err(to_js_error)
}

/// Wire the menu once the document is parsed.
///
/// Each entry point wires a page at most once; a repeated call fails with
/// `AlreadyInitialized` instead of stacking a second toggle handler.
///
/// Attaches immediately when parsing is already done. Otherwise waits for
/// `DOMContentLoaded`; errors after that point have no caller and go to
/// the console.
#[wasm_bindgen(js_name = initMenuOnReady)]
pub fn init_menu_on_ready(config_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let config = match config_json.as_deref() {
        Some(json) => MenuConfig::from_json(json).map_err(to_js_error)?,
        None => MenuConfig::default(),
    };

    let document = dom::document().map_err(to_js_error)?;
    if !document.is_loading() {
        return attach_to(&document, config).map_err(to_js_error);
    }

    let deferred = document.clone();
    document
        .on_content_loaded(Box::new(move || {
            if let Err(e) = attach_to(&deferred, config.clone()) {
                leptos::logging::error!("{}", error_message(&e));
            }
        }))
        .map_err(to_js_error)
}

fn attach(config: MenuConfig) -> Result<(), ToggleError> {
    let document = dom::document()?;
    attach_to(&document, config)
}

fn attach_to(document: &DomDocument, config: MenuConfig) -> Result<(), ToggleError> {
    let controller = MenuToggleController::attach(document, config)?;
    leptos::logging::log!(
        "navtoggle: menu wired ({} links, state {})",
        controller.link_count(),
        controller.state()
    );
    Ok(())
}

/// Error text with the fix hint appended, for the browser console
fn error_message(error: &ToggleError) -> String {
    match error.suggestion() {
        Some(hint) => format!("navtoggle: {} ({})", error, hint),
        None => format!("navtoggle: {}", error),
    }
}

fn to_js_error(error: ToggleError) -> JsValue {
    js_sys::Error::new(&error_message(&error)).into()
}
