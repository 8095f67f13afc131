//! web-sys implementation of the element capabilities

use navtoggle_core::{ClickSource, ElementLookup, RegistrationError, StateMarker, ToggleError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Document, Element, Event};

/// Live DOM element handle. Clones refer to the same node.
#[derive(Debug, Clone, PartialEq)]
pub struct DomElement(Element);

impl DomElement {
    pub fn new(element: Element) -> Self {
        Self(element)
    }

    pub fn element(&self) -> &Element {
        &self.0
    }
}

impl From<Element> for DomElement {
    fn from(element: Element) -> Self {
        Self(element)
    }
}

impl StateMarker for DomElement {
    fn has_marker(&self, name: &str) -> bool {
        self.0.class_list().contains(name)
    }

    fn add_marker(&self, name: &str) {
        if let Err(e) = self.0.class_list().add_1(name) {
            leptos::logging::error!("Failed to add class '{}': {:?}", name, e);
        }
    }

    fn remove_marker(&self, name: &str) {
        if let Err(e) = self.0.class_list().remove_1(name) {
            leptos::logging::error!("Failed to remove class '{}': {:?}", name, e);
        }
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.0.has_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        if let Err(e) = self.0.set_attribute(name, value) {
            leptos::logging::error!("Failed to set attribute '{}': {:?}", name, e);
        }
    }
}

impl ClickSource for DomElement {
    fn on_click(&self, mut handler: Box<dyn FnMut()>) -> Result<(), RegistrationError> {
        let callback = Closure::wrap(Box::new(move |_: Event| handler()) as Box<dyn FnMut(_)>);

        self.0
            .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
            .map_err(|e| RegistrationError::new(js_message(&e)))?;

        // Listener lives for the page session
        callback.forget();
        Ok(())
    }
}

/// Document lookups through `querySelector` / `querySelectorAll`
#[derive(Debug, Clone)]
pub struct DomDocument(Document);

impl DomDocument {
    pub fn new(document: Document) -> Self {
        Self(document)
    }

    pub fn document(&self) -> &Document {
        &self.0
    }

    /// True while the parser is still building the document
    pub fn is_loading(&self) -> bool {
        is_loading_state(&self.0.ready_state())
    }

    /// Run `callback` once, when `DOMContentLoaded` fires
    pub fn on_content_loaded(&self, callback: Box<dyn FnMut()>) -> Result<(), ToggleError> {
        let mut callback = callback;
        let listener = Closure::wrap(Box::new(move |_: Event| callback()) as Box<dyn FnMut(_)>);

        let options = AddEventListenerOptions::new();
        options.set_once(true);

        self.0
            .add_event_listener_with_callback_and_add_event_listener_options(
                "DOMContentLoaded",
                listener.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|e| ToggleError::EventRegistration {
                event: "DOMContentLoaded".to_string(),
                message: js_message(&e),
            })?;

        listener.forget();
        Ok(())
    }
}

impl ElementLookup for DomDocument {
    type Element = DomElement;

    fn query_one(&self, selector: &str) -> Result<Option<DomElement>, ToggleError> {
        self.0
            .query_selector(selector)
            .map(|found| found.map(DomElement))
            .map_err(|e| invalid_selector(selector, &e))
    }

    fn query_all(&self, selector: &str) -> Result<Vec<DomElement>, ToggleError> {
        let nodes = self
            .0
            .query_selector_all(selector)
            .map_err(|e| invalid_selector(selector, &e))?;

        Ok((0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(DomElement)
            .collect())
    }
}

/// The current page's document
pub fn document() -> Result<DomDocument, ToggleError> {
    let window = web_sys::window().ok_or(ToggleError::NoDocument)?;
    let document = window.document().ok_or(ToggleError::NoDocument)?;
    Ok(DomDocument(document))
}

pub(crate) fn is_loading_state(ready_state: &str) -> bool {
    ready_state == "loading"
}

fn invalid_selector(selector: &str, error: &JsValue) -> ToggleError {
    ToggleError::InvalidSelector {
        selector: selector.to_string(),
        message: js_message(error),
    }
}

/// Best-effort text for a thrown JS value
fn js_message(error: &JsValue) -> String {
    error
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| error.as_string())
        .unwrap_or_else(|| format!("{:?}", error))
}
