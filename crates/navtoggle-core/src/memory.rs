//! In-memory element backend
//!
//! Stands in for the browser DOM when driving the controller headless:
//! native tests, server-side previews, or any host without a document.

use crate::element::{ClickSource, ElementLookup, StateMarker};
use crate::error::{RegistrationError, ToggleError};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::rc::Rc;

type Listener = Box<dyn FnMut()>;

#[derive(Default)]
struct ElementInner {
    classes: RefCell<BTreeSet<String>>,
    attributes: RefCell<BTreeMap<String, String>>,
    listeners: RefCell<Vec<Listener>>,
}

/// Shared handle to an in-memory element. Clones point at the same element.
#[derive(Clone, Default)]
pub struct MemoryElement {
    inner: Rc<ElementInner>,
}

impl MemoryElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Element created with an initial set of classes
    pub fn with_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let element = Self::new();
        element
            .inner
            .classes
            .borrow_mut()
            .extend(classes.into_iter().map(Into::into));
        element
    }

    /// Dispatch a click to every registered listener, in registration order
    pub fn click(&self) {
        // Listeners registered during dispatch run from the next click on
        let mut running = std::mem::take(&mut *self.inner.listeners.borrow_mut());
        for listener in running.iter_mut() {
            listener();
        }
        let mut listeners = self.inner.listeners.borrow_mut();
        running.append(&mut listeners);
        *listeners = running;
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Sorted snapshot of the current classes
    pub fn classes(&self) -> Vec<String> {
        self.inner.classes.borrow().iter().cloned().collect()
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.inner.attributes.borrow().get(name).cloned()
    }

    /// True if both handles refer to the same element
    pub fn same_element(&self, other: &MemoryElement) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryElement")
            .field("classes", &self.inner.classes.borrow())
            .field("attributes", &self.inner.attributes.borrow())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl StateMarker for MemoryElement {
    fn has_marker(&self, name: &str) -> bool {
        self.inner.classes.borrow().contains(name)
    }

    fn add_marker(&self, name: &str) {
        self.inner.classes.borrow_mut().insert(name.to_string());
    }

    fn remove_marker(&self, name: &str) {
        self.inner.classes.borrow_mut().remove(name);
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.inner.attributes.borrow().contains_key(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.inner
            .attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }
}

impl ClickSource for MemoryElement {
    fn on_click(&self, handler: Box<dyn FnMut()>) -> Result<(), RegistrationError> {
        self.inner.listeners.borrow_mut().push(handler);
        Ok(())
    }
}

/// Document that resolves selectors from an explicit table
///
/// No CSS matching is performed: a selector finds exactly the elements
/// inserted under that selector string.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    elements: HashMap<String, Vec<MemoryElement>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a single element under `selector`
    pub fn insert_one(&mut self, selector: impl Into<String>, element: MemoryElement) -> &mut Self {
        self.elements
            .entry(selector.into())
            .or_default()
            .push(element);
        self
    }

    /// Register several elements under `selector`, keeping their order
    pub fn insert_all<I>(&mut self, selector: impl Into<String>, elements: I) -> &mut Self
    where
        I: IntoIterator<Item = MemoryElement>,
    {
        self.elements
            .entry(selector.into())
            .or_default()
            .extend(elements);
        self
    }

    fn check_selector(selector: &str) -> Result<(), ToggleError> {
        if selector.trim().is_empty() {
            return Err(ToggleError::InvalidSelector {
                selector: selector.to_string(),
                message: "empty selector".to_string(),
            });
        }
        Ok(())
    }
}

impl ElementLookup for MemoryDocument {
    type Element = MemoryElement;

    fn query_one(&self, selector: &str) -> Result<Option<MemoryElement>, ToggleError> {
        Self::check_selector(selector)?;
        Ok(self
            .elements
            .get(selector)
            .and_then(|elements| elements.first())
            .cloned())
    }

    fn query_all(&self, selector: &str) -> Result<Vec<MemoryElement>, ToggleError> {
        Self::check_selector(selector)?;
        Ok(self.elements.get(selector).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_clones_share_state() {
        let element = MemoryElement::with_classes(["hamburger"]);
        let handle = element.clone();
        handle.add_marker("active");
        assert!(element.has_marker("active"));
        assert_eq!(element.classes(), vec!["active", "hamburger"]);
        assert!(element.same_element(&handle));
        assert!(!element.same_element(&MemoryElement::new()));
    }

    #[test]
    fn test_click_runs_listeners_in_order() {
        let element = MemoryElement::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for id in 0..3 {
            let order = order.clone();
            element
                .on_click(Box::new(move || order.borrow_mut().push(id)))
                .unwrap();
        }
        element.click();
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
        assert_eq!(element.listener_count(), 3);
    }

    #[test]
    fn test_listener_may_mutate_its_own_element() {
        let element = MemoryElement::new();
        let handle = element.clone();
        element
            .on_click(Box::new(move || {
                handle.toggle_marker("active");
            }))
            .unwrap();
        element.click();
        assert!(element.has_marker("active"));
    }

    #[test]
    fn test_listener_registered_during_dispatch_runs_next_time() {
        let element = MemoryElement::new();
        let handle = element.clone();
        let hits = Rc::new(Cell::new(0));
        let hits_inner = hits.clone();
        element
            .on_click(Box::new(move || {
                let hits = hits_inner.clone();
                let _ = handle.on_click(Box::new(move || hits.set(hits.get() + 1)));
            }))
            .unwrap();

        element.click();
        assert_eq!(hits.get(), 0);
        assert_eq!(element.listener_count(), 2);

        element.click();
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_attributes() {
        let element = MemoryElement::new();
        assert_eq!(element.attribute("aria-expanded"), None);
        assert!(!element.has_attribute("aria-expanded"));
        element.set_attribute("aria-expanded", "true");
        assert!(element.has_attribute("aria-expanded"));
        assert_eq!(element.attribute("aria-expanded").as_deref(), Some("true"));
    }

    #[test]
    fn test_document_lookup() {
        let first = MemoryElement::new();
        let second = MemoryElement::new();
        let mut doc = MemoryDocument::new();
        doc.insert_one(".hamburger", first.clone())
            .insert_all(".nav-link", [first.clone(), second.clone()]);

        let found = doc.query_one(".hamburger").unwrap().unwrap();
        assert!(found.same_element(&first));
        assert!(doc.query_one(".nav-menu").unwrap().is_none());

        let links = doc.query_all(".nav-link").unwrap();
        assert_eq!(links.len(), 2);
        assert!(links[1].same_element(&second));
        assert!(doc.query_all(".missing").unwrap().is_empty());
    }

    #[test]
    fn test_empty_selector_is_invalid() {
        let doc = MemoryDocument::new();
        assert!(matches!(
            doc.query_one(""),
            Err(ToggleError::InvalidSelector { .. })
        ));
        assert!(doc.query_all("  ").is_err());
    }
}
