//! Element capabilities the menu controller relies on
//!
//! A host UI type only has to carry a named boolean marker (a CSS class in
//! the browser) and accept click reactions. The controller never sees the
//! concrete type.

use crate::error::{RegistrationError, ToggleError};
use std::fmt;

/// Part an element plays in the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRole {
    /// Hamburger icon that opens and closes the menu
    Toggle,
    /// Collapsible panel holding the links
    Menu,
    /// Navigation entry inside the panel
    Link,
}

impl fmt::Display for ElementRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementRole::Toggle => write!(f, "toggle"),
            ElementRole::Menu => write!(f, "menu"),
            ElementRole::Link => write!(f, "link"),
        }
    }
}

/// Element with settable presence/absence markers
///
/// Handles are shared references into the host UI, so mutation goes
/// through `&self`.
pub trait StateMarker {
    fn has_marker(&self, name: &str) -> bool;

    fn add_marker(&self, name: &str);

    fn remove_marker(&self, name: &str);

    /// Flip the marker and return whether it is now present
    fn toggle_marker(&self, name: &str) -> bool {
        if self.has_marker(name) {
            self.remove_marker(name);
            false
        } else {
            self.add_marker(name);
            true
        }
    }

    fn has_attribute(&self, name: &str) -> bool;

    fn set_attribute(&self, name: &str, value: &str);
}

/// Element that can run a reaction when activated
pub trait ClickSource {
    /// Register `handler` for every future click on this element.
    /// Handlers live as long as the element; there is no removal.
    fn on_click(&self, handler: Box<dyn FnMut()>) -> Result<(), RegistrationError>;
}

/// Everything the controller needs from one element handle
pub trait MenuElement: StateMarker + ClickSource + Clone + 'static {}

impl<T> MenuElement for T where T: StateMarker + ClickSource + Clone + 'static {}

/// Selector-based lookup into the host document
pub trait ElementLookup {
    type Element: MenuElement;

    /// First element matching `selector`, if any
    fn query_one(&self, selector: &str) -> Result<Option<Self::Element>, ToggleError>;

    /// Every element matching `selector`, in document order
    fn query_all(&self, selector: &str) -> Result<Vec<Self::Element>, ToggleError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::BTreeSet;

    #[derive(Default)]
    struct Classes(RefCell<BTreeSet<String>>);

    impl StateMarker for Classes {
        fn has_marker(&self, name: &str) -> bool {
            self.0.borrow().contains(name)
        }

        fn add_marker(&self, name: &str) {
            self.0.borrow_mut().insert(name.to_string());
        }

        fn remove_marker(&self, name: &str) {
            self.0.borrow_mut().remove(name);
        }

        fn has_attribute(&self, _name: &str) -> bool {
            false
        }

        fn set_attribute(&self, _name: &str, _value: &str) {}
    }

    #[test]
    fn test_default_toggle_marker() {
        let classes = Classes::default();
        assert!(classes.toggle_marker("active"));
        assert!(classes.has_marker("active"));
        assert!(!classes.toggle_marker("active"));
        assert!(!classes.has_marker("active"));
    }

    #[test]
    fn test_toggle_marker_leaves_other_markers() {
        let classes = Classes::default();
        classes.add_marker("nav-menu");
        classes.toggle_marker("active");
        classes.toggle_marker("active");
        assert!(classes.has_marker("nav-menu"));
    }

    #[test]
    fn test_role_display() {
        assert_eq!(ElementRole::Toggle.to_string(), "toggle");
        assert_eq!(ElementRole::Menu.to_string(), "menu");
        assert_eq!(ElementRole::Link.to_string(), "link");
    }
}
