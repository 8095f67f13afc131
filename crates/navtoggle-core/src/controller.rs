//! Menu toggle controller
//!
//! Binds the toggle control, the menu panel and the link items together.
//! The toggle flips the active marker on both elements; a link click
//! clears it on both.

use crate::config::MenuConfig;
use crate::element::{ElementLookup, ElementRole, MenuElement};
use crate::error::ToggleError;
use crate::state::MenuState;
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Set on the toggle control once its handler is registered
pub const WIRED_ATTRIBUTE: &str = "data-navtoggle-wired";

/// Shared between the controller and every registered handler
struct Bindings<E> {
    toggle: E,
    menu: E,
    config: MenuConfig,
}

impl<E: MenuElement> Bindings<E> {
    fn toggle(&self) {
        let class = self.config.active_class.as_str();
        // Each element flips on its own; the menu does not copy the toggle
        let toggle_open = self.toggle.toggle_marker(class);
        let menu_open = self.menu.toggle_marker(class);
        let state = MenuState::from_marker(toggle_open);
        self.sync_aria(state);
        debug!(%state, toggle_open, menu_open, "menu toggled");
    }

    fn close(&self) {
        let class = self.config.active_class.as_str();
        self.toggle.remove_marker(class);
        self.menu.remove_marker(class);
        self.sync_aria(MenuState::Closed);
        debug!("menu closed by link");
    }

    fn sync_aria(&self, state: MenuState) {
        if self.config.sync_aria_expanded {
            self.toggle
                .set_attribute("aria-expanded", state.aria_expanded());
        }
    }
}

/// Handle to a wired-up menu
///
/// Dropping the controller does not unregister anything: the handlers
/// live as long as the elements they were attached to.
pub struct MenuToggleController<E: MenuElement> {
    bindings: Rc<Bindings<E>>,
    links: Vec<E>,
}

impl<E: MenuElement> MenuToggleController<E> {
    /// Wire the menu from element handles the caller already looked up.
    ///
    /// Fails when the toggle or the menu is absent, or when the toggle is
    /// already wired. An empty link set is fine: the close-on-link
    /// behavior is then never triggered.
    pub fn init<I>(
        toggle: Option<E>,
        menu: Option<E>,
        links: I,
        config: MenuConfig,
    ) -> Result<Self, ToggleError>
    where
        I: IntoIterator<Item = E>,
    {
        let toggle = toggle.ok_or(ToggleError::MissingElement {
            role: ElementRole::Toggle,
            selector: None,
        })?;
        let menu = menu.ok_or(ToggleError::MissingElement {
            role: ElementRole::Menu,
            selector: None,
        })?;
        config.validate()?;

        Self::init_validated(toggle, menu, links.into_iter().collect(), config)
    }

    /// Look up the three element sets through `lookup`, then wire them.
    pub fn attach<L>(lookup: &L, config: MenuConfig) -> Result<Self, ToggleError>
    where
        L: ElementLookup<Element = E>,
    {
        config.validate()?;

        let toggle = lookup
            .query_one(&config.toggle_selector)?
            .ok_or_else(|| ToggleError::MissingElement {
                role: ElementRole::Toggle,
                selector: Some(config.toggle_selector.clone()),
            })?;
        let menu = lookup
            .query_one(&config.menu_selector)?
            .ok_or_else(|| ToggleError::MissingElement {
                role: ElementRole::Menu,
                selector: Some(config.menu_selector.clone()),
            })?;
        let links = lookup.query_all(&config.link_selector)?;

        Self::init_validated(toggle, menu, links, config)
    }

    fn init_validated(
        toggle: E,
        menu: E,
        links: Vec<E>,
        config: MenuConfig,
    ) -> Result<Self, ToggleError> {
        if toggle.has_attribute(WIRED_ATTRIBUTE) {
            return Err(ToggleError::AlreadyInitialized {
                role: ElementRole::Toggle,
            });
        }

        let bindings = Rc::new(Bindings {
            toggle,
            menu,
            config,
        });

        // Links first: a failure here leaves no way to open the menu
        for link in &links {
            let on_link = Rc::clone(&bindings);
            link.on_click(Box::new(move || on_link.close()))
                .map_err(|e| ToggleError::ListenerRegistration {
                    role: ElementRole::Link,
                    message: e.message,
                })?;
        }

        let on_toggle = Rc::clone(&bindings);
        bindings
            .toggle
            .on_click(Box::new(move || on_toggle.toggle()))
            .map_err(|e| ToggleError::ListenerRegistration {
                role: ElementRole::Toggle,
                message: e.message,
            })?;
        bindings.toggle.set_attribute(WIRED_ATTRIBUTE, "");

        if links.is_empty() {
            warn!("menu has no link items; close-on-link is inactive");
        }
        info!(links = links.len(), "menu toggle wired");

        Ok(Self { bindings, links })
    }

    /// Current state, read from the toggle control's marker
    pub fn state(&self) -> MenuState {
        MenuState::from_marker(
            self.bindings
                .toggle
                .has_marker(&self.bindings.config.active_class),
        )
    }

    /// True when toggle and menu carry the same marker value
    pub fn is_synchronized(&self) -> bool {
        let class = self.bindings.config.active_class.as_str();
        self.bindings.toggle.has_marker(class) == self.bindings.menu.has_marker(class)
    }

    /// Run the toggle reaction without a click
    pub fn toggle(&self) {
        self.bindings.toggle();
    }

    /// Run the close reaction without a click
    pub fn close(&self) {
        self.bindings.close();
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn config(&self) -> &MenuConfig {
        &self.bindings.config
    }

    pub fn toggle_element(&self) -> &E {
        &self.bindings.toggle
    }

    pub fn menu_element(&self) -> &E {
        &self.bindings.menu
    }
}
