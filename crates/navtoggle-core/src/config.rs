//! Menu configuration
//!
//! Selectors and the marker name form the markup contract with the page
//! and its stylesheet. The host passes overrides as JSON.

use crate::error::ToggleError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TOGGLE_SELECTOR: &str = ".hamburger";
pub const DEFAULT_MENU_SELECTOR: &str = ".nav-menu";
pub const DEFAULT_LINK_SELECTOR: &str = ".nav-link";
pub const DEFAULT_ACTIVE_CLASS: &str = "active";

/// Markup contract for one menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MenuConfig {
    /// Selector for the single toggle control
    pub toggle_selector: String,
    /// Selector for the single menu panel
    pub menu_selector: String,
    /// Selector matching every link item
    pub link_selector: String,
    /// Class marking the open state on toggle and menu
    pub active_class: String,
    /// Mirror the state into `aria-expanded` on the toggle control
    pub sync_aria_expanded: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            toggle_selector: DEFAULT_TOGGLE_SELECTOR.to_string(),
            menu_selector: DEFAULT_MENU_SELECTOR.to_string(),
            link_selector: DEFAULT_LINK_SELECTOR.to_string(),
            active_class: DEFAULT_ACTIVE_CLASS.to_string(),
            sync_aria_expanded: false,
        }
    }
}

impl MenuConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ToggleError> {
        let config: MenuConfig =
            serde_json::from_str(json).map_err(|source| ToggleError::ConfigParse { source })?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_active_class(mut self, class: impl Into<String>) -> Self {
        self.active_class = class.into();
        self
    }

    pub fn with_aria_expanded(mut self, enabled: bool) -> Self {
        self.sync_aria_expanded = enabled;
        self
    }

    /// Reject values the host would refuse at runtime
    pub fn validate(&self) -> Result<(), ToggleError> {
        for (field, selector) in [
            ("toggle_selector", &self.toggle_selector),
            ("menu_selector", &self.menu_selector),
            ("link_selector", &self.link_selector),
        ] {
            if selector.trim().is_empty() {
                return Err(ToggleError::InvalidConfig {
                    message: format!("{} must not be empty", field),
                });
            }
        }

        if self.active_class.is_empty() {
            return Err(ToggleError::InvalidConfig {
                message: "active_class must not be empty".to_string(),
            });
        }
        // classList.add throws InvalidCharacterError on whitespace
        if self.active_class.chars().any(|c| c.is_ascii_whitespace()) {
            return Err(ToggleError::InvalidConfig {
                message: format!(
                    "active_class must be a single class token, got '{}'",
                    self.active_class
                ),
            });
        }

        Ok(())
    }
}
