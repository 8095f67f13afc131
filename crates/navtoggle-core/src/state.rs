//! Open/closed state of the navigation menu

use serde::{Deserialize, Serialize};
use std::fmt;

/// Two-state menu model. The page starts `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    /// State after a click on the toggle control
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// State after a click on a link item. Always closed.
    pub fn closed(self) -> Self {
        MenuState::Closed
    }

    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// Read the state from the presence of the active marker
    pub fn from_marker(present: bool) -> Self {
        if present {
            MenuState::Open
        } else {
            MenuState::Closed
        }
    }

    /// Whether the active marker should be present in this state
    pub fn as_marker(self) -> bool {
        self.is_open()
    }

    /// Value for an `aria-expanded` attribute
    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() {
            "true"
        } else {
            "false"
        }
    }
}

impl fmt::Display for MenuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuState::Closed => write!(f, "closed"),
            MenuState::Open => write!(f, "open"),
        }
    }
}
