//! Error types for navtoggle-core
//!
//! Initialization is the only place the menu can fail. Once handlers are
//! registered, every reaction is infallible.

use crate::element::ElementRole;
use thiserror::Error;

/// Core error type for navtoggle operations
#[derive(Error, Debug)]
pub enum ToggleError {
    // ===================
    // Markup Errors
    // ===================
    #[error("Required {role} element not found{}", selector_hint(.selector))]
    MissingElement {
        role: ElementRole,
        selector: Option<String>,
    },

    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("Host document is not available")]
    NoDocument,

    #[error("Menu is already wired to this {role} element")]
    AlreadyInitialized { role: ElementRole },

    // ===================
    // Host Errors
    // ===================
    #[error("Failed to register click listener on {role} element: {message}")]
    ListenerRegistration { role: ElementRole, message: String },

    #[error("Failed to listen for '{event}': {message}")]
    EventRegistration { event: String, message: String },

    // ===================
    // Config Errors
    // ===================
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Failed to parse menu configuration")]
    ConfigParse {
        #[source]
        source: serde_json::Error,
    },
}

/// Host refused a click listener. The controller adds the element role.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RegistrationError {
    pub message: String,
}

impl RegistrationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

fn selector_hint(selector: &Option<String>) -> String {
    match selector {
        Some(selector) => format!(" (selector '{}')", selector),
        None => String::new(),
    }
}

impl ToggleError {
    /// Actionable suggestion for the page author, if one applies
    pub fn suggestion(&self) -> Option<String> {
        match self {
            ToggleError::MissingElement {
                selector: Some(selector),
                ..
            } => Some(format!(
                "Check that the page contains an element matching '{}'",
                selector
            )),
            ToggleError::MissingElement { role, .. } => {
                Some(format!("Pass the {} element to the controller", role))
            }
            ToggleError::InvalidSelector { .. } => {
                Some("Use a valid CSS selector, e.g. '.hamburger' or '#menu'".to_string())
            }
            ToggleError::NoDocument => {
                Some("Initialize the menu from a browser page, not a worker".to_string())
            }
            ToggleError::AlreadyInitialized { .. } => {
                Some("Initialize the menu once per page".to_string())
            }
            ToggleError::ConfigParse { .. } => {
                Some("Validate JSON syntax and field names of the menu config".to_string())
            }
            _ => None,
        }
    }

    /// True when the error points at the page markup rather than the host
    pub fn is_markup_error(&self) -> bool {
        matches!(
            self,
            ToggleError::MissingElement { .. } | ToggleError::InvalidSelector { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_message_with_selector() {
        let err = ToggleError::MissingElement {
            role: ElementRole::Toggle,
            selector: Some(".hamburger".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Required toggle element not found (selector '.hamburger')"
        );
        assert!(err.suggestion().unwrap().contains(".hamburger"));
        assert!(err.is_markup_error());
    }

    #[test]
    fn test_missing_element_message_without_selector() {
        let err = ToggleError::MissingElement {
            role: ElementRole::Menu,
            selector: None,
        };
        assert_eq!(err.to_string(), "Required menu element not found");
        assert_eq!(
            err.suggestion().as_deref(),
            Some("Pass the menu element to the controller")
        );
    }

    #[test]
    fn test_config_parse_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ToggleError::ConfigParse { source };
        assert!(std::error::Error::source(&err).is_some());
        assert!(!err.is_markup_error());
    }

    #[test]
    fn test_already_initialized_message() {
        let err = ToggleError::AlreadyInitialized {
            role: ElementRole::Toggle,
        };
        assert_eq!(err.to_string(), "Menu is already wired to this toggle element");
        assert!(err.suggestion().is_some());
        assert!(!err.is_markup_error());
    }

    #[test]
    fn test_listener_registration_has_no_suggestion() {
        let err = ToggleError::ListenerRegistration {
            role: ElementRole::Link,
            message: "detached".to_string(),
        };
        assert!(err.suggestion().is_none());
        assert!(err.to_string().contains("link element"));
    }
}
