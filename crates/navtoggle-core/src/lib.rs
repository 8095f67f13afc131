//! navtoggle-core - Core library for navtoggle
//!
//! Provides the open/closed menu model, the element capabilities a host UI
//! implements, and the controller that wires a hamburger toggle, a menu
//! panel and its links together.

pub mod config;
pub mod controller;
pub mod element;
pub mod error;
pub mod memory;
pub mod state;

pub use config::MenuConfig;
pub use controller::MenuToggleController;
pub use element::{ClickSource, ElementLookup, ElementRole, MenuElement, StateMarker};
pub use error::{RegistrationError, ToggleError};
pub use memory::{MemoryDocument, MemoryElement};
pub use state::MenuState;
