//! Leptos UI components

mod navbar;

pub use navbar::{NavBar, NavLink};
