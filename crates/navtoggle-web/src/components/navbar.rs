//! Navigation bar with mobile hamburger menu

use leptos::prelude::*;
use navtoggle_core::MenuState;

/// One entry in the navigation menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    pub label: String,
}

impl NavLink {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }
}

/// Navbar rendering the same markup contract the DOM wiring expects:
/// `.hamburger`, `.nav-menu` and `.nav-link`, opened with `.active`.
#[component]
pub fn NavBar(#[prop(into)] brand: String, links: Vec<NavLink>) -> impl IntoView {
    let (menu_state, set_menu_state) = signal(MenuState::Closed);

    // Close menu when clicking a link (mobile)
    let close_menu = move |_| {
        set_menu_state.update(|state| *state = state.closed());
    };

    view! {
        <nav class="navbar">
            <a href="/" class="nav-branding">{brand}</a>

            <ul class="nav-menu" class:active=move || menu_state.get().is_open()>
                {links
                    .into_iter()
                    .map(|link| {
                        view! {
                            <li class="nav-item">
                                <a href=link.href class="nav-link" on:click=close_menu>
                                    {link.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <div
                class="hamburger"
                class:active=move || menu_state.get().is_open()
                on:click=move |_| set_menu_state.update(|state| *state = state.toggled())
                role="button"
                aria-label="Toggle navigation"
                aria-expanded=move || menu_state.get().aria_expanded()
            >
                <span class="bar"></span>
                <span class="bar"></span>
                <span class="bar"></span>
            </div>
        </nav>
    }
}
