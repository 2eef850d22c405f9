//! Site navigation bar with a high-zoom compact mode.
//!
//! DESIGN
//! ======
//! The full link row collapses behind a menu button when the page is
//! strongly zoomed in, independent of raw viewport width. Width-based
//! media queries alone miss high OS/browser zoom, which is exactly when
//! a horizontal link row stops fitting; see [`crate::util::high_zoom`].

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::util::high_zoom::use_high_zoom;

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

#[derive(Clone, Copy)]
struct NavItem {
    label: &'static str,
    href: &'static str,
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", href: "#home" },
    NavItem { label: "About", href: "#about" },
    NavItem { label: "Services", href: "#services" },
    NavItem { label: "Team", href: "#team" },
    NavItem { label: "Publications", href: "#publications" },
    NavItem { label: "Contact", href: "#contact" },
];

/// Top navigation bar with section links and the theme toggle.
#[component]
pub fn Navigation() -> impl IntoView {
    let compact = use_high_zoom();
    let menu_open = RwSignal::new(false);

    let links = NAV_ITEMS
        .iter()
        .map(|item| {
            let item = *item;
            view! {
                <li class="site-nav__item">
                    <a
                        class="site-nav__link"
                        href=item.href
                        on:click=move |_| menu_open.set(false)
                    >
                        {item.label}
                    </a>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <nav
            class="site-nav"
            class:site-nav--compact=move || compact.get()
            class:site-nav--open=move || menu_open.get()
        >
            <a class="site-nav__brand" href="#home">
                "Upright Investor Services"
            </a>

            <ul class="site-nav__links">{links}</ul>

            <ThemeToggle/>

            <Show when=move || compact.get()>
                <button
                    class="site-nav__menu-toggle"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                    aria-expanded=move || if menu_open.get() { "true" } else { "false" }
                    aria-label="Toggle navigation menu"
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </Show>
        </nav>
    }
}
