//! Light/dark theme toggle button.

use leptos::prelude::*;

use crate::state::theme::Theme;
use crate::util::theme_store::use_theme;

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

/// Accessible name for the toggle, phrased as the action it performs.
fn toggle_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "Switch to dark theme",
        Theme::Dark => "Switch to light theme",
    }
}

/// Button that flips between light and dark, labelled with the theme it
/// switches to.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            class="theme-toggle"
            on:click=move |_| theme.toggle_theme()
            title=move || toggle_label(theme.theme())
            aria-label=move || toggle_label(theme.theme())
        >
            {move || if theme.theme() == Theme::Dark { "☀" } else { "☾" }}
        </button>
    }
}
