//! Theme resolution, persistence, and reactive context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site ships in an unresolved state and renders the light theme
//! until the client can consult two sources: the `localStorage` key
//! (an explicit choice made on a previous visit) and the OS-level
//! `prefers-color-scheme` media query. An explicit stored choice always
//! wins; the OS preference only fills the gap.
//!
//! Resolution and DOM work both run in effects so that server markup
//! and the first client paint agree; the theme switches after
//! hydration, never during it.
//!
//! DESIGN
//! ======
//! State transitions live in [`crate::state::theme`] as plain data.
//! This module owns the browser glue: reading and writing storage,
//! stamping the `dark` class and `color-scheme` style hint onto
//! `<html>`, and following OS preference changes while no explicit
//! choice is stored. Components reach the store through
//! [`ThemeContext`], provided once at the app root.

#[cfg(test)]
#[path = "theme_store_test.rs"]
mod theme_store_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

use crate::state::theme::{Theme, ThemeState};
use crate::util::storage;

const STORAGE_KEY: &str = "upright-theme";

/// Handle to the theme store, shared through the reactive context.
///
/// Copyable so event handlers can capture it by value.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    state: RwSignal<ThemeState>,
}

impl ThemeContext {
    /// The current theme. Reactive; reports [`Theme::Light`] until the
    /// store has resolved on the client.
    pub fn theme(self) -> Theme {
        self.state.get().theme
    }

    /// Adopt `theme` as an explicit choice.
    pub fn set_theme(self, theme: Theme) {
        if self.state.get_untracked().theme == theme {
            return;
        }
        self.state.update(|s| s.set(theme));
    }

    /// Switch between light and dark.
    pub fn toggle_theme(self) {
        self.state.update(|s| s.toggle());
    }
}

/// Create the theme store and provide it as context.
///
/// Call once, at the root of the app. Resolution runs after hydration;
/// every resolved change is stamped onto the document and written back
/// to storage, including the very first resolution. That first write
/// means a freshly inferred OS preference becomes an explicit stored
/// value, so later OS changes are only followed if the key has been
/// cleared in the meantime.
pub fn provide_theme() {
    let state = RwSignal::new(ThemeState::default());

    Effect::new(move || {
        let current = state.get();
        if !current.resolved {
            return;
        }
        apply_to_document(current.theme);
        persist_theme(current.theme);
    });

    // Resolution tracks nothing, so it runs exactly once, client side.
    // The media listener attaches afterwards in the same body, so an OS
    // change event can never observe an unresolved store.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if state.get_untracked().resolved {
            return;
        }
        state.update(|s| s.resolve(read_stored_theme(), os_prefers_dark()));
        subscribe_os_preference(state);
    });

    provide_context(ThemeContext { state });
}

/// Access the theme store provided by [`provide_theme`].
///
/// # Panics
///
/// Panics when called outside a tree that ran [`provide_theme`].
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

/// Read the persisted preference. Only the exact strings `"light"` and
/// `"dark"` count; anything else reads as no preference.
pub fn read_stored_theme() -> Option<Theme> {
    storage::load_string(STORAGE_KEY)
        .as_deref()
        .and_then(Theme::from_stored)
}

/// Persist `theme` under the preference key.
pub fn persist_theme(theme: Theme) {
    storage::save_string(STORAGE_KEY, theme.as_str());
}

/// Whether the OS currently prefers a dark color scheme.
pub fn os_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Stamp the resolved theme onto `<html>`: the `dark` class marks dark
/// mode (light is the unmarked state) and the `color-scheme` style hint
/// keeps native widgets in step.
pub fn apply_to_document(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };

        let class_list = root.class_list();
        let _ = class_list.remove_2("light", "dark");
        if theme == Theme::Dark {
            let _ = class_list.add_1("dark");
        }

        if let Some(root) = root.dyn_ref::<web_sys::HtmlElement>() {
            let _ = root.style().set_property("color-scheme", theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Follow OS preference changes for the lifetime of the owner.
///
/// The stored value is re-read at event time: an explicit choice made
/// after subscription still wins over the OS.
#[cfg(feature = "hydrate")]
fn subscribe_os_preference(state: RwSignal<ThemeState>) {
    let Some(media) = web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
    else {
        return;
    };

    let callback = Closure::wrap(Box::new(move |event: web_sys::MediaQueryListEvent| {
        let current = state.get_untracked();
        let mut next = current;
        next.on_os_preference_change(read_stored_theme(), event.matches());
        if next != current {
            state.set(next);
        }
    }) as Box<dyn FnMut(web_sys::MediaQueryListEvent)>);

    if media
        .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
        .is_err()
    {
        leptos::logging::warn!("prefers-color-scheme listener failed to attach");
        return;
    }

    // matchMedia returns a fresh list per call, so cleanup must unhook
    // from the exact instance the listener went onto. Both values are
    // thread-bound JS handles; a thread-local StoredValue gives the
    // cleanup closure a Send handle to them.
    let subscription = StoredValue::new_local(Some((media, callback)));
    on_cleanup(move || {
        subscription.update_value(|slot| {
            if let Some((media, callback)) = slot.take() {
                let _ = media.remove_event_listener_with_callback(
                    "change",
                    callback.as_ref().unchecked_ref(),
                );
            }
        });
    });
}
