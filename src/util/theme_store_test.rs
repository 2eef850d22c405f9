#![cfg(not(feature = "hydrate"))]

use super::*;

// Browser-facing pieces degrade to inert defaults off the wasm target;
// the reactive surface of the context is still testable here.

#[test]
fn stored_theme_is_absent_off_target() {
    assert_eq!(read_stored_theme(), None);
}

#[test]
fn os_preference_defaults_to_light_off_target() {
    assert!(!os_prefers_dark());
}

#[test]
fn document_writes_are_no_ops_off_target() {
    apply_to_document(Theme::Dark);
    persist_theme(Theme::Dark);
    assert_eq!(read_stored_theme(), None);
}

#[test]
fn context_reports_light_before_resolution() {
    let ctx = ThemeContext {
        state: RwSignal::new(ThemeState::default()),
    };
    assert_eq!(ctx.theme(), Theme::Light);
}

#[test]
fn set_theme_adopts_the_requested_theme() {
    let ctx = ThemeContext {
        state: RwSignal::new(ThemeState::default()),
    };
    ctx.set_theme(Theme::Dark);
    assert_eq!(ctx.theme(), Theme::Dark);
    ctx.set_theme(Theme::Dark);
    assert_eq!(ctx.theme(), Theme::Dark);
}

#[test]
fn toggle_theme_flips_between_light_and_dark() {
    let ctx = ThemeContext {
        state: RwSignal::new(ThemeState::default()),
    };
    ctx.toggle_theme();
    assert_eq!(ctx.theme(), Theme::Dark);
    ctx.toggle_theme();
    assert_eq!(ctx.theme(), Theme::Light);
}

#[test]
#[should_panic(expected = "context")]
fn use_theme_outside_provider_panics() {
    let _ = use_theme();
}
