use super::*;

// =============================================================
// Theme parsing and values
// =============================================================

#[test]
fn from_stored_accepts_exact_values_only() {
    assert_eq!(Theme::from_stored("light"), Some(Theme::Light));
    assert_eq!(Theme::from_stored("dark"), Some(Theme::Dark));
    assert_eq!(Theme::from_stored(""), None);
    assert_eq!(Theme::from_stored("Dark"), None);
    assert_eq!(Theme::from_stored("dark "), None);
    assert_eq!(Theme::from_stored("auto"), None);
}

#[test]
fn as_str_round_trips_through_from_stored() {
    assert_eq!(Theme::from_stored(Theme::Light.as_str()), Some(Theme::Light));
    assert_eq!(Theme::from_stored(Theme::Dark.as_str()), Some(Theme::Dark));
}

#[test]
fn flipped_is_an_involution() {
    assert_eq!(Theme::Light.flipped(), Theme::Dark);
    assert_eq!(Theme::Dark.flipped(), Theme::Light);
    assert_eq!(Theme::Light.flipped().flipped(), Theme::Light);
}

#[test]
fn default_theme_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

// =============================================================
// ThemeState resolution
// =============================================================

#[test]
fn initial_state_is_unresolved_light() {
    let state = ThemeState::default();
    assert_eq!(state.theme, Theme::Light);
    assert!(!state.resolved);
}

#[test]
fn resolve_adopts_explicit_stored_preference_over_os() {
    let mut state = ThemeState::default();
    state.resolve(Some(Theme::Light), true);
    assert_eq!(state.theme, Theme::Light);
    assert!(state.resolved);
}

#[test]
fn resolve_infers_from_os_when_nothing_stored() {
    let mut dark = ThemeState::default();
    dark.resolve(None, true);
    assert_eq!(dark.theme, Theme::Dark);
    assert!(dark.resolved);

    let mut light = ThemeState::default();
    light.resolve(None, false);
    assert_eq!(light.theme, Theme::Light);
    assert!(light.resolved);
}

#[test]
fn resolve_runs_once_per_session() {
    let mut state = ThemeState::default();
    state.resolve(None, true);
    assert_eq!(state.theme, Theme::Dark);

    // A second lookup with different inputs must not change anything.
    state.resolve(Some(Theme::Light), false);
    assert_eq!(state.theme, Theme::Dark);
    assert!(state.resolved);
}

// =============================================================
// ThemeState changes after resolution
// =============================================================

#[test]
fn os_change_is_ignored_while_an_explicit_preference_exists() {
    let mut state = ThemeState::default();
    state.resolve(Some(Theme::Light), true);

    state.on_os_preference_change(Some(Theme::Light), true);
    assert_eq!(state.theme, Theme::Light);
}

#[test]
fn os_change_is_followed_when_no_preference_is_stored() {
    let mut state = ThemeState::default();
    state.resolve(None, false);
    assert_eq!(state.theme, Theme::Light);

    state.on_os_preference_change(None, true);
    assert_eq!(state.theme, Theme::Dark);

    state.on_os_preference_change(None, false);
    assert_eq!(state.theme, Theme::Light);
}

#[test]
fn toggle_round_trips() {
    let mut state = ThemeState::default();
    state.resolve(None, true);
    assert_eq!(state.theme, Theme::Dark);

    state.toggle();
    assert_eq!(state.theme, Theme::Light);
    state.toggle();
    assert_eq!(state.theme, Theme::Dark);
}

#[test]
fn set_overrides_the_current_theme() {
    let mut state = ThemeState::default();
    state.resolve(None, false);

    state.set(Theme::Dark);
    assert_eq!(state.theme, Theme::Dark);
    state.set(Theme::Dark);
    assert_eq!(state.theme, Theme::Dark);
}
