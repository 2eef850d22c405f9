use super::*;

#[test]
fn label_names_the_theme_being_switched_to() {
    assert_eq!(toggle_label(Theme::Light), "Switch to dark theme");
    assert_eq!(toggle_label(Theme::Dark), "Switch to light theme");
}
