#![cfg(not(feature = "hydrate"))]

use super::*;

// Without the hydrate feature these are inert shims; they must degrade
// to "no value" rather than panic on a non-browser target.

#[test]
fn load_returns_none_off_target() {
    assert_eq!(load_string("upright-theme"), None);
    assert_eq!(load_string(""), None);
}

#[test]
fn save_is_a_no_op_off_target() {
    save_string("upright-theme", "dark");
    assert_eq!(load_string("upright-theme"), None);
}
