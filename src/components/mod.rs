//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome and delegate all policy to the
//! theme and zoom stores in `crate::util`, reading them through context
//! and hooks rather than touching the DOM themselves.

pub mod navigation;
pub mod theme_toggle;
