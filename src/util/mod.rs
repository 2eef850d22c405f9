//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic. Pure calculation (zoom math, theme transitions in
//! `crate::state`) stays separate from the modules that touch
//! `web_sys`, so the logic tests run on the host target.

pub mod high_zoom;
pub mod storage;
pub mod theme_store;
pub mod zoom_math;
