//! Client-side state machines.
//!
//! DESIGN
//! ======
//! State logic lives here as plain data types with no DOM or signal
//! dependencies, so the transition rules stay testable on the host
//! target. Reactive wiring (signals, effects, event listeners) lives in
//! `crate::util`, which drives these types from browser events.

pub mod theme;

pub use theme::{Theme, ThemeState};
