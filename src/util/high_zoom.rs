//! High-zoom detection hook.
//!
//! SYSTEM CONTEXT
//! ==============
//! At strong browser zoom the full navigation bar no longer fits, so
//! the layout drops to a compact presentation. Detection estimates the
//! zoom factor from viewport geometry (see [`crate::util::zoom_math`])
//! against a baseline captured on the first reading, then re-checks on
//! resize, orientation change, and visual-viewport resize.
//!
//! Each call site of [`use_high_zoom`] owns its baseline, threshold,
//! and listeners; the shared side effect is a single `zoom-high` class
//! on `<html>` for CSS that wants to react globally.

#[cfg(test)]
#[path = "high_zoom_test.rs"]
mod high_zoom_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(feature = "hydrate")]
use crate::util::zoom_math::{capture_baseline, is_high_zoom};
use crate::util::zoom_math::{
    DEFAULT_HIGH_ZOOM_THRESHOLD, ViewportSample, ZoomBaseline, zoom_factor,
};

/// Class stamped onto `<html>` while the page is considered zoomed in.
pub const HIGH_ZOOM_CLASS: &str = "zoom-high";

/// Track whether the page is zoomed at or beyond the default threshold.
///
/// Returns a signal that is `false` on the server and flips on the
/// client as the zoom estimate crosses
/// [`DEFAULT_HIGH_ZOOM_THRESHOLD`]. Listeners are removed when the
/// calling scope is disposed.
pub fn use_high_zoom() -> Signal<bool> {
    use_high_zoom_with_threshold(DEFAULT_HIGH_ZOOM_THRESHOLD)
}

/// [`use_high_zoom`] with a caller-chosen threshold. The comparison is
/// inclusive: a factor exactly at `threshold` counts as high zoom.
pub fn use_high_zoom_with_threshold(threshold: f64) -> Signal<bool> {
    let is_high = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let baseline = RwSignal::new(None::<ZoomBaseline>);
        subscribe_viewport_events(move || {
            let sample = sample_viewport();
            // Baseline capture is lazy and sticky: the first complete
            // sample wins and later zoom never shifts the reference.
            baseline.set(capture_baseline(baseline.get_untracked(), sample));

            let factor = zoom_factor(baseline.get_untracked(), sample);
            let next = is_high_zoom(factor, threshold);
            if next != is_high.get_untracked() {
                is_high.set(next);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = threshold;
    }

    Effect::new(move || sync_marker_class(is_high.get()));

    is_high.into()
}

/// One-shot zoom estimate from the live viewport.
pub fn compute_zoom_factor(baseline: Option<ZoomBaseline>) -> f64 {
    zoom_factor(baseline, sample_viewport())
}

/// Read the live viewport geometry, with every unavailable signal left
/// unset. Off the browser target the sample is entirely empty.
fn sample_viewport() -> ViewportSample {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return ViewportSample::default();
        };
        ViewportSample {
            inner_width: window.inner_width().ok().and_then(|v| v.as_f64()),
            outer_width: window.outer_width().ok().and_then(|v| v.as_f64()),
            device_pixel_ratio: Some(window.device_pixel_ratio()),
            visual_viewport_scale: window.visual_viewport().map(|vv| vv.scale()),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ViewportSample::default()
    }
}

/// Keep the `zoom-high` class on `<html>` in step with the estimate.
fn sync_marker_class(high: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let class_list = root.class_list();
            if high {
                let _ = class_list.add_1(HIGH_ZOOM_CLASS);
            } else {
                let _ = class_list.remove_1(HIGH_ZOOM_CLASS);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = high;
    }
}

/// Run `update` once now and again on every viewport event that can
/// change the zoom estimate. Listeners come off at scope disposal.
#[cfg(feature = "hydrate")]
fn subscribe_viewport_events(mut update: impl FnMut() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };

    update();

    let callback = Closure::wrap(Box::new(update) as Box<dyn FnMut()>);
    let listener: &js_sys::Function = callback.as_ref().unchecked_ref();

    let mut targets: Vec<(web_sys::EventTarget, &'static str)> = Vec::new();
    let window_target: web_sys::EventTarget = window.clone().into();
    for event in ["resize", "orientationchange"] {
        if window_target
            .add_event_listener_with_callback(event, listener)
            .is_ok()
        {
            targets.push((window_target.clone(), event));
        }
    }
    // Pinch zoom only reports through the visual viewport, where
    // supported.
    if let Some(viewport) = window.visual_viewport() {
        let viewport_target: web_sys::EventTarget = viewport.into();
        if viewport_target
            .add_event_listener_with_callback("resize", listener)
            .is_ok()
        {
            targets.push((viewport_target, "resize"));
        }
    }

    if targets.is_empty() {
        leptos::logging::warn!("no viewport listeners attached; zoom estimate is frozen");
        return;
    }

    let subscription = StoredValue::new_local(Some((targets, callback)));
    on_cleanup(move || {
        subscription.update_value(|slot| {
            if let Some((targets, callback)) = slot.take() {
                for (target, event) in targets {
                    let _ = target.remove_event_listener_with_callback(
                        event,
                        callback.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    });
}
