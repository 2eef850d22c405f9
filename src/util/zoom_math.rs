//! Zoom factor estimation from viewport geometry.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browsers expose no direct "zoom level" API, so the factor is
//! estimated from several indirect signals and the strongest one wins:
//!
//! - the visual viewport `scale` (pinch zoom on mobile),
//! - window outer width vs. inner width (desktop browser chrome grows
//!   relative to the page as zoom increases),
//! - inner width shrink against a baseline captured at first paint
//!   (full-page zoom reduces CSS pixels per screen),
//! - device pixel ratio growth against the same baseline.
//!
//! Each signal alone misses some platform/zoom combination, which is
//! why the estimate takes the max rather than trusting any single one.
//! Everything here is pure math over sampled numbers; reading the
//! actual browser values happens in [`crate::util::high_zoom`].

#[cfg(test)]
#[path = "zoom_math_test.rs"]
mod zoom_math_test;

/// Zoom factor at or above which the layout switches to its simplified
/// high-zoom presentation. Chosen just under 1.5 so that a nominal
/// "150%" browser zoom trips it even after floating-point rounding.
pub const DEFAULT_HIGH_ZOOM_THRESHOLD: f64 = 1.47;

/// Viewport geometry captured once, on the first sample of the session.
///
/// Later samples are compared against these values to detect zoom
/// applied after load. Captured at most once so that the reference
/// point never drifts with the zoom it is supposed to measure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomBaseline {
    pub inner_width: f64,
    pub outer_width: f64,
    pub device_pixel_ratio: f64,
}

/// A single reading of the live viewport.
///
/// Fields are `Option` because the browser APIs behind them can be
/// absent (no visual viewport on older engines) or return non-numeric
/// values; missing signals simply drop out of the estimate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportSample {
    pub inner_width: Option<f64>,
    pub outer_width: Option<f64>,
    pub device_pixel_ratio: Option<f64>,
    pub visual_viewport_scale: Option<f64>,
}

/// Estimates the current zoom factor from `sample`, measured against
/// `baseline` where one has been captured.
///
/// Returns the maximum of the individual signals; with no usable
/// signal at all the estimate is 1.0 (no zoom detected).
pub fn zoom_factor(baseline: Option<ZoomBaseline>, sample: ViewportSample) -> f64 {
    let mut factor = sample.visual_viewport_scale.unwrap_or(1.0);

    // Outer/inner ratio. The numerator prefers the baseline outer width
    // so that the chrome measured at load stays the reference; the live
    // outer width must still be present, otherwise the environment does
    // not report window chrome at all and the ratio means nothing.
    if let (Some(outer), Some(inner)) = (sample.outer_width, sample.inner_width) {
        if inner > 0.0 {
            let reference = baseline.map_or(outer, |b| b.outer_width);
            factor = factor.max(reference / inner);
        }
    }

    if let Some(base) = baseline {
        if let Some(inner) = sample.inner_width {
            if base.inner_width > 0.0 && inner > 0.0 {
                factor = factor.max(base.inner_width / inner);
            }
        }
        if let Some(dpr) = sample.device_pixel_ratio {
            if base.device_pixel_ratio > 0.0 && dpr > 0.0 {
                factor = factor.max(dpr / base.device_pixel_ratio);
            }
        }
    }

    factor
}

/// Returns the baseline to use going forward: the existing one if
/// already captured, otherwise one built from `sample`.
///
/// Capture requires both width readings; a sample with either width
/// missing yields `None` and the caller retries on the next event. A
/// missing or non-positive pixel ratio falls back to 1.0 rather than
/// blocking capture, since the width signals are the important ones.
pub fn capture_baseline(
    existing: Option<ZoomBaseline>,
    sample: ViewportSample,
) -> Option<ZoomBaseline> {
    if existing.is_some() {
        return existing;
    }

    let inner_width = sample.inner_width?;
    let outer_width = sample.outer_width?;
    let device_pixel_ratio = match sample.device_pixel_ratio {
        Some(dpr) if dpr > 0.0 => dpr,
        _ => 1.0,
    };

    Some(ZoomBaseline {
        inner_width,
        outer_width,
        device_pixel_ratio,
    })
}

/// True when `factor` meets or exceeds `threshold`. The boundary is
/// inclusive: a factor exactly at the threshold counts as high zoom.
pub fn is_high_zoom(factor: f64, threshold: f64) -> bool {
    factor >= threshold
}
