//! Scroll progress mapping: thresholds to pixels, pixels to clamped [0, 1]
//! progress, and the ease-out curve the zoom effects apply on top.

use scrollfx_protocol::{ElementRect, ProgressSpan, Threshold, Viewport};

/// Resolve a threshold to a viewport-relative pixel offset for the element's
/// top edge.
pub fn resolve_threshold(threshold: &Threshold, viewport: &Viewport, rect: &ElementRect) -> f64 {
    threshold.viewport_frac * viewport.height + threshold.height_frac * rect.height + threshold.px
}

/// Map an element's current top edge position into [0, 1] progress between
/// two resolved thresholds.
///
/// `start` is where progress is 0, `end` where it is 1; scrolling down moves
/// the top edge from `start` toward `end` (upward on screen, so `end <
/// start` in the usual case). Outside the range the value clamps.
///
/// A degenerate span (`start == end`) acts as a step: 1 once the edge is at
/// or past the start, 0 before. No division happens in that case.
pub fn progress_between(top: f64, start: f64, end: f64) -> f64 {
    if start == end {
        return if top <= start { 1.0 } else { 0.0 };
    }
    ((start - top) / (start - end)).clamp(0.0, 1.0)
}

/// Clamped progress for a span, including its easing curve.
pub fn span_progress(span: &ProgressSpan, viewport: &Viewport, rect: &ElementRect) -> f64 {
    let start = resolve_threshold(&span.start, viewport, rect);
    let end = resolve_threshold(&span.end, viewport, rect);
    let p = progress_between(rect.top, start, end);
    match span.ease {
        Some(exponent) => ease_out_pow(p, exponent),
        None => p,
    }
}

/// Ease-out power curve `1 - (1 - p)^k`. Fixes 0 and 1, front-loads motion
/// for `k > 1`.
pub fn ease_out_pow(p: f64, exponent: f64) -> f64 {
    1.0 - (1.0 - p).powf(exponent)
}
