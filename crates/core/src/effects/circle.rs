use scrollfx_protocol::{ClipShape, ProgressSpan, StyleCommand, TargetId};

use crate::geometry::GeometrySource;
use crate::progress::span_progress;

/// Project the circular reveal: a clip circle growing from nothing to
/// `max_radius_pct` as the target travels its span.
pub fn project_circle(
    target: &TargetId,
    span: &ProgressSpan,
    max_radius_pct: f64,
    center: Option<[f64; 2]>,
    source: &impl GeometrySource,
) -> Option<StyleCommand> {
    let viewport = source.viewport();
    let rect = source.element_rect(target)?;
    let p = span_progress(span, &viewport, &rect);

    let [center_x, center_y] = center.unwrap_or([50.0, 50.0]);
    Some(StyleCommand::SetClip {
        target: target.clone(),
        shape: ClipShape::circle(p * max_radius_pct, center_x, center_y),
    })
}
