use scrollfx_protocol::{StyleCommand, TargetId};

use crate::geometry::GeometrySource;

/// Project a parallax layer: a vertical offset proportional to raw scroll
/// distance. Unclamped and independent of the target's own geometry, so the
/// layer keeps drifting as long as the page scrolls.
pub fn project_parallax(
    target: &TargetId,
    factor: f64,
    source: &impl GeometrySource,
) -> StyleCommand {
    StyleCommand::SetOffset {
        target: target.clone(),
        y_px: -source.scroll_y() * factor,
    }
}
