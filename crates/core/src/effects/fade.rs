use scrollfx_protocol::{StyleCommand, TargetId};

use crate::geometry::GeometrySource;

/// Project a fade-in trigger: full opacity once the target intersects the
/// viewport shrunk by `margin_px` at the bottom.
///
/// Emits only while the intersection holds; hosts latch the first hit so the
/// element never fades back out when it scrolls away.
pub fn project_fade(
    target: &TargetId,
    margin_px: f64,
    source: &impl GeometrySource,
) -> Option<StyleCommand> {
    let viewport = source.viewport();
    let rect = source.element_rect(target)?;

    let intersects = rect.top < viewport.height - margin_px && rect.bottom() > 0.0;
    intersects.then(|| StyleCommand::SetOpacity {
        target: target.clone(),
        opacity: 1.0,
    })
}
