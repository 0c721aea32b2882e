use scrollfx_protocol::{StyleCommand, TargetId};

use crate::geometry::GeometrySource;

/// Project the timeline spotlight: of all sentinels with geometry this tick,
/// pick the one whose vertical midpoint sits nearest the attention line at a
/// third of the viewport height. Ties go to the earlier sentinel.
pub fn project_spotlight(
    target: &TargetId,
    sentinels: &[TargetId],
    source: &impl GeometrySource,
) -> Option<StyleCommand> {
    let attention_y = source.viewport().height / 3.0;

    let mut best: Option<(usize, f64)> = None;
    for (index, sentinel) in sentinels.iter().enumerate() {
        let Some(rect) = source.element_rect(sentinel) else {
            continue;
        };
        let distance = (rect.center_y() - attention_y).abs();
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((index, distance));
        }
    }

    best.map(|(index, _)| StyleCommand::SetActiveIndex {
        target: target.clone(),
        index,
    })
}
