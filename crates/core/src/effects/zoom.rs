use scrollfx_protocol::{ProgressSpan, StyleCommand, TargetId};

use crate::geometry::GeometrySource;
use crate::progress::span_progress;

/// Project the zoom reveal: scale and vertical translate interpolated
/// linearly over the span's (possibly eased) progress.
pub fn project_zoom(
    target: &TargetId,
    span: &ProgressSpan,
    scale_from: f64,
    scale_to: f64,
    translate_from_pct: f64,
    translate_to_pct: f64,
    source: &impl GeometrySource,
) -> Option<StyleCommand> {
    let viewport = source.viewport();
    let rect = source.element_rect(target)?;
    let p = span_progress(span, &viewport, &rect);

    Some(StyleCommand::SetTransform {
        target: target.clone(),
        scale: scale_from + (scale_to - scale_from) * p,
        translate_y_pct: translate_from_pct + (translate_to_pct - translate_from_pct) * p,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollfx_protocol::{ElementRect, Threshold, Viewport};

    use crate::geometry::GeometryMap;

    // Full travel: top edge from the viewport bottom to the element's bottom
    // edge on the viewport bottom.
    fn video_span() -> ProgressSpan {
        ProgressSpan::eased(
            Threshold::viewport(1.0),
            Threshold {
                viewport_frac: 1.0,
                height_frac: -1.0,
                px: 0.0,
            },
            1.5,
        )
    }

    fn map_with_video(top: f64) -> (GeometryMap, TargetId) {
        let mut map = GeometryMap::new(Viewport::new(1280.0, 1000.0), 0.0);
        let video = TargetId::from("promo-video");
        map.insert(video.clone(), ElementRect::new(top, 0.0, 1280.0, 400.0));
        (map, video)
    }

    #[test]
    fn endpoints_hit_exact_values() {
        let (map, video) = map_with_video(1000.0);
        let closed =
            project_zoom(&video, &video_span(), 2.4, 1.0, 22.0, 0.0, &map).expect("command");
        assert_eq!(
            closed,
            StyleCommand::SetTransform {
                target: video.clone(),
                scale: 2.4,
                translate_y_pct: 22.0,
            }
        );

        let (map, video) = map_with_video(600.0);
        let open = project_zoom(&video, &video_span(), 2.4, 1.0, 22.0, 0.0, &map).expect("command");
        assert_eq!(
            open,
            StyleCommand::SetTransform {
                target: video,
                scale: 1.0,
                translate_y_pct: 0.0,
            }
        );
    }

    #[test]
    fn midpoint_uses_eased_progress() {
        // top = 800 is halfway through the 1000 -> 600 travel.
        let (map, video) = map_with_video(800.0);
        let command =
            project_zoom(&video, &video_span(), 2.4, 1.0, 22.0, 0.0, &map).expect("command");
        let StyleCommand::SetTransform {
            scale,
            translate_y_pct,
            ..
        } = command
        else {
            panic!("expected transform command");
        };
        let eased = 1.0 - 0.5_f64.powf(1.5);
        assert!((scale - (2.4 - 1.4 * eased)).abs() < 1e-12);
        assert!((translate_y_pct - (1.0 - eased) * 22.0).abs() < 1e-12);
    }
}
