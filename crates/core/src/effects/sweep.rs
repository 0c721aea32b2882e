use scrollfx_protocol::{ClipShape, ProgressSpan, StyleCommand, SweepGeometry, TargetId};

use crate::geometry::GeometrySource;
use crate::progress::span_progress;

/// Project the diagonal sweep onto its overlay target and any in-flow
/// section copies.
///
/// The overlay gets the full-height diagonal; each section gets the same
/// diagonal with its vertical extent remapped into the section's own box, so
/// the boundary lines up across the seams. All clips share the progress of
/// the main target.
pub fn project_sweep(
    target: &TargetId,
    span: &ProgressSpan,
    geometry: &SweepGeometry,
    sections: &[TargetId],
    source: &impl GeometrySource,
) -> Vec<StyleCommand> {
    let viewport = source.viewport();
    let Some(rect) = source.element_rect(target) else {
        return Vec::new();
    };
    let p = span_progress(span, &viewport, &rect);

    let top_x = geometry.top_start - geometry.top_range * p;
    let bottom_x = geometry.bottom_start - geometry.bottom_range * p;

    let mut commands = Vec::with_capacity(1 + sections.len());
    commands.push(StyleCommand::SetClip {
        target: target.clone(),
        shape: ClipShape::sweep(top_x, bottom_x),
    });

    for section in sections {
        let Some(section_rect) = source.element_rect(section) else {
            continue;
        };
        if section_rect.is_empty() {
            continue;
        }
        // Viewport top and bottom expressed in percent of the section box.
        let top_y = (-section_rect.top / section_rect.height) * 100.0;
        let bottom_y = ((viewport.height - section_rect.top) / section_rect.height) * 100.0;
        commands.push(StyleCommand::SetClip {
            target: section.clone(),
            shape: ClipShape::Sweep {
                top_x,
                bottom_x,
                top_y,
                bottom_y,
            },
        });
    }

    commands
}

/// Whether the sweep has passed its theme-flip point. Strictly greater: at
/// the trigger exactly the theme stays off.
pub fn theme_active(progress: f64, trigger: f64) -> bool {
    progress > trigger
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollfx_protocol::{ElementRect, Threshold, Viewport};

    use crate::geometry::GeometryMap;

    fn overlay_span() -> ProgressSpan {
        ProgressSpan::new(Threshold::viewport(1.0), Threshold::viewport(0.6))
    }

    #[test]
    fn corners_at_known_progress() {
        // vh = 1000, span 1000 -> 600, top = 840 puts the sweep at p = 0.4.
        let mut map = GeometryMap::new(Viewport::new(1280.0, 1000.0), 0.0);
        let overlay = TargetId::from("theme-overlay");
        map.insert(overlay.clone(), ElementRect::new(840.0, 0.0, 1280.0, 2400.0));

        let commands = project_sweep(
            &overlay,
            &overlay_span(),
            &SweepGeometry::default(),
            &[],
            &map,
        );
        assert_eq!(commands.len(), 1);
        let StyleCommand::SetClip { shape, .. } = &commands[0] else {
            panic!("expected clip command");
        };
        assert_eq!(
            shape.to_string(),
            "polygon(58% 0%, 100% 0%, 100% 100%, 85% 100%)"
        );
    }

    #[test]
    fn sections_get_relative_vertical_extent() {
        let mut map = GeometryMap::new(Viewport::new(1280.0, 1000.0), 0.0);
        let overlay = TargetId::from("theme-overlay");
        let section = TargetId::from("whats-new");
        map.insert(overlay.clone(), ElementRect::new(840.0, 0.0, 1280.0, 2400.0));
        // Section starts 500px above the viewport top, 2000px tall.
        map.insert(section.clone(), ElementRect::new(-500.0, 0.0, 1280.0, 2000.0));

        let commands = project_sweep(
            &overlay,
            &overlay_span(),
            &SweepGeometry::default(),
            std::slice::from_ref(&section),
            &map,
        );
        assert_eq!(commands.len(), 2);
        let StyleCommand::SetClip { target, shape } = &commands[1] else {
            panic!("expected clip command");
        };
        assert_eq!(target, &section);
        let ClipShape::Sweep {
            top_x,
            bottom_x,
            top_y,
            bottom_y,
        } = shape
        else {
            panic!("expected sweep shape");
        };
        assert_eq!(*top_x, 58.0);
        assert_eq!(*bottom_x, 85.0);
        assert_eq!(*top_y, 25.0);
        assert_eq!(*bottom_y, 75.0);
    }

    #[test]
    fn missing_main_target_emits_nothing() {
        let map = GeometryMap::new(Viewport::new(1280.0, 1000.0), 0.0);
        let commands = project_sweep(
            &TargetId::from("theme-overlay"),
            &overlay_span(),
            &SweepGeometry::default(),
            &[TargetId::from("whats-new")],
            &map,
        );
        assert!(commands.is_empty());
    }

    #[test]
    fn activation_is_strict() {
        assert!(!theme_active(0.84, 0.85));
        assert!(!theme_active(0.85, 0.85));
        assert!(theme_active(0.851, 0.85));
    }
}
