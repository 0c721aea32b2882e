//! Built-in demo scene: the product landing page the engine was designed
//! around, plus a synthetic document layout so hosts without a real page
//! (terminal, egui) can drive it.

use scrollfx_protocol::{
    theme, Effect, EffectKind, ElementRect, ProgressSpan, Scene, SweepGeometry, TargetId,
    Threshold, Viewport,
};

use crate::geometry::GeometryMap;

/// The landing page scene: hero circle reveal, theme sweep with two section
/// overlays, video zoom, two parallax layers, fade-in panels, and a timeline
/// spotlight.
pub fn landing_scene() -> Scene {
    let hero_center = theme::hero_palettes()
        .first()
        .and_then(|p| p.reveal_center);

    Scene {
        effects: vec![
            Effect {
                target: TargetId::from("hero-card"),
                kind: EffectKind::CircleReveal {
                    span: ProgressSpan::new(Threshold::viewport(0.7), Threshold::centered()),
                    max_radius_pct: 150.0,
                    center: hero_center,
                },
            },
            Effect {
                target: TargetId::from("theme-overlay"),
                kind: EffectKind::Sweep {
                    span: ProgressSpan::new(Threshold::viewport(1.0), Threshold::viewport(0.6)),
                    geometry: SweepGeometry::default(),
                    trigger: Some(0.85),
                    sections: vec![TargetId::from("whats-new"), TargetId::from("customise")],
                },
            },
            Effect {
                target: TargetId::from("promo-video"),
                kind: EffectKind::ZoomReveal {
                    span: ProgressSpan::eased(
                        Threshold::viewport(1.0),
                        Threshold {
                            viewport_frac: 1.0,
                            height_frac: -1.0,
                            px: 0.0,
                        },
                        1.5,
                    ),
                    scale_from: 2.4,
                    scale_to: 1.0,
                    translate_from_pct: 22.0,
                    translate_to_pct: 0.0,
                },
            },
            Effect {
                target: TargetId::from("particle-layer"),
                kind: EffectKind::Parallax { factor: 0.18 },
            },
            Effect {
                target: TargetId::from("study-icons"),
                kind: EffectKind::Parallax { factor: 0.28 },
            },
            Effect {
                target: TargetId::from("pricing-panel"),
                kind: EffectKind::FadeIn { margin_px: 100.0 },
            },
            Effect {
                target: TargetId::from("faq-list"),
                kind: EffectKind::FadeIn { margin_px: 100.0 },
            },
            Effect {
                target: TargetId::from("timeline"),
                kind: EffectKind::Spotlight {
                    sentinels: vec![
                        TargetId::from("step-0"),
                        TargetId::from("step-1"),
                        TargetId::from("step-2"),
                        TargetId::from("step-3"),
                    ],
                },
            },
        ],
    }
}

/// Document-space layout backing the demo scene. Element positions are fixed
/// in document coordinates; [`DemoPage::geometry_at`] converts them to
/// viewport-relative rects for a given scroll offset.
#[derive(Debug, Clone)]
pub struct DemoPage {
    elements: Vec<(TargetId, ElementRect)>,
    height: f64,
}

impl DemoPage {
    pub fn new() -> Self {
        // Top offsets roughly follow the real page: hero up front, the sweep
        // overlay spanning the two middle sections, timeline and panels
        // further down.
        let elements = vec![
            place("hero-card", 750.0, 340.0, 600.0, 380.0),
            place("promo-video", 1400.0, 160.0, 960.0, 540.0),
            place("theme-overlay", 2200.0, 0.0, 1280.0, 2400.0),
            place("whats-new", 2200.0, 0.0, 1280.0, 1200.0),
            place("customise", 3400.0, 0.0, 1280.0, 1200.0),
            place("particle-layer", 0.0, 0.0, 1280.0, 800.0),
            place("study-icons", 1200.0, 900.0, 300.0, 300.0),
            place("timeline", 4700.0, 100.0, 1080.0, 900.0),
            place("step-0", 4750.0, 120.0, 40.0, 40.0),
            place("step-1", 4980.0, 120.0, 40.0, 40.0),
            place("step-2", 5210.0, 120.0, 40.0, 40.0),
            place("step-3", 5440.0, 120.0, 40.0, 40.0),
            place("pricing-panel", 5800.0, 200.0, 880.0, 500.0),
            place("faq-list", 6400.0, 200.0, 880.0, 700.0),
        ];
        Self {
            elements,
            height: 7300.0,
        }
    }

    /// Total scrollable document height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Largest useful scroll offset for a viewport.
    pub fn max_scroll(&self, viewport: &Viewport) -> f64 {
        (self.height - viewport.height).max(0.0)
    }

    /// Geometry snapshot at a scroll offset.
    pub fn geometry_at(&self, scroll_y: f64, viewport: Viewport) -> GeometryMap {
        let mut map = GeometryMap::new(viewport, scroll_y);
        for (target, rect) in &self.elements {
            map.insert(
                target.clone(),
                ElementRect::new(rect.top - scroll_y, rect.left, rect.width, rect.height),
            );
        }
        map
    }
}

impl Default for DemoPage {
    fn default() -> Self {
        Self::new()
    }
}

fn place(name: &str, top: f64, left: f64, width: f64, height: f64) -> (TargetId, ElementRect) {
    (TargetId::from(name), ElementRect::new(top, left, width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GeometrySource;
    use crate::scene_loader::validate;

    #[test]
    fn landing_scene_is_valid() {
        validate(&landing_scene()).expect("valid scene");
    }

    #[test]
    fn page_covers_every_scene_target() {
        let page = DemoPage::new();
        let map = page.geometry_at(0.0, Viewport::new(1280.0, 1000.0));
        for target in landing_scene().targets() {
            assert!(
                map.element_rect(&target).is_some(),
                "no layout for {target}"
            );
        }
    }

    #[test]
    fn geometry_shifts_with_scroll() {
        let page = DemoPage::new();
        let viewport = Viewport::new(1280.0, 1000.0);
        let hero = TargetId::from("hero-card");

        let at_rest = page
            .geometry_at(0.0, viewport)
            .element_rect(&hero)
            .expect("rect");
        let scrolled = page
            .geometry_at(300.0, viewport)
            .element_rect(&hero)
            .expect("rect");
        assert_eq!(at_rest.top - scrolled.top, 300.0);
        assert_eq!(at_rest.height, scrolled.height);
    }
}
