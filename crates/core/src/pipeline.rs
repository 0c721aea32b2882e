use scrollfx_protocol::{EffectKind, Scene, StyleCommand};

use crate::effects::{circle, fade, parallax, spotlight, sweep, zoom};
use crate::geometry::{GeometrySource, TargetTracker};
use crate::progress::span_progress;

/// One scene wired to one geometry source, producing style commands per tick.
///
/// The pipeline is the only stateful piece of the engine: it owns the target
/// registry and remembers whether the sweep theme flip is currently active so
/// [`StyleCommand::ThemeActivated`] fires only on transitions.
#[derive(Debug, Clone)]
pub struct Pipeline {
    scene: Scene,
    tracker: TargetTracker,
    theme_active: bool,
}

impl Pipeline {
    /// Build a pipeline tracking every target the scene references.
    pub fn new(scene: Scene) -> Self {
        let tracker = TargetTracker::with_targets(scene.targets());
        Self {
            scene,
            tracker,
            theme_active: false,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Queue and apply tracking changes through the registry. Changes land at
    /// the start of the next [`Pipeline::tick`].
    pub fn tracker_mut(&mut self) -> &mut TargetTracker {
        &mut self.tracker
    }

    /// Run one pass: commit tracking changes, sample geometry once, and
    /// project every effect whose target is tracked.
    ///
    /// Command order follows scene order, so a host applying the list
    /// sequentially ends each tick in a consistent state. An invalid viewport
    /// (a hidden or zero-sized host surface) produces no commands.
    pub fn tick(&mut self, source: &impl GeometrySource) -> Vec<StyleCommand> {
        self.tracker.commit();

        let viewport = source.viewport();
        if !viewport.is_valid() {
            return Vec::new();
        }

        let mut commands = Vec::new();
        for effect in &self.scene.effects {
            if !self.tracker.is_tracked(&effect.target) {
                continue;
            }
            match &effect.kind {
                EffectKind::Sweep {
                    span,
                    geometry,
                    trigger,
                    sections,
                } => {
                    commands.extend(sweep::project_sweep(
                        &effect.target,
                        span,
                        geometry,
                        sections,
                        source,
                    ));
                    if let Some(trigger) = trigger
                        && let Some(rect) = source.element_rect(&effect.target)
                    {
                        let p = span_progress(span, &viewport, &rect);
                        let active = sweep::theme_active(p, *trigger);
                        if active != self.theme_active {
                            self.theme_active = active;
                            commands.push(StyleCommand::ThemeActivated { active });
                        }
                    }
                }
                EffectKind::CircleReveal {
                    span,
                    max_radius_pct,
                    center,
                } => {
                    commands.extend(circle::project_circle(
                        &effect.target,
                        span,
                        *max_radius_pct,
                        *center,
                        source,
                    ));
                }
                EffectKind::ZoomReveal {
                    span,
                    scale_from,
                    scale_to,
                    translate_from_pct,
                    translate_to_pct,
                } => {
                    commands.extend(zoom::project_zoom(
                        &effect.target,
                        span,
                        *scale_from,
                        *scale_to,
                        *translate_from_pct,
                        *translate_to_pct,
                        source,
                    ));
                }
                EffectKind::Parallax { factor } => {
                    commands.push(parallax::project_parallax(&effect.target, *factor, source));
                }
                EffectKind::FadeIn { margin_px } => {
                    commands.extend(fade::project_fade(&effect.target, *margin_px, source));
                }
                EffectKind::Spotlight { sentinels } => {
                    commands.extend(spotlight::project_spotlight(
                        &effect.target,
                        sentinels,
                        source,
                    ));
                }
            }
        }
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollfx_protocol::{
        Effect, ElementRect, ProgressSpan, SweepGeometry, TargetId, Threshold, Viewport,
    };

    use crate::geometry::GeometryMap;

    fn sweep_scene() -> Scene {
        Scene {
            effects: vec![Effect {
                target: TargetId::from("theme-overlay"),
                kind: EffectKind::Sweep {
                    span: ProgressSpan::new(Threshold::viewport(1.0), Threshold::viewport(0.6)),
                    geometry: SweepGeometry::default(),
                    trigger: Some(0.85),
                    sections: Vec::new(),
                },
            }],
        }
    }

    fn overlay_at(top: f64) -> GeometryMap {
        let mut map = GeometryMap::new(Viewport::new(1280.0, 1000.0), 0.0);
        map.insert(
            TargetId::from("theme-overlay"),
            ElementRect::new(top, 0.0, 1280.0, 2400.0),
        );
        map
    }

    #[test]
    fn theme_flip_fires_only_on_transitions() {
        let mut pipeline = Pipeline::new(sweep_scene());

        // p = 0.85 exactly: still inactive, no flip command.
        let commands = pipeline.tick(&overlay_at(660.0));
        assert!(
            !commands
                .iter()
                .any(|c| matches!(c, StyleCommand::ThemeActivated { .. }))
        );

        // Past the trigger: one activation.
        let commands = pipeline.tick(&overlay_at(640.0));
        assert!(
            commands
                .iter()
                .any(|c| matches!(c, StyleCommand::ThemeActivated { active: true }))
        );

        // Still past it: no repeat.
        let commands = pipeline.tick(&overlay_at(620.0));
        assert!(
            !commands
                .iter()
                .any(|c| matches!(c, StyleCommand::ThemeActivated { .. }))
        );

        // Back above the trigger: one deactivation.
        let commands = pipeline.tick(&overlay_at(800.0));
        assert!(
            commands
                .iter()
                .any(|c| matches!(c, StyleCommand::ThemeActivated { active: false }))
        );
    }

    #[test]
    fn untracked_targets_are_skipped() {
        let mut pipeline = Pipeline::new(sweep_scene());
        pipeline.tracker_mut().untrack(&TargetId::from("theme-overlay"));
        assert!(pipeline.tick(&overlay_at(640.0)).is_empty());
    }

    #[test]
    fn invalid_viewport_emits_nothing() {
        let mut pipeline = Pipeline::new(sweep_scene());
        let map = GeometryMap::new(Viewport::new(0.0, 0.0), 0.0);
        assert!(pipeline.tick(&map).is_empty());
    }
}
