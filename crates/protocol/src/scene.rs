use serde::{Deserialize, Serialize};

use crate::target::TargetId;

/// The declarative scene IR every host drives the pipeline with.
///
/// A scene is the author-supplied description of all scroll-driven effect
/// instances on a page — which elements they clip, scale, or shift, over what
/// scroll range, with what curve.
///
/// ```text
///   JSON / built-in ─▶ Scene ──▶ Pipeline::tick ──▶ StyleCommand[] ──▶ Host
///      (authoring)    (this)    (sample → progress     (SetClip,       (DOM,
///                                 → project)            SetTransform…)  egui,
///                                                                       TUI…)
/// ```
///
/// Design principles:
///
/// 1. **Host-agnostic** — targets are opaque ids; nothing here knows about
///    the DOM, egui, or terminals.
/// 2. **Static** — a scene is immutable once constructed. All per-tick state
///    (geometry, progress, parameters) lives and dies inside a tick.
/// 3. **Serializable** — scenes load from JSON and cross the WASM boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub effects: Vec<Effect>,
}

impl Scene {
    /// Every target referenced anywhere in the scene, including sweep
    /// sections and spotlight sentinels, deduplicated in first-seen order.
    pub fn targets(&self) -> Vec<TargetId> {
        let mut out: Vec<TargetId> = Vec::new();
        let mut push = |id: &TargetId, out: &mut Vec<TargetId>| {
            if !out.iter().any(|t| t == id) {
                out.push(id.clone());
            }
        };
        for effect in &self.effects {
            push(&effect.target, &mut out);
            match &effect.kind {
                EffectKind::Sweep { sections, .. } => {
                    for s in sections {
                        push(s, &mut out);
                    }
                }
                EffectKind::Spotlight { sentinels } => {
                    for s in sentinels {
                        push(s, &mut out);
                    }
                }
                _ => {}
            }
        }
        out
    }

    /// Effects addressing the given target.
    pub fn effects_for(&self, target: &TargetId) -> impl Iterator<Item = &Effect> {
        self.effects.iter().filter(move |e| &e.target == target)
    }
}

/// One scroll-driven effect instance bound to one target element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    pub target: TargetId,
    pub kind: EffectKind,
}

/// What the effect does with the target's progress (or scroll distance).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Diagonal clip boundary sweeping across the viewport, optionally
    /// repeated section-relative on in-flow overlays, optionally flipping the
    /// global theme past `trigger`.
    Sweep {
        span: ProgressSpan,
        #[serde(default)]
        geometry: SweepGeometry,
        /// Strict-threshold activation point in (0,1); `None` means the
        /// sweep never flips the theme.
        #[serde(default)]
        trigger: Option<f64>,
        /// In-flow overlay elements that get a section-relative copy of the
        /// same diagonal.
        #[serde(default)]
        sections: Vec<TargetId>,
    },

    /// Circular reveal growing with progress.
    CircleReveal {
        span: ProgressSpan,
        /// Radius at progress 1, in percent of the target box.
        max_radius_pct: f64,
        /// Reveal origin in percent; `None` means (50, 50).
        #[serde(default)]
        center: Option<[f64; 2]>,
    },

    /// Linear scale + vertical translate interpolation over progress. The
    /// span's `ease` decides between the raw and eased variants.
    ZoomReveal {
        span: ProgressSpan,
        scale_from: f64,
        scale_to: f64,
        translate_from_pct: f64,
        translate_to_pct: f64,
    },

    /// Raw-scroll-distance parallax. Independent of any progress span and
    /// never clamped.
    Parallax { factor: f64 },

    /// One-shot fade-in once the target intersects the viewport minus a
    /// bottom margin. Hosts latch visibility.
    FadeIn {
        #[serde(default = "default_fade_margin")]
        margin_px: f64,
    },

    /// Pick the sentinel whose midpoint is nearest the attention line
    /// (viewport height / 3) and report its index.
    Spotlight { sentinels: Vec<TargetId> },
}

fn default_fade_margin() -> f64 {
    100.0
}

/// Over what scroll range progress travels 0→1, and how it is curved.
///
/// Thresholds describe where the target's top edge sits (viewport-relative
/// pixels) at progress 0 (`start`) and progress 1 (`end`). Progress is
/// clamped outside the range. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressSpan {
    pub start: Threshold,
    pub end: Threshold,
    /// Ease-out exponent `1 - (1-p)^k` applied after clamping. `None` keeps
    /// the raw linear progress.
    #[serde(default)]
    pub ease: Option<f64>,
}

impl ProgressSpan {
    pub const fn new(start: Threshold, end: Threshold) -> Self {
        Self {
            start,
            end,
            ease: None,
        }
    }

    pub const fn eased(start: Threshold, end: Threshold, exponent: f64) -> Self {
        Self {
            start,
            end,
            ease: Some(exponent),
        }
    }
}

/// A viewport-relative pixel offset for an element's top edge, expressed as
/// a linear combination so every form observed in practice fits:
///
/// - `viewport(0.7)` — 70% of viewport height down from the top
/// - `px(400.0)` — a literal pixel offset
/// - `centered()` — the element's vertical center on the viewport center
///   (`0.5·vh − 0.5·height`)
/// - `Threshold { viewport_frac: 1.0, height_frac: -1.0, px: 0.0 }` — the
///   element's bottom edge on the viewport bottom
///
/// Resolved per tick as `viewport_frac·vh + height_frac·element_height + px`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    #[serde(default)]
    pub viewport_frac: f64,
    #[serde(default)]
    pub height_frac: f64,
    #[serde(default)]
    pub px: f64,
}

impl Threshold {
    pub const fn viewport(frac: f64) -> Self {
        Self {
            viewport_frac: frac,
            height_frac: 0.0,
            px: 0.0,
        }
    }

    pub const fn px(px: f64) -> Self {
        Self {
            viewport_frac: 0.0,
            height_frac: 0.0,
            px,
        }
    }

    pub const fn centered() -> Self {
        Self {
            viewport_frac: 0.5,
            height_frac: -0.5,
            px: 0.0,
        }
    }
}

/// Corner offsets of the diagonal sweep boundary, in percent.
///
/// At progress `p` the boundary runs from `(top_start − top_range·p, 0)` to
/// `(bottom_start − bottom_range·p, 100)`. The defaults produce the steep
/// diagonal with a ~22% horizontal gap at mid-sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepGeometry {
    pub top_start: f64,
    pub top_range: f64,
    pub bottom_start: f64,
    pub bottom_range: f64,
}

impl Default for SweepGeometry {
    fn default() -> Self {
        Self {
            top_start: 120.0,
            top_range: 155.0,
            bottom_start: 165.0,
            bottom_range: 200.0,
        }
    }
}
