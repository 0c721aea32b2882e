use serde::{Deserialize, Serialize};

use crate::target::TargetId;

/// Viewport size in CSS/logical pixels, sampled once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A zero-area viewport means the host has nothing on screen; ticks
    /// against it are no-ops.
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

/// On-screen rectangle of a tracked element, viewport-relative (top-left
/// origin, +y down), in CSS/logical pixels.
///
/// Matches `getBoundingClientRect()` semantics: `top` goes negative once the
/// element scrolls above the viewport. Sampled fresh every tick — scrolling
/// invalidates prior geometry immediately, so nothing caches these across
/// frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementRect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl ElementRect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// One element's geometry as sampled by the host this tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSample {
    pub target: TargetId,
    pub rect: ElementRect,
}

/// Everything a host hands the pipeline for one tick: viewport size, raw
/// scroll distance, and the rects of whichever tracked elements are currently
/// attached. Elements missing from `elements` are skipped this tick.
///
/// Serializable so it can cross the WASM boundary as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    pub viewport: Viewport,
    /// Scroll distance of the owning container in pixels. Unclamped; feeds
    /// parallax directly.
    pub scroll_y: f64,
    pub elements: Vec<ElementSample>,
}
