use serde::{Deserialize, Serialize};

use crate::target::TargetId;

/// A single, stateless style instruction.
///
/// The core emits a `Vec<StyleCommand>` per tick. Hosts consume the list
/// sequentially and write each value into their render layer (a DOM element's
/// style, an egui paint pass, a TUI buffer). Each command carries all the
/// data it needs; nothing refers back to a previous tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StyleCommand {
    /// Clip the target to the given shape (CSS `clip-path`).
    SetClip { target: TargetId, shape: ClipShape },

    /// Scale the target around its center and shift it vertically by a
    /// percentage of its own height (CSS `transform: scale(..) translateY(..)`).
    SetTransform {
        target: TargetId,
        scale: f64,
        translate_y_pct: f64,
    },

    /// Shift the target vertically by raw pixels (parallax layers).
    SetOffset { target: TargetId, y_px: f64 },

    /// Set the target's opacity in [0,1].
    SetOpacity { target: TargetId, opacity: f64 },

    /// The sweep crossed its activation trigger. Emitted only on change;
    /// hosts that need a latch store the flag themselves.
    ThemeActivated { active: bool },

    /// Index of the entry currently nearest the attention line (timeline
    /// spotlight).
    SetActiveIndex { target: TargetId, index: usize },
}

impl StyleCommand {
    /// The element this command addresses, if it addresses one.
    pub fn target(&self) -> Option<&TargetId> {
        match self {
            Self::SetClip { target, .. }
            | Self::SetTransform { target, .. }
            | Self::SetOffset { target, .. }
            | Self::SetOpacity { target, .. }
            | Self::SetActiveIndex { target, .. } => Some(target),
            Self::ThemeActivated { .. } => None,
        }
    }
}

/// A clip-path shape in percentage units of the clipped element.
///
/// `Display` renders the exact CSS `clip-path` string, so hosts backed by a
/// real style engine can assign it directly, while canvas-style hosts read
/// the fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ClipShape {
    /// Four-point diagonal sweep boundary: the region right of the line from
    /// `(top_x, top_y)` to `(bottom_x, bottom_y)` is kept.
    Sweep {
        top_x: f64,
        bottom_x: f64,
        top_y: f64,
        bottom_y: f64,
    },

    /// Circular reveal growing from a fixed center.
    Circle {
        radius_pct: f64,
        center_x: f64,
        center_y: f64,
    },
}

impl ClipShape {
    /// Viewport-spanning sweep (vertical bounds 0..100).
    pub fn sweep(top_x: f64, bottom_x: f64) -> Self {
        Self::Sweep {
            top_x,
            bottom_x,
            top_y: 0.0,
            bottom_y: 100.0,
        }
    }

    pub fn circle(radius_pct: f64, center_x: f64, center_y: f64) -> Self {
        Self::Circle {
            radius_pct,
            center_x,
            center_y,
        }
    }
}

impl std::fmt::Display for ClipShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sweep {
                top_x,
                bottom_x,
                top_y,
                bottom_y,
            } => write!(
                f,
                "polygon({top_x}% {top_y}%, 100% {top_y}%, 100% {bottom_y}%, {bottom_x}% {bottom_y}%)",
            ),
            Self::Circle {
                radius_pct,
                center_x,
                center_y,
            } => write!(f, "circle({radius_pct}% at {center_x}% {center_y}%)"),
        }
    }
}
