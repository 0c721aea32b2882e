pub mod commands;
pub mod scene;
pub mod target;
pub mod theme;
pub mod types;

pub use commands::{ClipShape, StyleCommand};
pub use scene::{Effect, EffectKind, ProgressSpan, Scene, SweepGeometry, Threshold};
pub use target::TargetId;
pub use theme::{Color, Palette};
pub use types::{ElementRect, ElementSample, TickInput, Viewport};
