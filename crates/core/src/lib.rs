//! Core scroll-effect engine: geometry sampling, progress mapping, and the
//! effect projectors that turn progress into style commands.
//!
//! Hosts (DOM via WASM, terminal, egui) feed per-tick geometry in and apply
//! the resulting [`scrollfx_protocol::StyleCommand`] list out. Everything in
//! between is pure and deterministic.

pub mod css;
pub mod demo;
pub mod effects;
pub mod geometry;
pub mod pipeline;
pub mod progress;
pub mod scene_loader;
pub mod ticker;

pub use geometry::{GeometryMap, GeometrySource, TargetTracker};
pub use pipeline::Pipeline;
pub use scene_loader::{load_scene, SceneError};
pub use ticker::{TickDiscipline, Ticker, TickerHandle};
