pub mod source;
pub mod tracker;

pub use source::{GeometryMap, GeometrySource};
pub use tracker::TargetTracker;
