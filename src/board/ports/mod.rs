//! Port contracts for the board core.
//!
//! Ports define the seams to the presentation layer: where the initial
//! board comes from, who hears about new snapshots, and which cards may be
//! dragged at all.

pub mod drag_policy;
pub mod observer;
pub mod seed;

pub use drag_policy::DragPolicy;
pub use observer::BoardObserver;
pub use seed::{BoardSeed, SeedError, SeedResult};
