//! Kanban board state and drag-and-drop moves.
//!
//! The board context keeps an ordered set of columns, each holding an
//! ordered list of task cards, and turns completed drag gestures into new
//! board snapshots. It follows hexagonal architecture:
//!
//! - Domain types and the reordering transform in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The snapshot-owning store in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
