//! Kanban board: a headless core for column-and-card boards.
//!
//! This crate owns the state of a kanban board (a fixed set of columns,
//! each holding an ordered list of task cards) and computes the next state
//! when a card is dragged within or across columns. Rendering and gesture
//! detection live outside the crate: a drag surface feeds move descriptors
//! in, and observers receive each committed snapshot.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board data and the reordering transform
//! - **Ports**: Trait seams for seeds, observers and drag policies
//! - **Adapters**: Built-in seeds, policies and a recording observer
//!
//! # Example
//!
//! ```
//! use kanban_board::board::{
//!     adapters::seed::StaticSeed,
//!     domain::{DragLocation, MoveDescriptor},
//!     services::BoardStore,
//! };
//!
//! let mut store = BoardStore::from_seed(&StaticSeed).expect("starter board is valid");
//! let mv = MoveDescriptor::new(
//!     "task-2",
//!     DragLocation::new("column-1", 1),
//!     DragLocation::new("column-2", 0),
//! );
//! let board = store.apply_move(&mv).expect("move is well formed");
//!
//! let in_progress: Vec<_> = board
//!     .column_views()
//!     .nth(1)
//!     .map(|view| view.tasks().map(|task| task.content()).collect())
//!     .unwrap_or_default();
//! assert_eq!(in_progress, ["Watch my favorite show"]);
//! ```
//!
//! # Modules
//!
//! - [`board`]: Board state, moves and the board store

pub mod board;
