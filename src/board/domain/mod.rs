//! Domain model for the kanban board.
//!
//! The board domain covers tasks, columns, the board aggregate and the pure
//! transformation that turns a drag-and-drop outcome into the next board
//! snapshot. Nothing here knows about rendering or gesture detection.

mod board;
mod column;
mod error;
mod ids;
mod movement;
mod task;

pub use board::{Board, BoardParts, ColumnView};
pub use column::Column;
pub use error::{BoardDomainError, MoveError};
pub use ids::{ColumnId, TaskId};
pub use movement::{DragLocation, MoveDescriptor, MoveKind, MoveOutcome, NoOpReason};
pub use task::Task;
