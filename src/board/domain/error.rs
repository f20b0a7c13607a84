//! Error types for board construction and move application.

use super::{ColumnId, TaskId};
use thiserror::Error;

/// Invariant violations detected while constructing or validating a board.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// Two tasks share the same identifier.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// Two columns share the same identifier.
    #[error("duplicate column identifier: {0}")]
    DuplicateColumn(ColumnId),

    /// A task map entry is keyed by a different identifier than its task.
    #[error("task keyed as '{key}' carries identifier '{id}'")]
    TaskKeyMismatch {
        /// Map key.
        key: TaskId,
        /// Identifier stored on the task.
        id: TaskId,
    },

    /// A column map entry is keyed by a different identifier than its column.
    #[error("column keyed as '{key}' carries identifier '{id}'")]
    ColumnKeyMismatch {
        /// Map key.
        key: ColumnId,
        /// Identifier stored on the column.
        id: ColumnId,
    },

    /// A column references a task that does not exist.
    #[error("column {column} references unknown task {task}")]
    UnknownTaskReference {
        /// Column holding the dangling reference.
        column: ColumnId,
        /// Referenced task identifier.
        task: TaskId,
    },

    /// A task is placed in more than one column or more than once.
    #[error("task {0} is placed more than once")]
    TaskPlacedTwice(TaskId),

    /// A task is not placed in any column.
    #[error("task {0} is not placed in any column")]
    UnplacedTask(TaskId),

    /// The column order names a column that does not exist.
    #[error("column order references unknown column {0}")]
    UnknownColumnInOrder(ColumnId),

    /// The column order names a column more than once.
    #[error("column {0} appears more than once in the column order")]
    DuplicateColumnInOrder(ColumnId),

    /// A column is absent from the column order.
    #[error("column {0} is missing from the column order")]
    ColumnMissingFromOrder(ColumnId),
}

/// Contract violations in a move descriptor.
///
/// Descriptors come from a trusted drag collaborator, so any of these
/// indicates a caller bug rather than user input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoveError {
    /// The dragged task does not exist.
    #[error("unknown task: {0}")]
    UnknownTask(TaskId),

    /// A referenced column does not exist.
    #[error("unknown column: {0}")]
    UnknownColumn(ColumnId),

    /// The source index is past the end of the source column.
    #[error("source index {index} out of bounds for column {column} of length {len}")]
    SourceIndexOutOfBounds {
        /// Source column.
        column: ColumnId,
        /// Requested index.
        index: usize,
        /// Column length.
        len: usize,
    },

    /// The destination index is past the append position.
    #[error("destination index {index} out of bounds for column {column} of length {len}")]
    DestinationIndexOutOfBounds {
        /// Destination column.
        column: ColumnId,
        /// Requested index.
        index: usize,
        /// Length of the list the insertion applies to.
        len: usize,
    },

    /// The source slot holds a different task than the one being dragged.
    #[error("column {column} holds {found} at index {index}, not {expected}")]
    TaskMismatch {
        /// Source column.
        column: ColumnId,
        /// Source index.
        index: usize,
        /// Task named by the descriptor.
        expected: TaskId,
        /// Task actually found at the source slot.
        found: TaskId,
    },
}
