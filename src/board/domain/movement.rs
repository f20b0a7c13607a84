//! Drag-and-drop move descriptors and the pure board reordering transform.

use super::{Board, Column, ColumnId, MoveError, TaskId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A slot on the board: a column and a position within it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragLocation {
    /// Column (droppable target) identifier.
    pub column_id: ColumnId,
    /// Position within the column; equal to the column length means append.
    pub index: usize,
}

impl DragLocation {
    /// Creates a location.
    #[must_use]
    pub fn new(column_id: impl Into<ColumnId>, index: usize) -> Self {
        Self {
            column_id: column_id.into(),
            index,
        }
    }
}

impl fmt::Display for DragLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.column_id, self.index)
    }
}

/// Normalised outcome of one drag gesture.
///
/// `destination` is `None` when the card was released outside every
/// droppable target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveDescriptor {
    task_id: TaskId,
    source: DragLocation,
    destination: Option<DragLocation>,
}

impl MoveDescriptor {
    /// Creates a descriptor for a card dropped on `destination`.
    #[must_use]
    pub fn new(
        task_id: impl Into<TaskId>,
        source: DragLocation,
        destination: DragLocation,
    ) -> Self {
        Self {
            task_id: task_id.into(),
            source,
            destination: Some(destination),
        }
    }

    /// Creates a descriptor for a card released outside any column.
    #[must_use]
    pub fn dropped_outside(task_id: impl Into<TaskId>, source: DragLocation) -> Self {
        Self {
            task_id: task_id.into(),
            source,
            destination: None,
        }
    }

    /// Returns the dragged task.
    #[must_use]
    pub const fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    /// Returns where the drag started.
    #[must_use]
    pub const fn source(&self) -> &DragLocation {
        &self.source
    }

    /// Returns where the card was dropped, if on a column.
    #[must_use]
    pub const fn destination(&self) -> Option<&DragLocation> {
        self.destination.as_ref()
    }
}

/// Kind of change an accepted move made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// The card changed position within its column.
    Reorder,
    /// The card moved to a different column.
    Transfer,
}

/// Why a move left the board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoOpReason {
    /// The card was released outside any droppable target.
    NoDestination,
    /// The card was dropped back where it started.
    SamePosition,
}

/// Result of applying a move descriptor to a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move produced a new snapshot.
    Moved {
        /// The next board snapshot.
        board: Board,
        /// Whether the card was reordered or transferred.
        kind: MoveKind,
    },
    /// The move was a defined no-op.
    Unchanged(NoOpReason),
}

impl MoveOutcome {
    /// Returns the new snapshot, or `None` for a no-op.
    #[must_use]
    pub fn into_board(self) -> Option<Board> {
        match self {
            Self::Moved { board, .. } => Some(board),
            Self::Unchanged(_) => None,
        }
    }
}

impl Board {
    /// Computes the board that results from `mv`.
    ///
    /// Same-column reorders treat the destination index as a position in the
    /// list after the card has been removed. Cross-column transfers insert
    /// into the unmodified destination list.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] when the descriptor names an unknown task or
    /// column, an out-of-range index, or a source slot that does not hold
    /// the dragged task.
    pub fn apply_move(&self, mv: &MoveDescriptor) -> Result<MoveOutcome, MoveError> {
        let Some(destination) = mv.destination() else {
            return Ok(MoveOutcome::Unchanged(NoOpReason::NoDestination));
        };
        if destination == mv.source() {
            return Ok(MoveOutcome::Unchanged(NoOpReason::SamePosition));
        }
        if self.task(mv.task_id()).is_none() {
            return Err(MoveError::UnknownTask(mv.task_id().clone()));
        }

        let source_column = self.resolve_column(&mv.source().column_id)?;
        let destination_column = self.resolve_column(&destination.column_id)?;
        let remaining = remove_at(source_column, mv.source().index, mv.task_id())?;

        if source_column.id() == destination_column.id() {
            let reordered = insert_at(
                source_column.id(),
                remaining,
                destination.index,
                mv.task_id(),
            )?;
            return Ok(MoveOutcome::Moved {
                board: self.replacing_columns([source_column.replacing_task_ids(reordered)]),
                kind: MoveKind::Reorder,
            });
        }

        let received = insert_at(
            destination_column.id(),
            destination_column.task_ids().to_vec(),
            destination.index,
            mv.task_id(),
        )?;
        Ok(MoveOutcome::Moved {
            board: self.replacing_columns([
                source_column.replacing_task_ids(remaining),
                destination_column.replacing_task_ids(received),
            ]),
            kind: MoveKind::Transfer,
        })
    }

    fn resolve_column(&self, id: &ColumnId) -> Result<&Column, MoveError> {
        self.column(id)
            .ok_or_else(|| MoveError::UnknownColumn(id.clone()))
    }
}

/// Returns the column's task list with the card at `index` removed.
fn remove_at(column: &Column, index: usize, task_id: &TaskId) -> Result<Vec<TaskId>, MoveError> {
    let found = column
        .task_at(index)
        .ok_or_else(|| MoveError::SourceIndexOutOfBounds {
            column: column.id().clone(),
            index,
            len: column.len(),
        })?;
    if found != task_id {
        return Err(MoveError::TaskMismatch {
            column: column.id().clone(),
            index,
            expected: task_id.clone(),
            found: found.clone(),
        });
    }

    let mut task_ids = column.task_ids().to_vec();
    task_ids.remove(index);
    Ok(task_ids)
}

fn insert_at(
    column_id: &ColumnId,
    mut task_ids: Vec<TaskId>,
    index: usize,
    task_id: &TaskId,
) -> Result<Vec<TaskId>, MoveError> {
    if index > task_ids.len() {
        return Err(MoveError::DestinationIndexOutOfBounds {
            column: column_id.clone(),
            index,
            len: task_ids.len(),
        });
    }
    task_ids.insert(index, task_id.clone());
    Ok(task_ids)
}
