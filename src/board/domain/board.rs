//! Board aggregate root and its read-side projections.

use super::{BoardDomainError, Column, ColumnId, Task, TaskId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Full board state: tasks, columns and the left-to-right column order.
///
/// A `Board` is an immutable snapshot. Moves produce a new snapshot via
/// [`Board::apply_move`](super::Board::apply_move).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    tasks: BTreeMap<TaskId, Task>,
    columns: BTreeMap<ColumnId, Column>,
    column_order: Vec<ColumnId>,
}

/// Parameter object for reconstructing a board from its serialised shape.
///
/// Mirrors the JSON seed layout (`tasks`, `columns`, `columnOrder`), where
/// both maps are keyed by entity identifier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardParts {
    /// Tasks keyed by identifier.
    pub tasks: BTreeMap<TaskId, Task>,
    /// Columns keyed by identifier.
    pub columns: BTreeMap<ColumnId, Column>,
    /// Left-to-right column order.
    pub column_order: Vec<ColumnId>,
}

/// A column together with its resolved task cards, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnView<'a> {
    /// The column being rendered.
    pub column: &'a Column,
    tasks: &'a BTreeMap<TaskId, Task>,
}

impl<'a> ColumnView<'a> {
    /// Returns the column's task cards in display order.
    pub fn tasks(self) -> impl Iterator<Item = &'a Task> {
        let tasks = self.tasks;
        self.column
            .task_ids()
            .iter()
            .filter_map(move |id| tasks.get(id))
    }
}

impl Board {
    /// Builds a board from task and column lists.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError`] when identifiers repeat or when the
    /// resulting board violates a placement or ordering invariant.
    pub fn new(
        tasks: impl IntoIterator<Item = Task>,
        columns: impl IntoIterator<Item = Column>,
        column_order: impl IntoIterator<Item = ColumnId>,
    ) -> Result<Self, BoardDomainError> {
        let mut task_map = BTreeMap::new();
        for task in tasks {
            let id = task.id().clone();
            if task_map.insert(id.clone(), task).is_some() {
                return Err(BoardDomainError::DuplicateTask(id));
            }
        }

        let mut column_map = BTreeMap::new();
        for column in columns {
            let id = column.id().clone();
            if column_map.insert(id.clone(), column).is_some() {
                return Err(BoardDomainError::DuplicateColumn(id));
            }
        }

        let board = Self {
            tasks: task_map,
            columns: column_map,
            column_order: column_order.into_iter().collect(),
        };
        board.validate()?;
        Ok(board)
    }

    /// Reconstructs a board from keyed maps, e.g. a deserialised seed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError`] when a map key disagrees with the entity
    /// it holds or when any board invariant is violated.
    pub fn from_parts(parts: BoardParts) -> Result<Self, BoardDomainError> {
        if let Some((key, task)) = parts.tasks.iter().find(|(key, task)| task.id() != *key) {
            return Err(BoardDomainError::TaskKeyMismatch {
                key: key.clone(),
                id: task.id().clone(),
            });
        }
        if let Some((key, column)) = parts
            .columns
            .iter()
            .find(|(key, column)| column.id() != *key)
        {
            return Err(BoardDomainError::ColumnKeyMismatch {
                key: key.clone(),
                id: column.id().clone(),
            });
        }

        let board = Self {
            tasks: parts.tasks,
            columns: parts.columns,
            column_order: parts.column_order,
        };
        board.validate()?;
        Ok(board)
    }

    /// Checks every board invariant.
    ///
    /// Every referenced task exists, every task is placed exactly once, and
    /// the column order is a permutation of the column identifiers.
    ///
    /// # Errors
    ///
    /// Returns the first [`BoardDomainError`] found.
    pub fn validate(&self) -> Result<(), BoardDomainError> {
        let mut placed = BTreeSet::new();
        for column in self.columns.values() {
            for task_id in column.task_ids() {
                if !self.tasks.contains_key(task_id) {
                    return Err(BoardDomainError::UnknownTaskReference {
                        column: column.id().clone(),
                        task: task_id.clone(),
                    });
                }
                if !placed.insert(task_id) {
                    return Err(BoardDomainError::TaskPlacedTwice(task_id.clone()));
                }
            }
        }
        if let Some(unplaced) = self.tasks.keys().find(|id| !placed.contains(id)) {
            return Err(BoardDomainError::UnplacedTask(unplaced.clone()));
        }

        let mut ordered = BTreeSet::new();
        for column_id in &self.column_order {
            if !self.columns.contains_key(column_id) {
                return Err(BoardDomainError::UnknownColumnInOrder(column_id.clone()));
            }
            if !ordered.insert(column_id) {
                return Err(BoardDomainError::DuplicateColumnInOrder(column_id.clone()));
            }
        }
        if let Some(missing) = self.columns.keys().find(|id| !ordered.contains(id)) {
            return Err(BoardDomainError::ColumnMissingFromOrder(missing.clone()));
        }

        Ok(())
    }

    /// Returns the task with the given identifier.
    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// Returns the column with the given identifier.
    #[must_use]
    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.get(id)
    }

    /// Returns all tasks keyed by identifier.
    #[must_use]
    pub const fn tasks(&self) -> &BTreeMap<TaskId, Task> {
        &self.tasks
    }

    /// Returns all columns keyed by identifier.
    #[must_use]
    pub const fn columns(&self) -> &BTreeMap<ColumnId, Column> {
        &self.columns
    }

    /// Returns the left-to-right column order.
    #[must_use]
    pub fn column_order(&self) -> &[ColumnId] {
        &self.column_order
    }

    /// Returns the columns in display order, each with its resolved cards.
    pub fn column_views(&self) -> impl Iterator<Item = ColumnView<'_>> {
        self.column_order
            .iter()
            .filter_map(|id| self.columns.get(id))
            .map(|column| ColumnView {
                column,
                tasks: &self.tasks,
            })
    }

    /// Locates a task, returning its column and position.
    #[must_use]
    pub fn locate(&self, task_id: &TaskId) -> Option<(&ColumnId, usize)> {
        self.columns.values().find_map(|column| {
            column
                .position_of(task_id)
                .map(|index| (column.id(), index))
        })
    }

    /// Returns the number of task placements summed over all columns.
    #[must_use]
    pub fn placed_task_count(&self) -> usize {
        self.columns.values().map(Column::len).sum()
    }

    /// Returns a copy of the board with the given columns replaced by id.
    pub(crate) fn replacing_columns(&self, replacements: impl IntoIterator<Item = Column>) -> Self {
        let mut columns = self.columns.clone();
        for column in replacements {
            columns.insert(column.id().clone(), column);
        }
        Self {
            tasks: self.tasks.clone(),
            columns,
            column_order: self.column_order.clone(),
        }
    }
}
