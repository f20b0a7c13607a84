//! Column entity: a titled, ordered bucket of task references.

use super::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// A board column holding task references in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    id: ColumnId,
    title: String,
    task_ids: Vec<TaskId>,
}

impl Column {
    /// Creates an empty column.
    #[must_use]
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            task_ids: Vec::new(),
        }
    }

    /// Sets the ordered task references held by the column.
    #[must_use]
    pub fn with_task_ids<I, T>(mut self, task_ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TaskId>,
    {
        self.task_ids = task_ids.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> &ColumnId {
        &self.id
    }

    /// Returns the column title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task references in display order.
    #[must_use]
    pub fn task_ids(&self) -> &[TaskId] {
        &self.task_ids
    }

    /// Returns the number of cards in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.task_ids.len()
    }

    /// Returns `true` when the column holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.task_ids.is_empty()
    }

    /// Returns the task reference at `index`, if any.
    #[must_use]
    pub fn task_at(&self, index: usize) -> Option<&TaskId> {
        self.task_ids.get(index)
    }

    /// Returns the position of `task_id` within the column.
    #[must_use]
    pub fn position_of(&self, task_id: &TaskId) -> Option<usize> {
        self.task_ids.iter().position(|id| id == task_id)
    }

    /// Returns a copy of this column holding `task_ids` instead.
    pub(crate) fn replacing_task_ids(&self, task_ids: Vec<TaskId>) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            task_ids,
        }
    }
}
