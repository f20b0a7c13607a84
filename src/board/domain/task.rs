//! Task card entity.

use super::TaskId;
use serde::{Deserialize, Serialize};

/// A task card. Immutable once created; identity is its [`TaskId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    content: String,
}

impl Task {
    /// Creates a task card.
    #[must_use]
    pub fn new(id: impl Into<TaskId>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the card text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}
