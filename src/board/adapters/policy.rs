//! Drag policies.

use std::collections::BTreeSet;

use crate::board::{domain::TaskId, ports::DragPolicy};

/// Policy that lets every card be dragged.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl DragPolicy for AllowAll {
    fn can_drag(&self, _task_id: &TaskId) -> bool {
        true
    }
}

/// Policy that pins a fixed set of cards in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinnedTasks {
    pinned: BTreeSet<TaskId>,
}

impl PinnedTasks {
    /// Creates a policy pinning the given tasks.
    #[must_use]
    pub fn new<I, T>(pinned: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TaskId>,
    {
        Self {
            pinned: pinned.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` when `task_id` is pinned.
    #[must_use]
    pub fn is_pinned(&self, task_id: &TaskId) -> bool {
        self.pinned.contains(task_id)
    }
}

impl DragPolicy for PinnedTasks {
    fn can_drag(&self, task_id: &TaskId) -> bool {
        !self.is_pinned(task_id)
    }
}
