//! Drag-initiation policy port.

use crate::board::domain::TaskId;

/// Decides whether a drag gesture may start on a task card.
///
/// The drag surface consults the policy before a gesture begins, so
/// [`Board::apply_move`](crate::board::domain::Board::apply_move) never
/// sees a descriptor for a refused card.
pub trait DragPolicy {
    /// Returns `true` when `task_id` may be dragged.
    fn can_drag(&self, task_id: &TaskId) -> bool;
}
