//! Observer port notified with each committed board snapshot.

use crate::board::domain::Board;

/// Receives board snapshots after the store commits them.
///
/// Typically implemented by the rendering layer, which redraws from
/// [`Board::column_views`].
pub trait BoardObserver: Send + Sync {
    /// Called once per committed snapshot.
    fn board_changed(&self, board: &Board);
}

impl<F> BoardObserver for F
where
    F: Fn(&Board) + Send + Sync,
{
    fn board_changed(&self, board: &Board) {
        self(board);
    }
}
