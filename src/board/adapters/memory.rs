//! In-memory observer that records every snapshot it receives.

use std::sync::{Arc, PoisonError, RwLock};

use crate::board::{domain::Board, ports::BoardObserver};

/// Thread-safe observer keeping a history of received snapshots.
///
/// Clones share the same history, so a clone can be handed to the store
/// while the original is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    snapshots: Arc<RwLock<Vec<Board>>>,
}

impl RecordingObserver {
    /// Creates an observer with an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every snapshot received so far, oldest first.
    #[must_use]
    pub fn snapshots(&self) -> Vec<Board> {
        self.snapshots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the most recent snapshot, if any.
    #[must_use]
    pub fn latest(&self) -> Option<Board> {
        self.snapshots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    /// Returns how many notifications were received.
    #[must_use]
    pub fn notification_count(&self) -> usize {
        self.snapshots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl BoardObserver for RecordingObserver {
    fn board_changed(&self, board: &Board) {
        self.snapshots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(board.clone());
    }
}
