//! Board store: owns the current snapshot and commits moves.

use std::fmt;

use thiserror::Error;
use tracing::{debug, error, warn};

use super::BoardStoreConfig;
use crate::board::{
    domain::{Board, BoardDomainError, MoveDescriptor, MoveError, MoveOutcome, TaskId},
    ports::{BoardObserver, BoardSeed, DragPolicy, SeedResult},
};

/// Service-level errors for board store operations.
#[derive(Debug, Error)]
pub enum BoardStoreError {
    /// The move descriptor broke its contract.
    #[error(transparent)]
    Move(#[from] MoveError),

    /// The computed snapshot failed invariant verification.
    #[error("move would break a board invariant: {0}")]
    Invariant(#[from] BoardDomainError),

    /// The drag policy refused to move the task.
    #[error("task {0} cannot be dragged")]
    DragRejected(TaskId),
}

/// Result type for board store operations.
pub type BoardStoreResult<T> = Result<T, BoardStoreError>;

/// Single owner of the current board snapshot.
///
/// Moves are applied strictly in call order; `&mut self` on
/// [`BoardStore::apply_move`] rules out concurrent writers.
pub struct BoardStore {
    board: Board,
    config: BoardStoreConfig,
    observers: Vec<Box<dyn BoardObserver>>,
}

impl BoardStore {
    /// Creates a store with default configuration.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self::with_config(board, BoardStoreConfig::default())
    }

    /// Creates a store with custom configuration.
    #[must_use]
    pub const fn with_config(board: Board, config: BoardStoreConfig) -> Self {
        Self {
            board,
            config,
            observers: Vec::new(),
        }
    }

    /// Creates a store from a seed provider.
    ///
    /// # Errors
    ///
    /// Propagates the seed's [`SeedError`](crate::board::ports::SeedError).
    pub fn from_seed(seed: &impl BoardSeed) -> SeedResult<Self> {
        Ok(Self::new(seed.load()?))
    }

    /// Returns the current snapshot.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardStoreConfig {
        &self.config
    }

    /// Registers an observer for committed snapshots.
    pub fn subscribe(&mut self, observer: Box<dyn BoardObserver>) {
        self.observers.push(observer);
    }

    /// Applies a completed drag gesture and commits the result.
    ///
    /// Drops outside any column and drops back onto the starting slot leave
    /// the board unchanged. Observers are notified once per committed
    /// snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Move`] for a malformed descriptor and
    /// [`BoardStoreError::Invariant`] when strict verification rejects the
    /// result. The current snapshot is kept on error.
    pub fn apply_move(&mut self, mv: &MoveDescriptor) -> BoardStoreResult<&Board> {
        let outcome = self.board.apply_move(mv).inspect_err(|err| {
            warn!(task = %mv.task_id(), source = %mv.source(), error = %err, "rejected move");
        })?;

        match outcome {
            MoveOutcome::Moved { board, kind } => {
                if self.config.verify_invariants {
                    board.validate().inspect_err(|err| {
                        error!(task = %mv.task_id(), error = %err, "move broke a board invariant");
                    })?;
                }
                debug!(
                    task = %mv.task_id(),
                    source = %mv.source(),
                    destination = ?mv.destination(),
                    ?kind,
                    "applied move"
                );
                self.board = board;
                self.notify();
            }
            MoveOutcome::Unchanged(reason) => {
                debug!(task = %mv.task_id(), ?reason, "move left board unchanged");
                if self.config.notify_on_noop {
                    self.notify();
                }
            }
        }

        Ok(&self.board)
    }

    /// Applies a move after checking that `policy` lets the card be dragged.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::DragRejected`] when the policy refuses the
    /// task, otherwise the errors of [`BoardStore::apply_move`].
    pub fn try_apply_drag(
        &mut self,
        policy: &impl DragPolicy,
        mv: &MoveDescriptor,
    ) -> BoardStoreResult<&Board> {
        if !policy.can_drag(mv.task_id()) {
            warn!(task = %mv.task_id(), "drag refused by policy");
            return Err(BoardStoreError::DragRejected(mv.task_id().clone()));
        }
        self.apply_move(mv)
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer.board_changed(&self.board);
        }
    }
}

impl fmt::Debug for BoardStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardStore")
            .field("board", &self.board)
            .field("config", &self.config)
            .field("observers", &self.observers.len())
            .finish()
    }
}
