//! Seed port supplying the initial board.

use crate::board::domain::{Board, BoardDomainError};
use std::sync::Arc;
use thiserror::Error;

/// Result type for seed operations.
pub type SeedResult<T> = Result<T, SeedError>;

/// Source of the board a store starts from.
pub trait BoardSeed {
    /// Produces the initial board.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Parse`] when the seed data cannot be decoded or
    /// [`SeedError::Invalid`] when the decoded board breaks an invariant.
    fn load(&self) -> SeedResult<Board>;
}

/// Errors returned by seed implementations.
#[derive(Debug, Clone, Error)]
pub enum SeedError {
    /// The seed document could not be decoded.
    #[error("failed to decode board seed: {0}")]
    Parse(Arc<dyn std::error::Error + Send + Sync>),

    /// The decoded board violates an invariant.
    #[error("invalid board seed: {0}")]
    Invalid(#[from] BoardDomainError),
}

impl SeedError {
    /// Wraps a decoding error.
    pub fn parse(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Parse(Arc::new(err))
    }
}
