//! Configuration for the board store.

use serde::Deserialize;

/// Tunables for [`BoardStore`](super::BoardStore).
///
/// # Examples
///
/// ```
/// use kanban_board::board::services::BoardStoreConfig;
///
/// let config = BoardStoreConfig::default();
/// assert!(!config.verify_invariants);
///
/// let strict = BoardStoreConfig::strict();
/// assert!(strict.verify_invariants);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardStoreConfig {
    /// Re-validate every board invariant before committing a snapshot.
    pub verify_invariants: bool,
    /// Notify observers even when a move leaves the board unchanged.
    pub notify_on_noop: bool,
}

impl BoardStoreConfig {
    /// Creates a configuration that validates each snapshot before commit.
    ///
    /// Useful in tests and debug builds of embedding applications.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            verify_invariants: true,
            notify_on_noop: false,
        }
    }

    /// Creates a configuration that re-broadcasts the board after no-op drops.
    ///
    /// Lets a renderer clear transient drag styling after a cancelled drop.
    #[must_use]
    pub const fn verbose_notifications() -> Self {
        Self {
            verify_invariants: false,
            notify_on_noop: true,
        }
    }
}
