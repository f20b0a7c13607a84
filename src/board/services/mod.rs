//! Application services for board state management.

mod config;
mod store;

pub use config::BoardStoreConfig;
pub use store::{BoardStore, BoardStoreError, BoardStoreResult};
