//! Shared world state for board move BDD scenarios.

use kanban_board::board::{
    adapters::{memory::RecordingObserver, policy::PinnedTasks},
    domain::{Board, Column, ColumnId, Task},
    services::{BoardStore, BoardStoreError},
};
use rstest::fixture;

/// Scenario world for board move behaviour tests.
#[derive(Default)]
pub struct BoardWorld {
    pub pending_columns: Vec<Column>,
    pub store: Option<BoardStore>,
    pub initial_board: Option<Board>,
    pub recorder: RecordingObserver,
    pub policy: PinnedTasks,
    pub last_result: Option<Result<Board, BoardStoreError>>,
}

impl BoardWorld {
    /// Installs `store` as the scenario's board store.
    pub fn install(&mut self, mut store: BoardStore) {
        store.subscribe(Box::new(self.recorder.clone()));
        self.initial_board = Some(store.board().clone());
        self.store = Some(store);
    }

    /// Returns the store, building it from pending columns on first use.
    ///
    /// # Errors
    ///
    /// Returns an error when the pending columns do not form a valid board.
    pub fn store_mut(&mut self) -> Result<&mut BoardStore, eyre::Report> {
        if self.store.is_none() {
            let columns = std::mem::take(&mut self.pending_columns);
            let tasks: Vec<Task> = columns
                .iter()
                .flat_map(Column::task_ids)
                .map(|id| Task::new(id.clone(), id.as_str().to_uppercase()))
                .collect();
            let order: Vec<ColumnId> = columns.iter().map(|column| column.id().clone()).collect();
            let board = Board::new(tasks, columns, order)?;
            self.install(BoardStore::new(board));
        }
        self.store
            .as_mut()
            .ok_or_else(|| eyre::eyre!("board store was not installed"))
    }

    /// Returns the current board.
    ///
    /// # Errors
    ///
    /// Returns an error when no store has been built yet.
    pub fn board(&self) -> Result<&Board, eyre::Report> {
        self.store
            .as_ref()
            .map(BoardStore::board)
            .ok_or_else(|| eyre::eyre!("missing board store in scenario world"))
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Splits a comma-separated list of task ids.
pub fn split_ids(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
        .collect()
}
