//! Seed providers: the built-in starter board and a JSON document loader.

use crate::board::{
    adapters::policy::PinnedTasks,
    domain::{Board, BoardParts, Column, ColumnId, Task},
    ports::{BoardSeed, SeedError, SeedResult},
};

/// The built-in starter board.
///
/// Four chores sit in "To do"; "In progress" and "Done" start empty.
/// The first chore is pinned, see [`StaticSeed::pinned_tasks`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSeed;

impl StaticSeed {
    /// Identifier of the card the starter board pins in place.
    pub const PINNED_TASK: &'static str = "task-1";

    /// Returns the drag policy that goes with the starter board.
    #[must_use]
    pub fn pinned_tasks() -> PinnedTasks {
        PinnedTasks::new([Self::PINNED_TASK])
    }
}

impl BoardSeed for StaticSeed {
    fn load(&self) -> SeedResult<Board> {
        let tasks = [
            Task::new("task-1", "Take out the garbage"),
            Task::new("task-2", "Watch my favorite show"),
            Task::new("task-3", "Charge my phone"),
            Task::new("task-4", "Cook dinner"),
        ];
        let columns = [
            Column::new("column-1", "To do")
                .with_task_ids(["task-1", "task-2", "task-3", "task-4"]),
            Column::new("column-2", "In progress"),
            Column::new("column-3", "Done"),
        ];
        let column_order = ["column-1", "column-2", "column-3"].map(ColumnId::from);

        Ok(Board::new(tasks, columns, column_order)?)
    }
}

/// Seed decoded from a JSON document.
///
/// The document uses the same shape a [`Board`] serialises to:
///
/// ```json
/// {
///   "tasks": { "t1": { "id": "t1", "content": "Write docs" } },
///   "columns": { "c1": { "id": "c1", "title": "To do", "taskIds": ["t1"] } },
///   "columnOrder": ["c1"]
/// }
/// ```
///
/// # Examples
///
/// ```
/// use kanban_board::board::adapters::seed::JsonSeed;
/// use kanban_board::board::ports::BoardSeed;
///
/// let seed = JsonSeed::new(r#"{
///     "tasks": { "t1": { "id": "t1", "content": "Write docs" } },
///     "columns": { "c1": { "id": "c1", "title": "To do", "taskIds": ["t1"] } },
///     "columnOrder": ["c1"]
/// }"#);
/// let board = seed.load().expect("valid seed");
/// assert_eq!(board.placed_task_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonSeed {
    document: String,
}

impl JsonSeed {
    /// Creates a seed over a JSON document.
    #[must_use]
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }
}

impl BoardSeed for JsonSeed {
    fn load(&self) -> SeedResult<Board> {
        let parts: BoardParts = serde_json::from_str(&self.document).map_err(SeedError::parse)?;
        Ok(Board::from_parts(parts)?)
    }
}
