//! Then steps for board move BDD scenarios.

use super::world::{BoardWorld, split_ids};
use kanban_board::board::{domain::ColumnId, services::BoardStoreError};
use rstest_bdd_macros::then;

fn column_contents(world: &BoardWorld, column: &str) -> Result<Vec<String>, eyre::Report> {
    let board = world.board()?;
    let found = board
        .column(&ColumnId::from(column))
        .ok_or_else(|| eyre::eyre!("unknown column {column}"))?;
    Ok(found
        .task_ids()
        .iter()
        .map(|id| id.as_str().to_owned())
        .collect())
}

#[then(r#"column "{column}" holds "{tasks}""#)]
fn column_holds(world: &BoardWorld, column: String, tasks: String) -> Result<(), eyre::Report> {
    let actual = column_contents(world, &column)?;
    let expected = split_ids(&tasks);
    eyre::ensure!(
        actual == expected,
        "column {column}: expected {expected:?}, found {actual:?}"
    );
    Ok(())
}

#[then(r#"column "{column}" is empty"#)]
fn column_is_empty(world: &BoardWorld, column: String) -> Result<(), eyre::Report> {
    let actual = column_contents(world, &column)?;
    eyre::ensure!(actual.is_empty(), "column {column} still holds {actual:?}");
    Ok(())
}

#[then("the board holds {count} placed tasks")]
fn placed_tasks(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let placed = world.board()?.placed_task_count();
    eyre::ensure!(placed == count, "expected {count} placed tasks, found {placed}");
    Ok(())
}

#[then("the notification count is {count}")]
fn notification_count(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let received = world.recorder.notification_count();
    eyre::ensure!(
        received == count,
        "expected {count} notifications, observer received {received}"
    );
    Ok(())
}

#[then("the board is unchanged")]
fn board_unchanged(world: &BoardWorld) -> Result<(), eyre::Report> {
    let initial = world
        .initial_board
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing initial board"))?;
    eyre::ensure!(world.board()? == initial, "board changed unexpectedly");
    Ok(())
}

#[then("the drag is rejected")]
fn drag_rejected(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing move result"))?;
    eyre::ensure!(
        matches!(result, Err(BoardStoreError::DragRejected(_))),
        "expected DragRejected, got {result:?}"
    );
    Ok(())
}

#[then("the move is rejected as malformed")]
fn move_malformed(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing move result"))?;
    eyre::ensure!(
        matches!(result, Err(BoardStoreError::Move(_))),
        "expected a malformed move error, got {result:?}"
    );
    Ok(())
}
