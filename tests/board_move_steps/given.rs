//! Given steps for board move BDD scenarios.

use super::world::{BoardWorld, split_ids};
use eyre::WrapErr;
use kanban_board::board::{adapters::seed::StaticSeed, domain::Column, services::BoardStore};
use rstest_bdd_macros::given;

#[given(r#"a column "{column}" holding "{tasks}""#)]
fn column_holding(world: &mut BoardWorld, column: String, tasks: String) {
    let title = format!("Column {column}");
    world
        .pending_columns
        .push(Column::new(column, title).with_task_ids(split_ids(&tasks)));
}

#[given(r#"an empty column "{column}""#)]
fn empty_column(world: &mut BoardWorld, column: String) {
    let title = format!("Column {column}");
    world.pending_columns.push(Column::new(column, title));
}

#[given("the starter board")]
fn starter_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let store = BoardStore::from_seed(&StaticSeed).wrap_err("load starter board")?;
    world.policy = StaticSeed::pinned_tasks();
    world.install(store);
    Ok(())
}
