//! Behaviour tests for dragging task cards between and within columns.

#[path = "board_move_steps/mod.rs"]
mod board_move_steps_defs;

use board_move_steps_defs::world::{BoardWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/board_moves.feature",
    name = "Reorder a card within its column"
)]
fn reorder_within_column(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_moves.feature",
    name = "Move a card to the end of another column"
)]
fn move_to_end_of_other_column(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_moves.feature",
    name = "Move a card into an empty column"
)]
fn move_into_empty_column(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_moves.feature",
    name = "Dropping outside any column leaves the board unchanged"
)]
fn drop_outside(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_moves.feature",
    name = "Dropping a card back where it started leaves the board unchanged"
)]
fn drop_in_place(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_moves.feature",
    name = "A pinned card cannot be dragged"
)]
fn pinned_card(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_moves.feature",
    name = "A descriptor pointing past the column end is rejected"
)]
fn malformed_descriptor(world: BoardWorld) {
    let _ = world;
}
