//! When steps for board move BDD scenarios.

use super::world::BoardWorld;
use kanban_board::board::domain::{DragLocation, MoveDescriptor};
use rstest_bdd_macros::when;

fn drag(world: &mut BoardWorld, mv: &MoveDescriptor) -> Result<(), eyre::Report> {
    let policy = world.policy.clone();
    let result = world
        .store_mut()?
        .try_apply_drag(&policy, mv)
        .cloned();
    world.last_result = Some(result);
    Ok(())
}

#[when(r#"task "{task}" is dragged from "{source}" at {from} to "{target}" at {to}"#)]
fn dragged_to(
    world: &mut BoardWorld,
    task: String,
    source: String,
    from: usize,
    target: String,
    to: usize,
) -> Result<(), eyre::Report> {
    let mv = MoveDescriptor::new(
        task,
        DragLocation::new(source, from),
        DragLocation::new(target, to),
    );
    drag(world, &mv)
}

#[when(r#"task "{task}" is dragged from "{source}" at {from} and dropped outside"#)]
fn dropped_outside(
    world: &mut BoardWorld,
    task: String,
    source: String,
    from: usize,
) -> Result<(), eyre::Report> {
    let mv = MoveDescriptor::dropped_outside(task, DragLocation::new(source, from));
    drag(world, &mv)
}
