use chase_core::{AgentId, Level, Location, World};
use chase_sim::supervisor::judge;
use chase_sim::Outcome;

fn world(layout: &str) -> World {
    World::new(Level::parse(layout).unwrap())
}

fn step(world: &mut World, id: u8, row: i32, col: i32) {
    world
        .body_mut(AgentId(id))
        .unwrap()
        .step_to(Location::new(row, col));
}

#[test]
fn nothing_happens_before_anyone_moves() {
    let world = world("10..A\n");
    assert_eq!(judge(&world), None);
}

#[test]
fn sharing_a_cell_is_a_capture() {
    let mut world = world("1.0.A\n");
    step(&mut world, 1, 0, 1);
    assert_eq!(judge(&world), None);
    step(&mut world, 1, 0, 2);
    assert_eq!(
        judge(&world),
        Some(Outcome::PursuedWin {
            at: Location::new(0, 2)
        })
    );
}

#[test]
fn swapping_cells_is_a_capture() {
    let mut world = world("10..A\n");
    step(&mut world, 1, 0, 1);
    step(&mut world, 0, 0, 0);
    assert_eq!(
        judge(&world),
        Some(Outcome::PursuedWin {
            at: Location::new(0, 0)
        })
    );
}

#[test]
fn walking_past_each_other_is_not_a_swap() {
    let mut world = world("1.0..\n.....\n....A\n");
    step(&mut world, 1, 0, 1);
    step(&mut world, 0, 1, 2);
    assert_eq!(judge(&world), None);
}

#[test]
fn eating_the_last_food_wins_for_the_pursuer() {
    let mut world = world("1.0.A\n");
    step(&mut world, 0, 0, 3);
    step(&mut world, 0, 0, 4);
    assert!(world.remove_food(Location::new(0, 4)));
    assert_eq!(judge(&world), Some(Outcome::PursuerWin));
}
