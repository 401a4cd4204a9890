//! Sensors: field of view, sight and hearing.

use std::collections::BTreeSet;

use chase_core::{AgentId, Direction, Location, Subject, Terrain, World};

use crate::{AudioPercept, VisionPercept};

/// Cells per ray, counting the ray's first cell.
pub const RAY_LENGTH: i32 = 8;

/// Cells visible from `origin` when facing `facing`.
///
/// Three parallel rays run along the facing: one through the origin and one on each side of it.
/// A ray stops before the first wall. If the cell straight ahead is a wall, only the origin is
/// visible. An agent that has not moved yet (`Idle`) sees nothing.
pub fn field_of_view<T>(terrain: &T, facing: Direction, origin: Location) -> BTreeSet<Location>
where
    T: Terrain + ?Sized,
{
    let mut cells = BTreeSet::new();
    if facing.is_idle() {
        return cells;
    }
    let (lat_rows, lat_cols) = facing.lateral();
    let (rows, cols) = facing.delta();
    for side in -1..=1 {
        let start = origin.offset(lat_rows * side, lat_cols * side);
        for k in 0..RAY_LENGTH {
            let at = start.offset(rows * k, cols * k);
            if terrain.is_wall(at) {
                if side == 0 && k == 1 {
                    return BTreeSet::from([origin]);
                }
                break;
            }
            cells.insert(at);
        }
    }
    cells
}

/// Cells both subjects can see.
pub fn shared_view<T>(terrain: &T, a: &Subject, b: &Subject) -> BTreeSet<Location>
where
    T: Terrain + ?Sized,
{
    let fa = field_of_view(terrain, a.direction, a.location);
    let fb = field_of_view(terrain, b.direction, b.location);
    fa.intersection(&fb).copied().collect()
}

/// Everything `observer` sees within `region`: other agents, obstacles and food.
pub fn see(world: &World, observer: AgentId, region: &BTreeSet<Location>) -> VisionPercept {
    let mut vision = VisionPercept {
        locations: region.clone(),
        ..VisionPercept::default()
    };
    for &at in region {
        for body in world.agents_at(at).filter(|b| b.id != observer) {
            vision.agents.insert(body.id, body.subject());
        }
        if world.has_obstacle(at) {
            vision.obstacles.insert(at);
        }
        if world.has_food(at) {
            vision.foods.insert(at);
        }
    }
    vision
}

/// Every other agent whose noise covers `listener`'s cell.
pub fn hear(world: &World, listener: AgentId) -> AudioPercept {
    let mut audio = AudioPercept::default();
    let Some(at) = world.body(listener).map(|b| b.location) else {
        return audio;
    };
    for body in world.bodies().filter(|b| b.id != listener) {
        if body.noise.contains(&at) {
            audio
                .agents
                .insert(body.id, Subject::heard(body.id, body.location));
        }
    }
    audio
}
