//! Terminal conditions, checked once after every tick.

use chase_core::{Body, World};

use crate::Outcome;

/// Caught: the two share a cell, or each stands where the other just was.
fn caught(pursued: &Body, pursuer: &Body) -> bool {
    pursued.location == pursuer.location
        || (pursued.previous() == pursuer.location && pursuer.previous() == pursued.location)
}

/// Decides whether the chase is over.
///
/// Pairs where neither agent has moved yet are skipped. A capture wins for the pursued agents
/// while food remains; an empty food registry is a win for the pursuer.
pub fn judge(world: &World) -> Option<Outcome> {
    let pursuer = world.pursuer().and_then(|id| world.body(id))?;
    for pursued in world.bodies().filter(|b| world.is_pursued(b.id)) {
        if pursued.path.is_empty() && pursuer.path.is_empty() {
            continue;
        }
        if world.foods().is_empty() {
            return Some(Outcome::PursuerWin);
        }
        if caught(pursued, pursuer) {
            return Some(Outcome::PursuedWin {
                at: pursuer.location,
            });
        }
    }
    None
}
