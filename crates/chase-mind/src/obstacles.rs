use std::collections::BTreeSet;

use chase_core::{Location, Role, Subject, World};

use crate::Beliefs;

/// Cells occupied by visible agents that should be routed around.
///
/// The pursuer is never an obstacle, and neither is anyone sharing `me`'s cell. The pursuer
/// avoids every other visible agent. A pursued agent avoids a peer unless the peer is regrouping;
/// otherwise it yields when the peer does not see it, outranks it, or is recovering or urgent.
pub fn dynamic_obstacles(
    me: &Subject,
    role: Role,
    beliefs: &Beliefs,
    world: &World,
) -> BTreeSet<Location> {
    let pursuer = world.pursuer();
    beliefs
        .sees
        .agents
        .values()
        .filter(|peer| Some(peer.id) != pursuer && peer.location != me.location)
        .filter(|peer| match role {
            Role::Pursuer => true,
            Role::Pursued => {
                let status = world.status(peer.id);
                !status.regrouping
                    && (!beliefs.believes_sees(peer.id, me.id)
                        || peer.id.outranks(me.id)
                        || status.recovering
                        || status.urgent)
            }
        })
        .map(|peer| peer.location)
        .collect()
}
