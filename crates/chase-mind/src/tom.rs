//! Theory of mind: recursive models of what visible agents perceive.

use chase_core::{Subject, World};

use crate::perception::{hear, see, shared_view};
use crate::{Beliefs, Percept};

/// Updates the nested beliefs of every agent `observer` currently sees, down to `height` levels.
///
/// Another agent is assumed to see only what lies in the view it shares with the observer, and
/// to hear whatever reaches its cell.
pub fn update(world: &World, observer: &Subject, beliefs: &mut Beliefs, height: u32) {
    if height == 0 || !beliefs.sees_anyone() {
        return;
    }
    let seen: Vec<Subject> = beliefs.sees.agents.values().copied().collect();
    for other in seen {
        let shared = shared_view(world, &other, observer);
        let vision = see(world, other.id, &shared);
        let audio = hear(world, other.id);
        let nested = beliefs.tom.entry(other.id).or_default();
        nested.revise(Percept::Vision(vision));
        nested.revise(Percept::Audio(audio));
        update(world, &other, nested, height - 1);
    }
}
