use std::collections::{BTreeMap, BTreeSet};

use chase_core::{AgentId, Location, Subject};

/// What an agent saw on one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisionPercept {
    /// Every cell that was in view.
    pub locations: BTreeSet<Location>,
    pub agents: BTreeMap<AgentId, Subject>,
    pub obstacles: BTreeSet<Location>,
    pub foods: BTreeSet<Location>,
}

/// Agents whose noise reached the listener.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AudioPercept {
    pub agents: BTreeMap<AgentId, Subject>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Percept {
    Vision(VisionPercept),
    Audio(AudioPercept),
}
