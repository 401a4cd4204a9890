use std::fmt;

use chase_core::{AgentId, RoomId};

/// What an agent is committed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IntentionKind {
    #[default]
    None,
    // Pursued agents.
    Recover,
    Capture,
    Halt,
    Track,
    Flank,
    Assist,
    Ambush,
    Search,
    GoTo,
    Regroup,
    // Pursuer.
    Flee,
    Wait,
    Eat,
}

impl IntentionKind {
    pub const fn name(self) -> &'static str {
        match self {
            IntentionKind::None => "none",
            IntentionKind::Recover => "recover",
            IntentionKind::Capture => "capture",
            IntentionKind::Halt => "halt",
            IntentionKind::Track => "track",
            IntentionKind::Flank => "flank",
            IntentionKind::Assist => "assist",
            IntentionKind::Ambush => "ambush",
            IntentionKind::Search => "search",
            IntentionKind::GoTo => "goto",
            IntentionKind::Regroup => "regroup",
            IntentionKind::Flee => "flee",
            IntentionKind::Wait => "wait",
            IntentionKind::Eat => "eat",
        }
    }
}

/// What an intention is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Agent(AgentId),
    Room(RoomId),
    Food,
    Rendezvous,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Agent(id) => write!(f, "{id}"),
            Target::Room(id) => write!(f, "{id}"),
            Target::Food => f.write_str("food"),
            Target::Rendezvous => f.write_str("rendezvous"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Intention {
    pub kind: IntentionKind,
    pub target: Option<Target>,
}

impl Intention {
    pub const fn none() -> Self {
        Self {
            kind: IntentionKind::None,
            target: None,
        }
    }

    pub const fn new(kind: IntentionKind) -> Self {
        Self { kind, target: None }
    }

    pub const fn targeting(kind: IntentionKind, target: Target) -> Self {
        Self {
            kind,
            target: Some(target),
        }
    }

    pub fn is(&self, kind: IntentionKind) -> bool {
        self.kind == kind
    }

    pub fn agent(&self) -> Option<AgentId> {
        match self.target {
            Some(Target::Agent(id)) => Some(id),
            _ => None,
        }
    }

    pub fn room(&self) -> Option<RoomId> {
        match self.target {
            Some(Target::Room(id)) => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for Intention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target {
            Some(target) => write!(f, "{}({target})", self.kind.name()),
            None => f.write_str(self.kind.name()),
        }
    }
}
