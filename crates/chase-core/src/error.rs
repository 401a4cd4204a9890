use crate::{AgentId, Location, RoomId};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LevelError {
    #[error("layout is empty")]
    Empty,

    #[error("layout row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("agent {id} spawns twice (at {first} and {second})")]
    DuplicateAgent {
        id: AgentId,
        first: Location,
        second: Location,
    },

    #[error("layout has no pursuer spawn")]
    MissingPursuer,

    #[error("layout has no pursued spawns")]
    MissingPursued,

    #[error("unknown room '{0}'")]
    UnknownRoom(RoomId),
}
