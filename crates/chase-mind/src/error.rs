use chase_core::{AgentId, LevelError};

/// Planning and deliberation failures that indicate an inconsistent belief state.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MindError {
    #[error("no belief about agent {0}")]
    UnknownAgent(AgentId),

    #[error("no rooms left to choose from")]
    NoRooms,

    #[error("no candidates for {0}")]
    NoCandidates(&'static str),

    #[error("agent {0} is not in the world")]
    Detached(AgentId),

    #[error(transparent)]
    Level(#[from] LevelError),
}
