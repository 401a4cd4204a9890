use std::path::PathBuf;

use chase_core::LevelError;
use chase_mind::MindError;

#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("invalid level: {0}")]
    Level(#[from] LevelError),

    #[error("agent failed: {0}")]
    Mind(#[from] MindError),

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to encode trace: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
