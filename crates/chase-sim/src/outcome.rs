use std::fmt;

use chase_core::Location;
use serde::{Deserialize, Serialize};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// A pursued agent caught the pursuer while food was left.
    PursuedWin { at: Location },
    /// The pursuer ate every food item.
    PursuerWin,
    /// The tick limit ran out first.
    Timeout,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::PursuedWin { at } => write!(f, "pursued agents win at {at}"),
            Outcome::PursuerWin => f.write_str("pursuer wins"),
            Outcome::Timeout => f.write_str("timeout"),
        }
    }
}
