#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Agent identifier. Layout glyphs `0`-`9` map to ids `0`-`9`; a larger id outranks a smaller one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AgentId(pub u8);

impl AgentId {
    pub fn from_glyph(glyph: char) -> Option<Self> {
        glyph.to_digit(10).map(|d| AgentId(d as u8))
    }

    pub fn glyph(self) -> char {
        char::from(b'0' + self.0 % 10)
    }

    pub const fn rank(self) -> u8 {
        self.0
    }

    pub const fn outranks(self, other: AgentId) -> bool {
        self.0 > other.0
    }

    /// Stable id used to derive per-agent RNG streams.
    pub const fn stable_id(self) -> u64 {
        self.0 as u64
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two agent archetypes.
///
/// The pursuer (glyph `0`) forages for food and runs from the pursued agents; the pursued
/// agents (glyphs `1`-`9`) cooperate to corner and catch it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Role {
    Pursuer,
    Pursued,
}

impl Role {
    pub fn for_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '0' => Some(Role::Pursuer),
            '1'..='9' => Some(Role::Pursued),
            _ => None,
        }
    }
}

/// Execution speed tier. Lower execution time means shorter movement cooldowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Speed {
    Slow,
    #[default]
    Medium,
    Fast,
    VeryFast,
}

impl Speed {
    /// Execution-time multiplier; the move interval is `exec_time / simulation_speed` seconds.
    pub const fn exec_time(self) -> u32 {
        match self {
            Speed::Slow => 16,
            Speed::Medium => 8,
            Speed::Fast => 6,
            Speed::VeryFast => 2,
        }
    }

    /// Depth of the sound footprint a pursued agent leaves when it steps at this speed.
    pub const fn noise_depth(self) -> u32 {
        match self {
            Speed::Medium => 2,
            Speed::Fast => 3,
            Speed::Slow | Speed::VeryFast => 0,
        }
    }
}

/// Status flags a pursued agent publishes to its peers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Status {
    pub recovering: bool,
    pub urgent: bool,
    pub regrouping: bool,
}
