//! Belief-desire-intention agents for the chase simulation.
//!
//! Each [`Agent`] runs a perceive / revise / deliberate / plan / execute cycle one tick at a
//! time. Behaviour that differs between the pursuer and the pursued agents lives behind the
//! [`Archetype`] trait: a priority [`GoalTable`], a [`PlanLibrary`], and the success,
//! reconsideration and soundness rules.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod archetype;
pub mod beliefs;
pub mod config;
pub mod deliberation;
pub mod error;
pub mod intention;
pub mod obstacles;
pub mod percept;
pub mod perception;
pub mod planning;
pub mod pursued;
pub mod pursuer;
pub mod tom;

pub use agent::{Agent, Cooldown, Countdown};
pub use archetype::{Archetype, Frame};
pub use beliefs::Beliefs;
pub use config::{MindConfig, Timers};
pub use deliberation::{Deliberation, Goal, GoalTable};
pub use error::MindError;
pub use intention::{Intention, IntentionKind, Target};
pub use percept::{AudioPercept, Percept, VisionPercept};
pub use planning::{PlanLibrary, PlanProcedure, Planning};
pub use pursued::Pursued;
pub use pursuer::Pursuer;

pub type Result<T> = std::result::Result<T, MindError>;
