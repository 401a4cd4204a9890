//! Runs a level to completion.
//!
//! A [`Simulation`] owns the [`World`](chase_core::World) and one
//! [`Agent`](chase_mind::Agent) per spawn. Every tick it steps the agents in id order and then
//! lets the supervisor decide whether the chase is over.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod outcome;
pub mod simulation;
pub mod snapshot;
pub mod supervisor;
pub mod trace;

pub use config::{MindSection, SearchSection, SimConfig, TimerSection};
pub use error::SimError;
pub use outcome::Outcome;
pub use simulation::Simulation;
pub use snapshot::AgentSnapshot;

pub type Result<T> = std::result::Result<T, SimError>;
