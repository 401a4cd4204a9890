//! Grid, identity, and world primitives for the chase simulation.
//!
//! Everything here is deterministic: collections are ordered (`BTreeMap`/`BTreeSet`) so that
//! iteration order is row-major for locations and ascending for ids.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod error;
pub mod geometry;
pub mod level;
pub mod rng;
pub mod room;
pub mod subject;
pub mod tick;
pub mod world;

pub use agent::{AgentId, Role, Speed, Status};
pub use error::LevelError;
pub use geometry::{Direction, Location};
pub use level::{Level, Spawn, Terrain};
pub use rng::{DeterministicRng, SplitMix64};
pub use room::{Room, RoomId};
pub use subject::Subject;
pub use tick::{Pace, TickContext};
pub use world::{Body, World};
