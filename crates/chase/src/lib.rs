//! Umbrella crate that re-exports the `chase-*` building blocks.
//!
//! A typical embedding builds a [`sim::Simulation`] from a layout and steps it:
//!
//! ```
//! # #[cfg(feature = "sim")]
//! # {
//! use chase::sim::{SimConfig, Simulation};
//!
//! let config = SimConfig {
//!     max_ticks: 10,
//!     ..SimConfig::default()
//! };
//! let mut sim = Simulation::from_layout("1..a\n...0\n", config).unwrap();
//! let outcome = sim.run().unwrap();
//! println!("{outcome}");
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use chase_core as core;

#[cfg(feature = "search")]
#[cfg_attr(docsrs, doc(cfg(feature = "search")))]
pub use chase_search as search;

#[cfg(feature = "mind")]
#[cfg_attr(docsrs, doc(cfg(feature = "mind")))]
pub use chase_mind as mind;

#[cfg(feature = "tools")]
#[cfg_attr(docsrs, doc(cfg(feature = "tools")))]
pub use chase_tools as tools;

#[cfg(feature = "sim")]
#[cfg_attr(docsrs, doc(cfg(feature = "sim")))]
pub use chase_sim as sim;
