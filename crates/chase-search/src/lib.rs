//! Deterministic grid search.
//!
//! A search is described by a [`RouteKind`] (path, flank, flee, pursue) or a sound query. Route
//! searches return the ordered [`Route`] from the start (exclusive) to the first goal node;
//! sound queries return a [`Footprint`], the cells a noise reaches at its propagation depth.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

mod evaluation;
mod frontier;
pub mod node;
mod route;
mod searcher;

pub use evaluation::Evaluator;
pub use node::{RouteKind, RouteQuery, FAR};
pub use route::{Footprint, Route};
pub use searcher::{SearchConfig, Searcher};
