//! Maximum flow between a source and a sink of a directed capacitated network, computed with the
//! Edmonds-Karp refinement of Ford-Fulkerson.
//!
//! Every augmentation is recorded as a [`TraceStep`] so the way the flow was built up can be
//! replayed afterwards.
//!
//! ```
//! use flownet::{solve, FlowNetwork};
//!
//! let mut network = FlowNetwork::new(3).unwrap();
//! network.add_edge(0, 1, 10).unwrap();
//! network.add_edge(1, 2, 3).unwrap();
//!
//! let solution = solve(&mut network);
//! assert_eq!(solution.total(), 3);
//! assert_eq!(solution.steps().len(), 1);
//! ```
#![no_std]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod algo;
pub mod capacity;
pub mod check;
pub mod error;
pub mod network;
pub mod parser;
pub mod report;
pub mod trace;

pub use crate::algo::edmonds_karp::{edmonds_karp, EdmondsKarp};
pub use crate::algo::min_cut::{min_cut, MinCut};
pub use crate::algo::MaxFlow;
pub use crate::capacity::Capacity;
pub use crate::check::check;
pub use crate::error::Error;
pub use crate::network::{Arc, ArcId, FlowNetwork, NodeId};
pub use crate::parser::{parse_network, MAX_NODES};
pub use crate::report::Report;
pub use crate::trace::{ArcFlow, Solution, TraceStep};

/// Runs Edmonds-Karp over `network`, leaving the max flow on its arcs.
pub fn solve<Int: Capacity>(network: &mut FlowNetwork<Int>) -> Solution<Int> {
    EdmondsKarp::default().max_flow(network)
}
