pub mod edmonds_karp;
pub mod min_cut;

use core::fmt::Debug;

use crate::network::FlowNetwork;

/// A maximum flow algorithm.
pub trait MaxFlow {
    type Capacity;
    type Solution: Debug;

    /// Run the algorithm over the specified network, pushing flow onto its arcs in place, and
    /// return the resulting flow value together with a record of how it was reached.
    fn max_flow(&mut self, network: &mut FlowNetwork<Self::Capacity>) -> Self::Solution;
}
