use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use petgraph::graphmap::DiGraphMap;
use petgraph::visit::Bfs;

use crate::capacity::Capacity;
use crate::network::{Arc, FlowNetwork, NodeId};

/// A source/sink partition of the network's nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MinCut<Int> {
    source_side: BTreeSet<NodeId>,
    arcs: Vec<Arc<Int>>,
    capacity: Int,
}

impl<Int: Capacity> MinCut<Int> {
    /// Nodes reachable from the source in the residual graph.
    pub fn source_side(&self) -> &BTreeSet<NodeId> {
        &self.source_side
    }

    /// Original arcs leaving the source side.
    pub fn arcs(&self) -> &[Arc<Int>] {
        &self.arcs
    }

    pub fn capacity(&self) -> Int {
        self.capacity
    }

    pub fn separates(&self, sink: NodeId) -> bool {
        !self.source_side.contains(&sink)
    }
}

/// Derives the cut induced by the current flow on `network`.
///
/// Once a max flow has been pushed the sink is unreachable in the residual graph and the capacity
/// of this cut equals the flow value.
pub fn min_cut<Int: Capacity>(network: &FlowNetwork<Int>) -> MinCut<Int> {
    let mut residual = DiGraphMap::<NodeId, ()>::new();
    (0..network.node_count()).for_each(|node| {
        residual.add_node(node);
    });
    network
        .arcs()
        .iter()
        .filter(|arc| arc.remaining() > Int::zero())
        .for_each(|arc| {
            residual.add_edge(arc.origin(), arc.destination(), ());
        });

    let mut source_side = BTreeSet::new();
    let mut bfs = Bfs::new(&residual, network.source());
    while let Some(node) = bfs.next(&residual) {
        source_side.insert(node);
    }

    let arcs: Vec<_> = network
        .original_arcs()
        .filter(|arc| {
            source_side.contains(&arc.origin()) && !source_side.contains(&arc.destination())
        })
        .cloned()
        .collect();
    let capacity = arcs.iter().map(|arc| arc.capacity()).sum();

    log::debug!(
        "min cut: source side {:?}, capacity {capacity}",
        source_side
    );

    MinCut {
        source_side,
        arcs,
        capacity,
    }
}
