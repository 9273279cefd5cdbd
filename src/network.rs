use alloc::vec;
use alloc::vec::Vec;

use crate::capacity::Capacity;
use crate::error::Error;
use crate::trace::ArcFlow;

pub type NodeId = usize;
pub type ArcId = usize;

/// A directed capacitated arc of the residual graph.
///
/// Arcs always come in pairs: the forward arc of a user edge and its zero-capacity residual dual.
/// Each holds the index of the other in the network's arc arena.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Arc<Int> {
    origin: NodeId,
    destination: NodeId,
    capacity: Int,
    flow: Int,
    pair: ArcId,
    residual: bool,
}

impl<Int: Capacity> Arc<Int> {
    pub fn origin(&self) -> NodeId {
        self.origin
    }

    pub fn destination(&self) -> NodeId {
        self.destination
    }

    pub fn capacity(&self) -> Int {
        self.capacity
    }

    /// Current flow. Negative on a residual arc whose pair carries flow.
    pub fn flow(&self) -> Int {
        self.flow
    }

    pub fn pair(&self) -> ArcId {
        self.pair
    }

    pub fn is_residual(&self) -> bool {
        self.residual
    }

    /// Capacity still available for augmentation along this arc.
    pub fn remaining(&self) -> Int {
        self.capacity - self.flow
    }
}

/// A flow network with the source fixed at node `0` and the sink at node `n - 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlowNetwork<Int> {
    arcs: Vec<Arc<Int>>,
    // outgoing arcs per node, in insertion order
    adjacency: Vec<Vec<ArcId>>,
    // capacity leaving the source and entering the sink, `None` once the sum overflows; the
    // smaller of the two bounds any flow value this network can reach
    source_capacity: Option<Int>,
    sink_capacity: Option<Int>,
}

impl<Int: Capacity> FlowNetwork<Int> {
    pub fn new(nodes: usize) -> Result<Self, Error> {
        if nodes < 2 {
            return Err(Error::InvalidSize(nodes));
        }

        Ok(Self {
            arcs: Vec::new(),
            adjacency: vec![Vec::new(); nodes],
            source_capacity: Some(Int::zero()),
            sink_capacity: Some(Int::zero()),
        })
    }

    /// Adds the edge `from -> to` as a forward arc paired with a zero-capacity residual arc, and
    /// returns the id of the forward arc.
    ///
    /// Parallel edges are kept as independent arc pairs. Fails with `CapacityOverflow` only when
    /// both the capacity leaving the source and the capacity entering the sink overflow `Int`,
    /// since the flow value is bounded by the smaller of the two. Self loops count towards
    /// neither.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, capacity: Int) -> Result<ArcId, Error> {
        let nodes = self.node_count();
        if from >= nodes || to >= nodes {
            return Err(Error::NodeOutOfRange { from, to, nodes });
        }
        if capacity < Int::zero() {
            return Err(Error::NegativeCapacity { from, to });
        }
        if from != to {
            let bump = |sum: Option<Int>| sum.and_then(|sum| sum.checked_add(&capacity));
            let source_capacity = if from == self.source() {
                bump(self.source_capacity)
            } else {
                self.source_capacity
            };
            let sink_capacity = if to == self.sink() {
                bump(self.sink_capacity)
            } else {
                self.sink_capacity
            };
            if source_capacity.is_none() && sink_capacity.is_none() {
                return Err(Error::CapacityOverflow { from, to });
            }
            self.source_capacity = source_capacity;
            self.sink_capacity = sink_capacity;
        }

        let forward = self.arcs.len();
        let backward = forward + 1;
        self.arcs.push(Arc {
            origin: from,
            destination: to,
            capacity,
            flow: Int::zero(),
            pair: backward,
            residual: false,
        });
        self.arcs.push(Arc {
            origin: to,
            destination: from,
            capacity: Int::zero(),
            flow: Int::zero(),
            pair: forward,
            residual: true,
        });
        self.adjacency[from].push(forward);
        self.adjacency[to].push(backward);

        log::trace!("added edge {from} -> {to} (capacity {capacity}) as arc {forward}");
        Ok(forward)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of user edges, i.e. arc pairs.
    pub fn edge_count(&self) -> usize {
        self.arcs.len() / 2
    }

    pub fn source(&self) -> NodeId {
        0
    }

    pub fn sink(&self) -> NodeId {
        self.node_count() - 1
    }

    pub fn arc(&self, id: ArcId) -> &Arc<Int> {
        &self.arcs[id]
    }

    pub fn arcs(&self) -> &[Arc<Int>] {
        &self.arcs
    }

    /// Ids of the arcs leaving `node`, in the order they were added.
    pub fn adjacency(&self, node: NodeId) -> &[ArcId] {
        &self.adjacency[node]
    }

    /// The user-specified arcs with a positive capacity, in creation order.
    pub fn original_arcs(&self) -> impl Iterator<Item = &Arc<Int>> + '_ {
        self.arcs
            .iter()
            .filter(|arc| !arc.residual && arc.capacity > Int::zero())
    }

    /// Flows of the original arcs currently carrying a positive flow.
    pub fn positive_flows(&self) -> Vec<ArcFlow<Int>> {
        self.original_arcs()
            .filter(|arc| arc.flow > Int::zero())
            .map(|arc| ArcFlow::new(arc.origin, arc.destination, arc.flow))
            .collect()
    }

    /// Clears every arc flow so the network can be solved again from scratch.
    pub fn reset(&mut self) {
        self.arcs.iter_mut().for_each(|arc| arc.flow = Int::zero());
    }

    /// Pushes `delta` units along arc `id`, taking them back from its pair in the same step.
    pub(crate) fn augment(&mut self, id: ArcId, delta: Int) {
        debug_assert!(delta > Int::zero());
        debug_assert!(self.arcs[id].remaining() >= delta);

        let pair = self.arcs[id].pair;
        self.arcs[id].flow += delta;
        self.arcs[pair].flow -= delta;
    }
}
