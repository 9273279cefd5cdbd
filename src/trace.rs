use alloc::format;
use alloc::vec::Vec;
use core::fmt::{self, Display, Formatter};

use itertools::Itertools;
use serde::Serialize;

use crate::network::NodeId;

/// The flow carried by one original arc.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ArcFlow<Int> {
    from: NodeId,
    to: NodeId,
    flow: Int,
}

impl<Int: Copy> ArcFlow<Int> {
    pub fn new(from: NodeId, to: NodeId, flow: Int) -> Self {
        Self { from, to, flow }
    }

    pub fn origin(&self) -> NodeId {
        self.from
    }

    pub fn destination(&self) -> NodeId {
        self.to
    }

    pub fn flow(&self) -> Int {
        self.flow
    }
}

impl<Int: Display> Display for ArcFlow<Int> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "f({},{}) = {}", self.from, self.to, self.flow)
    }
}

/// A record of one augmentation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceStep<Int> {
    path: Vec<(NodeId, NodeId)>,
    bottleneck: Int,
    total: Int,
    flows: Vec<ArcFlow<Int>>,
}

impl<Int: Copy> TraceStep<Int> {
    pub fn new(
        path: Vec<(NodeId, NodeId)>,
        bottleneck: Int,
        total: Int,
        flows: Vec<ArcFlow<Int>>,
    ) -> Self {
        Self {
            path,
            bottleneck,
            total,
            flows,
        }
    }

    /// The augmenting path as `(from, to)` transitions, ordered from source to sink.
    pub fn path(&self) -> &[(NodeId, NodeId)] {
        &self.path
    }

    pub fn bottleneck(&self) -> Int {
        self.bottleneck
    }

    /// Total flow after this augmentation.
    pub fn total(&self) -> Int {
        self.total
    }

    /// Positive flows of the original arcs right after this augmentation.
    pub fn flows(&self) -> &[ArcFlow<Int>] {
        &self.flows
    }
}

impl<Int: Display> Display for TraceStep<Int> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let path = self
            .path
            .iter()
            .map(|(from, to)| format!("{from} → {to}"))
            .join(", ");
        writeln!(f, "Augmenting path: {path} with flow {}", self.bottleneck)?;
        writeln!(f, "Current flow: {}", self.total)?;
        // empty line when nothing carries flow
        writeln!(f, "{}", self.flows.iter().join(", "))?;
        write!(f, "-----")
    }
}

/// The outcome of a max flow run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution<Int> {
    total: Int,
    steps: Vec<TraceStep<Int>>,
    flows: Vec<ArcFlow<Int>>,
}

impl<Int: Copy> Solution<Int> {
    pub fn new(total: Int, steps: Vec<TraceStep<Int>>, flows: Vec<ArcFlow<Int>>) -> Self {
        Self {
            total,
            steps,
            flows,
        }
    }

    /// The maximum flow value.
    pub fn total(&self) -> Int {
        self.total
    }

    /// One record per augmentation, in the order they happened.
    pub fn steps(&self) -> &[TraceStep<Int>] {
        &self.steps
    }

    /// Final positive flows of the original arcs, in creation order.
    pub fn flows(&self) -> &[ArcFlow<Int>] {
        &self.flows
    }
}
