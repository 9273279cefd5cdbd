use alloc::collections::VecDeque;
use alloc::vec;
use alloc::vec::Vec;
use core::marker::PhantomData;

use crate::algo::MaxFlow;
use crate::capacity::Capacity;
use crate::network::{ArcId, FlowNetwork};
use crate::trace::{Solution, TraceStep};

/// Ford-Fulkerson with breadth-first selection of augmenting paths.
#[derive(Clone, Debug, Default)]
pub struct EdmondsKarp<Int>(PhantomData<Int>);

impl<Int: Capacity> MaxFlow for EdmondsKarp<Int> {
    type Capacity = Int;
    type Solution = Solution<Int>;

    fn max_flow(&mut self, network: &mut FlowNetwork<Self::Capacity>) -> Self::Solution {
        edmonds_karp(network)
    }
}

/// Computes a max flow from the network's source to its sink, augmenting along shortest (by arc
/// count) paths of the residual graph until the sink is unreachable.
///
/// Flow values are written onto the network's arcs. Never fails: a network where the sink cannot
/// be reached yields a zero flow and an empty trace. Call [`FlowNetwork::reset`] before solving
/// the same network again.
pub fn edmonds_karp<Int: Capacity>(network: &mut FlowNetwork<Int>) -> Solution<Int> {
    let mut total = Int::zero();
    let mut steps = Vec::new();

    while let Some(path) = augmenting_path(network) {
        let bottleneck = match path.iter().map(|&id| network.arc(id).remaining()).min() {
            Some(bottleneck) => bottleneck,
            None => break,
        };
        debug_assert!(bottleneck > Int::zero());

        path.iter().for_each(|&id| network.augment(id, bottleneck));
        // bounded by the source capacity, which `add_edge` keeps from overflowing
        total += bottleneck;

        let transitions = path
            .iter()
            .map(|&id| {
                let arc = network.arc(id);
                (arc.origin(), arc.destination())
            })
            .collect::<Vec<_>>();
        log::debug!(
            "augmenting {:?} with flow {bottleneck}, total {total}",
            transitions
        );

        steps.push(TraceStep::new(
            transitions,
            bottleneck,
            total,
            network.positive_flows(),
        ));
    }

    log::info!(
        "max flow {total} after {} augmentation(s) over {} node(s) and {} edge(s)",
        steps.len(),
        network.node_count(),
        network.edge_count()
    );

    Solution::new(total, steps, network.positive_flows())
}

/// Breadth-first search over arcs with remaining capacity. Returns the arcs of the path found,
/// ordered from source to sink, or `None` once the sink is out of reach.
///
/// Arcs are explored in adjacency order, so the earliest-added arc wins ties.
fn augmenting_path<Int: Capacity>(network: &FlowNetwork<Int>) -> Option<Vec<ArcId>> {
    let (source, sink) = (network.source(), network.sink());
    let mut parent: Vec<Option<ArcId>> = vec![None; network.node_count()];
    let mut visited = vec![false; network.node_count()];
    let mut queue = VecDeque::new();

    visited[source] = true;
    queue.push_back(source);

    while !visited[sink] {
        let u = match queue.pop_front() {
            Some(u) => u,
            None => break,
        };
        log::trace!("bfs: exploring node {u}");

        for &id in network.adjacency(u) {
            let arc = network.arc(id);
            let v = arc.destination();
            if !visited[v] && arc.remaining() > Int::zero() {
                visited[v] = true;
                parent[v] = Some(id);
                queue.push_back(v);
            }
        }
    }

    if !visited[sink] {
        return None;
    }

    // walk back from the sink; the source is the only visited node without a parent arc
    let mut path = Vec::new();
    let mut node = sink;
    while let Some(id) = parent[node] {
        path.push(id);
        node = network.arc(id).origin();
    }
    path.reverse();
    Some(path)
}
