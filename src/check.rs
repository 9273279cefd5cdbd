use alloc::format;
use alloc::vec;

use crate::algo::min_cut::min_cut;
use crate::capacity::Capacity;
use crate::error::Error;
use crate::network::FlowNetwork;
use crate::trace::Solution;

/// Verifies that the flow on `network` is a valid maximum flow matching `solution`.
///
/// Checks the capacity bound of every arc, the pairing of each arc with its residual dual, flow
/// conservation at every inner node, that the source emits and the sink absorbs exactly the
/// reported total, and that the total equals the capacity of the residual min cut.
pub fn check<Int: Capacity>(
    network: &FlowNetwork<Int>,
    solution: &Solution<Int>,
) -> Result<(), Error> {
    let violation = |msg| Err(Error::InvariantViolation(msg));

    for (id, arc) in network.arcs().iter().enumerate() {
        let pair = network.arc(arc.pair());
        if arc.remaining() < Int::zero() || (!arc.is_residual() && arc.flow() < Int::zero()) {
            return violation(format!(
                "arc {id} ({} -> {}) carries {} with capacity {}",
                arc.origin(),
                arc.destination(),
                arc.flow(),
                arc.capacity()
            ));
        }
        if arc.flow() != -pair.flow() {
            return violation(format!(
                "arc {id} carries {} but its pair {} carries {}",
                arc.flow(),
                arc.pair(),
                pair.flow()
            ));
        }
    }

    // net outflow per node
    let mut balance = vec![Int::zero(); network.node_count()];
    network.original_arcs().for_each(|arc| {
        balance[arc.origin()] += arc.flow();
        balance[arc.destination()] -= arc.flow();
    });

    let (source, sink) = (network.source(), network.sink());
    if let Some((node, excess)) = balance
        .iter()
        .enumerate()
        .find(|(node, excess)| *node != source && *node != sink && **excess != Int::zero())
    {
        return violation(format!("node {node} is unbalanced by {excess}"));
    }
    if balance[source] != solution.total() || -balance[sink] != solution.total() {
        return violation(format!(
            "source emits {} and sink absorbs {} but the total is {}",
            balance[source],
            -balance[sink],
            solution.total()
        ));
    }

    let cut = min_cut(network);
    if !cut.separates(sink) {
        return violation(format!("sink {sink} is still reachable from the source"));
    }
    if cut.capacity() != solution.total() {
        return violation(format!(
            "min cut capacity {} differs from the total {}",
            cut.capacity(),
            solution.total()
        ));
    }

    log::debug!("     Nodes: {}", network.node_count());
    log::debug!("     Edges: {}", network.edge_count());
    log::debug!("Iterations: {}", solution.steps().len());
    log::debug!("  Max flow: {}", solution.total());
    log::debug!("   Min cut: {}", cut.capacity());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::edmonds_karp::edmonds_karp;

    fn solved() -> (FlowNetwork<i32>, Solution<i32>) {
        let mut network = FlowNetwork::new(4).unwrap();
        for (from, to, capacity) in [(0, 1, 3), (1, 3, 3), (0, 2, 2), (2, 3, 2), (1, 2, 5)] {
            network.add_edge(from, to, capacity).unwrap();
        }
        let solution = edmonds_karp(&mut network);
        (network, solution)
    }

    #[test]
    fn accepts_a_max_flow() {
        let (network, solution) = solved();
        assert_eq!(check(&network, &solution), Ok(()));
    }

    #[test]
    fn rejects_a_wrong_total() {
        let (network, _) = solved();
        let wrong = Solution::new(4, vec![], vec![]);
        assert!(matches!(
            check(&network, &wrong),
            Err(Error::InvariantViolation(_))
        ));
    }

    #[test]
    fn rejects_a_flow_that_is_not_maximal() {
        let mut network = FlowNetwork::new(2).unwrap();
        let id = network.add_edge(0, 1, 5).unwrap();
        network.augment(id, 2);

        let partial = Solution::new(2, vec![], vec![]);
        assert!(matches!(
            check(&network, &partial),
            Err(Error::InvariantViolation(_))
        ));
    }
}
