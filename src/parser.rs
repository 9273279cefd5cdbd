use alloc::format;
use alloc::string::{String, ToString};
use core::fmt::Display;

use crate::capacity::Capacity;
use crate::error::Error;
use crate::network::{FlowNetwork, NodeId};

/// Largest node count [`parse_network`] accepts.
pub const MAX_NODES: usize = 1 << 20;

/// Builds a network from whitespace-delimited text: a node count followed by `from to capacity`
/// triples up to the end of the input.
///
/// Node counts above [`MAX_NODES`] are rejected before anything is allocated.
///
/// ```text
/// 4
/// 0 1 3
/// 1 3 3
/// 0 2 2  2 3 2
/// ```
pub fn parse_network<Int: Capacity>(input: &str) -> Result<FlowNetwork<Int>, Error> {
    let mut tokens = input
        .split_whitespace()
        .enumerate()
        .map(|(i, token)| (i + 1, token));

    let (position, token) = tokens
        .next()
        .ok_or_else(|| malformed(1, "", "missing node count"))?;
    let nodes = parse_index(position, token, "node count")?;
    if nodes > MAX_NODES {
        return Err(malformed(
            position,
            token,
            format!("node count exceeds the limit of {MAX_NODES}"),
        ));
    }
    let mut network = FlowNetwork::new(nodes).map_err(|e| malformed(position, token, e))?;

    while let Some((position, from)) = tokens.next() {
        let mut next = |field: &str| {
            tokens.next().ok_or_else(|| {
                malformed(position, from, format!("incomplete edge, missing {field}"))
            })
        };
        let (to_position, to) = next("target node")?;
        let (capacity_position, capacity) = next("capacity")?;

        let from_node = parse_index(position, from, "node index")?;
        let to_node = parse_index(to_position, to, "node index")?;
        let capacity: Int = capacity
            .parse()
            .map_err(|_| malformed(capacity_position, capacity, "expected an integer capacity"))?;

        network
            .add_edge(from_node, to_node, capacity)
            .map_err(|e| malformed(position, from, e))?;
    }

    log::debug!(
        "parsed network with {} node(s) and {} edge(s)",
        network.node_count(),
        network.edge_count()
    );
    Ok(network)
}

fn parse_index(position: usize, token: &str, what: &str) -> Result<NodeId, Error> {
    let value: i64 = token
        .parse()
        .map_err(|_| malformed(position, token, format!("expected an integer {what}")))?;
    NodeId::try_from(value).map_err(|_| malformed(position, token, format!("negative {what}")))
}

fn malformed(position: usize, token: &str, reason: impl Display) -> Error {
    Error::MalformedInput {
        position,
        token: String::from(token),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn reason(err: Error) -> String {
        match err {
            Error::MalformedInput { reason, .. } => reason,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parses_nodes_and_edges_across_lines() {
        let network = parse_network::<i32>("4\n0 1 3\n1 3 3\n0 2 2  2 3 2\n").unwrap();

        assert_eq!(network.node_count(), 4);
        assert_eq!(network.edge_count(), 4);
        let edges: Vec<_> = network
            .original_arcs()
            .map(|arc| (arc.origin(), arc.destination(), arc.capacity()))
            .collect();
        assert_eq!(edges, [(0, 1, 3), (1, 3, 3), (0, 2, 2), (2, 3, 2)]);
    }

    #[test]
    fn node_count_only_is_a_network_without_edges() {
        let network = parse_network::<i64>("  7 \n").unwrap();
        assert_eq!(network.node_count(), 7);
        assert_eq!(network.edge_count(), 0);
    }

    #[test]
    fn rejects_missing_or_bad_node_count() {
        assert_eq!(reason(parse_network::<i32>("").unwrap_err()), "missing node count");
        assert_eq!(
            parse_network::<i32>("four 0 1 2").unwrap_err(),
            Error::MalformedInput {
                position: 1,
                token: "four".to_string(),
                reason: "expected an integer node count".to_string(),
            }
        );
        assert_eq!(reason(parse_network::<i32>("-3").unwrap_err()), "negative node count");
        assert_eq!(
            parse_network::<i32>("99999999999 0 1 2").unwrap_err(),
            Error::MalformedInput {
                position: 1,
                token: "99999999999".to_string(),
                reason: "node count exceeds the limit of 1048576".to_string(),
            }
        );
        assert_eq!(parse_network::<i32>("1048576").unwrap().node_count(), MAX_NODES);
        assert_eq!(
            reason(parse_network::<i32>("1").unwrap_err()),
            Error::InvalidSize(1).to_string()
        );
    }

    #[test]
    fn rejects_bad_edges() {
        let err = parse_network::<i32>("3\n0 1 2\n1 x 2").unwrap_err();
        assert_eq!(
            err,
            Error::MalformedInput {
                position: 6,
                token: "x".to_string(),
                reason: "expected an integer node index".to_string(),
            }
        );

        assert_eq!(
            reason(parse_network::<i32>("3\n0 -1 2").unwrap_err()),
            "negative node index"
        );
        assert_eq!(
            reason(parse_network::<i32>("3\n0 1 2.5").unwrap_err()),
            "expected an integer capacity"
        );
        assert_eq!(
            reason(parse_network::<i32>("3\n0 3 2").unwrap_err()),
            Error::NodeOutOfRange {
                from: 0,
                to: 3,
                nodes: 3
            }
            .to_string()
        );
        assert_eq!(
            reason(parse_network::<i32>("3\n0 2 -2").unwrap_err()),
            Error::NegativeCapacity { from: 0, to: 2 }.to_string()
        );
    }

    #[test]
    fn rejects_incomplete_trailing_edge() {
        assert_eq!(
            parse_network::<i32>("3\n0 1 2\n1 2").unwrap_err(),
            Error::MalformedInput {
                position: 5,
                token: "1".to_string(),
                reason: "incomplete edge, missing capacity".to_string(),
            }
        );
        assert_eq!(
            reason(parse_network::<i32>("3 1").unwrap_err()),
            "incomplete edge, missing target node"
        );
    }
}
