use alloc::string::String;

use displaydoc::Display;

#[derive(Clone, Debug, PartialEq, Eq, Display)]
pub enum Error {
    /// Invalid network size {0}, expected at least two nodes (a source and a sink)
    InvalidSize(usize),
    /// Invalid edge {from} -> {to}, node index out of range for a network of {nodes} nodes
    NodeOutOfRange {
        from: usize,
        to: usize,
        nodes: usize,
    },
    /// Invalid edge {from} -> {to}, expected non-negative capacity
    NegativeCapacity { from: usize, to: usize },
    /// Edge {from} -> {to} overflows the total capacity leaving the source
    CapacityOverflow { from: usize, to: usize },
    /// Malformed input at token {position} (`{token}`): {reason}
    MalformedInput {
        position: usize,
        token: String,
        reason: String,
    },
    /// Flow invariant violated: {0}
    InvariantViolation(String),
}
