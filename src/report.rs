use core::fmt::{self, Display, Formatter};

use crate::capacity::Capacity;
use crate::network::FlowNetwork;
use crate::trace::Solution;

/// Console rendering of a solved network.
pub struct Report<'a, Int> {
    input: Option<&'a str>,
    network: &'a FlowNetwork<Int>,
    solution: &'a Solution<Int>,
    show_steps: bool,
}

impl<'a, Int: Capacity> Report<'a, Int> {
    pub fn new(network: &'a FlowNetwork<Int>, solution: &'a Solution<Int>) -> Self {
        Self {
            input: None,
            network,
            solution,
            show_steps: true,
        }
    }

    /// Names the file the network was read from in the header.
    pub fn with_input(mut self, input: &'a str) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_steps(mut self, show_steps: bool) -> Self {
        self.show_steps = show_steps;
        self
    }
}

impl<Int: Capacity> Display for Report<'_, Int> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(input) = self.input {
            writeln!(f, "Reading network from file: {input}")?;
        }
        writeln!(f, "Network has {} nodes.", self.network.node_count())?;
        writeln!(
            f,
            "Source: {}, Sink: {}",
            self.network.source(),
            self.network.sink()
        )?;

        if self.show_steps {
            writeln!(f)?;
            writeln!(f, "=== Intermediate Steps ===")?;
            for step in self.solution.steps() {
                writeln!(f, "{step}")?;
            }
        }

        writeln!(f)?;
        writeln!(f, "=== Final Result ===")?;
        writeln!(f, "Maximum flow: {}", self.solution.total())?;
        write!(f, "Flow details:")?;
        for flow in self.solution.flows() {
            write!(f, "\n{flow}")?;
        }
        Ok(())
    }
}
