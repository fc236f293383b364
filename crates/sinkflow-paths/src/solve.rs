//! Breadth-first distance relaxation from the sink.

use crate::frontier::{FifoFrontier, Frontier};
use crate::graph::{Graph, UNREACHABLE};

/// Counters from one [`Graph::solve_with`] pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Nodes that ended with a finite distance (the sink included).
    pub reachable: usize,
    /// Successful distance decreases, the sink's initial zero included.
    pub relaxations: usize,
}

impl Graph {
    /// Compute every node's step distance to the sink in breadth-first order.
    pub fn solve(&mut self) -> SolveStats {
        self.solve_with(&mut FifoFrontier::default())
    }

    /// Compute every node's step distance to the sink, popping the work
    /// list in whatever order `frontier` chooses.
    ///
    /// Distances are reset first, so solving twice is harmless. Nodes with
    /// no route to the sink keep [`UNREACHABLE`].
    pub fn solve_with<F: Frontier>(&mut self, frontier: &mut F) -> SolveStats {
        for n in self.nodes.iter_mut() {
            n.distance = UNREACHABLE;
        }
        frontier.clear();

        let mut waiting = vec![false; self.nodes.len()];
        let mut relaxations = 1;

        let sink = self.sink;
        self.nodes[sink.0].distance = 0;
        waiting[sink.0] = true;
        frontier.push(sink);

        while let Some(ci) = frontier.pop() {
            waiting[ci.0] = false;
            // Only finite nodes are ever queued, so this cannot overflow.
            let next = self.nodes[ci.0].distance + 1;

            for k in 0..self.nodes[ci.0].neighbours.len() {
                let ni = self.nodes[ci.0].neighbours[k];
                let n = &mut self.nodes[ni.0];
                if n.distance <= next {
                    continue;
                }
                n.distance = next;
                relaxations += 1;
                if !waiting[ni.0] {
                    waiting[ni.0] = true;
                    frontier.push(ni);
                }
            }
        }

        let reachable = self.nodes.iter().filter(|n| n.is_reachable()).count();
        SolveStats {
            reachable,
            relaxations,
        }
    }
}
