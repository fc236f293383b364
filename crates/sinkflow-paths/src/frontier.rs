use std::collections::VecDeque;

use rand::{Rng, RngExt};

use crate::graph::NodeId;

/// Work list of nodes awaiting relaxation during [`Graph::solve_with`].
///
/// The solver guarantees that a node is never pushed while it is still
/// waiting, so implementations need no duplicate check. Pop order only
/// changes how many relaxations happen, never the final distances.
///
/// [`Graph::solve_with`]: crate::Graph::solve_with
pub trait Frontier {
    /// Remove every waiting node.
    fn clear(&mut self);
    fn push(&mut self, id: NodeId);
    /// Remove and return some waiting node.
    fn pop(&mut self) -> Option<NodeId>;
}

/// First-in first-out: plain breadth-first order, each node settles on its
/// first visit.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
}

impl Frontier for FifoFrontier {
    fn clear(&mut self) {
        self.queue.clear();
    }

    fn push(&mut self, id: NodeId) {
        self.queue.push_back(id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }
}

/// Last-in first-out: depth-first order, usually with redundant relaxations.
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<NodeId>,
}

impl Frontier for LifoFrontier {
    fn clear(&mut self) {
        self.stack.clear();
    }

    fn push(&mut self, id: NodeId) {
        self.stack.push(id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }
}

/// Pops a uniformly random waiting node.
pub struct RandomFrontier<R: Rng> {
    pub rng: R,
    pending: Vec<NodeId>,
}

impl<R: Rng> RandomFrontier<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            pending: Vec::new(),
        }
    }
}

impl<R: Rng> Frontier for RandomFrontier<R> {
    fn clear(&mut self) {
        self.pending.clear();
    }

    fn push(&mut self, id: NodeId) {
        self.pending.push(id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        if self.pending.is_empty() {
            return None;
        }
        let i = self.rng.random_range(0..self.pending.len());
        Some(self.pending.swap_remove(i))
    }
}
