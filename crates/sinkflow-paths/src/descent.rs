use crate::graph::{Graph, NodeId};

impl Graph {
    /// Rebuild every node's descendant set: the neighbours whose distance is
    /// strictly smaller than its own.
    ///
    /// Must run after [`solve`](Self::solve). The sink ends with no
    /// descendants. Adjacency is symmetric, so after a full solve an
    /// unreachable node only borders other unreachable nodes and gets none
    /// either; [`FlowField::path`](crate::FlowField::path) rejects
    /// unreachable starts before looking at descendants regardless.
    pub fn derive_descent(&mut self) {
        for i in 0..self.nodes.len() {
            let own = self.nodes[i].distance;
            let down: Vec<NodeId> = self.nodes[i]
                .neighbours
                .iter()
                .copied()
                .filter(|n| self.nodes[n.0].distance < own)
                .collect();
            self.nodes[i].descendants = down;
        }
    }
}
