use sinkflow_core::{Point, Range};

use crate::build::{BuildError, MarkerSet};
use crate::graph::{Graph, Node, UNREACHABLE};

/// A fully built navigation graph: adjacency, distances and descent edges.
///
/// Immutable once constructed, so a `FlowField` can be shared between
/// threads and queried concurrently.
#[derive(Debug, Clone)]
pub struct FlowField {
    graph: Graph,
    reachable: usize,
}

impl FlowField {
    /// Build, solve and derive in one pass.
    pub fn build(markers: &[Point], sink: Point) -> Result<Self, BuildError> {
        Graph::build(markers, sink).map(Self::from_graph)
    }

    pub fn from_markers(set: &MarkerSet) -> Result<Self, BuildError> {
        Self::build(&set.markers, set.sink)
    }

    /// Solve and derive descent edges for an already built graph.
    pub fn from_graph(mut graph: Graph) -> Self {
        let stats = graph.solve();
        graph.derive_descent();
        log::debug!(
            "flow field ready: {} nodes, sink {}, {} reachable, {} relaxations",
            graph.len(),
            graph.sink_position(),
            stats.reachable,
            stats.relaxations
        );
        Self {
            graph,
            reachable: stats.reachable,
        }
    }

    #[inline]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    #[inline]
    pub fn sink(&self) -> Point {
        self.graph.sink_position()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Whether a node exists at grid cell `p`.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.graph.contains(p)
    }

    /// Steps from `p` to the sink; [`UNREACHABLE`] when `p` is not a node
    /// or has no route.
    #[inline]
    pub fn distance_at(&self, p: Point) -> u32 {
        self.graph.distance_at(p)
    }

    /// Cells one step closer to the sink than `p`.
    ///
    /// Empty for the sink, for unreachable nodes and for cells that are not
    /// nodes.
    pub fn next_steps(&self, p: Point) -> Vec<Point> {
        match self.graph.id_at(p) {
            Some(id) if self.graph.node(id).is_reachable() => {
                self.graph.descendant_positions(id).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Every node position, in the order markers were first supplied.
    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.graph.nodes().map(|(_, n)| n.position())
    }

    /// Number of nodes with a route to the sink.
    #[inline]
    pub fn reachable_count(&self) -> usize {
        self.reachable
    }

    /// Positions of nodes cut off from the sink.
    pub fn unreachable(&self) -> Vec<Point> {
        self.graph
            .nodes()
            .filter(|(_, n)| n.distance() == UNREACHABLE)
            .map(|(_, n)| n.position())
            .collect()
    }

    /// Largest finite distance in the field.
    pub fn max_distance(&self) -> u32 {
        self.graph
            .nodes()
            .map(|(_, n)| n.distance())
            .filter(|&d| d != UNREACHABLE)
            .max()
            .unwrap_or(0)
    }

    /// Bounding rectangle of all nodes.
    pub fn bounds(&self) -> Range {
        Range::bounding(self.positions())
    }

    pub(crate) fn node_at(&self, p: Point) -> Option<&Node> {
        self.graph.node_at(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_on_small_field() {
        //  S . .
        //  .   x      (x isolated at (3, 1))
        let markers = [
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(2, 0),
            Point::new(0, 1),
            Point::new(3, 1),
        ];
        let ff = FlowField::build(&markers, Point::new(0, 0)).unwrap();
        assert_eq!(ff.len(), 5);
        assert_eq!(ff.sink(), Point::new(0, 0));
        assert!(ff.contains(Point::new(0, 1)));
        assert!(!ff.contains(Point::new(1, 1)));
        assert_eq!(ff.distance_at(Point::new(2, 0)), 2);
        assert_eq!(ff.distance_at(Point::new(9, 9)), UNREACHABLE);
        assert_eq!(ff.next_steps(Point::new(2, 0)), vec![Point::new(1, 0)]);
        assert!(ff.next_steps(Point::new(0, 0)).is_empty());
        assert!(ff.next_steps(Point::new(3, 1)).is_empty());
        assert_eq!(ff.reachable_count(), 4);
        assert_eq!(ff.unreachable(), vec![Point::new(3, 1)]);
        assert_eq!(ff.max_distance(), 2);
        assert_eq!(ff.bounds(), Range::new(0, 0, 4, 2));
        assert_eq!(ff.positions().count(), 5);
    }

    #[test]
    fn build_errors_propagate() {
        assert_eq!(
            FlowField::build(&[], Point::ZERO).unwrap_err(),
            BuildError::EmptyMarkerSet
        );
        let set = MarkerSet::new(vec![Point::new(1, 1)], Point::ZERO);
        assert!(matches!(
            FlowField::from_markers(&set),
            Err(BuildError::SinkNotInSet { .. })
        ));
    }

    #[test]
    fn flow_field_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FlowField>();
    }
}
