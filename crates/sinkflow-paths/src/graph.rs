use std::collections::HashMap;

use sinkflow_core::Point;

/// Sentinel distance for nodes with no route to the sink.
///
/// Larger than any reachable distance, so `finite < UNREACHABLE` always holds.
pub const UNREACHABLE: u32 = u32::MAX;

/// Index of a node inside its [`Graph`].
///
/// Ids are only meaningful for the graph that produced them; a rebuild
/// produces a fresh id space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the graph's arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A graph vertex bound to one grid cell.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) pos: Point,
    pub(crate) neighbours: Vec<NodeId>,
    pub(crate) descendants: Vec<NodeId>,
    pub(crate) distance: u32,
}

impl Node {
    pub(crate) fn new(pos: Point) -> Self {
        Self {
            pos,
            neighbours: Vec::with_capacity(4),
            descendants: Vec::new(),
            distance: UNREACHABLE,
        }
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.pos
    }

    /// Every 4-adjacent node present in the graph. Symmetric.
    #[inline]
    pub fn neighbours(&self) -> &[NodeId] {
        &self.neighbours
    }

    /// Neighbours with a strictly smaller distance.
    ///
    /// Empty until [`Graph::derive_descent`] has run.
    #[inline]
    pub fn descendants(&self) -> &[NodeId] {
        &self.descendants
    }

    /// Step count to the sink, or [`UNREACHABLE`].
    #[inline]
    pub fn distance(&self) -> u32 {
        self.distance
    }

    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.distance != UNREACHABLE
    }
}

/// Navigation graph over a set of grid markers with one designated sink.
///
/// Nodes live in an arena indexed by [`NodeId`]; a position index maps each
/// occupied cell to its node.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) index: HashMap<Point, NodeId>,
    pub(crate) sink: NodeId,
}

impl Graph {
    /// Number of nodes (unique marker cells).
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false` for a successfully built graph; the sink is a node.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn sink(&self) -> NodeId {
        self.sink
    }

    #[inline]
    pub fn sink_position(&self) -> Point {
        self.nodes[self.sink.0].pos
    }

    /// Panics if `id` belongs to another graph and is out of bounds.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    #[inline]
    pub fn id_at(&self, p: Point) -> Option<NodeId> {
        self.index.get(&p).copied()
    }

    #[inline]
    pub fn node_at(&self, p: Point) -> Option<&Node> {
        self.id_at(p).map(|id| &self.nodes[id.0])
    }

    /// Whether a node exists at grid cell `p`.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.index.contains_key(&p)
    }

    /// Iterate over all nodes in arena order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Distance of the node at `p`, or [`UNREACHABLE`] when `p` is not a node.
    pub fn distance_at(&self, p: Point) -> u32 {
        self.node_at(p).map_or(UNREACHABLE, Node::distance)
    }

    /// Positions of the neighbours of `id`.
    pub fn neighbour_positions(&self, id: NodeId) -> impl Iterator<Item = Point> + '_ {
        self.nodes[id.0]
            .neighbours
            .iter()
            .map(|n| self.nodes[n.0].pos)
    }

    /// Positions of the descendants of `id`.
    pub fn descendant_positions(&self, id: NodeId) -> impl Iterator<Item = Point> + '_ {
        self.nodes[id.0]
            .descendants
            .iter()
            .map(|n| self.nodes[n.0].pos)
    }
}
