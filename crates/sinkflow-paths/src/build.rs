//! Graph construction from grid markers.

use std::collections::HashMap;
use std::fmt;

use sinkflow_core::Point;

use crate::graph::{Graph, Node, NodeId};

/// Engine configuration: the navigable cells and the destination cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarkerSet {
    pub markers: Vec<Point>,
    pub sink: Point,
}

impl MarkerSet {
    pub fn new(markers: Vec<Point>, sink: Point) -> Self {
        Self { markers, sink }
    }
}

/// Errors that can occur when building a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// No markers were supplied.
    EmptyMarkerSet,
    /// The sink position is not one of the markers.
    SinkNotInSet { sink: Point },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMarkerSet => write!(f, "cannot build a graph from an empty marker set"),
            Self::SinkNotInSet { sink } => write!(f, "sink {sink} is not one of the markers"),
        }
    }
}

impl std::error::Error for BuildError {}

impl Graph {
    /// Build the adjacency graph for `markers` with the node at `sink` as
    /// destination.
    ///
    /// Duplicate marker positions collapse into one node; the first
    /// occurrence fixes the node's arena slot. Distances start at
    /// [`UNREACHABLE`](crate::UNREACHABLE) and descendant sets empty; run
    /// [`solve`](Self::solve) and [`derive_descent`](Self::derive_descent)
    /// (or use [`FlowField`](crate::FlowField)) before walking paths.
    pub fn build(markers: &[Point], sink: Point) -> Result<Self, BuildError> {
        if markers.is_empty() {
            return Err(BuildError::EmptyMarkerSet);
        }

        let mut nodes: Vec<Node> = Vec::with_capacity(markers.len());
        let mut index: HashMap<Point, NodeId> = HashMap::with_capacity(markers.len());
        for &p in markers {
            index.entry(p).or_insert_with(|| {
                nodes.push(Node::new(p));
                NodeId(nodes.len() - 1)
            });
        }

        let Some(&sink_id) = index.get(&sink) else {
            return Err(BuildError::SinkNotInSet { sink });
        };

        // Each node only records its own side of an edge; the node on the
        // other side adds the reverse entry when its turn comes.
        for node in nodes.iter_mut() {
            for q in node.pos.checked_neighbors_4() {
                if let Some(&other) = index.get(&q) {
                    node.neighbours.push(other);
                }
            }
        }

        Ok(Self {
            nodes,
            index,
            sink: sink_id,
        })
    }

    /// Build from a [`MarkerSet`].
    pub fn from_markers(set: &MarkerSet) -> Result<Self, BuildError> {
        Self::build(&set.markers, set.sink)
    }
}
