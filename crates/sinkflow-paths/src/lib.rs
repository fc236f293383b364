//! Flow-field pathfinding toward a single sink.
//!
//! A level supplies a sparse set of navigable grid cells (markers) and one
//! destination cell (the sink). From those this crate:
//!
//! - wires a 4-directional adjacency graph ([`Graph::build`]),
//! - relaxes a breadth-first distance field out of the sink ([`Graph::solve`]),
//! - keeps only the edges that strictly descend toward the sink
//!   ([`Graph::derive_descent`]),
//! - answers shortest-path queries by walking those edges, breaking ties
//!   at random ([`FlowField::path`]).
//!
//! [`FlowField`] bundles the three build steps into one immutable value;
//! [`Navigator`] owns the marker configuration and publishes freshly built
//! fields atomically so that queries never see a half-built graph.
//!
//! # Example
//!
//! ```
//! use sinkflow_core::Point;
//! use sinkflow_paths::FlowField;
//!
//! let line = [Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)];
//! let field = FlowField::build(&line, Point::new(2, 0)).unwrap();
//! let path = field.path(Point::new(0, 0), &mut rand::rng()).unwrap();
//! assert_eq!(path, line);
//! ```

mod build;
mod descent;
mod flowfield;
mod frontier;
mod graph;
mod navigator;
mod query;
mod solve;

pub use build::{BuildError, MarkerSet};
pub use flowfield::FlowField;
pub use frontier::{FifoFrontier, Frontier, LifoFrontier, RandomFrontier};
pub use graph::{Graph, Node, NodeId, UNREACHABLE};
pub use navigator::Navigator;
pub use query::PathError;
pub use solve::SolveStats;
