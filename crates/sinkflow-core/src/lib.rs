//! **sinkflow-core** — grid geometry for the sinkflow pathfinding crates.
//!
//! Every navigable cell of a level is addressed by a [`Point`]; a [`Range`]
//! describes the rectangular extent of a level or marker set.

pub mod geom;

pub use geom::{CARDINALS, Point, Range};
