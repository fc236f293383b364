//! Level data for sinkflow: ASCII layouts that produce marker sets, and the
//! tower placement rules that consult the navigation graph.

pub mod layout;
pub mod placement;

pub use layout::{Glyphs, Layout, LayoutError};
pub use placement::{PlaceError, Placement};
