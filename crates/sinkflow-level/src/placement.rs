//! Tower placement rules.
//!
//! Towers go on buildable ground only; path cells stay free so the
//! navigation graph never loses a node to a tower. The base tower standing
//! on the sink is placed at construction and cannot be removed.

use std::collections::HashSet;
use std::fmt;

use sinkflow_core::Point;
use sinkflow_paths::Navigator;

use crate::layout::Layout;

/// Errors returned by [`Placement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    /// The navigator has not built a flow field yet.
    NotBuilt,
    /// A tower already stands on the cell.
    Occupied(Point),
    /// The cell is a navigation node.
    CellOnPath(Point),
    /// The cell is not buildable ground.
    NotBuildable(Point),
    /// No tower stands on the cell.
    NoTower(Point),
    /// The tower on the cell cannot be removed.
    Permanent(Point),
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotBuilt => write!(f, "navigation is not built yet"),
            Self::Occupied(p) => write!(f, "a tower already stands at {p}"),
            Self::CellOnPath(p) => write!(f, "{p} is on the enemy path"),
            Self::NotBuildable(p) => write!(f, "{p} is not buildable ground"),
            Self::NoTower(p) => write!(f, "no tower at {p}"),
            Self::Permanent(p) => write!(f, "the tower at {p} cannot be removed"),
        }
    }
}

impl std::error::Error for PlaceError {}

/// Tower occupancy for one level.
#[derive(Debug, Clone)]
pub struct Placement {
    buildable: HashSet<Point>,
    towers: HashSet<Point>,
    base: Point,
}

impl Placement {
    /// Empty placement for `layout`, with the base tower on its sink.
    pub fn new(layout: &Layout) -> Self {
        let base = layout.sink();
        Self {
            buildable: layout.buildable().iter().copied().collect(),
            towers: HashSet::from([base]),
            base,
        }
    }

    /// The permanent tower on the sink.
    pub fn base(&self) -> Point {
        self.base
    }

    pub fn has_tower(&self, p: Point) -> bool {
        self.towers.contains(&p)
    }

    /// All towers, the base included, in no particular order.
    pub fn towers(&self) -> impl Iterator<Item = Point> + '_ {
        self.towers.iter().copied()
    }

    /// Number of towers, the base included.
    pub fn len(&self) -> usize {
        self.towers.len()
    }

    /// Always `false`: the base tower is never removed.
    pub fn is_empty(&self) -> bool {
        self.towers.is_empty()
    }

    /// Check whether a tower could go on `p` right now.
    pub fn can_place(&self, nav: &Navigator, p: Point) -> Result<(), PlaceError> {
        if self.towers.contains(&p) {
            return Err(PlaceError::Occupied(p));
        }
        if !nav.is_built() {
            return Err(PlaceError::NotBuilt);
        }
        if nav.contains(p) {
            return Err(PlaceError::CellOnPath(p));
        }
        if !self.buildable.contains(&p) {
            return Err(PlaceError::NotBuildable(p));
        }
        Ok(())
    }

    /// Place a tower on `p`.
    pub fn place(&mut self, nav: &Navigator, p: Point) -> Result<(), PlaceError> {
        self.can_place(nav, p)?;
        self.towers.insert(p);
        log::debug!("tower placed at {p}");
        Ok(())
    }

    /// Remove the tower on `p`.
    pub fn remove(&mut self, p: Point) -> Result<(), PlaceError> {
        if p == self.base {
            return Err(PlaceError::Permanent(p));
        }
        if !self.towers.remove(&p) {
            return Err(PlaceError::NoTower(p));
        }
        log::debug!("tower removed from {p}");
        Ok(())
    }

    /// Buildable cells with no tower yet.
    pub fn free_cells(&self) -> Vec<Point> {
        let mut free: Vec<Point> = self
            .buildable
            .iter()
            .copied()
            .filter(|p| !self.towers.contains(p))
            .collect();
        free.sort();
        free
    }
}
