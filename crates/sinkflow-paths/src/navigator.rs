use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use rand::Rng;
use sinkflow_core::Point;

use crate::build::{BuildError, MarkerSet};
use crate::flowfield::FlowField;
use crate::graph::UNREACHABLE;
use crate::query::PathError;

/// Owns the marker configuration and the currently published [`FlowField`].
///
/// Usage is two-phase: edit the configuration ([`configure`](Self::configure),
/// [`insert_marker`](Self::insert_marker), [`remove_marker`](Self::remove_marker)),
/// then call [`build`](Self::build). A build constructs a complete new field
/// before swapping it in, so concurrent queries see either the old or the
/// new field in full. A failed build leaves the published field untouched.
#[derive(Debug, Default)]
pub struct Navigator {
    config: MarkerSet,
    current: RwLock<Option<Arc<FlowField>>>,
    generation: AtomicU64,
}

impl Navigator {
    /// A navigator with no markers and nothing built.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_markers(config: MarkerSet) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Replace the whole configuration. Takes effect on the next build.
    pub fn configure(&mut self, config: MarkerSet) {
        self.config = config;
    }

    pub fn config(&self) -> &MarkerSet {
        &self.config
    }

    pub fn markers(&self) -> &[Point] {
        &self.config.markers
    }

    pub fn set_sink(&mut self, sink: Point) {
        self.config.sink = sink;
    }

    /// Add a marker. Returns `false` if `p` was already configured.
    pub fn insert_marker(&mut self, p: Point) -> bool {
        if self.config.markers.contains(&p) {
            return false;
        }
        self.config.markers.push(p);
        true
    }

    /// Remove a marker. Returns `false` if `p` was not configured.
    pub fn remove_marker(&mut self, p: Point) -> bool {
        let before = self.config.markers.len();
        self.config.markers.retain(|&m| m != p);
        self.config.markers.len() != before
    }

    /// Build a fresh field from the current configuration and publish it.
    pub fn build(&self) -> Result<Arc<FlowField>, BuildError> {
        match FlowField::from_markers(&self.config) {
            Ok(field) => Ok(self.publish(field)),
            Err(err) => {
                log::warn!("flow field rebuild failed, keeping previous field: {err}");
                Err(err)
            }
        }
    }

    /// Publish a field built elsewhere, replacing the current one.
    ///
    /// The generation counter moves while the write lock is held, so a
    /// reader that sees the new field also sees its generation.
    pub fn publish(&self, field: FlowField) -> Arc<FlowField> {
        let field = Arc::new(field);
        let generation = {
            let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
            *current = Some(field.clone());
            self.generation.fetch_add(1, Ordering::AcqRel) + 1
        };
        log::debug!("published flow field generation {generation}");
        field
    }

    /// The currently published field, if any. Holding the returned `Arc`
    /// keeps that generation alive across later rebuilds.
    pub fn snapshot(&self) -> Option<Arc<FlowField>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether a build has completed.
    pub fn is_built(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Number of fields published so far.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Whether the published field has a node at `p`. `false` before the
    /// first build.
    pub fn contains(&self, p: Point) -> bool {
        self.snapshot().is_some_and(|f| f.contains(p))
    }

    /// Distance from `p` in the published field, [`UNREACHABLE`] if unknown.
    pub fn distance_at(&self, p: Point) -> u32 {
        self.snapshot().map_or(UNREACHABLE, |f| f.distance_at(p))
    }

    /// Shortest path from `start` in the published field.
    pub fn path(&self, start: Point, rng: &mut impl Rng) -> Result<Vec<Point>, PathError> {
        let field = self.snapshot().ok_or(PathError::NotBuilt)?;
        field.path(start, rng)
    }
}
