//! Path queries: walking descent edges down to the sink.

use std::fmt;

use rand::{Rng, RngExt};
use sinkflow_core::Point;

use crate::flowfield::FlowField;

/// Errors returned by path queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// No flow field has been published yet.
    NotBuilt,
    /// The start cell is not a node of the graph.
    StartNotInGraph { start: Point },
    /// The start cell has no descending route to the sink.
    NoRoute { start: Point },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotBuilt => write!(f, "no flow field has been built yet"),
            Self::StartNotInGraph { start } => write!(f, "start {start} is not a graph node"),
            Self::NoRoute { start } => write!(f, "no route from {start} to the sink"),
        }
    }
}

impl std::error::Error for PathError {}

impl FlowField {
    /// Shortest path from `start` to the sink, both ends included.
    ///
    /// Wherever several neighbours are one step closer to the sink, one of
    /// them is chosen uniformly with `rng`; every result still has exactly
    /// `distance_at(start) + 1` cells.
    pub fn path(&self, start: Point, rng: &mut impl Rng) -> Result<Vec<Point>, PathError> {
        let graph = self.graph();
        let Some(mut cur) = graph.id_at(start) else {
            return Err(PathError::StartNotInGraph { start });
        };
        let first = graph.node(cur);
        if !first.is_reachable() {
            return Err(PathError::NoRoute { start });
        }

        let mut path = Vec::with_capacity(first.distance() as usize + 1);
        loop {
            let node = graph.node(cur);
            path.push(node.position());
            if cur == graph.sink() {
                break;
            }
            let down = node.descendants();
            if down.is_empty() {
                return Err(PathError::NoRoute { start });
            }
            cur = down[rng.random_range(0..down.len())];
        }

        log::trace!("path from {start}: {} cells", path.len());
        Ok(path)
    }

    /// [`path`](Self::path) using the thread-local generator.
    pub fn path_with_thread_rng(&self, start: Point) -> Result<Vec<Point>, PathError> {
        self.path(start, &mut rand::rng())
    }

    /// Whether a query from `start` would succeed.
    pub fn has_route(&self, start: Point) -> bool {
        self.node_at(start).is_some_and(|n| n.is_reachable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn straight_line_path() {
        let line = [Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)];
        let ff = FlowField::build(&line, Point::new(2, 0)).unwrap();
        let path = ff.path(Point::new(0, 0), &mut rng()).unwrap();
        assert_eq!(path, line);
    }

    #[test]
    fn path_from_sink_is_just_the_sink() {
        let ff = FlowField::build(&[Point::new(4, 4)], Point::new(4, 4)).unwrap();
        assert_eq!(
            ff.path(Point::new(4, 4), &mut rng()).unwrap(),
            vec![Point::new(4, 4)]
        );
    }

    #[test]
    fn cells_on_opposite_i32_edges_are_not_linked() {
        let max = Point::new(i32::MAX, 0);
        let min = Point::new(i32::MIN, 0);
        let ff = FlowField::build(&[max, Point::new(i32::MAX - 1, 0), min], max).unwrap();
        assert_eq!(
            ff.path(Point::new(i32::MAX - 1, 0), &mut rng()).unwrap(),
            vec![Point::new(i32::MAX - 1, 0), max]
        );
        assert_eq!(
            ff.path(min, &mut rng()).unwrap_err(),
            PathError::NoRoute { start: min }
        );
    }

    #[test]
    fn unknown_start() {
        let ff = FlowField::build(&[Point::ZERO], Point::ZERO).unwrap();
        let err = ff.path(Point::new(1, 0), &mut rng()).unwrap_err();
        assert_eq!(
            err,
            PathError::StartNotInGraph {
                start: Point::new(1, 0)
            }
        );
        assert!(!ff.has_route(Point::new(1, 0)));
    }

    #[test]
    fn isolated_start_has_no_route() {
        let markers = [Point::new(0, 0), Point::new(1, 0), Point::new(3, 0)];
        let ff = FlowField::build(&markers, Point::new(0, 0)).unwrap();
        let err = ff.path(Point::new(3, 0), &mut rng()).unwrap_err();
        assert_eq!(
            err,
            PathError::NoRoute {
                start: Point::new(3, 0)
            }
        );
        assert_eq!(err.to_string(), "no route from (3, 0) to the sink");
        assert!(!ff.has_route(Point::new(3, 0)));
        assert!(ff.has_route(Point::new(1, 0)));
    }

    #[test]
    fn unreachable_island_of_several_cells() {
        let markers = [
            Point::new(0, 0),
            Point::new(5, 0),
            Point::new(6, 0),
            Point::new(6, 1),
        ];
        let ff = FlowField::build(&markers, Point::new(0, 0)).unwrap();
        for p in [Point::new(5, 0), Point::new(6, 0), Point::new(6, 1)] {
            assert_eq!(ff.path(p, &mut rng()), Err(PathError::NoRoute { start: p }));
        }
    }

    #[test]
    fn paths_are_shortest_and_loop_free() {
        let markers: Vec<Point> = (0..5)
            .flat_map(|y| (0..5).map(move |x| Point::new(x, y)))
            .collect();
        let ff = FlowField::build(&markers, Point::new(2, 2)).unwrap();
        let mut r = rng();
        for &start in &markers {
            let path = ff.path(start, &mut r).unwrap();
            assert_eq!(path.len(), ff.distance_at(start) as usize + 1);
            assert_eq!(path[0], start);
            assert_eq!(*path.last().unwrap(), Point::new(2, 2));
            let unique: HashSet<_> = path.iter().collect();
            assert_eq!(unique.len(), path.len());
            for w in path.windows(2) {
                assert!(w[0].is_adjacent(w[1]));
                assert_eq!(ff.distance_at(w[0]), ff.distance_at(w[1]) + 1);
            }
        }
    }

    #[test]
    fn thread_rng_variant() {
        let ff = FlowField::build(&[Point::ZERO, Point::new(0, 1)], Point::ZERO).unwrap();
        assert_eq!(ff.path_with_thread_rng(Point::new(0, 1)).unwrap().len(), 2);
    }
}
