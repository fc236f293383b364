//! Levels described as ASCII art.
//!
//! Every character of a [`Layout`] is one grid cell. Path cells become
//! navigation markers, one of them is the sink (the defended base), spawn
//! cells are path cells where enemies enter, and ground cells are where
//! towers may go.

use std::fmt;

use sinkflow_core::{Point, Range};
use sinkflow_paths::MarkerSet;

/// Characters understood by [`Layout::parse_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Glyphs {
    /// Walkable path cell.
    pub path: char,
    /// Walkable cell where enemies spawn.
    pub spawn: char,
    /// Walkable cell holding the base; exactly one per layout.
    pub sink: char,
    /// Non-walkable cell that accepts towers.
    pub ground: char,
    /// Nothing: neither walkable nor buildable.
    pub void: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            path: '.',
            spawn: 'S',
            sink: 'X',
            ground: '#',
            void: ' ',
        }
    }
}

/// A parsed level.
#[derive(Debug, Clone)]
pub struct Layout {
    markers: MarkerSet,
    spawns: Vec<Point>,
    buildable: Vec<Point>,
    size: Point,
}

impl Layout {
    /// Parse with the default [`Glyphs`].
    pub fn parse(s: &str) -> Result<Self, LayoutError> {
        Self::parse_with(s, &Glyphs::default())
    }

    /// Parse `s` line by line; `(0, 0)` is the first character of the first
    /// line.
    ///
    /// Blank lines before and after the art are ignored. All remaining lines
    /// must have the same width, and exactly one sink glyph must appear.
    pub fn parse_with(s: &str, glyphs: &Glyphs) -> Result<Self, LayoutError> {
        let s = s.trim_matches(|c| c == '\n' || c == '\r');
        if s.is_empty() {
            return Err(LayoutError::Empty);
        }

        let mut markers = Vec::new();
        let mut spawns = Vec::new();
        let mut buildable = Vec::new();
        let mut sink: Option<Point> = None;
        let mut width: Option<i32> = None;
        let mut height = 0;

        for (y, line) in s.lines().enumerate() {
            let y = y as i32;
            let mut x = 0;
            for ch in line.chars() {
                let p = Point::new(x, y);
                if ch == glyphs.path {
                    markers.push(p);
                } else if ch == glyphs.spawn {
                    markers.push(p);
                    spawns.push(p);
                } else if ch == glyphs.sink {
                    if let Some(first) = sink {
                        return Err(LayoutError::MultipleSinks { first, second: p });
                    }
                    sink = Some(p);
                    markers.push(p);
                } else if ch == glyphs.ground {
                    buildable.push(p);
                } else if ch != glyphs.void {
                    return Err(LayoutError::InvalidGlyph { ch, pos: p });
                }
                x += 1;
            }
            match width {
                None => width = Some(x),
                Some(w) if w != x => {
                    return Err(LayoutError::InconsistentSize {
                        line: y,
                        expected: w,
                        found: x,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let sink = sink.ok_or(LayoutError::MissingSink)?;
        Ok(Self {
            markers: MarkerSet::new(markers, sink),
            spawns,
            buildable,
            size: Point::new(width.unwrap_or(0), height),
        })
    }

    /// Navigation input: every walkable cell and the sink.
    pub fn marker_set(&self) -> &MarkerSet {
        &self.markers
    }

    pub fn markers(&self) -> &[Point] {
        &self.markers.markers
    }

    pub fn sink(&self) -> Point {
        self.markers.sink
    }

    pub fn spawns(&self) -> &[Point] {
        &self.spawns
    }

    /// Cells that accept towers, in row-major order.
    pub fn buildable(&self) -> &[Point] {
        &self.buildable
    }

    /// (width, height) in cells.
    pub fn size(&self) -> Point {
        self.size
    }

    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.size.x, self.size.y)
    }
}

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The text contains no lines.
    Empty,
    /// A line's width differs from the first line's.
    InconsistentSize { line: i32, expected: i32, found: i32 },
    /// A character outside the glyph set.
    InvalidGlyph { ch: char, pos: Point },
    /// No sink glyph found.
    MissingSink,
    /// More than one sink glyph found.
    MultipleSinks { first: Point, second: Point },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "layout: empty"),
            Self::InconsistentSize {
                line,
                expected,
                found,
            } => write!(
                f,
                "layout: line {line} is {found} cells wide, expected {expected}"
            ),
            Self::InvalidGlyph { ch, pos } => {
                write!(f, "layout contains invalid glyph \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MissingSink => write!(f, "layout: no sink"),
            Self::MultipleSinks { first, second } => {
                write!(f, "layout: second sink at {second}, first at {first}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
