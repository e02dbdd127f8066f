//! Weighted grids drawn as text.
//!
//! Each character is one cell:
//!
//! | Char | Meaning |
//! |---|---|
//! | `#` | wall |
//! | `.` | open cell, default cost |
//! | `1`-`9` | open cell entered at that cost |
//! | `A` | start marker, default cost |
//! | `Z` | goal marker, default cost |
//!
//! Lines are separated by `'\n'` and must all have the same width. Leading
//! and trailing whitespace of the whole text is ignored.

use std::fmt;

use crate::grid::GridWithWeights;
use crate::location::GridLocation;

/// Result of [`parse_map`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedMap {
    pub grid: GridWithWeights,
    pub start: Option<GridLocation>,
    pub goal: Option<GridLocation>,
}

/// Parse a text map into a weighted grid plus its optional start and goal.
pub fn parse_map(s: &str) -> Result<ParsedMap, MapError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(MapError::EmptyMap);
    }

    let lines: Vec<&str> = s.lines().collect();
    let width = lines[0].chars().count();
    for (y, line) in lines.iter().enumerate() {
        let found = line.chars().count();
        if found != width {
            return Err(MapError::InconsistentWidth {
                line: y,
                expected: width,
                found,
            });
        }
    }

    let mut grid = GridWithWeights::new(width as i32, lines.len() as i32);
    let mut start = None;
    let mut goal = None;

    for (y, line) in lines.iter().enumerate() {
        for (x, ch) in line.chars().enumerate() {
            let pos = GridLocation::new(x as i32, y as i32);
            match ch {
                '#' => grid.grid_mut().add_wall(pos),
                '.' => {}
                '1'..='9' => {
                    let cost = f64::from(ch as u8 - b'0');
                    grid.set_weight(pos, cost);
                }
                'A' => set_marker(&mut start, ch, pos)?,
                'Z' => set_marker(&mut goal, ch, pos)?,
                _ => return Err(MapError::InvalidChar { ch, pos }),
            }
        }
    }

    log::debug!("parsed {width}x{} map", lines.len());
    Ok(ParsedMap { grid, start, goal })
}

fn set_marker(
    slot: &mut Option<GridLocation>,
    ch: char,
    pos: GridLocation,
) -> Result<(), MapError> {
    if slot.is_some() {
        return Err(MapError::DuplicateMarker { ch, pos });
    }
    *slot = Some(pos);
    Ok(())
}

/// Errors that can occur when building a grid from text or configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    /// The map has no cells.
    EmptyMap,
    /// A line's width differs from the first line's.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the map alphabet.
    InvalidChar { ch: char, pos: GridLocation },
    /// A start or goal marker appears more than once.
    DuplicateMarker { ch: char, pos: GridLocation },
    /// A configured location lies outside the grid.
    OutOfBounds { pos: GridLocation },
    /// A configured cost is negative or not a number.
    InvalidCost { pos: Option<GridLocation>, cost: f64 },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMap => write!(f, "map: no cells"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "map: line {line} is {found} cells wide, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "map contains invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::DuplicateMarker { ch, pos } => {
                write!(f, "map: second \u{201c}{ch}\u{201d} marker at {pos}")
            }
            Self::OutOfBounds { pos } => write!(f, "map: {pos} is outside the grid"),
            Self::InvalidCost { pos: Some(pos), cost } => {
                write!(f, "map: invalid cost {cost} at {pos}")
            }
            Self::InvalidCost { pos: None, cost } => write!(f, "map: invalid default cost {cost}"),
        }
    }
}

impl std::error::Error for MapError {}
