//! ASCII rendering of grids and search results.
//!
//! Every cell is three characters wide. When several overlays apply to the
//! same cell, the later one in this list wins: cost number, backpointer
//! arrow, path mark `@`, start `A`, goal `Z`, wall `###`.

use std::collections::HashMap;

use wayfind_paths::CameFrom;

use crate::grid::SquareGrid;
use crate::location::GridLocation;

/// Which overlays to draw on top of the bare grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrawStyle<'a> {
    pub number: Option<&'a HashMap<GridLocation, f64>>,
    pub point_to: Option<&'a CameFrom<GridLocation>>,
    pub path: Option<&'a [GridLocation]>,
    pub start: Option<GridLocation>,
    pub goal: Option<GridLocation>,
}

impl<'a> DrawStyle<'a> {
    /// No overlays.
    pub fn new() -> Self {
        Self::default()
    }

    /// Print the number recorded for each cell (e.g. a cost table).
    pub fn number(mut self, costs: &'a HashMap<GridLocation, f64>) -> Self {
        self.number = Some(costs);
        self
    }

    /// Draw an arrow from each cell towards its backpointer.
    pub fn point_to(mut self, came_from: &'a CameFrom<GridLocation>) -> Self {
        self.point_to = Some(came_from);
        self
    }

    /// Mark every cell of `path` with `@`.
    pub fn path(mut self, path: &'a [GridLocation]) -> Self {
        self.path = Some(path);
        self
    }

    pub fn start(mut self, id: GridLocation) -> Self {
        self.start = Some(id);
        self
    }

    pub fn goal(mut self, id: GridLocation) -> Self {
        self.goal = Some(id);
        self
    }
}

/// Render one cell as a three-character string.
pub fn draw_tile(grid: &SquareGrid, id: GridLocation, style: &DrawStyle<'_>) -> String {
    let mut r = String::from(" . ");
    if let Some(&n) = style.number.and_then(|m| m.get(&id)) {
        r = format!(" {:<2}", n.trunc() as i64);
    }
    if let Some(&Some(to)) = style.point_to.and_then(|m| m.get(&id)) {
        let arrow = if to.x == id.x + 1 {
            Some(" > ")
        } else if to.x == id.x - 1 {
            Some(" < ")
        } else if to.y == id.y + 1 {
            Some(" v ")
        } else if to.y == id.y - 1 {
            Some(" ^ ")
        } else {
            None
        };
        if let Some(a) = arrow {
            r = a.to_string();
        }
    }
    if style.path.is_some_and(|p| p.contains(&id)) {
        r = " @ ".to_string();
    }
    if style.start == Some(id) {
        r = " A ".to_string();
    }
    if style.goal == Some(id) {
        r = " Z ".to_string();
    }
    if grid.is_wall(id) {
        r = "###".to_string();
    }
    r
}

/// Render the whole grid, framed by a `___` rule above and a `~~~` rule below.
///
/// Every line, including the last, ends with `'\n'`.
pub fn draw_grid(grid: &SquareGrid, style: &DrawStyle<'_>) -> String {
    let w = grid.width().max(0) as usize;
    let mut out = String::with_capacity((w * 3 + 1) * (grid.height().max(0) as usize + 2));
    out.push_str(&"___".repeat(w));
    out.push('\n');
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            out.push_str(&draw_tile(grid, GridLocation::new(x, y), style));
        }
        out.push('\n');
    }
    out.push_str(&"~~~".repeat(w));
    out.push('\n');
    out
}
