//! Declarative description of a weighted grid.

use crate::grid::{DEFAULT_COST, GridWithWeights};
use crate::location::GridLocation;
use crate::parse::MapError;

/// A single cell with an explicit entry cost.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellWeight {
    pub at: GridLocation,
    pub cost: f64,
}

/// Everything needed to build a [`GridWithWeights`] and pick a route on it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    pub width: i32,
    pub height: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub walls: Vec<GridLocation>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weights: Vec<CellWeight>,
    #[cfg_attr(feature = "serde", serde(default = "default_cost"))]
    pub default_cost: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub start: Option<GridLocation>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub goal: Option<GridLocation>,
}

#[cfg(feature = "serde")]
fn default_cost() -> f64 {
    DEFAULT_COST
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            walls: Vec::new(),
            weights: Vec::new(),
            default_cost: DEFAULT_COST,
            start: None,
            goal: None,
        }
    }
}

/// Cells of the classic 10x10 diagram that cost 5 to enter.
const CLASSIC_FOREST: [(i32, i32); 27] = [
    (3, 4),
    (3, 5),
    (4, 1),
    (4, 2),
    (4, 3),
    (4, 4),
    (4, 5),
    (4, 6),
    (4, 7),
    (4, 8),
    (5, 1),
    (5, 2),
    (5, 3),
    (5, 4),
    (5, 5),
    (5, 6),
    (5, 7),
    (5, 8),
    (6, 2),
    (6, 3),
    (6, 4),
    (6, 5),
    (6, 6),
    (6, 7),
    (7, 3),
    (7, 4),
    (7, 5),
];

impl GridConfig {
    /// The classic 10x10 weighted diagram: a 3x2 wall block at the bottom
    /// left, a cost-5 region in the middle, start (1, 4), goal (8, 3).
    pub fn classic() -> Self {
        let walls = [(1, 7), (1, 8), (2, 7), (2, 8), (3, 7), (3, 8)]
            .into_iter()
            .map(GridLocation::from)
            .collect();
        let weights = CLASSIC_FOREST
            .into_iter()
            .map(|p| CellWeight {
                at: p.into(),
                cost: 5.0,
            })
            .collect();
        Self {
            width: 10,
            height: 10,
            walls,
            weights,
            default_cost: DEFAULT_COST,
            start: Some(GridLocation::new(1, 4)),
            goal: Some(GridLocation::new(8, 3)),
        }
    }

    /// Validate the configuration and build the grid.
    pub fn build(&self) -> Result<GridWithWeights, MapError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(MapError::EmptyMap);
        }
        if !valid_cost(self.default_cost) {
            return Err(MapError::InvalidCost {
                pos: None,
                cost: self.default_cost,
            });
        }

        let mut grid =
            GridWithWeights::new(self.width, self.height).with_default_cost(self.default_cost);

        for &pos in &self.walls {
            if !grid.grid().in_bounds(pos) {
                return Err(MapError::OutOfBounds { pos });
            }
            grid.grid_mut().add_wall(pos);
        }
        for w in &self.weights {
            if !grid.grid().in_bounds(w.at) {
                return Err(MapError::OutOfBounds { pos: w.at });
            }
            if !valid_cost(w.cost) {
                return Err(MapError::InvalidCost {
                    pos: Some(w.at),
                    cost: w.cost,
                });
            }
            grid.set_weight(w.at, w.cost);
        }
        for pos in self.start.iter().chain(self.goal.iter()) {
            if !grid.grid().in_bounds(*pos) {
                return Err(MapError::OutOfBounds { pos: *pos });
            }
        }

        log::debug!(
            "built {}x{} grid: {} walls, {} weighted cells",
            self.width,
            self.height,
            self.walls.len(),
            self.weights.len()
        );
        Ok(grid)
    }
}

fn valid_cost(c: f64) -> bool {
    c.is_finite() && c >= 0.0
}
