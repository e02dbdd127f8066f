//! Rectangular grids with walls, optionally weighted.

use std::collections::{HashMap, HashSet};

use wayfind_paths::{Graph, WeightedGraph};

use crate::location::GridLocation;

/// Cost of entering a cell with no explicit weight.
pub const DEFAULT_COST: f64 = 1.0;

/// A `width` x `height` grid with 4-way movement and impassable walls.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareGrid {
    width: i32,
    height: i32,
    walls: HashSet<GridLocation>,
}

impl SquareGrid {
    /// Create an open grid with no walls.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            walls: HashSet::new(),
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `id` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, id: GridLocation) -> bool {
        0 <= id.x && id.x < self.width && 0 <= id.y && id.y < self.height
    }

    /// Whether `id` is not a wall.
    #[inline]
    pub fn passable(&self, id: GridLocation) -> bool {
        !self.walls.contains(&id)
    }

    #[inline]
    pub fn is_wall(&self, id: GridLocation) -> bool {
        self.walls.contains(&id)
    }

    /// Mark `id` as a wall.
    pub fn add_wall(&mut self, id: GridLocation) {
        self.walls.insert(id);
    }

    /// Mark every cell of the half-open rectangle `[x0, x1) x [y0, y1)` as a wall.
    pub fn add_rect_walls(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        for y in y0..y1 {
            for x in x0..x1 {
                self.walls.insert(GridLocation::new(x, y));
            }
        }
    }

    /// Walls sorted by `x`, then `y`.
    pub fn walls(&self) -> Vec<GridLocation> {
        let mut v: Vec<_> = self.walls.iter().copied().collect();
        v.sort();
        v
    }

    /// Every cell of the grid in row-major order.
    pub fn locations(&self) -> impl Iterator<Item = GridLocation> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| GridLocation::new(x, y)))
    }
}

impl Graph for SquareGrid {
    type Location = GridLocation;

    /// East, west, north, south; reversed on cells where `x + y` is even.
    ///
    /// Alternating the order makes equal-cost paths zig-zag instead of
    /// running along one axis first.
    fn neighbors(&self, id: &GridLocation, buf: &mut Vec<GridLocation>) {
        let (x, y) = (id.x, id.y);
        let mut dirs = [
            GridLocation::new(x + 1, y),
            GridLocation::new(x - 1, y),
            GridLocation::new(x, y - 1),
            GridLocation::new(x, y + 1),
        ];
        if (x + y).rem_euclid(2) == 0 {
            dirs.reverse();
        }
        buf.extend(
            dirs.into_iter()
                .filter(|&n| self.in_bounds(n) && self.passable(n)),
        );
    }
}

/// A [`SquareGrid`] whose cells have an entry cost.
///
/// Moving into a cell costs its weight, or the default cost when it has none.
#[derive(Debug, Clone, PartialEq)]
pub struct GridWithWeights {
    grid: SquareGrid,
    weights: HashMap<GridLocation, f64>,
    default_cost: f64,
}

impl GridWithWeights {
    /// Create an open grid where every move costs [`DEFAULT_COST`].
    pub fn new(width: i32, height: i32) -> Self {
        Self::from_grid(SquareGrid::new(width, height))
    }

    /// Add weights on top of an existing grid.
    pub fn from_grid(grid: SquareGrid) -> Self {
        Self {
            grid,
            weights: HashMap::new(),
            default_cost: DEFAULT_COST,
        }
    }

    /// Use `cost` for cells without an explicit weight.
    pub fn with_default_cost(mut self, cost: f64) -> Self {
        self.default_cost = cost;
        self
    }

    #[inline]
    pub fn grid(&self) -> &SquareGrid {
        &self.grid
    }

    #[inline]
    pub fn grid_mut(&mut self) -> &mut SquareGrid {
        &mut self.grid
    }

    #[inline]
    pub fn default_cost(&self) -> f64 {
        self.default_cost
    }

    /// Set the cost of entering `id`.
    pub fn set_weight(&mut self, id: GridLocation, cost: f64) {
        self.weights.insert(id, cost);
    }

    /// Cost of entering `id`.
    #[inline]
    pub fn weight(&self, id: GridLocation) -> f64 {
        self.weights.get(&id).copied().unwrap_or(self.default_cost)
    }

    /// Whether `id` has an explicit weight.
    #[inline]
    pub fn is_weighted(&self, id: GridLocation) -> bool {
        self.weights.contains_key(&id)
    }
}

impl Graph for GridWithWeights {
    type Location = GridLocation;

    #[inline]
    fn neighbors(&self, id: &GridLocation, buf: &mut Vec<GridLocation>) {
        self.grid.neighbors(id, buf);
    }
}

impl WeightedGraph for GridWithWeights {
    #[inline]
    fn cost(&self, _from: &GridLocation, to: &GridLocation) -> f64 {
        self.weight(*to)
    }
}
