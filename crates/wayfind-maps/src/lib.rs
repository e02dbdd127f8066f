//! Concrete graphs for the wayfind search engine.
//!
//! - [`SimpleGraph`]: explicit adjacency lists over any location type
//! - [`SquareGrid`] / [`GridWithWeights`]: 4-way grids with walls and entry costs
//! - [`GridConfig`] and [`parse_map`]: building grids from data or text
//! - [`draw_grid`]: ASCII rendering of grids with search overlays

pub mod config;
pub mod draw;
pub mod grid;
pub mod location;
pub mod parse;
pub mod simple;

pub use config::{CellWeight, GridConfig};
pub use draw::{DrawStyle, draw_grid, draw_tile};
pub use grid::{DEFAULT_COST, GridWithWeights, SquareGrid};
pub use location::GridLocation;
pub use parse::{MapError, ParsedMap, parse_map};
pub use simple::{GraphError, SimpleGraph};

#[cfg(test)]
mod tests {
    use super::*;
    use wayfind_paths::{dijkstra_search, path_cost};

    fn classic() -> (GridWithWeights, GridLocation, GridLocation) {
        let cfg = GridConfig::classic();
        let grid = cfg.build().unwrap();
        (grid, cfg.start.unwrap(), cfg.goal.unwrap())
    }

    #[test]
    fn classic_diagram_route() {
        let (g, start, goal) = classic();
        let res = dijkstra_search(&g, start, &goal);
        let path = res.path(&start, &goal);

        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&goal));
        for w in path.windows(2) {
            assert!(w[0].is_adjacent(w[1]), "{} -> {}", w[0], w[1]);
        }
        for p in &path {
            assert!(g.grid().passable(*p) && g.grid().in_bounds(*p));
        }

        let cost = res.cost_to(&goal).unwrap();
        assert_eq!(path_cost(&g, &path), cost);
        // Going around the cost-5 region over the top is cheaper than any
        // route through it.
        assert_eq!(cost, 14.0);
        assert!(path.iter().all(|p| !g.is_weighted(*p)));

        // Equal-cost cells are expanded in `(x, y)` order, which sends the
        // route up column 1 first.
        let expected: Vec<GridLocation> = [
            (1, 4),
            (1, 3),
            (1, 2),
            (1, 1),
            (1, 0),
            (2, 0),
            (3, 0),
            (4, 0),
            (5, 0),
            (6, 0),
            (6, 1),
            (7, 1),
            (7, 2),
            (8, 2),
            (8, 3),
        ]
        .into_iter()
        .map(GridLocation::from)
        .collect();
        assert_eq!(path, expected);
    }

    #[test]
    fn classic_diagram_is_deterministic() {
        let (g, start, goal) = classic();
        let a = dijkstra_search(&g, start, &goal);
        let b = dijkstra_search(&g, start, &goal);
        assert_eq!(a, b);
        assert_eq!(a.path(&start, &goal), b.path(&start, &goal));
    }

    #[test]
    fn parsed_map_matches_config() {
        let text = "
..........
....55....
....555...
....5555Z.
.A.55555..
...55555..
....555...
.###555...
.###55....
..........
";
        let parsed = parse_map(text).unwrap();
        let (g, start, goal) = classic();
        assert_eq!(parsed.start, Some(start));
        assert_eq!(parsed.goal, Some(goal));
        assert_eq!(parsed.grid, g);
    }
}
