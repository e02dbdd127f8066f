//! Shared drivers for the demo binaries.
//!
//! Each report is built as a `String` so the binaries only print, and the
//! output can be checked in tests.

use std::fmt;
use std::path::Path;

use wayfind_maps::{DrawStyle, GridConfig, MapError, SimpleGraph, draw_grid};
use wayfind_paths::{breadth_first_search, dijkstra_search};

/// The six-node example graph: A→B, B→C, C→{B,D,F}, D→{C,E}, E→F.
pub fn example_graph() -> SimpleGraph<&'static str> {
    SimpleGraph::with_edges([
        ("A", vec!["B"]),
        ("B", vec!["C"]),
        ("C", vec!["B", "D", "F"]),
        ("D", vec!["C", "E"]),
        ("E", vec!["F"]),
        ("F", vec![]),
    ])
}

/// "Reachable from X:" followed by one "  Visiting Y" line per location.
pub fn bfs_report(graph: &SimpleGraph<&'static str>, starts: &[&'static str]) -> String {
    let mut out = String::new();
    for &start in starts {
        let reached = breadth_first_search(graph, start);
        out.push_str(&format!("Reachable from {start}:\n"));
        for id in &reached {
            out.push_str(&format!("  Visiting {id}\n"));
        }
    }
    out
}

/// Read a [`GridConfig`] from a JSON file, or fall back to the classic diagram.
pub fn load_config(path: Option<&Path>) -> Result<GridConfig, DemoError> {
    let Some(path) = path else {
        return Ok(GridConfig::classic());
    };
    log::info!("loading grid from {}", path.display());
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Run Dijkstra on the configured grid and draw the bare grid, the
/// backpointers and the found path.
pub fn dijkstra_report(cfg: &GridConfig) -> Result<String, DemoError> {
    let grid = cfg.build()?;
    let start = cfg.start.ok_or(DemoError::MissingEndpoint("start"))?;
    let goal = cfg.goal.ok_or(DemoError::MissingEndpoint("goal"))?;

    let res = dijkstra_search(&grid, start, &goal);
    let path = res.path(&start, &goal);

    let mut out = String::new();
    out.push_str("Grid before search (costs are not drawn, just the grid)\n");
    out.push_str(&draw_grid(grid.grid(), &DrawStyle::new()));
    out.push_str("Explore grid with Dijkstra, A is the starting point, Z the goal\n");
    out.push_str(&draw_grid(
        grid.grid(),
        &DrawStyle::new()
            .point_to(&res.came_from)
            .start(start)
            .goal(goal),
    ));
    out.push('\n');
    out.push_str("Draw found path with @ symbols\n");
    out.push_str(&draw_grid(grid.grid(), &DrawStyle::new().path(&path)));
    match res.cost_to(&goal) {
        Some(cost) if !path.is_empty() => {
            out.push_str(&format!(
                "Path {start} -> {goal}: {} steps, cost {cost}\n",
                path.len() - 1
            ));
        }
        _ => {
            out.push_str(&format!("No path from {start} to {goal}\n"));
        }
    }
    Ok(out)
}

/// Errors the demo drivers can report.
#[derive(Debug)]
pub enum DemoError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Map(MapError),
    /// The configuration has no start or no goal.
    MissingEndpoint(&'static str),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "reading grid config: {e}"),
            Self::Json(e) => write!(f, "parsing grid config: {e}"),
            Self::Map(e) => write!(f, "{e}"),
            Self::MissingEndpoint(which) => write!(f, "grid config has no {which}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Map(e) => Some(e),
            Self::MissingEndpoint(_) => None,
        }
    }
}

impl From<std::io::Error> for DemoError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for DemoError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<MapError> for DemoError {
    fn from(e: MapError) -> Self {
        Self::Map(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfind_maps::GridLocation;

    #[test]
    fn bfs_report_lists_visits() {
        let report = bfs_report(&example_graph(), &["A", "E"]);
        assert_eq!(
            report,
            "Reachable from A:\n  Visiting A\n  Visiting B\n  Visiting C\n  Visiting D\n  Visiting F\n  Visiting E\n\
             Reachable from E:\n  Visiting E\n  Visiting F\n"
        );
    }

    const CLASSIC_REPORT: &str = concat!(
        "Grid before search (costs are not drawn, just the grid)\n",
        "______________________________\n",
        " .  .  .  .  .  .  .  .  .  . \n",
        " .  .  .  .  .  .  .  .  .  . \n",
        " .  .  .  .  .  .  .  .  .  . \n",
        " .  .  .  .  .  .  .  .  .  . \n",
        " .  .  .  .  .  .  .  .  .  . \n",
        " .  .  .  .  .  .  .  .  .  . \n",
        " .  .  .  .  .  .  .  .  .  . \n",
        " . ######### .  .  .  .  .  . \n",
        " . ######### .  .  .  .  .  . \n",
        " .  .  .  .  .  .  .  .  .  . \n",
        "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~\n",
        "Explore grid with Dijkstra, A is the starting point, Z the goal\n",
        "______________________________\n",
        " v  v  <  <  <  <  <  <  <  < \n",
        " v  v  <  <  <  ^  ^  <  <  < \n",
        " v  v  <  <  <  <  ^  ^  <  < \n",
        " v  v  <  <  <  <  <  ^  Z  . \n",
        " >  A  <  <  <  <  .  .  .  . \n",
        " ^  ^  <  <  <  <  .  .  .  . \n",
        " ^  ^  <  <  <  <  <  .  .  . \n",
        " ^ ######### ^  <  v  v  .  . \n",
        " ^ ######### v  v  v  <  <  . \n",
        " ^  <  <  <  <  <  <  <  <  . \n",
        "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~\n",
        "\n",
        "Draw found path with @ symbols\n",
        "______________________________\n",
        " .  @  @  @  @  @  @  .  .  . \n",
        " .  @  .  .  .  .  @  @  .  . \n",
        " .  @  .  .  .  .  .  @  @  . \n",
        " .  @  .  .  .  .  .  .  @  . \n",
        " .  @  .  .  .  .  .  .  .  . \n",
        " .  .  .  .  .  .  .  .  .  . \n",
        " .  .  .  .  .  .  .  .  .  . \n",
        " . ######### .  .  .  .  .  . \n",
        " . ######### .  .  .  .  .  . \n",
        " .  .  .  .  .  .  .  .  .  . \n",
        "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~\n",
        "Path (1, 4) -> (8, 3): 14 steps, cost 14\n",
    );

    #[test]
    fn classic_report_is_exact() {
        assert_eq!(dijkstra_report(&GridConfig::classic()).unwrap(), CLASSIC_REPORT);
    }

    #[test]
    fn classic_report_ends_with_summary() {
        let report = dijkstra_report(&GridConfig::classic()).unwrap();
        assert!(report.starts_with("Grid before search"));
        assert!(report.ends_with("Path (1, 4) -> (8, 3): 14 steps, cost 14\n"));
        // Three framed grids.
        assert_eq!(report.matches("~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~\n").count(), 3);
    }

    #[test]
    fn unreachable_goal_is_reported() {
        let cfg = GridConfig {
            width: 3,
            height: 1,
            walls: vec![GridLocation::new(1, 0)],
            start: Some(GridLocation::new(0, 0)),
            goal: Some(GridLocation::new(2, 0)),
            ..Default::default()
        };
        let report = dijkstra_report(&cfg).unwrap();
        assert!(report.ends_with("No path from (0, 0) to (2, 0)\n"));
    }

    #[test]
    fn missing_goal_is_an_error() {
        let cfg = GridConfig {
            start: Some(GridLocation::new(0, 0)),
            ..Default::default()
        };
        let err = dijkstra_report(&cfg).unwrap_err();
        assert_eq!(err.to_string(), "grid config has no goal");
    }

    #[test]
    fn default_config_is_classic() {
        assert_eq!(load_config(None).unwrap(), GridConfig::classic());
    }

    #[test]
    fn bundled_grid_file_is_classic() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("grids/classic.json");
        assert_eq!(load_config(Some(&path)).unwrap(), GridConfig::classic());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_config(Some(Path::new("/nonexistent/wayfind/grid.json"))).unwrap_err();
        assert!(matches!(err, DemoError::Io(_)));
    }
}
