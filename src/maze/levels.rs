//! Built-in levels and JSON level loading
//!
//! Levels are plain coded rows (0 = open, 1 = wall, 2 = start). The built-ins
//! are compiled in; hosts may also ship their own as JSON:
//!
//! ```json
//! { "name": "corridor", "cells": [[2, 0, 0, 0]] }
//! ```

use serde::{Deserialize, Serialize};

use super::graph::MazeGraph;
use super::grid::{Grid, MazeError};

/// A named hand-authored maze
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    pub cells: Vec<Vec<u8>>,
}

impl Level {
    pub fn new(name: impl Into<String>, cells: Vec<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    /// Parse a level from JSON
    pub fn from_json(json: &str) -> Result<Self, MazeError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, MazeError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Validate the cells into a grid
    pub fn grid(&self) -> Result<Grid, MazeError> {
        Grid::from_rows(&self.cells)
    }

    /// Validate the cells and place the goal
    pub fn graph(&self) -> Result<MazeGraph, MazeError> {
        Ok(MazeGraph::new(self.grid()?))
    }
}

const FIRST_STEPS: &[&[u8]] = &[
    &[1, 1, 1, 1, 1, 1, 1],
    &[1, 2, 0, 0, 0, 0, 1],
    &[1, 1, 1, 1, 1, 0, 1],
    &[1, 0, 0, 0, 0, 0, 1],
    &[1, 0, 1, 1, 1, 1, 1],
    &[1, 0, 0, 0, 0, 0, 1],
    &[1, 1, 1, 1, 1, 1, 1],
];

const SWITCHBACK: &[&[u8]] = &[
    &[1, 1, 1, 1, 1, 1, 1, 1, 1],
    &[1, 2, 0, 0, 1, 0, 0, 0, 1],
    &[1, 1, 1, 0, 1, 0, 1, 0, 1],
    &[1, 0, 0, 0, 1, 0, 1, 0, 1],
    &[1, 0, 1, 1, 1, 0, 1, 0, 1],
    &[1, 0, 0, 0, 0, 0, 1, 0, 1],
    &[1, 1, 1, 1, 1, 1, 1, 0, 1],
    &[1, 0, 0, 0, 0, 0, 0, 0, 1],
    &[1, 0, 1, 1, 1, 1, 1, 1, 1],
    &[1, 0, 0, 0, 0, 0, 0, 0, 1],
    &[1, 1, 1, 1, 1, 1, 1, 1, 1],
];

// Short rows are wall-padded on the right
const STAIRCASE: &[&[u8]] = &[
    &[1, 1, 1, 1, 1],
    &[1, 2, 0, 0, 1, 1, 1],
    &[1, 1, 1, 0, 0, 0, 1],
    &[1, 1, 1, 1, 1, 0, 1],
    &[1, 1, 1, 1, 1, 1, 1],
];

const BUILTINS: &[(&str, &[&[u8]])] = &[
    ("first-steps", FIRST_STEPS),
    ("switchback", SWITCHBACK),
    ("staircase", STAIRCASE),
];

fn to_level(name: &str, rows: &[&[u8]]) -> Level {
    Level::new(name, rows.iter().map(|r| r.to_vec()).collect())
}

/// All built-in levels in play order
pub fn builtin_levels() -> Vec<Level> {
    BUILTINS.iter().map(|(name, rows)| to_level(name, rows)).collect()
}

/// Look up a built-in level by name
pub fn builtin(name: &str) -> Result<Level, MazeError> {
    BUILTINS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(n, rows)| to_level(n, rows))
        .ok_or_else(|| MazeError::LevelNotFound(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Coord;

    #[test]
    fn test_builtins_build() {
        let levels = builtin_levels();
        assert_eq!(levels.len(), 3);
        for level in &levels {
            let graph = level.graph().unwrap();
            assert!(graph.longest_path().len() > 1, "{} has no path", level.name);
        }
    }

    #[test]
    fn test_builtin_goals() {
        let goal = |name: &str| builtin(name).unwrap().graph().unwrap().find_goal();
        assert_eq!(goal("first-steps"), Coord::new(5, 5));
        assert_eq!(goal("switchback"), Coord::new(9, 7));
        assert_eq!(goal("staircase"), Coord::new(3, 5));
    }

    #[test]
    fn test_staircase_is_padded() {
        let grid = builtin("staircase").unwrap().grid().unwrap();
        assert_eq!(grid.cols(), 7);
        assert_eq!(grid.rows(), 5);
    }

    #[test]
    fn test_unknown_builtin() {
        assert!(matches!(
            builtin("nope"),
            Err(MazeError::LevelNotFound(name)) if name == "nope"
        ));
    }

    #[test]
    fn test_level_from_json() {
        let level = Level::from_json(r#"{ "name": "corridor", "cells": [[2, 0, 0, 0]] }"#).unwrap();
        assert_eq!(level.name, "corridor");
        assert_eq!(level.graph().unwrap().find_goal(), Coord::new(0, 3));

        let back = Level::from_json(&level.to_json().unwrap()).unwrap();
        assert_eq!(back, level);
    }

    #[test]
    fn test_level_from_bad_json() {
        assert!(matches!(
            Level::from_json("{ \"name\": 3 }"),
            Err(MazeError::LevelParse(_))
        ));
        let empty = Level::from_json(r#"{ "name": "empty", "cells": [] }"#).unwrap();
        assert!(matches!(empty.graph(), Err(MazeError::InvalidGrid { .. })));
    }
}
