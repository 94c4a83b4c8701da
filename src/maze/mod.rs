//! Static maze model
//!
//! Grids are hand-authored and never change once a round starts:
//! - `grid`: Cell storage, bounds and clamped lookup
//! - `graph`: Start lookup and longest-path goal placement
//! - `levels`: Built-in mazes and JSON level loading

pub mod graph;
pub mod grid;
pub mod levels;

pub use graph::{DIRECTIONS, MazeGraph};
pub use grid::{CellKind, Coord, Grid, MazeError};
pub use levels::{Level, builtin, builtin_levels};
