//! Grid storage for hand-authored mazes
//!
//! Cells are stored row-major in a flat vector. Ragged input rows are padded
//! with walls up to the widest row so every lookup sees a rectangle.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building a maze or a simulator
#[derive(Debug, Error)]
pub enum MazeError {
    /// The grid has no rows, or every row is empty
    #[error("invalid grid: {rows} rows x {cols} columns (need at least 1 x 1)")]
    InvalidGrid { rows: usize, cols: usize },
    /// A cell value outside the 0/1/2 convention
    #[error("unknown cell value {value} at row {row}, column {col}")]
    UnknownCell { row: usize, col: usize, value: u8 },
    /// A row is wider than the declared column count
    #[error("row {row} has {len} cells but the maze is declared {max} wide")]
    RowTooLong { row: usize, len: usize, max: usize },
    /// Block size or viewport is zero, negative or not finite
    #[error("invalid scale: block size {0}")]
    InvalidScale(f32),
    /// A tuning value is out of range
    #[error("invalid tuning: {field} = {value}")]
    InvalidTuning { field: &'static str, value: f32 },
    /// Level JSON could not be parsed
    #[error("failed to parse level: {0}")]
    LevelParse(#[from] serde_json::Error),
    /// No built-in level with that name
    #[error("no built-in level named {0:?}")]
    LevelNotFound(String),
}

/// Kind of a single maze cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CellKind {
    #[default]
    Open,
    Wall,
    Start,
}

impl CellKind {
    /// Decode the authoring convention: 0 = open, 1 = wall, 2 = start
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(CellKind::Open),
            1 => Some(CellKind::Wall),
            2 => Some(CellKind::Start),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            CellKind::Open => 0,
            CellKind::Wall => 1,
            CellKind::Start => 2,
        }
    }

    /// Open and Start cells can be traversed
    #[inline]
    pub fn is_passable(self) -> bool {
        self != CellKind::Wall
    }
}

/// A (row, col) cell address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { row: 0, col: 0 };

    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Immutable rectangular maze
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellKind>,
}

impl Grid {
    /// Build a grid from coded rows, padding short rows with walls
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, MazeError> {
        let width = rows.iter().map(|r| r.as_ref().len()).max().unwrap_or(0);
        Self::with_width(rows, width)
    }

    /// Build a grid with an explicit column count
    ///
    /// Rows longer than `width` are rejected; shorter rows are wall-padded.
    pub fn with_width<R: AsRef<[u8]>>(rows: &[R], width: usize) -> Result<Self, MazeError> {
        if rows.is_empty() || width == 0 {
            return Err(MazeError::InvalidGrid {
                rows: rows.len(),
                cols: width,
            });
        }

        let mut cells = Vec::with_capacity(rows.len() * width);
        for (row, data) in rows.iter().enumerate() {
            let data = data.as_ref();
            if data.len() > width {
                return Err(MazeError::RowTooLong {
                    row,
                    len: data.len(),
                    max: width,
                });
            }
            for (col, &value) in data.iter().enumerate() {
                let kind =
                    CellKind::from_code(value).ok_or(MazeError::UnknownCell { row, col, value })?;
                cells.push(kind);
            }
            cells.extend(std::iter::repeat_n(CellKind::Wall, width - data.len()));
        }

        Ok(Self {
            rows: rows.len(),
            cols: width,
            cells,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a constructed grid
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row-major index of a coordinate, if in bounds
    #[inline]
    pub fn index(&self, coord: Coord) -> Option<usize> {
        (coord.row < self.rows && coord.col < self.cols).then(|| coord.row * self.cols + coord.col)
    }

    /// Coordinate of a row-major index
    #[inline]
    pub fn coord(&self, index: usize) -> Coord {
        Coord::new(index / self.cols, index % self.cols)
    }

    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        self.index(coord).is_some()
    }

    /// Cell kind at `coord`, `None` if out of bounds
    #[inline]
    pub fn get(&self, coord: Coord) -> Option<CellKind> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Cell kind at a signed address, clamped into the grid
    ///
    /// Footprint sampling near the maze edge produces addresses outside the
    /// grid; they read the nearest edge cell instead.
    #[inline]
    pub fn get_clamped(&self, row: i64, col: i64) -> CellKind {
        let row = row.clamp(0, self.rows as i64 - 1) as usize;
        let col = col.clamp(0, self.cols as i64 - 1) as usize;
        self.cells[row * self.cols + col]
    }

    #[inline]
    pub fn is_passable(&self, coord: Coord) -> bool {
        self.get(coord).is_some_and(CellKind::is_passable)
    }

    /// All cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellKind)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &kind)| (self.coord(i), kind))
    }
}
