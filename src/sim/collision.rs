//! Ball-versus-grid collision
//!
//! The ball is treated as an axis-aligned square footprint of half-size `r`
//! around its center. Every grid cell the footprint touches is sampled; cells
//! outside the grid read the nearest edge cell instead, so lookups never go
//! out of bounds.

use glam::Vec2;

use crate::maze::{CellKind, Grid};

/// Inclusive, clamped cell range covered by a footprint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footprint {
    pub top: i64,
    pub bottom: i64,
    pub left: i64,
    pub right: i64,
}

impl Footprint {
    /// Cells touched by a ball at `pos` with collision radius `radius`
    ///
    /// When `radius < block_size` this is exactly the 3x3 sample of
    /// {top, center, bottom} rows by {left, center, right} columns.
    pub fn new(grid: &Grid, pos: Vec2, radius: f32, block_size: f32) -> Self {
        let max_row = grid.rows() as i64 - 1;
        let max_col = grid.cols() as i64 - 1;
        let cell = |v: f32, max: i64| ((v / block_size).floor() as i64).clamp(0, max);
        Self {
            top: cell(pos.y - radius, max_row),
            bottom: cell(pos.y + radius, max_row),
            left: cell(pos.x - radius, max_col),
            right: cell(pos.x + radius, max_col),
        }
    }

    /// Sampled (row, col) pairs
    pub fn cells(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        (self.top..=self.bottom).flat_map(move |row| (self.left..=self.right).map(move |col| (row, col)))
    }
}

/// Whether a ball at `pos` overlaps any wall cell
pub fn footprint_hits_wall(grid: &Grid, pos: Vec2, radius: f32, block_size: f32) -> bool {
    Footprint::new(grid, pos, radius, block_size)
        .cells()
        .any(|(row, col)| grid.get_clamped(row, col) == CellKind::Wall)
}

/// Whether a ball of visual `radius` centered at `v` fits strictly inside `[0, extent]`
#[inline]
pub fn axis_in_bounds(v: f32, radius: f32, extent: f32) -> bool {
    v > radius && v < extent - radius
}
