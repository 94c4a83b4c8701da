//! Tilt Maze - a tilt-controlled ball maze engine
//!
//! Core modules:
//! - `maze`: Static grid, connectivity queries, longest-path goal placement
//! - `sim`: Ball simulation (tilt physics, wall collision, goal detection)
//! - `settings`: Data-driven tuning and viewport configuration
//!
//! Rendering, dialogs and the sensor feed belong to the host. The host calls
//! [`sim::BallSimulator::advance`] once per sample and reacts to the returned
//! [`sim::StepEvent`].

pub mod maze;
pub mod settings;
pub mod sim;

pub use maze::{CellKind, Coord, Grid, Level, MazeError, MazeGraph};
pub use settings::{Settings, Tuning};
pub use sim::{BallSimulator, SimPhase, StepEvent, StepOutcome, TiltInput};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Host sample period (accelerometer polled at 60 Hz)
    pub const SAMPLE_DT: f32 = 1.0 / 60.0;
    /// Maximum samples consumed per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Pixels moved per tick per unit of acceleration
    pub const ACCEL_GAIN: f32 = 10.0;

    /// Ball defaults
    pub const BALL_DIAMETER: f32 = 13.0;
    /// Shrinks the collision radius below the visual radius (anti-aliased edges)
    pub const COLLISION_MARGIN: f32 = 1.7;

    /// Max per-axis distance from the goal center that counts as reached
    pub const GOAL_TOLERANCE: f32 = 10.0;

    /// Default viewport (portrait phone in points)
    pub const VIEWPORT_WIDTH: f32 = 390.0;
    pub const VIEWPORT_HEIGHT: f32 = 844.0;

    /// Round timer resolution in seconds
    pub const TIMER_STEP: f32 = 0.1;
}

/// Pixel-space center of a grid cell
#[inline]
pub fn cell_center(coord: Coord, block_size: f32) -> Vec2 {
    Vec2::new(
        coord.col as f32 * block_size + block_size / 2.0,
        coord.row as f32 * block_size + block_size / 2.0,
    )
}

/// Block size that fits a `cols` x `rows` maze into the viewport
#[inline]
pub fn fit_block_size(viewport: Vec2, cols: usize, rows: usize) -> f32 {
    (viewport.x / cols as f32).min(viewport.y / rows as f32)
}
