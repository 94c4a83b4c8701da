//! Per-sample ball simulation
//!
//! The host calls [`BallSimulator::advance`] once for every accelerometer
//! sample, in order, from a single thread. Each call either commits a move,
//! latches a terminal event, or does nothing because the round already ended.

use glam::Vec2;

use super::collision::{axis_in_bounds, footprint_hits_wall};
use super::state::{SimPhase, SimulationState, StepEvent, StepOutcome, TiltInput};
use crate::maze::{Coord, Grid, MazeError, MazeGraph};
use crate::settings::Tuning;
use crate::{cell_center, fit_block_size};

/// Tilt-driven ball in a fixed maze
#[derive(Debug, Clone)]
pub struct BallSimulator {
    grid: Grid,
    tuning: Tuning,
    /// Frozen at construction; positions are only meaningful against this scale
    block_size: f32,
    /// Playable pixel extent (cols x rows blocks)
    bounds: Vec2,
    start: Coord,
    goal: Coord,
    start_pos: Vec2,
    goal_pos: Vec2,
    state: SimulationState,
}

impl BallSimulator {
    /// Fit the maze into `viewport` and place the ball on the start cell
    pub fn new(maze: &MazeGraph, tuning: Tuning, viewport: Vec2) -> Result<Self, MazeError> {
        let grid = maze.grid();
        let block_size = fit_block_size(viewport, grid.cols(), grid.rows());
        Self::with_block_size(maze, tuning, block_size)
    }

    /// Use an explicit block size instead of fitting a viewport
    pub fn with_block_size(
        maze: &MazeGraph,
        tuning: Tuning,
        block_size: f32,
    ) -> Result<Self, MazeError> {
        if !block_size.is_finite() || block_size <= 0.0 {
            return Err(MazeError::InvalidScale(block_size));
        }
        tuning.validate()?;

        let grid = maze.grid().clone();
        let start = maze.find_start();
        let goal = maze.find_goal();
        let start_pos = cell_center(start, block_size);
        let goal_pos = cell_center(goal, block_size);
        let bounds = Vec2::new(
            grid.cols() as f32 * block_size,
            grid.rows() as f32 * block_size,
        );

        log::info!(
            "Simulator ready: block {:.2}, bounds {:.1}x{:.1}, start {:?}, goal {:?}",
            block_size,
            bounds.x,
            bounds.y,
            start,
            goal
        );

        Ok(Self {
            grid,
            tuning,
            block_size,
            bounds,
            start,
            goal,
            start_pos,
            goal_pos,
            state: SimulationState::new(start_pos),
        })
    }

    /// Advance one sample
    ///
    /// `accel_y` is positive when the device tilts away from the player, which
    /// moves the ball up the screen (towards smaller y).
    pub fn advance(&mut self, accel_x: f32, accel_y: f32) -> StepOutcome {
        self.advance_input(&TiltInput::new(accel_x, accel_y))
    }

    /// Advance one sample from a [`TiltInput`]
    pub fn advance_input(&mut self, input: &TiltInput) -> StepOutcome {
        if self.state.phase.is_terminal() {
            return self.outcome(StepEvent::None);
        }

        let accel = input.sanitized();
        let gain = self.tuning.accel_gain;
        let pos = self.state.pos;
        let candidate = Vec2::new(pos.x + accel.x * gain, pos.y - accel.y * gain);

        // Walls are checked before bounds and goal
        let hit_radius = self.tuning.collision_radius();
        if footprint_hits_wall(&self.grid, candidate, hit_radius, self.block_size) {
            return self.hit_wall(candidate);
        }

        // Each axis commits on its own so the ball slides along the edge
        let radius = self.tuning.radius();
        let mut next = pos;
        if axis_in_bounds(candidate.x, radius, self.bounds.x) {
            next.x = candidate.x;
        }
        if axis_in_bounds(candidate.y, radius, self.bounds.y) {
            next.y = candidate.y;
        }
        if next != candidate
            && footprint_hits_wall(&self.grid, next, hit_radius, self.block_size)
        {
            return self.hit_wall(next);
        }

        self.state.pos = next;
        self.state.samples += 1;
        let first_move = !self.state.round_started;
        self.state.round_started = true;

        let to_goal = (next - self.goal_pos).abs();
        let tolerance = self.tuning.goal_tolerance;
        if to_goal.x < tolerance && to_goal.y < tolerance {
            self.state.phase = SimPhase::GoalReached;
            log::info!(
                "Goal reached at ({:.1}, {:.1}) after {} samples",
                next.x,
                next.y,
                self.state.samples
            );
            return self.outcome(StepEvent::GoalReached);
        }

        if first_move {
            log::debug!("Round started");
            return self.outcome(StepEvent::RoundStarted);
        }

        self.outcome(StepEvent::None)
    }

    /// Put the ball back on the start cell and clear both latches
    pub fn reset(&mut self) {
        self.state = SimulationState::new(self.start_pos);
        log::debug!("Round reset");
    }

    fn hit_wall(&mut self, at: Vec2) -> StepOutcome {
        self.state.phase = SimPhase::HitWall;
        log::info!(
            "Wall hit moving to ({:.1}, {:.1}); ball stays at ({:.1}, {:.1})",
            at.x,
            at.y,
            self.state.pos.x,
            self.state.pos.y
        );
        self.outcome(StepEvent::HitWall)
    }

    fn outcome(&self, event: StepEvent) -> StepOutcome {
        StepOutcome {
            position: self.state.pos,
            event,
        }
    }

    pub fn state(&self) -> SimPhase {
        self.state.phase
    }

    pub fn current_position(&self) -> Vec2 {
        self.state.pos
    }

    pub fn goal_coordinate(&self) -> Coord {
        self.goal
    }

    /// Pixel center of the goal cell
    pub fn goal_position(&self) -> Vec2 {
        self.goal_pos
    }

    pub fn start_coordinate(&self) -> Coord {
        self.start
    }

    /// Pixel center of the start cell
    pub fn start_position(&self) -> Vec2 {
        self.start_pos
    }

    pub fn block_size(&self) -> f32 {
        self.block_size
    }

    /// Playable pixel extent
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Whether the current round has committed a move yet
    pub fn round_started(&self) -> bool {
        self.state.round_started
    }

    /// Committed moves this round
    pub fn samples(&self) -> u64 {
        self.state.samples
    }

    /// Snapshot of the mutable state
    pub fn snapshot(&self) -> &SimulationState {
        &self.state
    }
}
