//! Demo input producer
//!
//! Steers the ball from cell center to cell center along the longest path.
//! Used by the demo binary and by end-to-end tests in place of a real
//! accelerometer. Optional jitter comes from a seeded PCG so runs replay
//! exactly.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::TiltInput;
use super::tick::BallSimulator;
use crate::cell_center;
use crate::maze::Coord;
use crate::settings::Settings;

/// Waypoints closer than this count as reached
const ARRIVE_EPSILON: f32 = 1.0;

/// Path-following tilt generator
#[derive(Debug, Clone)]
pub struct Autopilot {
    waypoints: Vec<Vec2>,
    next: usize,
    /// Largest tilt per axis-combined sample
    max_tilt: f32,
    /// Uniform noise amplitude added to each axis
    jitter: f32,
    seed: u64,
    rng: Pcg32,
}

impl Autopilot {
    /// Follow `path` (start first) at the simulator's scale
    pub fn new(sim: &BallSimulator, path: &[Coord], max_tilt: f32, jitter: f32, seed: u64) -> Self {
        let waypoints = path
            .iter()
            .map(|&c| cell_center(c, sim.block_size()))
            .collect();
        Self {
            waypoints,
            next: 0,
            max_tilt,
            jitter,
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn from_settings(sim: &BallSimulator, path: &[Coord], settings: &Settings) -> Self {
        Self::new(
            sim,
            path,
            settings.autopilot_max_tilt,
            settings.autopilot_jitter,
            settings.seed,
        )
    }

    /// Restart from the first waypoint with the initial seed
    pub fn reset(&mut self) {
        self.next = 0;
        self.rng = Pcg32::seed_from_u64(self.seed);
    }

    /// Index of the waypoint currently being steered towards
    pub fn target_index(&self) -> usize {
        self.next
    }

    /// Tilt that moves the ball at `pos` towards the next waypoint
    pub fn steer(&mut self, pos: Vec2, gain: f32) -> TiltInput {
        while self.next + 1 < self.waypoints.len()
            && pos.distance(self.waypoints[self.next]) < ARRIVE_EPSILON
        {
            self.next += 1;
        }
        let Some(&target) = self.waypoints.get(self.next) else {
            return TiltInput::default();
        };

        // Screen-space step, capped, then mapped back through the gain.
        // Screen y grows downward while tilt y points up the screen.
        let step = (target - pos).clamp_length_max(self.max_tilt * gain);
        let mut accel = Vec2::new(step.x / gain, -step.y / gain);

        if self.jitter > 0.0 {
            accel.x += self.rng.random_range(-self.jitter..=self.jitter);
            accel.y += self.rng.random_range(-self.jitter..=self.jitter);
        }

        TiltInput { accel }
    }
}
