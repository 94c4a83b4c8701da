//! Simulation state and per-sample I/O types

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SimPhase {
    /// Ball responds to tilt
    #[default]
    Running,
    /// Ball touched a wall; frozen until reset
    HitWall,
    /// Ball reached the goal; frozen until reset
    GoalReached,
}

impl SimPhase {
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != SimPhase::Running
    }
}

/// What happened during one `advance`
///
/// At most one event per call. Terminal events win over `RoundStarted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepEvent {
    /// Nothing noteworthy (including calls made after a terminal event)
    None,
    /// First committed move since construction or reset
    RoundStarted,
    /// Footprint touched a wall; position was not updated
    HitWall,
    /// Ball came within tolerance of the goal center
    GoalReached,
}

impl StepEvent {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, StepEvent::HitWall | StepEvent::GoalReached)
    }
}

/// Result of one `advance`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepOutcome {
    pub position: Vec2,
    pub event: StepEvent,
}

/// Input for a single sample (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TiltInput {
    /// Device acceleration; +x tilts right, +y tilts away from the player (up screen)
    pub accel: Vec2,
}

impl TiltInput {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            accel: Vec2::new(x, y),
        }
    }

    /// Non-finite components read as zero
    pub fn sanitized(self) -> Vec2 {
        let fix = |v: f32| if v.is_finite() { v } else { 0.0 };
        Vec2::new(fix(self.accel.x), fix(self.accel.y))
    }
}

/// Mutable per-round state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationState {
    pub pos: Vec2,
    pub phase: SimPhase,
    /// Set by the first committed move; cleared by reset
    pub round_started: bool,
    /// Committed moves this round
    pub samples: u64,
}

impl SimulationState {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            phase: SimPhase::Running,
            round_started: false,
            samples: 0,
        }
    }
}
