//! Deterministic ball simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One `advance` per input sample, no internal clock
//! - Seeded RNG only (autopilot jitter)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod state;
pub mod tick;
pub mod timer;

pub use autopilot::Autopilot;
pub use collision::{Footprint, axis_in_bounds, footprint_hits_wall};
pub use state::{SimPhase, SimulationState, StepEvent, StepOutcome, TiltInput};
pub use tick::BallSimulator;
pub use timer::RoundTimer;
