//! Round elapsed-time counter
//!
//! Host-side helper driven by simulator events: it starts on `RoundStarted`,
//! stops on either terminal event and counts whole timer steps (0.1 s by
//! default) so the displayed value never drifts.

use serde::{Deserialize, Serialize};

use super::state::StepEvent;
use crate::consts::TIMER_STEP;
use crate::maze::MazeError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundTimer {
    step: f32,
    steps: u32,
    accumulator: f32,
    running: bool,
}

impl Default for RoundTimer {
    fn default() -> Self {
        Self {
            step: TIMER_STEP,
            steps: 0,
            accumulator: 0.0,
            running: false,
        }
    }
}

impl RoundTimer {
    /// Timer counting in units of `step` seconds (finite, positive)
    pub fn new(step: f32) -> Result<Self, MazeError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(MazeError::InvalidScale(step));
        }
        Ok(Self {
            step,
            ..Self::default()
        })
    }

    /// React to the event returned by `advance`
    pub fn observe(&mut self, event: StepEvent) {
        match event {
            StepEvent::RoundStarted => {
                self.steps = 0;
                self.accumulator = 0.0;
                self.running = true;
            }
            StepEvent::HitWall | StepEvent::GoalReached => self.running = false,
            StepEvent::None => {}
        }
    }

    /// Add wall-clock time (only counted while running)
    ///
    /// Negative or non-finite `dt` is ignored. The count saturates at
    /// `u32::MAX`.
    pub fn tick(&mut self, dt: f32) {
        if !self.running || !dt.is_finite() || dt < 0.0 {
            return;
        }
        self.accumulator += dt;
        let whole = (self.accumulator / self.step).floor();
        if whole >= 1.0 {
            self.steps = self.steps.saturating_add(whole as u32);
            self.accumulator = (self.accumulator - whole * self.step).clamp(0.0, self.step);
        }
    }

    /// Stop and clear (round reset)
    pub fn reset(&mut self) {
        self.steps = 0;
        self.accumulator = 0.0;
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Elapsed time in seconds, quantized to the timer step
    pub fn elapsed(&self) -> f32 {
        self.steps as f32 * self.step
    }

    /// Whole timer steps elapsed
    pub fn steps(&self) -> u32 {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_until_round_started() {
        let mut t = RoundTimer::new(0.5).unwrap();
        t.tick(3.0);
        assert_eq!(t.steps(), 0);
        assert!(!t.is_running());

        t.observe(StepEvent::None);
        t.tick(3.0);
        assert_eq!(t.steps(), 0);

        t.observe(StepEvent::RoundStarted);
        t.tick(1.25);
        assert_eq!(t.steps(), 2);
        assert_eq!(t.elapsed(), 1.0);
    }

    #[test]
    fn test_freezes_on_terminal_events() {
        for terminal in [StepEvent::HitWall, StepEvent::GoalReached] {
            let mut t = RoundTimer::new(0.5).unwrap();
            t.observe(StepEvent::RoundStarted);
            t.tick(1.0);
            t.observe(terminal);
            t.tick(10.0);
            assert_eq!(t.steps(), 2);
            assert!(!t.is_running());
        }
    }

    #[test]
    fn test_restart_clears_count() {
        let mut t = RoundTimer::new(0.5).unwrap();
        t.observe(StepEvent::RoundStarted);
        t.tick(2.0);
        t.observe(StepEvent::HitWall);
        t.observe(StepEvent::RoundStarted);
        assert_eq!(t.steps(), 0);
        t.tick(0.5);
        assert_eq!(t.steps(), 1);

        t.reset();
        assert_eq!(t.steps(), 0);
        assert!(!t.is_running());
    }

    #[test]
    fn test_default_step_counts_tenths() {
        let mut t = RoundTimer::default();
        t.observe(StepEvent::RoundStarted);
        for _ in 0..60 {
            t.tick(crate::consts::SAMPLE_DT);
        }
        // One second of samples; float accumulation may land just short
        assert!((9..=10).contains(&t.steps()));
    }

    #[test]
    fn test_zero_step_rejected() {
        for step in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(RoundTimer::new(step), Err(MazeError::InvalidScale(_))));
        }
        assert!(RoundTimer::new(0.25).is_ok());
    }

    #[test]
    fn test_large_dt_counts_without_looping() {
        let mut t = RoundTimer::default();
        t.observe(StepEvent::RoundStarted);
        t.tick(3.0e7);
        let expected = 3.0e8_f64;
        assert!((t.steps() as f64 - expected).abs() < expected * 0.01);

        t.tick(f32::MAX);
        assert_eq!(t.steps(), u32::MAX);
    }

    #[test]
    fn test_bad_dt_ignored() {
        let mut t = RoundTimer::new(0.5).unwrap();
        t.observe(StepEvent::RoundStarted);
        t.tick(1.0);
        for dt in [-5.0, f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            t.tick(dt);
        }
        assert_eq!(t.steps(), 2);
        t.tick(0.5);
        assert_eq!(t.steps(), 3);
    }
}
