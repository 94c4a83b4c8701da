//! Game settings and physics tuning
//!
//! Loaded from an optional JSON file. Missing fields take their defaults, and
//! an unreadable file falls back to defaults entirely.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::maze::MazeError;

/// Physics constants for one simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Pixels moved per tick per unit of acceleration
    pub accel_gain: f32,
    /// Visual ball diameter (viewport clamping uses the full radius)
    pub ball_diameter: f32,
    /// Subtracted from the visual radius to get the collision radius
    pub collision_margin: f32,
    /// Per-axis goal distance that counts as reached
    pub goal_tolerance: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            accel_gain: ACCEL_GAIN,
            ball_diameter: BALL_DIAMETER,
            collision_margin: COLLISION_MARGIN,
            goal_tolerance: GOAL_TOLERANCE,
        }
    }
}

impl Tuning {
    /// Visual radius
    #[inline]
    pub fn radius(&self) -> f32 {
        self.ball_diameter / 2.0
    }

    /// Radius used for wall sampling (never negative)
    #[inline]
    pub fn collision_radius(&self) -> f32 {
        (self.radius() - self.collision_margin).max(0.0)
    }

    /// Gain, diameter and tolerance must be positive; the margin may be zero
    pub fn validate(&self) -> Result<(), MazeError> {
        let positive = [
            ("accel_gain", self.accel_gain),
            ("ball_diameter", self.ball_diameter),
            ("goal_tolerance", self.goal_tolerance),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(MazeError::InvalidTuning { field, value });
            }
        }
        if !self.collision_margin.is_finite() || self.collision_margin < 0.0 {
            return Err(MazeError::InvalidTuning {
                field: "collision_margin",
                value: self.collision_margin,
            });
        }
        Ok(())
    }
}

/// Host settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Physics tuning
    pub tuning: Tuning,

    // === Viewport ===
    /// Drawable width available to the maze
    pub viewport_width: f32,
    /// Drawable height available to the maze
    pub viewport_height: f32,

    // === Demo ===
    /// Built-in level to load
    pub level: String,
    /// Seed for autopilot jitter
    pub seed: u64,
    /// Autopilot noise amplitude in acceleration units (0 = perfect steering)
    pub autopilot_jitter: f32,
    /// Largest tilt the autopilot applies per sample
    pub autopilot_max_tilt: f32,
    /// Give up after this many samples
    pub max_samples: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tuning: Tuning::default(),

            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,

            level: "first-steps".to_string(),
            seed: 0x5eed,
            autopilot_jitter: 0.0,
            autopilot_max_tilt: 0.4,
            max_samples: 20_000,
        }
    }
}

impl Settings {
    /// Viewport as a vector
    pub fn viewport(&self) -> Vec2 {
        Vec2::new(self.viewport_width, self.viewport_height)
    }

    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Ignoring malformed settings {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not read settings {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
