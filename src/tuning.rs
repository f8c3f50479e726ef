//! Physics tuning
//!
//! All constants are per-second and scaled by `dt`. Loaded from JSON by the
//! native runner, otherwise the defaults reproduce the shipped game feel.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Alternate physics applied past a world x-coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HardMode {
    /// Player x at or beyond which the regime applies
    pub threshold_x: f32,
    pub gravity: f32,
    pub max_jumps: u32,
}

impl Default for HardMode {
    fn default() -> Self {
        Self {
            threshold_x: 8000.0,
            gravity: 3000.0,
            max_jumps: 1000,
        }
    }
}

/// Player physics constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration (units/s²)
    pub gravity: f32,
    /// Horizontal speed while a direction is held (units/s)
    pub move_speed: f32,
    /// Upward velocity set by a jump (units/s)
    pub jump_strength: f32,
    /// Jumps available before touching ground or a wall
    pub max_jumps: u32,
    /// Minimum time between two jumps
    pub jump_cooldown_ms: u64,
    /// Rate of the visual lean toward its target (1/s)
    pub rotation_rate: f32,
    pub hard_mode: HardMode,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 1500.0,
            move_speed: 300.0,
            jump_strength: 800.0,
            max_jumps: 2,
            jump_cooldown_ms: 300,
            rotation_rate: 10.0,
            hard_mode: HardMode::default(),
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            ("gravity", self.gravity),
            ("move_speed", self.move_speed),
            ("jump_strength", self.jump_strength),
            ("rotation_rate", self.rotation_rate),
            ("hard_mode.threshold_x", self.hard_mode.threshold_x),
            ("hard_mode.gravity", self.hard_mode.gravity),
        ];
        for (name, value) in values {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite(name));
            }
        }
        if self.move_speed < 0.0 || self.jump_strength < 0.0 || self.rotation_rate < 0.0 {
            return Err(ConfigError::InvalidTuning(
                "speeds and rates must not be negative".to_string(),
            ));
        }
        if self.max_jumps == 0 || self.hard_mode.max_jumps == 0 {
            return Err(ConfigError::InvalidTuning(
                "max_jumps must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Gravity and max jumps for a player at world x
    pub fn regime_at(&self, x: f32) -> (f32, u32) {
        if x >= self.hard_mode.threshold_x {
            (self.hard_mode.gravity, self.hard_mode.max_jumps)
        } else {
            (self.gravity, self.max_jumps)
        }
    }
}
