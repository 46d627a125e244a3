//! Data-driven tuning
//!
//! Everything the simulation reads but never writes. Loaded once at
//! startup (defaults or a JSON file) and validated before a session starts.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::TuningError;
use crate::sim::KeyMap;

/// How friction is applied to velocity each step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FrictionMode {
    /// `velocity *= friction` once per step. Damping depends on frame rate.
    #[default]
    PerStep,
    /// `velocity *= friction.powf(dt)`. Same damping at any frame rate.
    PerSecond,
}

impl FrictionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FrictionMode::PerStep => "per-step",
            FrictionMode::PerSecond => "per-second",
        }
    }

    /// Velocity multiplier for a step of length `dt`
    #[inline]
    pub fn factor(&self, friction: f32, dt: f32) -> f32 {
        match self {
            FrictionMode::PerStep => friction,
            FrictionMode::PerSecond => friction.powf(dt),
        }
    }
}

/// Simulation tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Blob ===
    /// Blob radius (arena units)
    pub entity_radius: f32,

    // === Forces ===
    /// Max magnitude of each drift component (units/s²)
    pub drift_power: f32,
    /// Shortest time between drift resamples (seconds)
    pub drift_change_min: f32,
    /// Longest time between drift resamples (seconds)
    pub drift_change_max: f32,
    /// Keyboard push acceleration (units/s²)
    pub push_strength: f32,
    /// Random per-step jitter scale
    pub wiggle: f32,
    /// Velocity decay multiplier, see [`FrictionMode`]
    pub friction: f32,
    pub friction_mode: FrictionMode,

    // === Panic pull ===
    /// Pull toward center per unit of distance (1/s²)
    pub pull_strength: f32,
    /// Full battery, in seconds of use
    pub max_charge: f32,
    /// Charge regained per second while idle
    pub regen_rate: f32,
    /// Lockout after the battery runs dry (seconds)
    pub cooldown: f32,
    /// Key that triggers the pull. Never used as a direction.
    pub ability_key: char,

    // === Effects ===
    /// Blob pulse while the pull is active (seconds)
    pub ability_pulse: f32,
    /// Arena pulse on game over (seconds)
    pub game_over_pulse: f32,

    // === Input ===
    /// Keyboard rows, top to bottom, used to derive push directions
    pub layout: Vec<String>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            entity_radius: ENTITY_RADIUS,

            drift_power: DRIFT_POWER,
            drift_change_min: DRIFT_CHANGE_MIN,
            drift_change_max: DRIFT_CHANGE_MAX,
            push_strength: PUSH_STRENGTH,
            wiggle: WIGGLE,
            friction: FRICTION,
            friction_mode: FrictionMode::PerStep,

            pull_strength: PULL_STRENGTH,
            max_charge: MAX_CHARGE,
            regen_rate: REGEN_RATE,
            cooldown: COOLDOWN,
            ability_key: ABILITY_KEY,

            ability_pulse: ABILITY_PULSE,
            game_over_pulse: GAME_OVER_PULSE,

            layout: DEFAULT_LAYOUT.iter().map(|row| row.to_string()).collect(),
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read and parse a JSON tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Check every field against its allowed range
    pub fn validate(&self) -> Result<(), TuningError> {
        let floats = [
            ("entity_radius", self.entity_radius),
            ("drift_power", self.drift_power),
            ("drift_change_min", self.drift_change_min),
            ("drift_change_max", self.drift_change_max),
            ("push_strength", self.push_strength),
            ("wiggle", self.wiggle),
            ("friction", self.friction),
            ("pull_strength", self.pull_strength),
            ("max_charge", self.max_charge),
            ("regen_rate", self.regen_rate),
            ("cooldown", self.cooldown),
            ("ability_pulse", self.ability_pulse),
            ("game_over_pulse", self.game_over_pulse),
        ];
        for (field, value) in floats {
            if !value.is_finite() {
                return Err(TuningError::NotFinite { field, value });
            }
        }

        let positive = [
            ("entity_radius", self.entity_radius),
            ("drift_change_min", self.drift_change_min),
            ("max_charge", self.max_charge),
            ("ability_pulse", self.ability_pulse),
            ("game_over_pulse", self.game_over_pulse),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(TuningError::NotPositive { field, value });
            }
        }

        // Zero is allowed here so a force can be switched off entirely
        let non_negative = [
            ("drift_power", self.drift_power),
            ("push_strength", self.push_strength),
            ("wiggle", self.wiggle),
            ("pull_strength", self.pull_strength),
            ("regen_rate", self.regen_rate),
            ("cooldown", self.cooldown),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(TuningError::Negative { field, value });
            }
        }

        if self.friction <= 0.0 || self.friction > 1.0 {
            return Err(TuningError::FrictionOutOfRange(self.friction));
        }
        if self.drift_change_min > self.drift_change_max {
            return Err(TuningError::DriftInterval {
                min: self.drift_change_min,
                max: self.drift_change_max,
            });
        }
        if self.layout.is_empty() {
            return Err(TuningError::EmptyLayout);
        }
        if self.layout.iter().all(|row| row.is_empty()) {
            return Err(TuningError::EmptyRows);
        }
        KeyMap::build(&self.layout)?;

        Ok(())
    }

    /// Blob diameter, as the renderer sizes it
    #[inline]
    pub fn entity_diameter(&self) -> f32 {
        self.entity_radius * 2.0
    }
}
