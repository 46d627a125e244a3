//! Blob Arena - keep a drifting blob inside a circular arena
//!
//! Core modules:
//! - `sim`: Per-frame simulation (forces, panic pull, boundary check)
//! - `engine`: Session driver that turns host timestamps into steps
//! - `tuning`: Data-driven balance, loadable from JSON
//! - `error`: Setup-time errors

pub mod engine;
pub mod error;
pub mod sim;
pub mod tuning;

pub use engine::{Engine, FrameClock};
pub use error::TuningError;
pub use tuning::{FrictionMode, Tuning};

/// Default tuning constants
pub mod consts {
    /// Blob radius
    pub const ENTITY_RADIUS: f32 = 20.0;

    /// Drift: each component resampled in [-DRIFT_POWER, DRIFT_POWER]
    pub const DRIFT_POWER: f32 = 60.0;
    /// Drift resample interval bounds (seconds)
    pub const DRIFT_CHANGE_MIN: f32 = 0.5;
    pub const DRIFT_CHANGE_MAX: f32 = 2.0;

    /// Keyboard push acceleration
    pub const PUSH_STRENGTH: f32 = 500.0;
    /// Random jitter scale, suppressed while pulling
    pub const WIGGLE: f32 = 400.0;
    /// Per-step velocity multiplier
    pub const FRICTION: f32 = 0.98;

    /// Pull toward center per unit of distance
    pub const PULL_STRENGTH: f32 = 4.0;
    /// Battery size in seconds of pull
    pub const MAX_CHARGE: f32 = 1.5;
    /// Battery refill per second
    pub const REGEN_RATE: f32 = 0.3;
    /// Overheat lockout (seconds)
    pub const COOLDOWN: f32 = 2.0;
    pub const ABILITY_KEY: char = ' ';

    /// Visual pulse durations (seconds)
    pub const ABILITY_PULSE: f32 = 0.08;
    pub const GAME_OVER_PULSE: f32 = 0.2;

    /// Arena radius as a fraction of the smaller viewport side
    pub const ARENA_VIEWPORT_FRACTION: f32 = 0.35;

    /// QWERTY letter rows, top to bottom
    pub const DEFAULT_LAYOUT: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];
}
