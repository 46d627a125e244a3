//! Session state
//!
//! Everything a step reads and writes. One value per play session, owned
//! by whoever drives it; nothing here is global.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ability::Ability;
use super::events::Snapshot;
use super::rng::UniformSource;
use crate::tuning::Tuning;

/// Ambient push, resampled on a random timer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drift {
    /// Current acceleration
    pub vector: Vec2,
    /// Seconds until the next resample
    pub timer: f32,
}

impl Drift {
    /// Fresh random drift and timer
    pub fn sample<R: UniformSource>(tuning: &Tuning, rng: &mut R) -> Self {
        let mut drift = Self {
            vector: Vec2::ZERO,
            timer: 0.0,
        };
        drift.resample(tuning, rng);
        drift
    }

    /// Pick a new vector (each component in ±drift_power) and a new timer
    pub fn resample<R: UniformSource>(&mut self, tuning: &Tuning, rng: &mut R) {
        self.vector = Vec2::new(
            rng.symmetric(tuning.drift_power),
            rng.symmetric(tuning.drift_power),
        );
        self.timer = rng.range(tuning.drift_change_min, tuning.drift_change_max);
    }

    /// Count the timer down, resampling when it runs out.
    /// Returns true on resample.
    pub fn advance<R: UniformSource>(&mut self, dt: f32, tuning: &Tuning, rng: &mut R) -> bool {
        self.timer -= dt;
        if self.timer <= 0.0 {
            self.resample(tuning, rng);
            return true;
        }
        false
    }
}

/// Complete state of one play session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Blob center, same coordinates as the arena center
    pub position: Vec2,
    /// Unbounded; only friction slows it down
    pub velocity: Vec2,
    pub ability: Ability,
    pub drift: Drift,
    /// Seconds survived
    pub elapsed: f32,
    /// False once the blob has left the arena. Terminal.
    pub alive: bool,
}

impl SessionState {
    /// New session with the blob at rest at `center` and a full battery
    pub fn new<R: UniformSource>(center: Vec2, tuning: &Tuning, rng: &mut R) -> Self {
        Self {
            position: center,
            velocity: Vec2::ZERO,
            ability: Ability::new(tuning.max_charge),
            drift: Drift::sample(tuning, rng),
            elapsed: 0.0,
            alive: true,
        }
    }

    /// Render-facing view of the session
    pub fn snapshot(&self, tuning: &Tuning) -> Snapshot {
        Snapshot {
            position: self.position,
            diameter: tuning.entity_diameter(),
            elapsed: self.elapsed,
            alive: self.alive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::SequenceSource;

    #[test]
    fn test_new_session() {
        let tuning = Tuning::default();
        let mut rng = SequenceSource::constant(0.5);
        let state = SessionState::new(Vec2::new(10.0, 20.0), &tuning, &mut rng);

        assert_eq!(state.position, Vec2::new(10.0, 20.0));
        assert_eq!(state.velocity, Vec2::ZERO);
        assert_eq!(state.ability.charge, tuning.max_charge);
        assert!(!state.ability.overheated);
        assert_eq!(state.elapsed, 0.0);
        assert!(state.alive);
        assert!(state.drift.timer > 0.0);
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn test_drift_sample_bounds() {
        let tuning = Tuning {
            drift_power: 10.0,
            drift_change_min: 1.0,
            drift_change_max: 3.0,
            ..Default::default()
        };
        let mut rng = SequenceSource::new([0.0, 0.9, 0.5]);
        let drift = Drift::sample(&tuning, &mut rng);
        assert_eq!(drift.vector.x, -10.0);
        assert!((drift.vector.y - 8.0).abs() < 1e-4);
        assert_eq!(drift.timer, 2.0);
    }

    #[test]
    fn test_drift_advance_resamples_when_expired() {
        let tuning = Tuning {
            drift_change_min: 1.0,
            drift_change_max: 1.0,
            ..Default::default()
        };
        let mut rng = SequenceSource::constant(0.5);
        let mut drift = Drift::sample(&tuning, &mut rng);
        assert_eq!(drift.timer, 1.0);

        assert!(!drift.advance(0.25, &tuning, &mut rng));
        assert_eq!(drift.timer, 0.75);

        assert!(drift.advance(0.75, &tuning, &mut rng));
        assert_eq!(drift.timer, 1.0);

        // A huge step still lands on a positive timer
        assert!(drift.advance(100.0, &tuning, &mut rng));
        assert!(drift.timer > 0.0);
    }

    #[test]
    fn test_snapshot() {
        let tuning = Tuning {
            entity_radius: 15.0,
            ..Default::default()
        };
        let mut rng = SequenceSource::constant(0.5);
        let state = SessionState::new(Vec2::new(50.0, 50.0), &tuning, &mut rng);
        let snap = state.snapshot(&tuning);
        assert_eq!(snap.diameter, 30.0);
        assert_eq!(snap.top_left(), Vec2::new(35.0, 35.0));
        assert!(snap.alive);
    }
}
