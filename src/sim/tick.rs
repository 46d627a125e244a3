//! Per-frame simulation step
//!
//! Advances a session by one variable timestep. Forces are applied in a
//! fixed order and the order matters numerically:
//! drift, wiggle, keyboard push, panic pull, integrate, friction, boundary.

use glam::Vec2;

use super::ability::AbilityTransition;
use super::arena::Arena;
use super::events::{SimEvent, Snapshot};
use super::input::HeldKeys;
use super::keymap::KeyMap;
use super::rng::UniformSource;
use super::state::SessionState;
use crate::tuning::Tuning;

/// Host-supplied input for a single step
#[derive(Debug, Clone, Copy)]
pub struct StepInput<'a> {
    /// Keys currently held, in key-down order
    pub held: &'a HeldKeys,
    /// Current arena; may differ from the previous step after a resize
    pub arena: Arena,
}

/// Everything a step produced for the host
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    pub events: Vec<SimEvent>,
    /// Present when the blob survived the step
    pub snapshot: Option<Snapshot>,
}

impl StepReport {
    /// True if this step ended the session
    pub fn is_game_over(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, SimEvent::GameOver { .. }))
    }

    /// True if the pull was active this step
    pub fn ability_active(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, SimEvent::AbilityPulse { .. }))
    }
}

/// Advance the session by `dt` seconds.
///
/// A dead session, or a `dt` that is not a positive finite number, is left
/// untouched and yields an empty report. No random numbers are drawn in
/// that case.
pub fn step<R: UniformSource>(
    state: &mut SessionState,
    tuning: &Tuning,
    keymap: &KeyMap,
    rng: &mut R,
    input: &StepInput<'_>,
    dt: f32,
) -> StepReport {
    let mut report = StepReport::default();
    if !state.alive || !dt.is_finite() || dt <= 0.0 {
        return report;
    }

    // 1. Drift
    if state.drift.advance(dt, tuning, rng) {
        log::debug!(
            "Drift resampled: ({:.1}, {:.1}) for {:.2}s",
            state.drift.vector.x,
            state.drift.vector.y,
            state.drift.timer
        );
    }
    state.velocity += state.drift.vector * dt;

    // 2. Is the pull actually on this step?
    let requested = input.held.contains(tuning.ability_key);
    let active = requested && state.ability.can_activate();

    // 3. Wiggle, off while pulling so the player can line up
    if !active {
        let noise = Vec2::new(rng.range(-0.5, 0.5), rng.range(-0.5, 0.5));
        state.velocity += noise * tuning.wiggle * dt;
    }

    // 4. Keyboard push
    let direction = keymap.resolve(input.held, tuning.ability_key);
    state.velocity += direction * tuning.push_strength * dt;

    // 5. Panic pull, proportional to distance from center
    if active {
        let to_center = input.arena.center - state.position;
        state.velocity += to_center * tuning.pull_strength * dt;
        report.events.push(SimEvent::AbilityPulse {
            duration: tuning.ability_pulse,
        });
        if state.ability.drain(dt, tuning) == AbilityTransition::Overheated {
            log::debug!("Pull overheated, locked for {:.2}s", tuning.cooldown);
            report.events.push(SimEvent::Overheated);
        }
    } else if state.ability.recover(dt, tuning) == AbilityTransition::Recovered {
        log::debug!("Pull cooled down");
        report.events.push(SimEvent::Recovered);
    }

    // 6. Integrate
    state.position += state.velocity * dt;

    // 7. Friction
    state.velocity *= tuning.friction_mode.factor(tuning.friction, dt);

    // 8. Boundary
    if !input.arena.contains(state.position, tuning.entity_radius) {
        state.alive = false;
        log::info!("Blob left the arena after {:.2}s", state.elapsed);
        report.events.push(SimEvent::GameOver {
            duration: tuning.game_over_pulse,
            elapsed: state.elapsed,
        });
        return report;
    }

    // 9. Survived
    state.elapsed += dt;
    report.snapshot = Some(state.snapshot(tuning));
    report
}
