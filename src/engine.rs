//! Session driver
//!
//! Glue between the host's frame callback and [`sim::step`]. The host calls
//! [`Engine::frame`] once per display frame with its timestamp; the engine
//! turns timestamps into `dt` and owns everything a session needs.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::error::TuningError;
use crate::sim::{
    self, Arena, HeldKeys, KeyMap, SessionState, Snapshot, StepInput, StepReport, UniformSource,
};
use crate::tuning::Tuning;

/// Converts monotonically increasing host timestamps (milliseconds) into
/// step lengths (seconds)
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous timestamp. The first call only primes
    /// the clock. Timestamps that do not move forward give `None` and are
    /// not remembered.
    pub fn tick(&mut self, now_ms: f64) -> Option<f32> {
        let Some(last) = self.last_ms else {
            self.last_ms = Some(now_ms);
            return None;
        };
        if now_ms <= last {
            return None;
        }
        self.last_ms = Some(now_ms);
        Some(((now_ms - last) / 1000.0) as f32)
    }

    /// Forget the previous timestamp (e.g. after the tab was hidden)
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

/// One play session plus everything needed to advance it
#[derive(Debug)]
pub struct Engine<R: UniformSource = Pcg32> {
    tuning: Tuning,
    keymap: KeyMap,
    state: SessionState,
    rng: R,
    clock: FrameClock,
}

impl Engine<Pcg32> {
    /// Engine with a seeded PCG generator
    pub fn seeded(tuning: Tuning, arena: Arena, seed: u64) -> Result<Self, TuningError> {
        log::info!("Seeding session with {}", seed);
        Self::new(tuning, arena, Pcg32::seed_from_u64(seed))
    }
}

impl<R: UniformSource> Engine<R> {
    /// Validate tuning, build the key map and start a session at the arena
    /// center
    pub fn new(tuning: Tuning, arena: Arena, mut rng: R) -> Result<Self, TuningError> {
        tuning.validate()?;
        let keymap = KeyMap::build(&tuning.layout)?;
        let state = SessionState::new(arena.center, &tuning, &mut rng);
        log::info!(
            "Session started: arena r={:.1}, {} keys mapped, friction {} ({})",
            arena.radius,
            keymap.len(),
            tuning.friction,
            tuning.friction_mode.as_str()
        );
        Ok(Self {
            tuning,
            keymap,
            state,
            rng,
            clock: FrameClock::new(),
        })
    }

    /// Host frame callback. Steps the session by the time since the last
    /// frame; the very first frame only starts the clock.
    pub fn frame(&mut self, now_ms: f64, held: &HeldKeys, arena: Arena) -> StepReport {
        match self.clock.tick(now_ms) {
            Some(dt) => self.step(dt, held, arena),
            None => StepReport::default(),
        }
    }

    /// Step by an explicit `dt` in seconds
    pub fn step(&mut self, dt: f32, held: &HeldKeys, arena: Arena) -> StepReport {
        let input = StepInput { held, arena };
        sim::step(
            &mut self.state,
            &self.tuning,
            &self.keymap,
            &mut self.rng,
            &input,
            dt,
        )
    }

    /// Throw the current session away and start a fresh one
    pub fn restart(&mut self, arena: Arena) {
        self.state = SessionState::new(arena.center, &self.tuning, &mut self.rng);
        self.clock.reset();
        log::info!("Session restarted");
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot(&self.tuning)
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    pub fn is_alive(&self) -> bool {
        self.state.alive
    }
}
