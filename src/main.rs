//! Blob Arena entry point
//!
//! Native builds run a headless session driven by a simple autopilot, which
//! is handy for checking a tuning file: `blob-arena [tuning.json] [seed]`.

use std::error::Error;

use glam::Vec2;

use blob_arena::consts::DEFAULT_LAYOUT;
use blob_arena::sim::{Arena, HeldKeys, SimEvent, UniformSource};
use blob_arena::{Engine, Tuning};

/// Simulated display refresh
const FRAME_MS: f64 = 1000.0 / 60.0;
/// Give up after this much simulated time
const MAX_SECONDS: f64 = 120.0;
/// Viewport the arena is derived from
const VIEWPORT: (f32, f32) = (1280.0, 720.0);

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    log::info!("Blob Arena (headless) starting...");

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };
    let seed = match args.next() {
        Some(s) => s.parse::<u64>()?,
        None => 0xB10B,
    };

    let arena = Arena::from_viewport(VIEWPORT.0, VIEWPORT.1);
    let mut engine = Engine::seeded(tuning, arena, seed)?;
    let mut held = HeldKeys::new();
    let mut pulls = 0u32;
    let mut overheats = 0u32;

    let mut now = 0.0;
    while now <= MAX_SECONDS * 1000.0 {
        autopilot(&engine, arena, &mut held);
        let report = engine.frame(now, &held, arena);
        for event in &report.events {
            match event {
                SimEvent::AbilityPulse { .. } => pulls += 1,
                SimEvent::Overheated => overheats += 1,
                SimEvent::Recovered => {}
                SimEvent::GameOver { elapsed, .. } => {
                    log::info!("Game over at {:.2}s", elapsed);
                }
            }
        }
        if !engine.is_alive() {
            break;
        }
        now += FRAME_MS;
    }

    println!(
        "survived {} ({} pull frames, {} overheats, battery {:.0}%)",
        engine.snapshot().readout(),
        pulls,
        overheats,
        engine.state().ability.fraction(engine.tuning()) * 100.0
    );
    Ok(())
}

/// Steer back toward the center with the best-aligned letter key and pull
/// when close to the edge
fn autopilot<R: UniformSource>(engine: &Engine<R>, arena: Arena, held: &mut HeldKeys) {
    let tuning = engine.tuning();
    let state = engine.state();
    held.clear();

    let offset = state.position - arena.center;
    let limit = arena.limit(tuning.entity_radius);
    if offset.length() > limit * 0.75 && state.ability.can_activate() {
        held.press(tuning.ability_key, false);
    }

    let want = (-offset - state.velocity * 0.2).normalize_or_zero();
    if want == Vec2::ZERO || engine.keymap().is_empty() {
        return;
    }
    let best = DEFAULT_LAYOUT
        .iter()
        .flat_map(|row| row.chars())
        .filter(|&key| engine.keymap().contains(key))
        .max_by(|&a, &b| {
            let da = engine.keymap().direction(a).normalize_or_zero().dot(want);
            let db = engine.keymap().direction(b).normalize_or_zero().dot(want);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        });
    if let Some(key) = best {
        held.press(key, false);
    }
}
