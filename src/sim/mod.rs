//! Simulation module
//!
//! All gameplay logic lives here. It stays free of rendering and platform
//! code:
//! - Time comes in as `dt`, never read from a clock
//! - Randomness comes from an injected [`UniformSource`]
//! - Input is a read-only [`HeldKeys`] set

pub mod ability;
pub mod arena;
pub mod events;
pub mod input;
pub mod keymap;
pub mod rng;
pub mod state;
pub mod tick;

pub use ability::Ability;
pub use arena::Arena;
pub use events::{SimEvent, Snapshot};
pub use input::HeldKeys;
pub use keymap::KeyMap;
pub use rng::{SequenceSource, UniformSource};
pub use state::{Drift, SessionState};
pub use tick::{StepInput, StepReport, step};
