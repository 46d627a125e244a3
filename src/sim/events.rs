//! Simulation output for renderers and effects
//!
//! The simulation never touches the screen. It reports what happened and
//! how long any visual pulse should last; the host owns the timing.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Something the host may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    /// Pull was active this step; pulse the blob for `duration` seconds
    AbilityPulse { duration: f32 },
    /// Battery ran dry and is now locked
    Overheated,
    /// Cooldown finished; the battery refills from empty
    Recovered,
    /// Blob left the arena; pulse the arena for `duration` seconds
    GameOver { duration: f32, elapsed: f32 },
}

/// What the renderer needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Blob center
    pub position: Vec2,
    pub diameter: f32,
    /// Seconds survived
    pub elapsed: f32,
    pub alive: bool,
}

impl Snapshot {
    /// Top-left corner for box-anchored drawing
    #[inline]
    pub fn top_left(&self) -> Vec2 {
        self.position - Vec2::splat(self.diameter / 2.0)
    }

    /// Elapsed-time readout, e.g. `12.34s`, with a suffix once the run ends
    pub fn readout(&self) -> String {
        if self.alive {
            format!("{:.2}s", self.elapsed)
        } else {
            format!("{:.2}s (game over)", self.elapsed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readout() {
        let mut snap = Snapshot {
            position: Vec2::ZERO,
            diameter: 40.0,
            elapsed: 3.14159,
            alive: true,
        };
        assert_eq!(snap.readout(), "3.14s");
        snap.alive = false;
        assert_eq!(snap.readout(), "3.14s (game over)");
    }

    #[test]
    fn test_top_left() {
        let snap = Snapshot {
            position: Vec2::new(100.0, 80.0),
            diameter: 40.0,
            elapsed: 0.0,
            alive: true,
        };
        assert_eq!(snap.top_left(), Vec2::new(80.0, 60.0));
    }
}
