//! Circular arena geometry
//!
//! The host derives the arena from its viewport and may hand the simulation
//! a different one every frame (window resize).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::ARENA_VIEWPORT_FRACTION;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub center: Vec2,
    pub radius: f32,
}

impl Arena {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Arena centered in a `width` x `height` viewport, radius 35% of the
    /// smaller side
    pub fn from_viewport(width: f32, height: f32) -> Self {
        Self {
            center: Vec2::new(width / 2.0, height / 2.0),
            radius: ARENA_VIEWPORT_FRACTION * width.min(height),
        }
    }

    /// Furthest the blob's center may be from the arena center
    #[inline]
    pub fn limit(&self, entity_radius: f32) -> f32 {
        self.radius - entity_radius / 2.0
    }

    /// True while the blob centered at `position` is still inside.
    /// Touching the limit exactly is still inside.
    #[inline]
    pub fn contains(&self, position: Vec2, entity_radius: f32) -> bool {
        position.distance(self.center) <= self.limit(entity_radius)
    }
}
