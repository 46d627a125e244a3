//! Panic pull battery
//!
//! Two states in practice: usable and overheated. Charge drains while the
//! pull is active and refills while idle. Running dry overheats the
//! battery, and it stays locked until the cooldown has fully elapsed.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// What changed during an ability update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbilityTransition {
    None,
    /// Charge just hit zero
    Overheated,
    /// Cooldown just finished
    Recovered,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    /// Remaining charge, in [0, max_charge]
    pub charge: f32,
    /// Set when charge is drained to zero, cleared when cooldown completes
    pub overheated: bool,
    /// Seconds left before an overheated battery unlocks
    pub cooldown_remaining: f32,
}

impl Ability {
    /// Fully charged
    pub fn new(max_charge: f32) -> Self {
        Self {
            charge: max_charge,
            overheated: false,
            cooldown_remaining: 0.0,
        }
    }

    /// Whether holding the ability key this step actually pulls
    #[inline]
    pub fn can_activate(&self) -> bool {
        !self.overheated && self.charge > 0.0
    }

    /// Spend `dt` seconds of charge
    pub fn drain(&mut self, dt: f32, tuning: &Tuning) -> AbilityTransition {
        self.charge = (self.charge - dt).max(0.0);
        if self.charge == 0.0 {
            self.overheated = true;
            self.cooldown_remaining = tuning.cooldown;
            return AbilityTransition::Overheated;
        }
        AbilityTransition::None
    }

    /// Idle update: count down an overheat, otherwise refill
    pub fn recover(&mut self, dt: f32, tuning: &Tuning) -> AbilityTransition {
        if self.overheated {
            self.cooldown_remaining = (self.cooldown_remaining - dt).max(0.0);
            if self.cooldown_remaining == 0.0 {
                self.overheated = false;
                return AbilityTransition::Recovered;
            }
        } else {
            self.charge = (self.charge + tuning.regen_rate * dt).min(tuning.max_charge);
        }
        AbilityTransition::None
    }

    /// Charge as a fraction of the full battery (for a HUD meter)
    pub fn fraction(&self, tuning: &Tuning) -> f32 {
        self.charge / tuning.max_charge
    }
}
