use serde::{Deserialize, Serialize};

/// Canonical weights used by the ranking pipeline
pub const STANDARD_WEIGHTS: CompatibilityWeights = CompatibilityWeights {
    skill: 0.35,
    position: 0.30,
    age: 0.20,
    slots: 0.15,
};

/// Weights behind the per-card compatibility percentage.
/// No slot term: the card is shown for a single team already picked.
pub const QUICK_WEIGHTS: CompatibilityWeights = CompatibilityWeights {
    skill: 0.40,
    position: 0.35,
    age: 0.25,
    slots: 0.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityWeights {
    pub skill: f32,
    pub position: f32,
    pub age: f32,
    pub slots: f32,
}

impl CompatibilityWeights {
    pub fn sum(&self) -> f32 {
        self.skill + self.position + self.age + self.slots
    }

    /// Weighted sum of 0-1 factors, still on the 0-1 scale
    pub fn combine(&self, skill: f32, position: f32, age: f32, slots: f32) -> f32 {
        skill * self.skill + position * self.position + age * self.age + slots * self.slots
    }
}
