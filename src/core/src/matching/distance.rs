use crate::utils::FloatUtils;
use nalgebra::Vector2;

/// Ages are divided by this to bring them onto the 1-10 skill scale
const AGE_NORMALIZATION: f32 = 5.0;

/// Distance at which the distance-based compatibility reaches zero
const MAX_COMPATIBLE_DISTANCE: f32 = 10.0;

/// Nearest-neighbour matching in the normalized (age, skill) plane
pub struct EuclideanMatcher;

impl EuclideanMatcher {
    pub fn distance(player_age: u8, player_skill: u8, team_avg_age: f32, team_avg_skill: f32) -> f32 {
        let player = Self::point(player_age as f32, player_skill as f32);
        let team = Self::point(team_avg_age, team_avg_skill);

        (team - player).norm()
    }

    /// `(10 - distance) * 10`, clamped to 0-100
    pub fn compatibility(distance: f32) -> f32 {
        FloatUtils::clamp_percent((MAX_COMPATIBLE_DISTANCE - distance) * 10.0)
    }

    fn point(age: f32, skill: f32) -> Vector2<f32> {
        Vector2::new(age / AGE_NORMALIZATION, skill)
    }
}
