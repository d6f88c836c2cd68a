use crate::club::{PlayerPositionType, PlayerProfile, TeamAggregate};
use crate::matching::{CompatibilityWeights, QUICK_WEIGHTS, STANDARD_WEIGHTS};
use crate::utils::FloatUtils;
use serde::Serialize;

/// Position match used when the player's positions are not on the team yet.
/// Such a team may need exactly that position, so it is not a zero.
pub const NEUTRAL_POSITION_MATCH: f32 = 0.5;

const SKILL_SCALE: f32 = 10.0;
const AGE_TOLERANCE_YEARS: f32 = 20.0;
const FULL_CREDIT_OPEN_SLOTS: f32 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatibilityResult {
    pub team_id: u32,
    pub team_name: String,
    /// 0-100, one decimal
    pub overall: f32,
    pub skill_match: f32,
    pub position_match: f32,
    pub age_match: f32,
    /// 0-1
    pub slot_availability: f32,
    pub position_gap: Vec<PlayerPositionType>,
}

pub struct CompatibilityScorer;

impl CompatibilityScorer {
    pub fn score(
        player: &PlayerProfile,
        team: &TeamAggregate,
        team_member_positions: &[PlayerPositionType],
    ) -> CompatibilityResult {
        Self::score_with(&STANDARD_WEIGHTS, player, team, team_member_positions)
    }

    pub fn score_with(
        weights: &CompatibilityWeights,
        player: &PlayerProfile,
        team: &TeamAggregate,
        team_member_positions: &[PlayerPositionType],
    ) -> CompatibilityResult {
        let skill = Self::team_skill_match(player, team);
        let position = Self::position_match(&player.positions, team_member_positions);
        let age = Self::age_match(player.age, team.avg_age);
        let slots = Self::slot_availability(team.open_slots());

        let overall = weights.combine(skill, position, age, slots) * 100.0;

        CompatibilityResult {
            team_id: team.id,
            team_name: team.name.clone(),
            overall: FloatUtils::round_to(FloatUtils::clamp_percent(overall), 1),
            skill_match: FloatUtils::round_to(skill * 100.0, 1),
            position_match: FloatUtils::round_to(position * 100.0, 1),
            age_match: FloatUtils::round_to(age * 100.0, 1),
            slot_availability: slots,
            position_gap: Self::position_gap(team_member_positions, &player.positions),
        }
    }

    /// Whole-percent compatibility shown on a single team card
    pub fn quick_score(
        player: &PlayerProfile,
        team: &TeamAggregate,
        team_member_positions: &[PlayerPositionType],
    ) -> u8 {
        let combined = QUICK_WEIGHTS.combine(
            Self::team_skill_match(player, team),
            Self::position_match(&player.positions, team_member_positions),
            Self::age_match(player.age, team.avg_age),
            0.0,
        );

        FloatUtils::to_percent(combined * 100.0)
    }

    /// `max(0, 10 - |diff|) / 10`
    pub fn skill_match(player_skill: u8, team_avg_skill: f32) -> f32 {
        let difference = (player_skill as f32 - team_avg_skill).abs();
        (SKILL_SCALE - difference).max(0.0) / SKILL_SCALE
    }

    pub fn position_match(
        player_positions: &[PlayerPositionType],
        team_member_positions: &[PlayerPositionType],
    ) -> f32 {
        if player_positions.is_empty() {
            return NEUTRAL_POSITION_MATCH;
        }

        let overlap = player_positions
            .iter()
            .filter(|position| team_member_positions.contains(position))
            .count();

        if overlap == 0 {
            return NEUTRAL_POSITION_MATCH;
        }

        (overlap as f32 / player_positions.len() as f32).min(1.0)
    }

    /// `max(0, 1 - |diff| / 20)`
    pub fn age_match(player_age: u8, team_avg_age: f32) -> f32 {
        let difference = (player_age as f32 - team_avg_age).abs();
        (1.0 - difference / AGE_TOLERANCE_YEARS).max(0.0)
    }

    /// Full credit from five open slots upwards, zero for a full roster
    pub fn slot_availability(open_slots: u8) -> f32 {
        if open_slots == 0 {
            return 0.0;
        }

        (open_slots as f32 / FULL_CREDIT_OPEN_SLOTS).min(1.0)
    }

    /// Positions held on the team that the player does not play, one entry
    /// per occupying member, in roster order
    pub fn position_gap(
        team_member_positions: &[PlayerPositionType],
        player_positions: &[PlayerPositionType],
    ) -> Vec<PlayerPositionType> {
        team_member_positions
            .iter()
            .filter(|position| !player_positions.contains(position))
            .copied()
            .collect()
    }

    // An empty roster has no skill level to mismatch against. Age keeps the
    // plain formula against the zero average.
    fn team_skill_match(player: &PlayerProfile, team: &TeamAggregate) -> f32 {
        if team.is_empty() {
            return 1.0;
        }

        Self::skill_match(player.skill_level, team.avg_skill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::PlayerPositionType::*;
    use crate::club::RosterStatus;
    use proptest::prelude::*;

    fn team(member_count: u8, avg_skill: f32, avg_age: f32) -> TeamAggregate {
        TeamAggregate::new(
            2,
            "Bab Ezzouar FC",
            member_count,
            avg_skill,
            avg_age,
            RosterStatus::NeedPlayer,
        )
    }

    #[test]
    fn test_score_reference_example() {
        let player = PlayerProfile::new(10, "Samir", 7, 24, [Midfielder]);
        let team = team(8, 7.0, 25.0);
        let positions = [
            Goalkeeper, Defender, Defender, Midfielder, Midfielder, Forward, Forward, Defender,
        ];

        let result = CompatibilityScorer::score(&player, &team, &positions);

        assert_eq!(result.skill_match, 100.0);
        assert_eq!(result.position_match, 100.0);
        assert_eq!(result.age_match, 95.0);
        assert!((result.slot_availability - 0.6).abs() < 1e-6);
        assert_eq!(result.overall, 93.0);
    }

    #[test]
    fn test_missing_position_is_neutral() {
        let player = PlayerProfile::new(2, "Karim", 7, 22, [Forward]);
        let positions = [Goalkeeper, Defender, Midfielder];

        let result = CompatibilityScorer::score(&player, &team(3, 7.0, 22.0), &positions);

        assert_eq!(result.position_match, 50.0);
    }

    #[test]
    fn test_empty_player_positions_are_neutral() {
        assert_eq!(
            CompatibilityScorer::position_match(&[], &[Goalkeeper]),
            NEUTRAL_POSITION_MATCH
        );
    }

    #[test]
    fn test_partial_position_overlap() {
        let value = CompatibilityScorer::position_match(&[Forward, Midfielder], &[Midfielder, Defender]);
        assert_eq!(value, 0.5);

        let value = CompatibilityScorer::position_match(&[Forward, Midfielder], &[Midfielder, Forward]);
        assert_eq!(value, 1.0);
    }

    #[test]
    fn test_skill_match_floors_at_zero() {
        assert_eq!(CompatibilityScorer::skill_match(1, 12.0), 0.0);
        assert_eq!(CompatibilityScorer::skill_match(6, 8.0), 0.8);
    }

    #[test]
    fn test_age_match_floors_at_zero() {
        assert_eq!(CompatibilityScorer::age_match(45, 20.0), 0.0);
        assert_eq!(CompatibilityScorer::age_match(20, 30.0), 0.5);
    }

    #[test]
    fn test_slot_availability() {
        assert_eq!(CompatibilityScorer::slot_availability(11), 1.0);
        assert_eq!(CompatibilityScorer::slot_availability(5), 1.0);
        assert!((CompatibilityScorer::slot_availability(2) - 0.4).abs() < 1e-6);
        assert_eq!(CompatibilityScorer::slot_availability(0), 0.0);
    }

    #[test]
    fn test_position_gap_keeps_order_and_duplicates() {
        let gap = CompatibilityScorer::position_gap(
            &[Goalkeeper, Defender, Midfielder, Defender, Forward],
            &[Midfielder, Forward],
        );

        assert_eq!(gap, vec![Goalkeeper, Defender, Defender]);
    }

    #[test]
    fn test_empty_team_is_permissive_on_skill_only() {
        let player = PlayerProfile::new(1, "Ahmed", 8, 30, [Forward, Midfielder]);
        let result = CompatibilityScorer::score(&player, &team(0, 0.0, 0.0), &[]);

        assert_eq!(result.skill_match, 100.0);
        assert_eq!(result.age_match, 0.0);
        assert_eq!(result.position_match, 50.0);
        assert_eq!(result.slot_availability, 1.0);
        // 35 + 15 + 0 + 15
        assert_eq!(result.overall, 65.0);
        assert!(result.position_gap.is_empty());
    }

    #[test]
    fn test_empty_team_age_uses_zero_average() {
        let player = PlayerProfile::new(1, "Junior", 8, 10, [Forward]);
        let result = CompatibilityScorer::score(&player, &team(0, 0.0, 0.0), &[]);

        assert_eq!(result.age_match, 50.0);
        // 35 + 15 + 10 + 15
        assert_eq!(result.overall, 75.0);
    }

    #[test]
    fn test_full_team_gets_no_slot_credit() {
        let player = PlayerProfile::new(1, "Ahmed", 7, 25, [Midfielder]);
        let result = CompatibilityScorer::score(&player, &team(11, 7.0, 25.0), &[Midfielder]);

        assert_eq!(result.slot_availability, 0.0);
        assert_eq!(result.overall, 85.0);
    }

    #[test]
    fn test_quick_score() {
        let player = PlayerProfile::new(10, "Samir", 7, 24, [Midfielder]);
        let score = CompatibilityScorer::quick_score(&player, &team(8, 7.0, 25.0), &[Midfielder]);

        // 40 + 35 + 0.95 * 25
        assert_eq!(score, 99);
    }

    fn position_strategy() -> impl Strategy<Value = PlayerPositionType> {
        prop::sample::select(PlayerPositionType::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_overall_is_bounded(
            skill in 1u8..=10,
            age in 10u8..=70,
            player_positions in prop::collection::vec(position_strategy(), 0..4),
            member_count in 0u8..=11,
            avg_skill in 0.0f32..=10.0,
            avg_age in 0.0f32..=80.0,
            member_positions in prop::collection::vec(position_strategy(), 0..11),
        ) {
            let player = PlayerProfile::new(1, "P", skill, age, player_positions);
            let result = CompatibilityScorer::score(&player, &team(member_count, avg_skill, avg_age), &member_positions);

            prop_assert!(result.overall >= 0.0 && result.overall <= 100.0);
            prop_assert!(result.skill_match >= 0.0 && result.skill_match <= 100.0);
            prop_assert!(result.position_match >= 0.0 && result.position_match <= 100.0);
            prop_assert!(result.age_match >= 0.0 && result.age_match <= 100.0);
            prop_assert!(result.slot_availability >= 0.0 && result.slot_availability <= 1.0);
        }
    }
}
