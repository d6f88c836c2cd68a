use crate::balance::BalanceError;
use crate::club::{IDEAL_FORMATION, MAX_TEAM_SIZE, PlayerPositionType, PositionCounts};
use crate::utils::{FloatUtils, IntegerUtils};
use log::debug;
use serde::{Deserialize, Serialize};

/// Version of the overall balance formula below.
/// Bump it whenever the weights or penalty change.
pub const BALANCE_FORMULA_VERSION: u8 = 1;

const SKILL_SPREAD_PENALTY: f32 = 15.0;
const SKILL_COMPONENT_WEIGHT: f32 = 0.6;
const POSITION_COMPONENT_WEIGHT: f32 = 0.4;

/// Penalty per point of standard deviation in the skill-only score
const SKILL_ONLY_PENALTY: f32 = 20.0;

const NEEDS_IMPROVEMENT_BELOW: u8 = 75;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceMember {
    pub player_id: u32,
    pub skill_level: u8,
    pub age: u8,
    pub position: PlayerPositionType,
}

impl BalanceMember {
    pub fn new(player_id: u32, skill_level: u8, age: u8, position: PlayerPositionType) -> Self {
        BalanceMember {
            player_id,
            skill_level,
            age,
            position,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceRating {
    Excellent,
    Good,
    NeedsWork,
}

impl BalanceRating {
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 80 => BalanceRating::Excellent,
            s if s >= 60 => BalanceRating::Good,
            _ => BalanceRating::NeedsWork,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceResult {
    pub team_id: u32,
    pub member_count: usize,
    pub avg_skill: f32,
    pub avg_age: f32,
    /// Population standard deviation of skill levels, one decimal
    pub skill_variance: f32,
    /// 100 when the positions match the ideal formation exactly
    pub position_balance: u8,
    /// Share of the 11 roster slots filled
    pub completeness: u8,
    pub overall_balance_score: u8,
    pub rating: BalanceRating,
    pub formula_version: u8,
}

impl BalanceResult {
    pub fn needs_improvement(&self) -> bool {
        self.overall_balance_score < NEEDS_IMPROVEMENT_BELOW
    }
}

pub struct TeamBalanceAnalyzer;

impl TeamBalanceAnalyzer {
    pub fn analyze(team_id: u32, members: &[BalanceMember]) -> Result<BalanceResult, BalanceError> {
        if members.is_empty() {
            return Err(BalanceError::EmptyTeam { team_id });
        }

        let skills: Vec<u8> = members.iter().map(|m| m.skill_level).collect();
        let ages: Vec<u8> = members.iter().map(|m| m.age).collect();

        let avg_skill = IntegerUtils::mean(&skills).unwrap_or_default();
        let avg_age = IntegerUtils::mean(&ages).unwrap_or_default();
        let std_dev = IntegerUtils::population_std_dev(&skills).unwrap_or_default();

        let counts = PositionCounts::from_positions(members.iter().map(|m| m.position));
        let position_balance = Self::position_balance(&counts);
        let overall_balance_score = Self::overall_balance_score(std_dev, position_balance);

        debug!(
            "team {}: std dev {:.2}, position balance {}, overall {}",
            team_id, std_dev, position_balance, overall_balance_score
        );

        Ok(BalanceResult {
            team_id,
            member_count: members.len(),
            avg_skill: FloatUtils::round_to(avg_skill, 1),
            avg_age: FloatUtils::round_to(avg_age, 1),
            skill_variance: FloatUtils::round_to(std_dev, 1),
            position_balance,
            completeness: Self::completeness(members.len()),
            overall_balance_score,
            rating: BalanceRating::from_score(overall_balance_score),
            formula_version: BALANCE_FORMULA_VERSION,
        })
    }

    /// `round((1 - total_difference / 11) * 100)`, clamped to 0-100
    pub fn position_balance(counts: &PositionCounts) -> u8 {
        let total_difference = counts.total_difference(&IDEAL_FORMATION) as f32;
        let ideal_total = IDEAL_FORMATION.total() as f32;

        FloatUtils::to_percent((1.0 - total_difference / ideal_total) * 100.0)
    }

    /// `round((100 - std_dev * 15) * 0.6 + position_balance * 0.4)`, clamped to 0-100
    pub fn overall_balance_score(skill_std_dev: f32, position_balance: u8) -> u8 {
        let skill_component = 100.0 - skill_std_dev * SKILL_SPREAD_PENALTY;

        FloatUtils::to_percent(
            skill_component * SKILL_COMPONENT_WEIGHT
                + position_balance as f32 * POSITION_COMPONENT_WEIGHT,
        )
    }

    pub fn completeness(member_count: usize) -> u8 {
        FloatUtils::to_percent(member_count as f32 / MAX_TEAM_SIZE as f32 * 100.0)
    }

    /// Skill-only homogeneity, `max(0, 100 - std_dev * 20)`.
    /// An empty roster scores 0 instead of failing.
    pub fn skill_balance_score(members: &[BalanceMember]) -> u8 {
        let skills: Vec<u8> = members.iter().map(|m| m.skill_level).collect();

        match IntegerUtils::population_std_dev(&skills) {
            Some(std_dev) => FloatUtils::to_percent(100.0 - std_dev * SKILL_ONLY_PENALTY),
            None => 0,
        }
    }
}
