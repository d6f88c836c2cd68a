use crate::club::{OpenTeam, PlayerPositionType, PlayerProfile, TeamAggregate};
use crate::matching::{BalancedMatch, CandidateRanking};
use crate::utils::FloatUtils;
use serde::Serialize;

/// Number of recommended teams shown on the analytics panel
pub const ANALYTICS_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchmakingAnalytics {
    pub player_id: u32,
    pub player_name: String,
    pub skill_level: u8,
    pub age: u8,
    pub positions: Vec<PlayerPositionType>,
    pub teams_count: usize,
    /// One decimal, 0 when the player has no team
    pub avg_team_skill: f32,
    pub skill_compatibility_score: u8,
    pub recommended_teams: Vec<BalancedMatch>,
}

impl MatchmakingAnalytics {
    pub fn build(
        player: &PlayerProfile,
        player_teams: &[TeamAggregate],
        open_teams: &[OpenTeam],
        limit: usize,
    ) -> Self {
        let avg_team_skill = if player_teams.is_empty() {
            0.0
        } else {
            player_teams.iter().map(|t| t.avg_skill).sum::<f32>() / player_teams.len() as f32
        };

        let skill_gap = (player.skill_level as f32 - avg_team_skill).abs();

        MatchmakingAnalytics {
            player_id: player.id,
            player_name: player.name.clone(),
            skill_level: player.skill_level,
            age: player.age,
            positions: player.positions.clone(),
            teams_count: player_teams.len(),
            avg_team_skill: FloatUtils::round_to(avg_team_skill, 1),
            skill_compatibility_score: FloatUtils::to_percent((1.0 - skill_gap / 10.0) * 100.0),
            recommended_teams: CandidateRanking::find_balanced_matches(player, open_teams, Some(limit)),
        }
    }
}
