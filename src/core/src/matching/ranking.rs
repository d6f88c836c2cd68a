use crate::club::{OpenTeam, PlayerProfile};
use crate::matching::{CompatibilityResult, CompatibilityScorer, EuclideanMatcher};
use crate::utils::FloatUtils;
use itertools::Itertools;
use log::{debug, trace};
use rayon::prelude::*;
use serde::Serialize;

/// Limit used by the matchmaking screen
pub const MATCHMAKING_LIMIT: usize = 10;

/// Distance compatibility above which a team with a shared position is recommended
const RECOMMENDATION_THRESHOLD: f32 = 50.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalancedMatch {
    pub team_id: u32,
    pub team_name: String,
    /// 0-100, whole number
    pub compatibility_score: u8,
    /// Two decimals
    pub euclidean_distance: f32,
    /// Any of the player's positions already present on the team
    pub position_match: bool,
    pub recommended: bool,
}

/// Ranks open teams for one player.
///
/// Teams the player already belongs to and full rosters are skipped. Scores
/// are computed in parallel; output is sorted by score descending and teams
/// with equal scores keep their input order.
pub struct CandidateRanking;

impl CandidateRanking {
    pub fn find_matches(
        player: &PlayerProfile,
        open_teams: &[OpenTeam],
        limit: Option<usize>,
    ) -> Vec<CompatibilityResult> {
        let scored: Vec<CompatibilityResult> = open_teams
            .par_iter()
            .filter(|team| Self::is_candidate(player, team))
            .map(|team| CompatibilityScorer::score(player, &team.team, &team.member_positions()))
            .collect();

        debug!(
            "player {}: {} of {} teams scored",
            player.id,
            scored.len(),
            open_teams.len()
        );

        scored
            .into_iter()
            .sorted_by(|a, b| b.overall.total_cmp(&a.overall))
            .take(limit.unwrap_or(usize::MAX))
            .collect()
    }

    /// Distance-based alternative to `find_matches`
    pub fn find_balanced_matches(
        player: &PlayerProfile,
        open_teams: &[OpenTeam],
        limit: Option<usize>,
    ) -> Vec<BalancedMatch> {
        let scored: Vec<BalancedMatch> = open_teams
            .par_iter()
            .filter(|team| Self::is_candidate(player, team))
            .map(|team| Self::balanced_match(player, team))
            .collect();

        scored
            .into_iter()
            .sorted_by(|a, b| b.compatibility_score.cmp(&a.compatibility_score))
            .take(limit.unwrap_or(usize::MAX))
            .collect()
    }

    /// Open roster the player is not part of yet, for a player that can be matched at all
    pub fn is_candidate(player: &PlayerProfile, team: &OpenTeam) -> bool {
        if !player.is_eligible() {
            trace!("player {} skipped: incomplete profile", player.id);
            return false;
        }

        if !team.team.is_open() {
            trace!("team {} skipped: roster full", team.team.id);
            return false;
        }

        if team.has_member(player.id) {
            trace!("team {} skipped: player {} already a member", team.team.id, player.id);
            return false;
        }

        true
    }

    fn balanced_match(player: &PlayerProfile, team: &OpenTeam) -> BalancedMatch {
        let distance = EuclideanMatcher::distance(
            player.age,
            player.skill_level,
            team.team.avg_age,
            team.team.avg_skill,
        );

        let compatibility = EuclideanMatcher::compatibility(distance);
        let position_match = team.members.iter().any(|m| player.plays(m.position));

        BalancedMatch {
            team_id: team.team.id,
            team_name: team.team.name.clone(),
            compatibility_score: FloatUtils::to_percent(compatibility),
            euclidean_distance: FloatUtils::round_to(distance, 2),
            position_match,
            recommended: compatibility > RECOMMENDATION_THRESHOLD && position_match,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::PlayerPositionType::{self, *};
    use crate::club::{RosterStatus, TeamAggregate, TeamMember};
    use proptest::prelude::*;

    fn open_team(id: u32, avg_skill: f32, avg_age: f32, members: &[(u32, PlayerPositionType)]) -> OpenTeam {
        OpenTeam::new(
            TeamAggregate::new(
                id,
                format!("Team {}", id),
                members.len() as u8,
                avg_skill,
                avg_age,
                RosterStatus::NeedPlayer,
            ),
            members
                .iter()
                .map(|&(player_id, position)| TeamMember::new(id, player_id, position))
                .collect(),
        )
    }

    fn full_team(id: u32) -> OpenTeam {
        let members: Vec<(u32, PlayerPositionType)> =
            (100..111).map(|player_id| (player_id, Midfielder)).collect();
        open_team(id, 7.0, 24.0, &members)
    }

    fn player() -> PlayerProfile {
        PlayerProfile::new(1, "Ahmed", 8, 25, [Forward, Midfielder])
    }

    fn pool() -> Vec<OpenTeam> {
        vec![
            open_team(2, 6.8, 23.0, &[(2, Forward), (5, Midfielder)]),
            open_team(3, 6.2, 25.0, &[(6, Midfielder)]),
            full_team(4),
            open_team(5, 8.0, 27.0, &[(1, Midfielder), (3, Goalkeeper)]),
            open_team(6, 5.5, 22.0, &[(9, Defender)]),
        ]
    }

    #[test]
    fn test_excludes_member_and_full_teams() {
        let matches = CandidateRanking::find_matches(&player(), &pool(), None);
        let ids: Vec<u32> = matches.iter().map(|m| m.team_id).collect();

        assert_eq!(ids.len(), 3);
        assert!(!ids.contains(&4));
        assert!(!ids.contains(&5));
    }

    #[test]
    fn test_player_without_positions_is_not_matched() {
        let player = PlayerProfile::new(40, "Nobody", 7, 24, []);

        assert!(CandidateRanking::find_matches(&player, &pool(), None).is_empty());
        assert!(CandidateRanking::find_balanced_matches(&player, &pool(), None).is_empty());
    }

    #[test]
    fn test_sorted_descending() {
        let matches = CandidateRanking::find_matches(&player(), &pool(), None);

        assert!(matches.windows(2).all(|w| w[0].overall >= w[1].overall));
        assert_eq!(matches[0].team_id, 2);
    }

    #[test]
    fn test_limit_truncates() {
        let matches = CandidateRanking::find_matches(&player(), &pool(), Some(1));
        assert_eq!(matches.len(), 1);

        let matches = CandidateRanking::find_matches(&player(), &pool(), Some(0));
        assert!(matches.is_empty());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let teams = vec![
            open_team(7, 7.0, 25.0, &[(20, Defender)]),
            open_team(8, 7.0, 25.0, &[(21, Defender)]),
            open_team(9, 7.0, 25.0, &[(22, Defender)]),
        ];

        let ids: Vec<u32> = CandidateRanking::find_matches(&player(), &teams, None)
            .iter()
            .map(|m| m.team_id)
            .collect();

        assert_eq!(ids, vec![7, 8, 9]);
    }

    #[test]
    fn test_ranking_is_idempotent() {
        let first = CandidateRanking::find_matches(&player(), &pool(), Some(MATCHMAKING_LIMIT));
        let second = CandidateRanking::find_matches(&player(), &pool(), Some(MATCHMAKING_LIMIT));

        assert_eq!(first, second);
    }

    #[test]
    fn test_balanced_matches() {
        let matches = CandidateRanking::find_balanced_matches(&player(), &pool(), None);
        let ids: Vec<u32> = matches.iter().map(|m| m.team_id).collect();

        assert_eq!(ids.len(), 3);
        assert!(!ids.contains(&4));
        assert!(!ids.contains(&5));
        assert!(
            matches
                .windows(2)
                .all(|w| w[0].compatibility_score >= w[1].compatibility_score)
        );

        let kouba = matches.iter().find(|m| m.team_id == 6).unwrap();
        assert!(!kouba.position_match);
        assert!(!kouba.recommended);

        let bab_ezzouar = matches.iter().find(|m| m.team_id == 2).unwrap();
        assert!(bab_ezzouar.position_match);
        assert!(bab_ezzouar.recommended);
    }

    #[test]
    fn test_balanced_match_distance_is_rounded() {
        // age 25 vs 23 -> 0.4, skill 8 vs 6.8 -> 1.2, distance 1.2649...
        let matches = CandidateRanking::find_balanced_matches(&player(), &pool(), Some(3));
        let bab_ezzouar = matches.iter().find(|m| m.team_id == 2).unwrap();

        assert!((bab_ezzouar.euclidean_distance - 1.26).abs() < 1e-4);
        assert_eq!(bab_ezzouar.compatibility_score, 87);
    }

    proptest! {
        #[test]
        fn prop_never_ranks_member_or_full_teams(
            counts in prop::collection::vec(0u8..=11, 1..12),
            member_team in 0usize..12,
        ) {
            let player = player();

            let teams: Vec<OpenTeam> = counts
                .iter()
                .enumerate()
                .map(|(index, &count)| {
                    let team_id = index as u32 + 10;
                    let mut members: Vec<(u32, PlayerPositionType)> = (0..count as u32)
                        .map(|n| (1000 + team_id * 20 + n, Defender))
                        .collect();

                    if index == member_team && count > 0 {
                        members[0] = (player.id, Forward);
                    }

                    open_team(team_id, 6.0, 24.0, &members)
                })
                .collect();

            let first = CandidateRanking::find_matches(&player, &teams, None);
            let second = CandidateRanking::find_matches(&player, &teams, None);

            prop_assert_eq!(&first, &second);

            for result in &first {
                let team = teams.iter().find(|t| t.team.id == result.team_id).unwrap();
                prop_assert!(team.team.member_count < 11);
                prop_assert!(!team.has_member(player.id));
            }
        }
    }
}
