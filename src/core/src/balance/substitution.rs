use crate::balance::{BalanceMember, TeamBalanceAnalyzer};
use crate::club::{IDEAL_FORMATION, PlayerPositionType, PositionCounts};
use log::debug;
use serde::Serialize;

pub const MAX_SUGGESTIONS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubstitutionSuggestion {
    pub remove_player_id: u32,
    pub add_player_id: u32,
    pub removed_position: PlayerPositionType,
    pub added_position: PlayerPositionType,
    /// Overall balance score after the swap minus before
    pub balance_improvement: i16,
    pub reason: String,
}

/// Greedy single-pass swap proposals towards the ideal formation.
///
/// For every over-filled position (vocabulary order) the weakest member there
/// is swapped for the first available player at the first short position.
/// Not globally optimal and never revisits a decision.
pub struct SubstitutionAdvisor;

impl SubstitutionAdvisor {
    pub fn suggest(
        team_id: u32,
        members: &[BalanceMember],
        available_players: &[BalanceMember],
    ) -> Vec<SubstitutionSuggestion> {
        let Ok(baseline) = TeamBalanceAnalyzer::analyze(team_id, members) else {
            return Vec::new();
        };

        let counts = PositionCounts::from_positions(members.iter().map(|m| m.position));

        let mut suggestions = Vec::with_capacity(MAX_SUGGESTIONS);
        let mut proposed: Vec<u32> = Vec::new();

        for excess_position in PlayerPositionType::ALL {
            if suggestions.len() == MAX_SUGGESTIONS {
                break;
            }

            if !counts.is_over(excess_position, &IDEAL_FORMATION) {
                continue;
            }

            let Some(weakest) = Self::weakest_at(members, excess_position) else {
                continue;
            };

            let Some(needed_position) = PlayerPositionType::ALL
                .into_iter()
                .find(|&p| p != excess_position && counts.is_short(p, &IDEAL_FORMATION))
            else {
                continue;
            };

            let Some(replacement) = available_players.iter().find(|p| {
                p.position == needed_position
                    && !proposed.contains(&p.player_id)
                    && !members.iter().any(|m| m.player_id == p.player_id)
            }) else {
                debug!("team {}: no available {} to replace {}", team_id, needed_position, weakest.player_id);
                continue;
            };

            let swapped: Vec<BalanceMember> = members
                .iter()
                .map(|m| if m.player_id == weakest.player_id { *replacement } else { *m })
                .collect();

            let balance_improvement = match TeamBalanceAnalyzer::analyze(team_id, &swapped) {
                Ok(after) => after.overall_balance_score as i16 - baseline.overall_balance_score as i16,
                Err(_) => 0,
            };

            proposed.push(replacement.player_id);

            suggestions.push(SubstitutionSuggestion {
                remove_player_id: weakest.player_id,
                add_player_id: replacement.player_id,
                removed_position: excess_position,
                added_position: needed_position,
                balance_improvement,
                reason: format!(
                    "Replace {} with {} for better balance",
                    excess_position, needed_position
                ),
            });
        }

        suggestions
    }

    /// Lowest skill at `position`; the first one wins a tie
    fn weakest_at(members: &[BalanceMember], position: PlayerPositionType) -> Option<&BalanceMember> {
        members
            .iter()
            .filter(|m| m.position == position)
            .reduce(|weakest, m| if m.skill_level < weakest.skill_level { m } else { weakest })
    }
}
