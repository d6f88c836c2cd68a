use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BalanceError {
    /// Mean and deviation are undefined for an empty roster
    #[error("team {team_id} has no members to analyze")]
    EmptyTeam { team_id: u32 },
}
