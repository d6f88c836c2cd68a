use matchmaking::{UnknownPositionError, UnknownRosterStatusError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("unknown player {0}")]
    UnknownPlayer(u32),
    #[error("unknown team {0}")]
    UnknownTeam(u32),
    #[error("player {0} already exists")]
    DuplicatePlayer(u32),
    #[error("team {0} already exists")]
    DuplicateTeam(u32),
    #[error("player {player_id} is already a member of team {team_id}")]
    AlreadyMember { player_id: u32, team_id: u32 },
    #[error("player {player_id} is not a member of team {team_id}")]
    NotAMember { player_id: u32, team_id: u32 },
    #[error("team {0} is full")]
    TeamFull(u32),
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Position(#[from] UnknownPositionError),
    #[error(transparent)]
    Status(#[from] UnknownRosterStatusError),
    #[error("inconsistent snapshot: {0}")]
    Store(#[from] StoreError),
}
