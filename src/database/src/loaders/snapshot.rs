use crate::SnapshotError;
use log::info;
use serde::Deserialize;
use std::fs;
use std::path::Path;

const STATIC_SEED_JSON: &str = include_str!("../../data/seed.json");

/// Raw rows as exported by the backing store
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotEntity {
    pub players: Vec<PlayerEntity>,
    pub teams: Vec<TeamEntity>,
    #[serde(default)]
    pub team_members: Vec<TeamMemberEntity>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerEntity {
    pub user_id: u32,
    pub username: String,
    pub age: u8,
    pub positions: Vec<String>,
    pub current_level: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamEntity {
    pub team_id: u32,
    pub team_name: String,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamMemberEntity {
    pub team_id: u32,
    pub user_id: u32,
    pub assigned_position: String,
    #[serde(default)]
    pub has_paid: bool,
}

pub struct SnapshotLoader;

impl SnapshotLoader {
    /// Embedded seed snapshot
    pub fn load() -> Result<SnapshotEntity, SnapshotError> {
        Self::parse(STATIC_SEED_JSON)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<SnapshotEntity, SnapshotError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        info!("snapshot read from {}", path.display());

        Self::parse(&content)
    }

    pub fn parse(json: &str) -> Result<SnapshotEntity, SnapshotError> {
        let snapshot: SnapshotEntity = serde_json::from_str(json)?;

        info!(
            "snapshot parsed: {} players, {} teams, {} memberships",
            snapshot.players.len(),
            snapshot.teams.len(),
            snapshot.team_members.len()
        );

        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_seed_parses() {
        let snapshot = SnapshotLoader::load().unwrap();

        assert_eq!(snapshot.players.len(), 28);
        assert_eq!(snapshot.teams.len(), 6);
        assert_eq!(snapshot.team_members.len(), 30);
    }

    #[test]
    fn test_memberships_are_optional() {
        let snapshot = SnapshotLoader::parse(r#"{ "players": [], "teams": [] }"#).unwrap();
        assert!(snapshot.team_members.is_empty());
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let err = SnapshotLoader::parse("{ not json").unwrap_err();
        assert!(matches!(err, SnapshotError::Json(_)));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let err = SnapshotLoader::load_from_path("/nonexistent/snapshot.json").unwrap_err();
        assert!(matches!(err, SnapshotError::Io(_)));
    }
}
