use crate::loaders::{PlayerEntity, SnapshotEntity, TeamMemberEntity};
use crate::{MatchmakingStore, SnapshotError};
use log::{debug, info};
use matchmaking::{PlayerPositionType, PlayerProfile, RosterStatus, TeamMember};
use std::str::FromStr;

pub struct StoreGenerator;

impl StoreGenerator {
    /// Build a store from raw snapshot rows.
    ///
    /// Teams start empty and every membership row goes through the same
    /// insert path as a live join, so aggregates are always derived.
    pub fn generate(data: &SnapshotEntity) -> Result<MatchmakingStore, SnapshotError> {
        let mut store = MatchmakingStore::new();

        for player in &data.players {
            store.insert_player(Self::generate_player(player)?)?;
        }

        for team in &data.teams {
            let status = RosterStatus::from_str(&team.status)?;
            store.insert_team(team.team_id, team.team_name.clone(), status)?;
        }

        for member in &data.team_members {
            let team = store.add_member(Self::generate_member(member)?)?;

            debug!("team {} now has {} members", team.id, team.member_count);
        }

        info!(
            "store generated: {} players, {} teams, {} open",
            data.players.len(),
            data.teams.len(),
            store.open_teams().len()
        );

        Ok(store)
    }

    fn generate_player(entity: &PlayerEntity) -> Result<PlayerProfile, SnapshotError> {
        let positions = entity
            .positions
            .iter()
            .map(|code| PlayerPositionType::from_str(code))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PlayerProfile::new(
            entity.user_id,
            entity.username.clone(),
            entity.current_level,
            entity.age,
            positions,
        ))
    }

    fn generate_member(entity: &TeamMemberEntity) -> Result<TeamMember, SnapshotError> {
        let position = PlayerPositionType::from_str(&entity.assigned_position)?;

        Ok(TeamMember {
            has_paid: entity.has_paid,
            ..TeamMember::new(entity.team_id, entity.user_id, position)
        })
    }
}
