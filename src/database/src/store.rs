use crate::StoreError;
use log::debug;
use matchmaking::{
    BalanceMember, OpenTeam, PlayerPositionType, PlayerProfile, RosterStatus, TeamAggregate,
    TeamMember,
};
use std::collections::BTreeMap;

/// In-memory stand-in for the platform database.
///
/// Owns players, teams and membership rows, and re-derives every team
/// aggregate after a roster change. Scoring code only ever reads from it.
#[derive(Debug, Default)]
pub struct MatchmakingStore {
    players: BTreeMap<u32, PlayerProfile>,
    teams: BTreeMap<u32, TeamAggregate>,
    memberships: Vec<TeamMember>,
}

impl MatchmakingStore {
    pub fn new() -> Self {
        MatchmakingStore::default()
    }

    pub fn insert_player(&mut self, player: PlayerProfile) -> Result<(), StoreError> {
        if self.players.contains_key(&player.id) {
            return Err(StoreError::DuplicatePlayer(player.id));
        }

        self.players.insert(player.id, player);

        Ok(())
    }

    pub fn insert_team(
        &mut self,
        team_id: u32,
        name: impl Into<String>,
        status: RosterStatus,
    ) -> Result<(), StoreError> {
        if self.teams.contains_key(&team_id) {
            return Err(StoreError::DuplicateTeam(team_id));
        }

        self.teams
            .insert(team_id, TeamAggregate::from_roster(team_id, name, Vec::new(), status));

        Ok(())
    }

    // Reads

    pub fn player(&self, player_id: u32) -> Option<&PlayerProfile> {
        self.players.get(&player_id)
    }

    pub fn team(&self, team_id: u32) -> Option<&TeamAggregate> {
        self.teams.get(&team_id)
    }

    pub fn teams(&self) -> impl Iterator<Item = &TeamAggregate> {
        self.teams.values()
    }

    pub fn members(&self, team_id: u32) -> Vec<&TeamMember> {
        self.memberships
            .iter()
            .filter(|m| m.team_id == team_id)
            .collect()
    }

    pub fn is_member(&self, player_id: u32, team_id: u32) -> bool {
        self.memberships
            .iter()
            .any(|m| m.team_id == team_id && m.player_id == player_id)
    }

    pub fn open_team(&self, team_id: u32) -> Option<OpenTeam> {
        let team = self.teams.get(&team_id)?;

        Some(OpenTeam::new(
            team.clone(),
            self.members(team_id).into_iter().cloned().collect(),
        ))
    }

    /// Teams with free slots, with their membership rows
    pub fn open_teams(&self) -> Vec<OpenTeam> {
        self.teams
            .values()
            .filter(|team| team.is_open())
            .filter_map(|team| self.open_team(team.id))
            .collect()
    }

    pub fn player_teams(&self, player_id: u32) -> Vec<TeamAggregate> {
        self.memberships
            .iter()
            .filter(|m| m.player_id == player_id)
            .filter_map(|m| self.teams.get(&m.team_id))
            .cloned()
            .collect()
    }

    /// Roster of `team_id` joined with player attributes
    pub fn balance_members(&self, team_id: u32) -> Vec<BalanceMember> {
        self.members(team_id)
            .into_iter()
            .filter_map(|m| {
                self.players.get(&m.player_id).map(|p| {
                    BalanceMember::new(p.id, p.skill_level, p.age, m.position)
                })
            })
            .collect()
    }

    /// Players without any team, one entry per position they can play
    pub fn free_agents(&self) -> Vec<BalanceMember> {
        self.players
            .values()
            .filter(|p| !self.memberships.iter().any(|m| m.player_id == p.id))
            .flat_map(|p| {
                p.positions
                    .iter()
                    .map(|&position| BalanceMember::new(p.id, p.skill_level, p.age, position))
            })
            .collect()
    }

    // Writes

    pub fn join_team(
        &mut self,
        player_id: u32,
        team_id: u32,
        position: PlayerPositionType,
    ) -> Result<&TeamAggregate, StoreError> {
        self.add_member(TeamMember::new(team_id, player_id, position))
    }

    pub fn add_member(&mut self, member: TeamMember) -> Result<&TeamAggregate, StoreError> {
        if !self.players.contains_key(&member.player_id) {
            return Err(StoreError::UnknownPlayer(member.player_id));
        }

        let team = self
            .teams
            .get(&member.team_id)
            .ok_or(StoreError::UnknownTeam(member.team_id))?;

        if self.is_member(member.player_id, member.team_id) {
            return Err(StoreError::AlreadyMember {
                player_id: member.player_id,
                team_id: member.team_id,
            });
        }

        if !team.is_open() {
            return Err(StoreError::TeamFull(member.team_id));
        }

        debug!(
            "player {} joins team {} as {}",
            member.player_id, member.team_id, member.position
        );

        let team_id = member.team_id;
        self.memberships.push(member);

        self.rederive(team_id)
    }

    pub fn leave_team(&mut self, player_id: u32, team_id: u32) -> Result<TeamMember, StoreError> {
        if !self.teams.contains_key(&team_id) {
            return Err(StoreError::UnknownTeam(team_id));
        }

        let index = self
            .memberships
            .iter()
            .position(|m| m.team_id == team_id && m.player_id == player_id)
            .ok_or(StoreError::NotAMember { player_id, team_id })?;

        let member = self.memberships.remove(index);

        debug!("player {} leaves team {}", player_id, team_id);

        self.rederive(team_id)?;

        Ok(member)
    }

    fn rederive(&mut self, team_id: u32) -> Result<&TeamAggregate, StoreError> {
        let roster: Vec<(u8, u8)> = self
            .memberships
            .iter()
            .filter(|m| m.team_id == team_id)
            .filter_map(|m| self.players.get(&m.player_id))
            .map(|p| (p.skill_level, p.age))
            .collect();

        let team = self
            .teams
            .get_mut(&team_id)
            .ok_or(StoreError::UnknownTeam(team_id))?;

        *team = TeamAggregate::from_roster(team_id, team.name.clone(), roster, team.status);

        Ok(team)
    }
}
