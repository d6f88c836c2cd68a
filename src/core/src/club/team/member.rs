use crate::club::{PlayerPositionType, TeamAggregate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub team_id: u32,
    pub player_id: u32,
    pub position: PlayerPositionType,
    pub has_paid: bool,
}

impl TeamMember {
    pub fn new(team_id: u32, player_id: u32, position: PlayerPositionType) -> Self {
        TeamMember {
            team_id,
            player_id,
            position,
            has_paid: false,
        }
    }
}

/// A team as offered to the ranking pipeline: aggregate plus membership rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenTeam {
    pub team: TeamAggregate,
    pub members: Vec<TeamMember>,
}

impl OpenTeam {
    pub fn new(team: TeamAggregate, members: Vec<TeamMember>) -> Self {
        OpenTeam { team, members }
    }

    pub fn has_member(&self, player_id: u32) -> bool {
        self.members.iter().any(|m| m.player_id == player_id)
    }

    /// Assigned positions, one entry per member, in roster order
    pub fn member_positions(&self) -> Vec<PlayerPositionType> {
        self.members.iter().map(|m| m.position).collect()
    }
}
