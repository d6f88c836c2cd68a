use crate::club::PlayerPositionType;
use serde::{Deserialize, Serialize};

/// Read-only snapshot of a player as the matchmaking engine sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub id: u32,
    pub name: String,
    /// Conventionally 1-10
    pub skill_level: u8,
    pub age: u8,
    pub positions: Vec<PlayerPositionType>,
}

impl PlayerProfile {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        skill_level: u8,
        age: u8,
        positions: impl IntoIterator<Item = PlayerPositionType>,
    ) -> Self {
        let mut unique_positions = Vec::with_capacity(4);

        for position in positions {
            if !unique_positions.contains(&position) {
                unique_positions.push(position);
            }
        }

        PlayerProfile {
            id,
            name: name.into(),
            skill_level,
            age,
            positions: unique_positions,
        }
    }

    #[inline]
    pub fn plays(&self, position: PlayerPositionType) -> bool {
        self.positions.contains(&position)
    }

    /// Whether the profile can enter matchmaking at all
    pub fn is_eligible(&self) -> bool {
        self.skill_level > 0 && self.age > 0 && !self.positions.is_empty()
    }
}
