use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};
use std::str::FromStr;
use thiserror::Error;

/// Position vocabulary shared by players, memberships and the ideal formation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerPositionType {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "DEF")]
    Defender,
    #[serde(rename = "MID")]
    Midfielder,
    #[serde(rename = "FWD")]
    Forward,
}

impl PlayerPositionType {
    pub const ALL: [PlayerPositionType; 4] = [
        PlayerPositionType::Goalkeeper,
        PlayerPositionType::Defender,
        PlayerPositionType::Midfielder,
        PlayerPositionType::Forward,
    ];

    pub fn get_short_name(&self) -> &'static str {
        match self {
            PlayerPositionType::Goalkeeper => "GK",
            PlayerPositionType::Defender => "DEF",
            PlayerPositionType::Midfielder => "MID",
            PlayerPositionType::Forward => "FWD",
        }
    }

    /// Stable slot of the position inside `ALL`
    #[inline]
    pub(crate) fn index(&self) -> usize {
        match self {
            PlayerPositionType::Goalkeeper => 0,
            PlayerPositionType::Defender => 1,
            PlayerPositionType::Midfielder => 2,
            PlayerPositionType::Forward => 3,
        }
    }
}

impl Display for PlayerPositionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.get_short_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown position: {0}")]
pub struct UnknownPositionError(pub String);

impl FromStr for PlayerPositionType {
    type Err = UnknownPositionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GK" => Ok(PlayerPositionType::Goalkeeper),
            "DEF" => Ok(PlayerPositionType::Defender),
            "MID" => Ok(PlayerPositionType::Midfielder),
            "FWD" => Ok(PlayerPositionType::Forward),
            _ => Err(UnknownPositionError(s.to_string())),
        }
    }
}
