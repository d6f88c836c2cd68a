use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

pub const MAX_TEAM_SIZE: u8 = 11;

/// Display label of a roster.
///
/// Eligibility for matchmaking is always derived from the member count;
/// the label never overrides it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RosterStatus {
    Forming,
    #[serde(alias = "need player")]
    NeedPlayer,
    Full,
}

impl RosterStatus {
    /// Resolve the label for a roster of `member_count` players.
    ///
    /// A full roster is always `Full`; a roster that dropped below the limit
    /// reopens as `NeedPlayer`.
    pub fn for_member_count(member_count: u8, requested: RosterStatus) -> RosterStatus {
        if member_count >= MAX_TEAM_SIZE {
            return RosterStatus::Full;
        }

        match requested {
            RosterStatus::Full => RosterStatus::NeedPlayer,
            other => other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RosterStatus::Forming => "forming",
            RosterStatus::NeedPlayer => "need_player",
            RosterStatus::Full => "full",
        }
    }
}

impl Display for RosterStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown roster status: {0}")]
pub struct UnknownRosterStatusError(pub String);

impl FromStr for RosterStatus {
    type Err = UnknownRosterStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forming" => Ok(RosterStatus::Forming),
            "need_player" | "need player" => Ok(RosterStatus::NeedPlayer),
            "full" => Ok(RosterStatus::Full),
            _ => Err(UnknownRosterStatusError(s.to_string())),
        }
    }
}

/// Derived team figures maintained by the data store after every roster change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamAggregate {
    pub id: u32,
    pub name: String,
    pub member_count: u8,
    pub avg_skill: f32,
    pub avg_age: f32,
    pub status: RosterStatus,
}

impl TeamAggregate {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        member_count: u8,
        avg_skill: f32,
        avg_age: f32,
        status: RosterStatus,
    ) -> Self {
        let member_count = member_count.min(MAX_TEAM_SIZE);

        let (avg_skill, avg_age) = if member_count == 0 {
            (0.0, 0.0)
        } else {
            (avg_skill, avg_age)
        };

        TeamAggregate {
            id,
            name: name.into(),
            member_count,
            avg_skill,
            avg_age,
            status: RosterStatus::for_member_count(member_count, status),
        }
    }

    /// Re-derive the aggregate from the roster's `(skill_level, age)` pairs.
    /// Rows past the eleventh are ignored.
    pub fn from_roster(
        id: u32,
        name: impl Into<String>,
        roster: impl IntoIterator<Item = (u8, u8)>,
        requested_status: RosterStatus,
    ) -> Self {
        let (count, skill_sum, age_sum) = roster
            .into_iter()
            .take(MAX_TEAM_SIZE as usize)
            .fold((0u32, 0u32, 0u32), |(count, skill, age), (s, a)| {
                (count + 1, skill + s as u32, age + a as u32)
            });

        let (avg_skill, avg_age) = if count == 0 {
            (0.0, 0.0)
        } else {
            (skill_sum as f32 / count as f32, age_sum as f32 / count as f32)
        };

        Self::new(
            id,
            name,
            count as u8,
            avg_skill,
            avg_age,
            requested_status,
        )
    }

    #[inline]
    pub fn open_slots(&self) -> u8 {
        MAX_TEAM_SIZE.saturating_sub(self.member_count)
    }

    /// Open for new members - count based only
    #[inline]
    pub fn is_open(&self) -> bool {
        self.member_count < MAX_TEAM_SIZE
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.member_count == 0
    }
}
