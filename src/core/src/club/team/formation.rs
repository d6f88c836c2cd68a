use crate::club::PlayerPositionType;
use serde::{Deserialize, Serialize};

/// Target number of players per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formation {
    counts: [u8; 4],
}

/// GK 1, DEF 4, MID 4, FWD 2
pub const IDEAL_FORMATION: Formation = Formation::new(1, 4, 4, 2);

impl Formation {
    pub const fn new(goalkeepers: u8, defenders: u8, midfielders: u8, forwards: u8) -> Self {
        Formation {
            counts: [goalkeepers, defenders, midfielders, forwards],
        }
    }

    #[inline]
    pub fn count(&self, position: PlayerPositionType) -> u8 {
        self.counts[position.index()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&c| c as u32).sum()
    }
}

/// Histogram of assigned positions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionCounts {
    counts: [u32; 4],
}

impl PositionCounts {
    pub fn from_positions(positions: impl IntoIterator<Item = PlayerPositionType>) -> Self {
        let mut counts = PositionCounts::default();

        for position in positions {
            counts.add(position);
        }

        counts
    }

    pub fn add(&mut self, position: PlayerPositionType) {
        self.counts[position.index()] += 1;
    }

    #[inline]
    pub fn get(&self, position: PlayerPositionType) -> u32 {
        self.counts[position.index()]
    }

    /// Sum of absolute per-position deviations from `formation`
    pub fn total_difference(&self, formation: &Formation) -> u32 {
        PlayerPositionType::ALL
            .iter()
            .map(|&position| self.get(position).abs_diff(formation.count(position) as u32))
            .sum()
    }

    pub fn is_over(&self, position: PlayerPositionType, formation: &Formation) -> bool {
        self.get(position) > formation.count(position) as u32
    }

    pub fn is_short(&self, position: PlayerPositionType, formation: &Formation) -> bool {
        self.get(position) < formation.count(position) as u32
    }
}
