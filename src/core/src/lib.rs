//! Team matchmaking and balance scoring for five-a-side rosters.
//!
//! Everything here is a pure function over snapshots handed in by the
//! caller: nothing is persisted and nothing is cached between calls.

pub mod balance;
pub mod club;
pub mod matching;
pub mod utils;

pub use balance::{
    BALANCE_FORMULA_VERSION, BalanceError, BalanceMember, BalanceRating, BalanceResult,
    MAX_SUGGESTIONS, SubstitutionAdvisor, SubstitutionSuggestion, TeamBalanceAnalyzer,
};

pub use club::{
    Formation, IDEAL_FORMATION, MAX_TEAM_SIZE, OpenTeam, PlayerPositionType, PlayerProfile,
    PositionCounts, RosterStatus, TeamAggregate, TeamMember, UnknownPositionError,
    UnknownRosterStatusError,
};

pub use matching::{
    ANALYTICS_LIMIT, BalancedMatch, CandidateRanking, CompatibilityResult, CompatibilityScorer,
    CompatibilityWeights, EuclideanMatcher, MATCHMAKING_LIMIT, MatchmakingAnalytics,
    NEUTRAL_POSITION_MATCH, QUICK_WEIGHTS, STANDARD_WEIGHTS,
};

pub use utils::*;
