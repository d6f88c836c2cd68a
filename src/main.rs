use database::{MatchmakingStore, SnapshotLoader, StoreGenerator};
use env_logger::Env;
use log::{info, warn};
use matchmaking::utils::TimeEstimation;
use matchmaking::{
    ANALYTICS_LIMIT, BalanceResult, BalancedMatch, CandidateRanking, CompatibilityResult,
    MATCHMAKING_LIMIT, MatchmakingAnalytics, SubstitutionAdvisor, SubstitutionSuggestion,
    TeamBalanceAnalyzer,
};
use serde::Serialize;
use std::env;
use std::str::FromStr;

const DEFAULT_PLAYER_ID: u32 = 1;

struct ReportConfig {
    snapshot_path: Option<String>,
    player_id: u32,
    top_n: usize,
    analytics_top_n: usize,
}

impl ReportConfig {
    fn from_env() -> Self {
        ReportConfig {
            snapshot_path: env::var("SNAPSHOT_PATH").ok().filter(|p| !p.trim().is_empty()),
            player_id: env_or("PLAYER_ID", DEFAULT_PLAYER_ID),
            top_n: env_or("TOP_N", MATCHMAKING_LIMIT),
            analytics_top_n: env_or("ANALYTICS_TOP_N", ANALYTICS_LIMIT),
        }
    }
}

fn env_or<T: FromStr + Copy + std::fmt::Display>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!("{}={} is not valid, using {}", key, value, default);
            default
        }),
        Err(_) => default,
    }
}

#[derive(Serialize)]
struct TeamBalanceReport {
    team_id: u32,
    team_name: String,
    skill_balance_score: u8,
    balance: Option<BalanceResult>,
    substitutions: Vec<SubstitutionSuggestion>,
}

#[derive(Serialize)]
struct MatchmakingReport {
    player_id: u32,
    matches: Vec<CompatibilityResult>,
    balanced_matches: Vec<BalancedMatch>,
    analytics: MatchmakingAnalytics,
    teams: Vec<TeamBalanceReport>,
}

fn balance_reports(store: &MatchmakingStore) -> Vec<TeamBalanceReport> {
    let free_agents = store.free_agents();

    store
        .teams()
        .map(|team| {
            let members = store.balance_members(team.id);

            let balance = match TeamBalanceAnalyzer::analyze(team.id, &members) {
                Ok(result) => {
                    if result.needs_improvement() {
                        info!("{}: balance {} needs improvement", team.name, result.overall_balance_score);
                    }

                    Some(result)
                }
                Err(err) => {
                    info!("{}: {}", team.name, err);
                    None
                }
            };

            TeamBalanceReport {
                team_id: team.id,
                team_name: team.name.clone(),
                skill_balance_score: TeamBalanceAnalyzer::skill_balance_score(&members),
                balance,
                substitutions: SubstitutionAdvisor::suggest(team.id, &members, &free_agents),
            }
        })
        .collect()
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = ReportConfig::from_env();

    let (snapshot, estimated) = TimeEstimation::estimate(|| match &config.snapshot_path {
        Some(path) => SnapshotLoader::load_from_path(path),
        None => SnapshotLoader::load(),
    });

    let snapshot = snapshot?;

    info!("snapshot loaded: {} ms", estimated);

    let store = StoreGenerator::generate(&snapshot)?;

    let player = store
        .player(config.player_id)
        .ok_or_else(|| color_eyre::eyre::eyre!("player {} not found", config.player_id))?;

    info!(
        "matching {} (skill {}, age {})",
        player.name, player.skill_level, player.age
    );

    let open_teams = store.open_teams();

    let (matches, estimated) = TimeEstimation::estimate(|| {
        CandidateRanking::find_matches(player, &open_teams, Some(config.top_n))
    });

    info!("{} matches ranked: {} ms", matches.len(), estimated);

    let balanced_matches =
        CandidateRanking::find_balanced_matches(player, &open_teams, Some(config.top_n));

    let analytics = MatchmakingAnalytics::build(
        player,
        &store.player_teams(player.id),
        &open_teams,
        config.analytics_top_n,
    );

    let teams = balance_reports(&store);

    for report in teams.iter().filter(|r| !r.substitutions.is_empty()) {
        info!(
            "{}: {} substitution suggestions",
            report.team_name,
            report.substitutions.len()
        );
    }

    let report = MatchmakingReport {
        player_id: player.id,
        matches,
        balanced_matches,
        analytics,
        teams,
    };

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
