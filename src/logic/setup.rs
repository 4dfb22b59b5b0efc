//! Team roster: built-in defaults, CSV import, validation.

use crate::models::{LeagueError, TeamSeed};
use std::collections::HashSet;
use std::io::Read;

/// Highest allowed team rating.
pub const MAX_STRENGTH: u32 = 100;
/// Highest allowed home bonus.
pub const MAX_HOME_ADVANTAGE: u32 = 100;

/// The four clubs a fresh league starts with.
pub fn default_roster() -> Vec<TeamSeed> {
    vec![
        TeamSeed::new("Manchester United", 85, 12),
        TeamSeed::new("Liverpool", 87, 10),
        TeamSeed::new("Arsenal", 80, 11),
        TeamSeed::new("Chelsea", 82, 13),
    ]
}

/// Read a roster from CSV with header `name,strength,home_advantage`.
pub fn import_roster_csv<R: Read>(reader: R) -> Result<Vec<TeamSeed>, LeagueError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut roster = Vec::new();
    for record in rdr.deserialize() {
        let seed: TeamSeed = record?;
        roster.push(seed);
    }
    validate_roster(&roster)?;
    Ok(roster)
}

/// Need two teams, non-empty unique names (case-insensitive), ratings within 0..=100.
pub fn validate_roster(roster: &[TeamSeed]) -> Result<(), LeagueError> {
    if roster.len() < 2 {
        return Err(LeagueError::InsufficientTeams { found: roster.len() });
    }
    let mut names = HashSet::with_capacity(roster.len());
    for seed in roster {
        let name = seed.name.trim();
        if name.is_empty() {
            return Err(LeagueError::Validation("Team name must not be empty".to_string()));
        }
        if seed.strength > MAX_STRENGTH {
            return Err(LeagueError::Validation(format!(
                "Strength of {} must be between 0 and {} (got {})",
                name, MAX_STRENGTH, seed.strength
            )));
        }
        if seed.home_advantage > MAX_HOME_ADVANTAGE {
            return Err(LeagueError::Validation(format!(
                "Home advantage of {} must be between 0 and {} (got {})",
                name, MAX_HOME_ADVANTAGE, seed.home_advantage
            )));
        }
        if !names.insert(name.to_lowercase()) {
            return Err(LeagueError::DuplicateTeam(name.to_string()));
        }
    }
    Ok(())
}
