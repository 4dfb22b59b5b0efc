//! Runtime configuration from environment variables.
//!
//! HOST, PORT: bind address (default 0.0.0.0:8080).
//! LEAGUE_NAME: name used by init-league.
//! TEAMS_CSV: optional roster file (`name,strength,home_advantage`); defaults to the built-in four.
//! LEAGUE_SEED: optional u64 for reproducible goal generation.

use crate::logic::{default_roster, import_roster_csv};
use crate::models::{LeagueError, TeamSeed};
use std::fs::File;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub league_name: String,
    pub teams_csv: Option<PathBuf>,
    pub seed: Option<u64>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_league_name() -> String {
    "Insider Champions League".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            league_name: default_league_name(),
            teams_csv: None,
            seed: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparsable values fall back to defaults with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!("Ignoring invalid PORT {:?}, using {}", raw, default_port());
                default_port()
            }),
            None => default_port(),
        };
        let seed = lookup("LEAGUE_SEED").and_then(|raw| match raw.trim().parse() {
            Ok(seed) => Some(seed),
            Err(_) => {
                log::warn!("Ignoring invalid LEAGUE_SEED {:?}", raw);
                None
            }
        });
        Self {
            host: lookup("HOST")
                .filter(|h| !h.trim().is_empty())
                .unwrap_or_else(default_host),
            port,
            league_name: lookup("LEAGUE_NAME")
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(default_league_name),
            teams_csv: lookup("TEAMS_CSV")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            seed,
        }
    }

    /// Roster for init-league: the CSV file if configured, else the built-in teams.
    pub fn load_roster(&self) -> Result<Vec<TeamSeed>, LeagueError> {
        match &self.teams_csv {
            Some(path) => {
                let file = File::open(path).map_err(csv::Error::from)?;
                let roster = import_roster_csv(file)?;
                log::info!("Loaded {} teams from {}", roster.len(), path.display());
                Ok(roster)
            }
            None => Ok(default_roster()),
        }
    }
}
