//! League record and LeagueError.

use crate::models::game::MatchId;
use crate::models::team::TeamId;
use crate::store::StoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during league operations.
#[derive(Debug, Error)]
pub enum LeagueError {
    /// Fixture generation needs at least two teams.
    #[error("At least two teams are required to generate fixtures (got {found})")]
    InsufficientTeams { found: usize },
    /// Team names are unique (case-insensitive) and ids may not repeat in a schedule.
    #[error("Duplicate team: {0}")]
    DuplicateTeam(String),
    #[error("League not found")]
    LeagueNotFound,
    #[error("Match not found: {0}")]
    MatchNotFound(MatchId),
    #[error("Team not found: {0}")]
    TeamNotFound(TeamId),
    /// Malformed input: goal counts out of range, empty names, missing fields.
    #[error("{0}")]
    Validation(String),
    #[error("Roster import failed: {0}")]
    Import(#[from] csv::Error),
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Unique identifier for a league.
pub type LeagueId = Uuid;

/// Season state: progression counters plus the league-team membership.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct League {
    pub id: LeagueId,
    pub name: String,
    /// 0 = not started.
    pub current_week: u32,
    pub total_weeks: u32,
    pub is_finished: bool,
    /// Teams taking part, in registry order. Filled when fixtures are generated.
    pub team_ids: Vec<TeamId>,
    pub created_at: DateTime<Utc>,
}

/// Number of closing weeks in which title predictions are maintained.
pub const PREDICTION_WINDOW_WEEKS: u32 = 3;

impl League {
    /// Create a league that has not started and has no schedule yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            current_week: 0,
            total_weeks: 0,
            is_finished: false,
            team_ids: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Move to the next week. Returns the new week number, or `None` if the season is over.
    pub fn begin_next_week(&mut self) -> Option<u32> {
        if self.is_finished {
            return None;
        }
        self.current_week += 1;
        if self.current_week >= self.total_weeks {
            self.is_finished = true;
        }
        Some(self.current_week)
    }

    /// Back to week 0 with a fresh schedule length.
    pub fn reset_progress(&mut self, total_weeks: u32) {
        self.current_week = 0;
        self.total_weeks = total_weeks;
        self.is_finished = false;
    }

    /// True during the last three weeks of the season (or earlier for very short seasons).
    pub fn in_prediction_window(&self) -> bool {
        self.current_week >= self.total_weeks.saturating_sub(PREDICTION_WINDOW_WEEKS)
    }
}
