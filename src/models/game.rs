//! Match (fixture) and its display view.

use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// A scheduled fixture. Goals are meaningful only once `played` is set.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    /// 1-indexed, contiguous across the season.
    pub week: u32,
    pub played: bool,
    pub home_goals: u32,
    pub away_goals: u32,
}

impl GameMatch {
    pub fn new(home_team_id: TeamId, away_team_id: TeamId, week: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            home_team_id,
            away_team_id,
            week,
            played: false,
            home_goals: 0,
            away_goals: 0,
        }
    }

    /// Overwrite the stored score and mark the match played. Team stats are not touched.
    pub fn set_result(&mut self, home_goals: u32, away_goals: u32) {
        self.home_goals = home_goals;
        self.away_goals = away_goals;
        self.played = true;
    }

    pub fn involves(&self, team_id: TeamId) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }

    /// "H - A" once played, otherwise "Not played".
    pub fn result_label(&self) -> String {
        if self.played {
            format!("{} - {}", self.home_goals, self.away_goals)
        } else {
            "Not played".to_string()
        }
    }
}

/// Match row for API responses: ids plus team names and the result label.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchView {
    pub id: MatchId,
    pub week: u32,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub home_team: String,
    pub away_team: String,
    pub home_goals: u32,
    pub away_goals: u32,
    pub played: bool,
    pub result: String,
}

impl MatchView {
    pub fn new(m: &GameMatch, home_team: impl Into<String>, away_team: impl Into<String>) -> Self {
        Self {
            id: m.id,
            week: m.week,
            home_team_id: m.home_team_id,
            away_team_id: m.away_team_id,
            home_team: home_team.into(),
            away_team: away_team.into(),
            home_goals: m.home_goals,
            away_goals: m.away_goals,
            played: m.played,
            result: m.result_label(),
        }
    }
}
