//! Team, TeamSeed and the standings row view.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team.
pub type TeamId = Uuid;

/// Input record for creating a team (default roster, CSV import).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamSeed {
    pub name: String,
    pub strength: u32,
    pub home_advantage: u32,
}

impl TeamSeed {
    pub fn new(name: impl Into<String>, strength: u32, home_advantage: u32) -> Self {
        Self {
            name: name.into(),
            strength,
            home_advantage,
        }
    }
}

/// A team in the league: ratings plus cumulative season statistics.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Rating, 0..=100.
    pub strength: u32,
    /// Added to `strength` when playing at home.
    pub home_advantage: u32,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub points: u32,
}

impl Team {
    /// Create a team with zeroed statistics.
    pub fn new(name: impl Into<String>, strength: u32, home_advantage: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            strength,
            home_advantage,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            points: 0,
        }
    }

    pub fn from_seed(seed: &TeamSeed) -> Self {
        Self::new(seed.name.trim(), seed.strength, seed.home_advantage)
    }

    pub fn goal_difference(&self) -> i32 {
        self.goals_for as i32 - self.goals_against as i32
    }

    /// Record one finished match from this team's point of view.
    pub fn update_stats(&mut self, goals_scored: u32, goals_conceded: u32) {
        self.played += 1;
        self.goals_for += goals_scored;
        self.goals_against += goals_conceded;
        if goals_scored > goals_conceded {
            self.won += 1;
            self.points += 3;
        } else if goals_scored == goals_conceded {
            self.drawn += 1;
            self.points += 1;
        } else {
            self.lost += 1;
        }
    }

    /// Zero every season statistic; ratings are kept.
    pub fn reset_stats(&mut self) {
        self.played = 0;
        self.won = 0;
        self.drawn = 0;
        self.lost = 0;
        self.goals_for = 0;
        self.goals_against = 0;
        self.points = 0;
    }

    /// Current stats as a table row (for API responses).
    pub fn table_row(&self) -> TableRow {
        TableRow::from_team(self)
    }
}

/// One row of the league table.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub id: TeamId,
    pub name: String,
    pub strength: u32,
    pub home_advantage: u32,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
    pub points: u32,
}

impl TableRow {
    pub fn from_team(t: &Team) -> Self {
        Self {
            id: t.id,
            name: t.name.clone(),
            strength: t.strength,
            home_advantage: t.home_advantage,
            played: t.played,
            won: t.won,
            drawn: t.drawn,
            lost: t.lost,
            goals_for: t.goals_for,
            goals_against: t.goals_against,
            goal_difference: t.goal_difference(),
            points: t.points,
        }
    }
}
