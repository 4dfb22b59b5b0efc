//! League snapshot returned by every API operation.

use crate::models::game::MatchView;
use crate::models::league::League;
use crate::models::team::{TableRow, TeamId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Season header: name and progression.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueSummary {
    pub name: String,
    pub current_week: u32,
    pub total_weeks: u32,
    pub is_finished: bool,
    pub created_at: DateTime<Utc>,
}

impl LeagueSummary {
    pub fn from_league(l: &League) -> Self {
        Self {
            name: l.name.clone(),
            current_week: l.current_week,
            total_weeks: l.total_weeks,
            is_finished: l.is_finished,
            created_at: l.created_at,
        }
    }
}

/// Full view of the league: header, name→id map, table, this week's matches, predictions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueSnapshot {
    pub league: LeagueSummary,
    pub teams: BTreeMap<String, TeamId>,
    pub league_table: Vec<TableRow>,
    pub week_matches: Vec<MatchView>,
    pub predictions: HashMap<TeamId, f64>,
}
