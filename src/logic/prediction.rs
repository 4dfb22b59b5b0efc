//! Championship chances for the closing weeks of the season.

use crate::models::{GameMatch, Team, TeamId};
use std::collections::HashMap;

const POINTS_PER_WIN: u32 = 3;
/// Base-score penalty per point behind the leader.
const GAP_PENALTY: f64 = 15.0;

/// Heuristic title chances, in the order of `teams`.
///
/// 1. Max possible points = current points + 3 per unplayed match.
/// 2. Teams whose max possible points fall short of the leader's current points get 0.
/// 3. Others score `max(1, (100 - 15 * gap) * strength / 100)`.
/// 4. If only one team can still reach the leader's points it gets 100, others 0.
/// 5. Otherwise scores are normalized to 100 and rounded to one decimal.
pub fn compute_predictions(teams: &[Team], matches: &[GameMatch]) -> Vec<(TeamId, f64)> {
    let Some(leader_points) = teams.iter().map(|t| t.points).max() else {
        return Vec::new();
    };

    let mut remaining: HashMap<TeamId, u32> = HashMap::new();
    for m in matches.iter().filter(|m| !m.played) {
        *remaining.entry(m.home_team_id).or_default() += 1;
        *remaining.entry(m.away_team_id).or_default() += 1;
    }
    let max_possible = |t: &Team| {
        t.points + POINTS_PER_WIN * remaining.get(&t.id).copied().unwrap_or(0)
    };

    let contenders: Vec<&Team> = teams
        .iter()
        .filter(|&t| max_possible(t) >= leader_points)
        .collect();
    if let [champion] = contenders.as_slice() {
        return teams
            .iter()
            .map(|t| (t.id, if t.id == champion.id { 100.0 } else { 0.0 }))
            .collect();
    }

    let scores: Vec<(TeamId, f64)> = teams
        .iter()
        .map(|t| {
            if max_possible(t) < leader_points {
                return (t.id, 0.0);
            }
            let gap = f64::from(leader_points - t.points);
            let base = (100.0 - GAP_PENALTY * gap) * (f64::from(t.strength) / 100.0);
            (t.id, base.max(1.0))
        })
        .collect();

    let total: f64 = scores.iter().map(|(_, s)| s).sum();
    if total <= 0.0 {
        return scores.into_iter().map(|(id, _)| (id, 0.0)).collect();
    }
    scores
        .into_iter()
        .map(|(id, s)| (id, round_to_tenth(s / total * 100.0)))
        .collect()
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
