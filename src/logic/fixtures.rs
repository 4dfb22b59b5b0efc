//! Fixture generation: double round-robin by the circle method.

use crate::models::{GameMatch, LeagueError, TeamId};
use std::collections::HashSet;

/// Generated season: matches in schedule order plus the season length.
#[derive(Clone, Debug)]
pub struct Schedule {
    pub matches: Vec<GameMatch>,
    pub total_weeks: u32,
}

/// Generate a double round-robin schedule for `teams` (in registry order).
///
/// 1. Slot 0 stays fixed; each round pairs slot `i` with slot `n-1-i`, slot `i` at home.
/// 2. After each round the remaining slots rotate left by one.
/// 3. The return leg repeats the same pairings with home/away swapped, in weeks
///    `rounds+1 ..= 2*rounds`.
///
/// An odd field gets a bye slot, so each half has `n` rounds instead of `n-1`.
pub fn generate_fixtures(teams: &[TeamId]) -> Result<Schedule, LeagueError> {
    if teams.len() < 2 {
        return Err(LeagueError::InsufficientTeams { found: teams.len() });
    }
    let mut seen = HashSet::with_capacity(teams.len());
    for id in teams {
        if !seen.insert(*id) {
            return Err(LeagueError::DuplicateTeam(id.to_string()));
        }
    }

    let mut slots: Vec<Option<TeamId>> = teams.iter().copied().map(Some).collect();
    if slots.len() % 2 == 1 {
        slots.push(None);
    }
    let rounds = round_pairings(slots);
    let rounds_per_half = rounds.len() as u32;

    let mut matches = Vec::with_capacity(teams.len() * (teams.len() - 1));
    for (round, pairs) in rounds.iter().enumerate() {
        let week = round as u32 + 1;
        matches.extend(pairs.iter().map(|&(home, away)| GameMatch::new(home, away, week)));
    }
    for (round, pairs) in rounds.iter().enumerate() {
        let week = rounds_per_half + round as u32 + 1;
        matches.extend(pairs.iter().map(|&(home, away)| GameMatch::new(away, home, week)));
    }

    Ok(Schedule {
        matches,
        total_weeks: rounds_per_half * 2,
    })
}

/// First-leg pairings (home, away) per round. `slots` has even length.
fn round_pairings(mut slots: Vec<Option<TeamId>>) -> Vec<Vec<(TeamId, TeamId)>> {
    let n = slots.len();
    let mut rounds = Vec::with_capacity(n - 1);
    for _ in 0..n - 1 {
        let pairs = (0..n / 2)
            .filter_map(|i| match (slots[i], slots[n - 1 - i]) {
                (Some(home), Some(away)) if home != away => Some((home, away)),
                _ => None,
            })
            .collect();
        rounds.push(pairs);
        slots[1..].rotate_left(1);
    }
    rounds
}
