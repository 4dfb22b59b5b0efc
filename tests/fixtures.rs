//! Round-robin fixture generation.

use football_league_sim::{generate_fixtures, GameMatch, LeagueError, TeamId};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

fn ids(n: usize) -> Vec<TeamId> {
    (0..n).map(|_| Uuid::new_v4()).collect()
}

fn pairings(matches: &[GameMatch], week: u32) -> Vec<(TeamId, TeamId)> {
    matches
        .iter()
        .filter(|m| m.week == week)
        .map(|m| (m.home_team_id, m.away_team_id))
        .collect()
}

#[test]
fn rejects_fewer_than_two_teams() {
    assert!(matches!(
        generate_fixtures(&[]),
        Err(LeagueError::InsufficientTeams { found: 0 })
    ));
    assert!(matches!(
        generate_fixtures(&ids(1)),
        Err(LeagueError::InsufficientTeams { found: 1 })
    ));
}

#[test]
fn rejects_repeated_team() {
    let t = ids(2);
    assert!(matches!(
        generate_fixtures(&[t[0], t[1], t[0]]),
        Err(LeagueError::DuplicateTeam(_))
    ));
}

#[test]
fn four_team_schedule_is_exact() {
    let t = ids(4);
    let (a, b, c, d) = (t[0], t[1], t[2], t[3]);
    let schedule = generate_fixtures(&t).unwrap();

    assert_eq!(schedule.total_weeks, 6);
    assert_eq!(schedule.matches.len(), 12);
    assert_eq!(pairings(&schedule.matches, 1), vec![(a, d), (b, c)]);
    assert_eq!(pairings(&schedule.matches, 2), vec![(a, b), (c, d)]);
    assert_eq!(pairings(&schedule.matches, 3), vec![(a, c), (d, b)]);
    assert_eq!(pairings(&schedule.matches, 4), vec![(d, a), (c, b)]);
    assert_eq!(pairings(&schedule.matches, 5), vec![(b, a), (d, c)]);
    assert_eq!(pairings(&schedule.matches, 6), vec![(c, a), (b, d)]);
}

#[test]
fn two_teams_meet_home_and_away() {
    let t = ids(2);
    let schedule = generate_fixtures(&t).unwrap();
    assert_eq!(schedule.total_weeks, 2);
    assert_eq!(pairings(&schedule.matches, 1), vec![(t[0], t[1])]);
    assert_eq!(pairings(&schedule.matches, 2), vec![(t[1], t[0])]);
}

#[test]
fn even_fields_form_a_full_double_round_robin() {
    for n in [2usize, 4, 6, 8, 10, 20] {
        let t = ids(n);
        let schedule = generate_fixtures(&t).unwrap();
        let weeks = 2 * (n as u32 - 1);

        assert_eq!(schedule.total_weeks, weeks, "n={n}");
        assert_eq!(schedule.matches.len(), n * (n - 1), "n={n}");

        for week in 1..=weeks {
            let mut seen = HashSet::new();
            for (home, away) in pairings(&schedule.matches, week) {
                assert!(seen.insert(home), "n={n} week={week}: team twice");
                assert!(seen.insert(away), "n={n} week={week}: team twice");
            }
            assert_eq!(seen.len(), n, "n={n} week={week}: someone idle");
        }

        let mut ordered = HashSet::new();
        let mut unordered: HashMap<(TeamId, TeamId), u32> = HashMap::new();
        for m in &schedule.matches {
            assert_ne!(m.home_team_id, m.away_team_id);
            assert!(!m.played);
            assert!(ordered.insert((m.home_team_id, m.away_team_id)), "n={n}: fixture repeated");
            let key = if m.home_team_id < m.away_team_id {
                (m.home_team_id, m.away_team_id)
            } else {
                (m.away_team_id, m.home_team_id)
            };
            *unordered.entry(key).or_default() += 1;
        }
        assert_eq!(unordered.len(), n * (n - 1) / 2);
        assert!(unordered.values().all(|&c| c == 2));
    }
}

#[test]
fn odd_field_uses_a_bye() {
    let t = ids(3);
    let schedule = generate_fixtures(&t).unwrap();
    assert_eq!(schedule.total_weeks, 6);
    assert_eq!(schedule.matches.len(), 6);
    assert_eq!(pairings(&schedule.matches, 1), vec![(t[1], t[2])]);
    assert_eq!(pairings(&schedule.matches, 2), vec![(t[0], t[1])]);
    assert_eq!(pairings(&schedule.matches, 3), vec![(t[0], t[2])]);
    assert_eq!(pairings(&schedule.matches, 4), vec![(t[2], t[1])]);

    let t = ids(5);
    let schedule = generate_fixtures(&t).unwrap();
    assert_eq!(schedule.total_weeks, 10);
    assert_eq!(schedule.matches.len(), 20);
    for week in 1..=10 {
        let mut seen = HashSet::new();
        for (home, away) in pairings(&schedule.matches, week) {
            assert!(seen.insert(home));
            assert!(seen.insert(away));
        }
    }
    let ordered: HashSet<_> = schedule
        .matches
        .iter()
        .map(|m| (m.home_team_id, m.away_team_id))
        .collect();
    assert_eq!(ordered.len(), 20);
}

#[test]
fn week_numbers_are_contiguous_from_one() {
    let schedule = generate_fixtures(&ids(6)).unwrap();
    let weeks: HashSet<u32> = schedule.matches.iter().map(|m| m.week).collect();
    assert_eq!(weeks, (1..=schedule.total_weeks).collect());
}
