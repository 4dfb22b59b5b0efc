//! Title-chance heuristic.

use football_league_sim::{compute_predictions, GameMatch, Team, TeamId};
use std::collections::HashMap;

fn team(name: &str, strength: u32, points: u32) -> Team {
    let mut t = Team::new(name, strength, 10);
    t.points = points;
    t
}

fn by_id(predictions: Vec<(TeamId, f64)>) -> HashMap<TeamId, f64> {
    predictions.into_iter().collect()
}

fn total(predictions: &HashMap<TeamId, f64>) -> f64 {
    predictions.values().sum()
}

#[test]
fn contenders_are_normalized_to_one_hundred() {
    let a = team("A", 80, 6);
    let b = team("B", 100, 3);
    let c = team("C", 50, 0);
    let remaining = vec![
        GameMatch::new(a.id, b.id, 5),
        GameMatch::new(b.id, c.id, 5),
        GameMatch::new(c.id, a.id, 6),
    ];
    let p = by_id(compute_predictions(&[a.clone(), b.clone(), c.clone()], &remaining));

    assert_eq!(p[&a.id], 57.1);
    assert_eq!(p[&b.id], 39.3);
    assert_eq!(p[&c.id], 3.6);
    assert!((total(&p) - 100.0).abs() <= 0.1);
}

#[test]
fn eliminated_team_gets_zero() {
    let a = team("A", 80, 6);
    let b = team("B", 90, 6);
    let c = team("C", 99, 0);
    let remaining = vec![GameMatch::new(a.id, b.id, 6)];
    let p = by_id(compute_predictions(&[a.clone(), b.clone(), c.clone()], &remaining));

    assert_eq!(p[&c.id], 0.0);
    assert_eq!(p[&a.id], 47.1);
    assert_eq!(p[&b.id], 52.9);
}

#[test]
fn base_score_never_drops_below_one() {
    let a = team("A", 100, 12);
    let b = team("B", 50, 5);
    let remaining = vec![
        GameMatch::new(a.id, b.id, 5),
        GameMatch::new(b.id, a.id, 6),
        GameMatch::new(b.id, a.id, 7),
    ];
    // b: gap 7 -> (100 - 105) * 0.5 < 1, floored to 1
    let p = by_id(compute_predictions(&[a.clone(), b.clone()], &remaining));
    assert_eq!(p[&a.id], 99.0);
    assert_eq!(p[&b.id], 1.0);
}

#[test]
fn uncatchable_leader_takes_everything() {
    let a = team("A", 60, 9);
    let b = team("B", 99, 3);
    let c = team("C", 99, 0);
    let remaining = vec![GameMatch::new(b.id, c.id, 6)];
    let p = by_id(compute_predictions(&[a.clone(), b.clone(), c.clone()], &remaining));

    assert_eq!(p[&a.id], 100.0);
    assert_eq!(p[&b.id], 0.0);
    assert_eq!(p[&c.id], 0.0);
}

#[test]
fn played_matches_do_not_count_as_remaining() {
    let a = team("A", 80, 9);
    let b = team("B", 80, 6);
    let mut done = GameMatch::new(b.id, a.id, 3);
    done.set_result(0, 1);
    let p = by_id(compute_predictions(&[a.clone(), b.clone()], &[done]));
    assert_eq!(p[&a.id], 100.0);
    assert_eq!(p[&b.id], 0.0);
}

#[test]
fn tied_leaders_with_nothing_left_split_by_strength() {
    let a = team("A", 80, 10);
    let b = team("B", 100, 10);
    let p = by_id(compute_predictions(&[a.clone(), b.clone()], &[]));
    assert_eq!(p[&a.id], 44.4);
    assert_eq!(p[&b.id], 55.6);
}

#[test]
fn no_teams_no_predictions() {
    assert!(compute_predictions(&[], &[]).is_empty());
}
