//! Match resolution: banded goal draws and stat application.

use crate::models::{GameMatch, Team};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Source of uniform draws in `[0, 1)` used for goal generation.
pub trait GoalSource {
    fn next_uniform(&mut self) -> f64;
}

/// [`GoalSource`] backed by any `rand` generator.
#[derive(Clone, Debug)]
pub struct RngGoals<R>(R);

impl<R: RngCore> RngGoals<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngGoals<StdRng> {
    /// Deterministic sequence for reproducible seasons.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl<R: RngCore> GoalSource for RngGoals<R> {
    fn next_uniform(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Home teams get this multiplier on their share of combined strength.
const HOME_SCORING_BOOST: f64 = 1.5;

/// Scoring chances `(home, away)` from team ratings.
///
/// Informational only: the goal bands below are keyed on the raw uniform draw.
pub fn scoring_chances(home: &Team, away: &Team) -> (f64, f64) {
    let home_strength = f64::from(home.strength) + f64::from(home.home_advantage);
    let away_strength = f64::from(away.strength);
    let total = home_strength + away_strength;
    if total <= 0.0 {
        return (0.0, 0.0);
    }
    (
        home_strength / total * HOME_SCORING_BOOST,
        away_strength / total,
    )
}

/// Draw one side's goal count.
///
/// | draw          | goals        |
/// |---------------|--------------|
/// | `[0.00,0.05)` | 0            |
/// | `[0.05,0.20)` | 1            |
/// | `[0.20,0.45)` | uniform 1..=2 |
/// | `[0.45,0.80)` | uniform 1..=3 |
/// | `[0.80,0.95)` | uniform 2..=4 |
/// | `[0.95,1.00]` | uniform 3..=6 |
pub fn draw_goals<G: GoalSource + ?Sized>(rng: &mut G) -> u32 {
    let band = rng.next_uniform();
    if band < 0.05 {
        0
    } else if band < 0.20 {
        1
    } else if band < 0.45 {
        uniform_between(rng, 1, 2)
    } else if band < 0.80 {
        uniform_between(rng, 1, 3)
    } else if band < 0.95 {
        uniform_between(rng, 2, 4)
    } else {
        uniform_between(rng, 3, 6)
    }
}

/// Uniform integer in `lo..=hi` from one further draw.
fn uniform_between<G: GoalSource + ?Sized>(rng: &mut G, lo: u32, hi: u32) -> u32 {
    let span = hi - lo + 1;
    let offset = (rng.next_uniform() * f64::from(span)) as u32;
    lo + offset.min(span - 1)
}

/// Resolve a fixture and apply the result to both teams.
///
/// Already-played matches return the stored score and nothing is changed.
pub fn resolve<G: GoalSource + ?Sized>(
    game: &mut GameMatch,
    home: &mut Team,
    away: &mut Team,
    rng: &mut G,
) -> (u32, u32) {
    if game.played {
        return (game.home_goals, game.away_goals);
    }

    let (home_chance, away_chance) = scoring_chances(home, away);
    log::trace!(
        "{} vs {}: scoring chances {:.3} / {:.3}",
        home.name,
        away.name,
        home_chance,
        away_chance
    );

    let home_goals = draw_goals(rng);
    let away_goals = draw_goals(rng);
    game.set_result(home_goals, away_goals);
    apply_result(game, home, away);

    log::debug!(
        "Week {}: {} {} - {} {}",
        game.week,
        home.name,
        home_goals,
        away_goals,
        away.name
    );
    (home_goals, away_goals)
}

/// Add a played match's score to both teams' statistics.
pub fn apply_result(game: &GameMatch, home: &mut Team, away: &mut Team) {
    home.update_stats(game.home_goals, game.away_goals);
    away.update_stats(game.away_goals, game.home_goals);
}
