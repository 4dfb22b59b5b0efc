//! League business logic: roster setup, fixtures, match engine, predictions, season flow.

mod fixtures;
mod match_engine;
mod prediction;
mod season;
mod setup;

pub use fixtures::{generate_fixtures, Schedule};
pub use match_engine::{
    apply_result, draw_goals, resolve, scoring_chances, GoalSource, RngGoals,
};
pub use prediction::compute_predictions;
pub use season::{sort_standings, LeagueService, PlayedWeek, MAX_MANUAL_GOALS};
pub use setup::{
    default_roster, import_roster_csv, validate_roster, MAX_HOME_ADVANTAGE, MAX_STRENGTH,
};
