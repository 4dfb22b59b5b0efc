//! Data structures for the league: teams, matches, league state, predictions, snapshots.

mod game;
mod league;
mod prediction;
mod snapshot;
mod team;

pub use game::{GameMatch, MatchId, MatchView};
pub use league::{League, LeagueError, LeagueId, PREDICTION_WINDOW_WEEKS};
pub use prediction::{Prediction, PredictionId};
pub use snapshot::{LeagueSnapshot, LeagueSummary};
pub use team::{TableRow, Team, TeamId, TeamSeed};
