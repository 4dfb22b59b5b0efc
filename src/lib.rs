//! Football league simulator: library with models, repositories, simulation logic and the web API.

pub mod api;
pub mod config;
pub mod logic;
pub mod models;
pub mod store;

pub use api::{AppState, Simulation};
pub use config::AppConfig;
pub use logic::{
    compute_predictions, default_roster, draw_goals, generate_fixtures, import_roster_csv,
    resolve, sort_standings, GoalSource, LeagueService, PlayedWeek, RngGoals, Schedule,
};
pub use models::{
    GameMatch, League, LeagueError, LeagueSnapshot, MatchId, MatchView, Prediction, TableRow,
    Team, TeamId, TeamSeed,
};
pub use store::{LeagueRepository, MemoryStore, StoreError};
