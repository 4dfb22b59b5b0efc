//! Repository interfaces for league entities, plus the in-memory implementation.
//!
//! The league service only talks to these traits, so any key-value or relational
//! backend can stand in for [`MemoryStore`].

mod memory;

pub use memory::MemoryStore;

use crate::models::{GameMatch, League, MatchId, Prediction, PredictionId, Team, TeamId};
use thiserror::Error;
use uuid::Uuid;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("{entity} {id} already exists")]
    Conflict { entity: &'static str, id: Uuid },

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

pub trait TeamStore {
    fn get_team(&self, id: TeamId) -> StoreResult<Option<Team>>;
    /// All teams in insertion order.
    fn list_teams(&self) -> StoreResult<Vec<Team>>;
    fn create_team(&mut self, team: Team) -> StoreResult<TeamId>;
    fn update_team(&mut self, team: &Team) -> StoreResult<()>;
    fn delete_team(&mut self, id: TeamId) -> StoreResult<()>;
}

pub trait MatchStore {
    fn get_match(&self, id: MatchId) -> StoreResult<Option<GameMatch>>;
    /// All matches in insertion (schedule) order.
    fn list_matches(&self) -> StoreResult<Vec<GameMatch>>;
    fn create_match(&mut self, game: GameMatch) -> StoreResult<MatchId>;
    fn update_match(&mut self, game: &GameMatch) -> StoreResult<()>;
    fn delete_match(&mut self, id: MatchId) -> StoreResult<()>;

    fn matches_in_week(&self, week: u32) -> StoreResult<Vec<GameMatch>> {
        Ok(self
            .list_matches()?
            .into_iter()
            .filter(|m| m.week == week)
            .collect())
    }
}

pub trait PredictionStore {
    fn get_prediction(&self, id: PredictionId) -> StoreResult<Option<Prediction>>;
    fn list_predictions(&self) -> StoreResult<Vec<Prediction>>;
    fn create_prediction(&mut self, prediction: Prediction) -> StoreResult<PredictionId>;
    fn update_prediction(&mut self, prediction: &Prediction) -> StoreResult<()>;
    fn delete_prediction(&mut self, id: PredictionId) -> StoreResult<()>;
}

/// The single league record of a store.
pub trait LeagueStore {
    fn load_league(&self) -> StoreResult<Option<League>>;
    fn save_league(&mut self, league: &League) -> StoreResult<()>;
    fn delete_league(&mut self) -> StoreResult<()>;
}

/// Unit-of-work boundary. Everything between `begin` and `commit` lands together or not at all.
pub trait Transactional {
    fn begin(&mut self) -> StoreResult<()>;
    fn commit(&mut self) -> StoreResult<()>;
    fn rollback(&mut self) -> StoreResult<()>;
}

/// Everything the league service needs from a backend.
pub trait LeagueRepository:
    TeamStore + MatchStore + PredictionStore + LeagueStore + Transactional
{
}

impl<T> LeagueRepository for T where
    T: TeamStore + MatchStore + PredictionStore + LeagueStore + Transactional
{
}
