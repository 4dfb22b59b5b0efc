//! In-memory repository. Tables are plain vectors so listing keeps insertion order.

use crate::models::{GameMatch, League, MatchId, Prediction, PredictionId, Team, TeamId};
use crate::store::{
    LeagueStore, MatchStore, PredictionStore, StoreError, StoreResult, TeamStore, Transactional,
};

#[derive(Clone, Debug, Default)]
struct Tables {
    league: Option<League>,
    teams: Vec<Team>,
    matches: Vec<GameMatch>,
    predictions: Vec<Prediction>,
}

/// Vector-backed store. `begin` snapshots every table; `rollback` restores the snapshot.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    tables: Tables,
    checkpoint: Option<Box<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a transaction is open.
    pub fn in_transaction(&self) -> bool {
        self.checkpoint.is_some()
    }
}

impl TeamStore for MemoryStore {
    fn get_team(&self, id: TeamId) -> StoreResult<Option<Team>> {
        Ok(self.tables.teams.iter().find(|t| t.id == id).cloned())
    }

    fn list_teams(&self) -> StoreResult<Vec<Team>> {
        Ok(self.tables.teams.clone())
    }

    fn create_team(&mut self, team: Team) -> StoreResult<TeamId> {
        if self.tables.teams.iter().any(|t| t.id == team.id) {
            return Err(StoreError::Conflict { entity: "team", id: team.id });
        }
        let id = team.id;
        self.tables.teams.push(team);
        Ok(id)
    }

    fn update_team(&mut self, team: &Team) -> StoreResult<()> {
        let slot = self
            .tables
            .teams
            .iter_mut()
            .find(|t| t.id == team.id)
            .ok_or(StoreError::NotFound { entity: "team", id: team.id })?;
        *slot = team.clone();
        Ok(())
    }

    fn delete_team(&mut self, id: TeamId) -> StoreResult<()> {
        let idx = self
            .tables
            .teams
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound { entity: "team", id })?;
        self.tables.teams.remove(idx);
        Ok(())
    }
}

impl MatchStore for MemoryStore {
    fn get_match(&self, id: MatchId) -> StoreResult<Option<GameMatch>> {
        Ok(self.tables.matches.iter().find(|m| m.id == id).cloned())
    }

    fn list_matches(&self) -> StoreResult<Vec<GameMatch>> {
        Ok(self.tables.matches.clone())
    }

    fn create_match(&mut self, game: GameMatch) -> StoreResult<MatchId> {
        if self.tables.matches.iter().any(|m| m.id == game.id) {
            return Err(StoreError::Conflict { entity: "match", id: game.id });
        }
        let id = game.id;
        self.tables.matches.push(game);
        Ok(id)
    }

    fn update_match(&mut self, game: &GameMatch) -> StoreResult<()> {
        let slot = self
            .tables
            .matches
            .iter_mut()
            .find(|m| m.id == game.id)
            .ok_or(StoreError::NotFound { entity: "match", id: game.id })?;
        *slot = game.clone();
        Ok(())
    }

    fn delete_match(&mut self, id: MatchId) -> StoreResult<()> {
        let idx = self
            .tables
            .matches
            .iter()
            .position(|m| m.id == id)
            .ok_or(StoreError::NotFound { entity: "match", id })?;
        self.tables.matches.remove(idx);
        Ok(())
    }

    fn matches_in_week(&self, week: u32) -> StoreResult<Vec<GameMatch>> {
        Ok(self
            .tables
            .matches
            .iter()
            .filter(|m| m.week == week)
            .cloned()
            .collect())
    }
}

impl PredictionStore for MemoryStore {
    fn get_prediction(&self, id: PredictionId) -> StoreResult<Option<Prediction>> {
        Ok(self.tables.predictions.iter().find(|p| p.id == id).cloned())
    }

    fn list_predictions(&self) -> StoreResult<Vec<Prediction>> {
        Ok(self.tables.predictions.clone())
    }

    fn create_prediction(&mut self, prediction: Prediction) -> StoreResult<PredictionId> {
        if self.tables.predictions.iter().any(|p| p.id == prediction.id) {
            return Err(StoreError::Conflict { entity: "prediction", id: prediction.id });
        }
        let id = prediction.id;
        self.tables.predictions.push(prediction);
        Ok(id)
    }

    fn update_prediction(&mut self, prediction: &Prediction) -> StoreResult<()> {
        let slot = self
            .tables
            .predictions
            .iter_mut()
            .find(|p| p.id == prediction.id)
            .ok_or(StoreError::NotFound { entity: "prediction", id: prediction.id })?;
        *slot = prediction.clone();
        Ok(())
    }

    fn delete_prediction(&mut self, id: PredictionId) -> StoreResult<()> {
        let idx = self
            .tables
            .predictions
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NotFound { entity: "prediction", id })?;
        self.tables.predictions.remove(idx);
        Ok(())
    }
}

impl LeagueStore for MemoryStore {
    fn load_league(&self) -> StoreResult<Option<League>> {
        Ok(self.tables.league.clone())
    }

    fn save_league(&mut self, league: &League) -> StoreResult<()> {
        self.tables.league = Some(league.clone());
        Ok(())
    }

    fn delete_league(&mut self) -> StoreResult<()> {
        self.tables.league = None;
        Ok(())
    }
}

impl Transactional for MemoryStore {
    fn begin(&mut self) -> StoreResult<()> {
        if self.checkpoint.is_some() {
            return Err(StoreError::Unavailable("transaction already open".to_string()));
        }
        self.checkpoint = Some(Box::new(self.tables.clone()));
        Ok(())
    }

    fn commit(&mut self) -> StoreResult<()> {
        self.checkpoint = None;
        Ok(())
    }

    fn rollback(&mut self) -> StoreResult<()> {
        if let Some(saved) = self.checkpoint.take() {
            self.tables = *saved;
        }
        Ok(())
    }
}
