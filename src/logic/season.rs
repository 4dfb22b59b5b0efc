//! Season orchestration: initialization, weekly progression, manual overrides, snapshots.

use crate::logic::fixtures::generate_fixtures;
use crate::logic::match_engine::{resolve, GoalSource};
use crate::logic::prediction::compute_predictions;
use crate::logic::setup::validate_roster;
use crate::models::{
    GameMatch, League, LeagueError, LeagueSnapshot, LeagueSummary, MatchId, MatchView, Prediction,
    TableRow, Team, TeamId, TeamSeed,
};
use crate::store::LeagueRepository;
use std::collections::{BTreeMap, HashMap};

/// Highest goal count accepted by a manual result edit.
pub const MAX_MANUAL_GOALS: u32 = 10;

/// Matches resolved by one call to [`LeagueService::advance_week`].
#[derive(Clone, Debug)]
pub struct PlayedWeek {
    pub week: u32,
    pub matches: Vec<GameMatch>,
}

/// Sort table rows: points desc, then goal difference desc, then goals scored desc.
/// The sort is stable, so fully tied rows keep registry order.
pub fn sort_standings(rows: &mut [TableRow]) {
    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.goal_difference.cmp(&a.goal_difference))
            .then(b.goals_for.cmp(&a.goals_for))
    });
}

/// Drives one league stored in `S`, drawing goals from `G`.
///
/// Every mutating operation runs in a single store transaction; on error the
/// store is rolled back and the previous state is left untouched.
pub struct LeagueService<S, G> {
    store: S,
    goals: G,
}

impl<S: LeagueRepository, G: GoalSource> LeagueService<S, G> {
    pub fn new(store: S, goals: G) -> Self {
        Self { store, goals }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn atomically<T>(
        &mut self,
        op: impl FnOnce(&mut Self) -> Result<T, LeagueError>,
    ) -> Result<T, LeagueError> {
        self.store.begin()?;
        match op(self) {
            Ok(value) => {
                self.store.commit()?;
                Ok(value)
            }
            Err(e) => {
                if let Err(rb) = self.store.rollback() {
                    log::error!("Rollback failed after \"{}\": {}", e, rb);
                }
                Err(e)
            }
        }
    }

    /// Wipe everything and start a new season with `roster`.
    pub fn initialize(&mut self, name: &str, roster: &[TeamSeed]) -> Result<League, LeagueError> {
        validate_roster(roster)?;
        self.atomically(|svc| {
            svc.clear_all()?;
            let mut team_ids = Vec::with_capacity(roster.len());
            for seed in roster {
                team_ids.push(svc.store.create_team(Team::from_seed(seed))?);
            }
            let schedule = generate_fixtures(&team_ids)?;
            for game in schedule.matches {
                svc.store.create_match(game)?;
            }
            let mut league = League::new(name);
            league.team_ids = team_ids;
            league.reset_progress(schedule.total_weeks);
            svc.store.save_league(&league)?;
            log::info!(
                "Initialized league \"{}\" with {} teams over {} weeks",
                league.name,
                league.team_ids.len(),
                league.total_weeks
            );
            Ok(league)
        })
    }

    fn clear_all(&mut self) -> Result<(), LeagueError> {
        for p in self.store.list_predictions()? {
            self.store.delete_prediction(p.id)?;
        }
        for m in self.store.list_matches()? {
            self.store.delete_match(m.id)?;
        }
        for t in self.store.list_teams()? {
            self.store.delete_team(t.id)?;
        }
        self.store.delete_league()?;
        Ok(())
    }

    pub fn league(&self) -> Result<League, LeagueError> {
        self.store.load_league()?.ok_or(LeagueError::LeagueNotFound)
    }

    fn team(&self, id: TeamId) -> Result<Team, LeagueError> {
        self.store.get_team(id)?.ok_or(LeagueError::TeamNotFound(id))
    }

    /// League members in registry order.
    pub fn teams(&self) -> Result<Vec<Team>, LeagueError> {
        self.league()?
            .team_ids
            .iter()
            .map(|&id| self.team(id))
            .collect()
    }

    /// Play the next week. `Ok(None)` when the season is already finished.
    pub fn advance_week(&mut self) -> Result<Option<PlayedWeek>, LeagueError> {
        if self.league()?.is_finished {
            log::info!("League is already finished; nothing to play");
            return Ok(None);
        }
        self.atomically(|svc| svc.play_week())
    }

    /// Play every remaining week. Returns the matches of each week played, keyed by week.
    pub fn advance_to_end(&mut self) -> Result<BTreeMap<u32, Vec<GameMatch>>, LeagueError> {
        self.league()?;
        self.atomically(|svc| {
            let mut played = BTreeMap::new();
            while let Some(week) = svc.play_week()? {
                played.insert(week.week, week.matches);
            }
            Ok(played)
        })
    }

    fn play_week(&mut self) -> Result<Option<PlayedWeek>, LeagueError> {
        let mut league = self.league()?;
        let Some(week) = league.begin_next_week() else {
            return Ok(None);
        };

        let mut matches = self.store.matches_in_week(week)?;
        for game in &mut matches {
            let mut home = self.team(game.home_team_id)?;
            let mut away = self.team(game.away_team_id)?;
            resolve(game, &mut home, &mut away, &mut self.goals);
            self.store.update_match(game)?;
            self.store.update_team(&home)?;
            self.store.update_team(&away)?;
        }
        self.store.save_league(&league)?;
        log::info!(
            "Week {}/{} played ({} matches)",
            week,
            league.total_weeks,
            matches.len()
        );

        if league.in_prediction_window() {
            self.refresh_predictions()?;
        }
        Ok(Some(PlayedWeek { week, matches }))
    }

    /// Teams ordered by points, goal difference, goals scored.
    pub fn standings(&self) -> Result<Vec<TableRow>, LeagueError> {
        let mut table: Vec<TableRow> = self.teams()?.iter().map(Team::table_row).collect();
        sort_standings(&mut table);
        Ok(table)
    }

    /// Overwrite a match score and rebuild every team's statistics from the stored results.
    pub fn override_result(
        &mut self,
        match_id: MatchId,
        home_goals: u32,
        away_goals: u32,
    ) -> Result<GameMatch, LeagueError> {
        for goals in [home_goals, away_goals] {
            if goals > MAX_MANUAL_GOALS {
                return Err(LeagueError::Validation(format!(
                    "Goals must be between 0 and {} (got {})",
                    MAX_MANUAL_GOALS, goals
                )));
            }
        }
        self.league()?;
        self.atomically(|svc| {
            let mut game = svc
                .store
                .get_match(match_id)?
                .ok_or(LeagueError::MatchNotFound(match_id))?;
            game.set_result(home_goals, away_goals);
            svc.store.update_match(&game)?;
            svc.recompute_stats()?;
            log::info!(
                "Match {} (week {}) set to {}",
                game.id,
                game.week,
                game.result_label()
            );
            if svc.league()?.in_prediction_window() {
                svc.refresh_predictions()?;
            }
            Ok(game)
        })
    }

    /// Zero all stats, then replay every played match through the stats update.
    fn recompute_stats(&mut self) -> Result<(), LeagueError> {
        let mut teams = self.teams()?;
        for t in &mut teams {
            t.reset_stats();
        }
        let index: HashMap<TeamId, usize> =
            teams.iter().enumerate().map(|(i, t)| (t.id, i)).collect();

        for game in self.store.list_matches()?.iter().filter(|m| m.played) {
            let home = *index
                .get(&game.home_team_id)
                .ok_or(LeagueError::TeamNotFound(game.home_team_id))?;
            let away = *index
                .get(&game.away_team_id)
                .ok_or(LeagueError::TeamNotFound(game.away_team_id))?;
            teams[home].update_stats(game.home_goals, game.away_goals);
            teams[away].update_stats(game.away_goals, game.home_goals);
        }

        for t in &teams {
            self.store.update_team(t)?;
        }
        Ok(())
    }

    /// Same teams, fresh schedule: stats zeroed, matches and predictions regenerated.
    pub fn restart(&mut self) -> Result<League, LeagueError> {
        self.atomically(|svc| {
            let mut league = svc.league()?;
            for mut t in svc.teams()? {
                t.reset_stats();
                svc.store.update_team(&t)?;
            }
            for p in svc.store.list_predictions()? {
                svc.store.delete_prediction(p.id)?;
            }
            for m in svc.store.list_matches()? {
                svc.store.delete_match(m.id)?;
            }
            let schedule = generate_fixtures(&league.team_ids)?;
            for game in schedule.matches {
                svc.store.create_match(game)?;
            }
            league.reset_progress(schedule.total_weeks);
            svc.store.save_league(&league)?;
            log::info!(
                "Restarted league \"{}\" ({} weeks)",
                league.name,
                league.total_weeks
            );
            Ok(league)
        })
    }

    /// Replace stored predictions with a freshly computed set.
    pub fn recompute_predictions(&mut self) -> Result<Vec<Prediction>, LeagueError> {
        self.league()?;
        self.atomically(|svc| svc.refresh_predictions())
    }

    fn refresh_predictions(&mut self) -> Result<Vec<Prediction>, LeagueError> {
        for p in self.store.list_predictions()? {
            self.store.delete_prediction(p.id)?;
        }
        let teams = self.teams()?;
        let matches = self.store.list_matches()?;
        let mut stored = Vec::with_capacity(teams.len());
        for (team_id, probability) in compute_predictions(&teams, &matches) {
            let prediction = Prediction::new(team_id, probability);
            self.store.create_prediction(prediction.clone())?;
            stored.push(prediction);
        }
        log::debug!("Recomputed {} predictions", stored.len());
        Ok(stored)
    }

    /// Stored predictions as team id → percentage.
    pub fn predictions(&self) -> Result<HashMap<TeamId, f64>, LeagueError> {
        Ok(self
            .store
            .list_predictions()?
            .into_iter()
            .map(|p| (p.team_id, p.probability))
            .collect())
    }

    pub fn matches_in_week(&self, week: u32) -> Result<Vec<GameMatch>, LeagueError> {
        Ok(self.store.matches_in_week(week)?)
    }

    pub fn remaining_matches(&self) -> Result<Vec<GameMatch>, LeagueError> {
        Ok(self
            .store
            .list_matches()?
            .into_iter()
            .filter(|m| !m.played)
            .collect())
    }

    /// A week's matches with team names and result labels.
    pub fn week_views(&self, week: u32) -> Result<Vec<MatchView>, LeagueError> {
        let names: HashMap<TeamId, String> = self
            .store
            .list_teams()?
            .into_iter()
            .map(|t| (t.id, t.name))
            .collect();
        let name_of = |id: TeamId| names.get(&id).cloned().ok_or(LeagueError::TeamNotFound(id));
        self.matches_in_week(week)?
            .iter()
            .map(|m| -> Result<MatchView, LeagueError> {
                Ok(MatchView::new(m, name_of(m.home_team_id)?, name_of(m.away_team_id)?))
            })
            .collect()
    }

    /// Header, name→id map, table, current week's matches and predictions.
    pub fn snapshot(&self) -> Result<LeagueSnapshot, LeagueError> {
        let league = self.league()?;
        let teams = self
            .teams()?
            .into_iter()
            .map(|t| (t.name, t.id))
            .collect();
        let week_matches = if league.current_week == 0 {
            Vec::new()
        } else {
            self.week_views(league.current_week)?
        };
        Ok(LeagueSnapshot {
            league: LeagueSummary::from_league(&league),
            teams,
            league_table: self.standings()?,
            week_matches,
            predictions: self.predictions()?,
        })
    }
}
