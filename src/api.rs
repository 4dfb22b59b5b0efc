//! REST API: league snapshot, init, weekly progression and manual result edits.
//!
//! Every response uses the envelope `{ success, message, data }`.

use crate::config::AppConfig;
use crate::logic::{LeagueService, RngGoals, MAX_MANUAL_GOALS};
use crate::models::{LeagueError, LeagueSnapshot, MatchView, TeamSeed};
use crate::store::MemoryStore;
use actix_web::{
    get,
    http::StatusCode,
    post,
    web::{self, Data, Json, Path},
    HttpRequest, HttpResponse, ResponseError,
};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;
use uuid::Uuid;

/// The service type the web app runs: in-memory store, `StdRng` goals.
pub type Simulation = LeagueService<MemoryStore, RngGoals<StdRng>>;

/// Shared app state. Mutating routes hold the write lock for the whole league operation;
/// read-only routes share the read lock.
pub struct AppState {
    pub league_name: String,
    pub roster: Vec<TeamSeed>,
    pub simulation: RwLock<Simulation>,
}

impl AppState {
    pub fn new(
        league_name: impl Into<String>,
        roster: Vec<TeamSeed>,
        goals: RngGoals<StdRng>,
    ) -> Self {
        Self {
            league_name: league_name.into(),
            roster,
            simulation: RwLock::new(LeagueService::new(MemoryStore::new(), goals)),
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, LeagueError> {
        let goals = match config.seed {
            Some(seed) => RngGoals::seeded(seed),
            None => RngGoals::from_entropy(),
        };
        Ok(Self::new(config.league_name.clone(), config.load_roster()?, goals))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Simulation>, ApiError> {
        self.simulation
            .read()
            .map_err(|_| ApiError::Internal("lock error".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Simulation>, ApiError> {
        self.simulation
            .write()
            .map_err(|_| ApiError::Internal("lock error".to_string()))
    }
}

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl From<LeagueError> for ApiError {
    fn from(err: LeagueError) -> Self {
        match err {
            LeagueError::Validation(msg) => ApiError::Validation(msg),
            LeagueError::LeagueNotFound
            | LeagueError::MatchNotFound(_)
            | LeagueError::TeamNotFound(_) => ApiError::NotFound(err.to_string()),
            LeagueError::InsufficientTeams { .. }
            | LeagueError::DuplicateTeam(_)
            | LeagueError::Import(_) => ApiError::BadRequest(err.to_string()),
            LeagueError::Store(e) => {
                log::error!("Storage failure: {}", e);
                ApiError::Internal("Internal error".to_string())
            }
        }
    }
}

#[derive(Serialize)]
struct Envelope<T: Serialize> {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

fn ok<T: Serialize>(message: impl Into<String>, data: T) -> HttpResponse {
    HttpResponse::Ok().json(Envelope {
        success: true,
        message: message.into(),
        data: Some(data),
    })
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(Envelope::<()> {
            success: false,
            message: self.to_string(),
            data: None,
        })
    }
}

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Body of update-match. Fields are optional so a missing one is a validation error,
/// not a parse error.
#[derive(Debug, Deserialize)]
pub struct UpdateMatchBody {
    pub match_id: Option<Uuid>,
    pub home_goals: Option<i64>,
    pub away_goals: Option<i64>,
}

/// Path segment: week number (e.g. /api/league/weeks/{week})
#[derive(Deserialize)]
struct WeekPath {
    week: u32,
}

fn goals_field(field: &str, value: Option<i64>) -> Result<u32, ApiError> {
    let goals = value.ok_or_else(|| ApiError::Validation(format!("{} is required", field)))?;
    if !(0..=i64::from(MAX_MANUAL_GOALS)).contains(&goals) {
        return Err(ApiError::Validation(format!(
            "{} must be between 0 and {}",
            field, MAX_MANUAL_GOALS
        )));
    }
    Ok(goals as u32)
}

#[get("/api/health")]
async fn api_health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "football-league-sim",
    })
}

/// Current snapshot (404 before the first init).
#[get("/api/league")]
async fn api_get_league(state: Data<AppState>) -> Result<HttpResponse, ApiError> {
    let sim = state.read()?;
    Ok(ok("League loaded", sim.snapshot()?))
}

/// Matches of one week, with team names and results.
#[get("/api/league/weeks/{week}")]
async fn api_get_week(
    state: Data<AppState>,
    path: Path<WeekPath>,
) -> Result<HttpResponse, ApiError> {
    let sim = state.read()?;
    let league = sim.league()?;
    if path.week == 0 || path.week > league.total_weeks {
        return Err(ApiError::Validation(format!(
            "week must be between 1 and {}",
            league.total_weeks
        )));
    }
    let matches: Vec<MatchView> = sim.week_views(path.week)?;
    Ok(ok(format!("Week {} matches", path.week), matches))
}

/// Wipe everything and start a new season from the configured roster.
#[post("/api/init-league")]
async fn api_init_league(state: Data<AppState>) -> Result<HttpResponse, ApiError> {
    let mut sim = state.write()?;
    sim.initialize(&state.league_name, &state.roster)?;
    let snapshot: LeagueSnapshot = sim.snapshot()?;
    Ok(ok("League initialized successfully", snapshot))
}

#[post("/api/play-next-week")]
async fn api_play_next_week(state: Data<AppState>) -> Result<HttpResponse, ApiError> {
    let mut sim = state.write()?;
    let message = match sim.advance_week()? {
        Some(played) => format!("Week {} played successfully", played.week),
        None => "League is already finished".to_string(),
    };
    Ok(ok(message, sim.snapshot()?))
}

#[post("/api/play-all-weeks")]
async fn api_play_all_weeks(state: Data<AppState>) -> Result<HttpResponse, ApiError> {
    let mut sim = state.write()?;
    let played = sim.advance_to_end()?;
    let message = if played.is_empty() {
        "League is already finished".to_string()
    } else {
        "All matches played successfully".to_string()
    };
    Ok(ok(message, sim.snapshot()?))
}

/// Manual result edit; all team stats are rebuilt from stored results.
#[post("/api/update-match")]
async fn api_update_match(
    state: Data<AppState>,
    body: Json<UpdateMatchBody>,
) -> Result<HttpResponse, ApiError> {
    let match_id = body
        .match_id
        .ok_or_else(|| ApiError::Validation("match_id is required".to_string()))?;
    let home_goals = goals_field("home_goals", body.home_goals)?;
    let away_goals = goals_field("away_goals", body.away_goals)?;

    let mut sim = state.write()?;
    match sim.override_result(match_id, home_goals, away_goals) {
        Ok(_) => {}
        Err(LeagueError::MatchNotFound(_)) => {
            return Err(ApiError::Validation("match_id does not refer to a match".to_string()))
        }
        Err(e) => return Err(e.into()),
    }
    Ok(ok("Match result updated successfully", sim.snapshot()?))
}

fn json_error(err: actix_web::error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::Validation(err.to_string()).into()
}

/// Register every API route on an actix app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .service(api_health)
        .service(api_get_league)
        .service(api_get_week)
        .service(api_init_league)
        .service(api_play_next_week)
        .service(api_play_all_weeks)
        .service(api_update_match);
}
