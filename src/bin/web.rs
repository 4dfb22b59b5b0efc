//! Web server for the league simulator. API only, under /api.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST, PORT, LEAGUE_NAME, TEAMS_CSV, LEAGUE_SEED.

use actix_web::{web::Data, App, HttpServer};
use football_league_sim::{api, AppConfig, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env();
    let state = match AppState::from_config(&config) {
        Ok(state) => Data::new(state),
        Err(e) => {
            log::error!("Could not load team roster: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };
    if let Some(seed) = config.seed {
        log::info!("Goal generation seeded with {}", seed);
    }

    let bind = (config.host.clone(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || App::new().app_data(state.clone()).configure(api::configure))
        .bind(bind)?
        .run()
        .await
}
