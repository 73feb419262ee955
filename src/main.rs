use actix_web::web::Data;
use actix_web::{App, HttpServer};
use std::sync::Arc;
use tracing::{error, info};

use forescore::args;
use forescore::controller::client::{HttpScoresApi, ScoresApi};
use forescore::controller::refresh::spawn_refresh_task;
use forescore::controller::score::{AppState, routes};
use forescore::controller::store::ScoreStore;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = match args::args_checks() {
        Ok(args) => args,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return Err(e.into());
        }
    };

    info!(
        title = %args.event.title,
        pairings = args.event.roster.pairings().count(),
        api = %args.api_url,
        "starting scoreboard"
    );

    let store = ScoreStore::new(args.event);
    let api: Arc<dyn ScoresApi> = Arc::new(HttpScoresApi::new(args.api_url)?);
    let refresher = spawn_refresh_task(store.clone(), Arc::clone(&api), args.refresh_interval);

    let state = AppState {
        store,
        api,
        refresh_interval: args.refresh_interval,
    };

    info!(bind = %args.bind, "listening");
    let served = HttpServer::new(move || {
        App::new()
            .app_data(Data::new(state.clone()))
            .configure(routes)
    })
    .bind(&args.bind)?
    .run()
    .await;

    refresher.shutdown().await;
    served?;
    Ok(())
}
