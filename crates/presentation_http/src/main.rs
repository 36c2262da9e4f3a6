//! SurfsUp HTTP Server
//!
//! Serves the read-only climate reports over the Hawaii SQLite dataset.

use std::{sync::Arc, time::Duration};

use application::{
    ClimateService,
    ports::{ClimateDataPort, DatabaseHealthPort},
};
use infrastructure::{
    AppConfig, SqliteClimateStore, SqliteDatabaseHealth, create_pool, init_logging,
};
use presentation_http::{
    RequestIdLayer,
    error::set_expose_internal_errors,
    routes,
    shutdown::{Drain, drain_within, shutdown_signal},
    state::AppState,
};
use tokio::{net::TcpListener, sync::Notify};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configuration comes first so the log filter and format apply from the start
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_logging(&config.logging)?;

    if let Some(e) = config_error {
        warn!(error = %e, "Failed to load config, using defaults");
    }

    let environment = config.environment();
    set_expose_internal_errors(!environment.is_production());

    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %environment,
        "SurfsUp starting"
    );
    info!(
        host = %config.server.host,
        port = config.server.port,
        dataset = %config.database.path,
        "Configuration loaded"
    );

    // A missing dataset is fatal; nothing can be served without it
    let pool = Arc::new(
        create_pool(&config.database)
            .map_err(|e| anyhow::anyhow!("Failed to open climate dataset: {e}"))?,
    );

    let store: Arc<dyn ClimateDataPort> = Arc::new(SqliteClimateStore::new(Arc::clone(&pool)));
    let database_health: Arc<dyn DatabaseHealthPort> =
        Arc::new(SqliteDatabaseHealth::new(Arc::clone(&pool)));

    let state = AppState {
        climate_service: Arc::new(ClimateService::new(store)),
        database_health,
    };

    // Outermost layer last: the request id span wraps the trace layer
    let app = routes::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(RequestIdLayer::new());

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));
    let draining = Arc::new(Notify::new());

    let signal = {
        let draining = Arc::clone(&draining);
        async move {
            shutdown_signal().await;
            draining.notify_one();
        }
    };
    let server = axum::serve(listener, app).with_graceful_shutdown(signal);

    match drain_within(server, &draining, shutdown_timeout).await {
        Drain::Completed(result) => result?,
        Drain::TimedOut => warn!(
            timeout = ?shutdown_timeout,
            "Connections still open after shutdown timeout, forcing exit"
        ),
    }

    info!("Server shutdown complete");

    Ok(())
}
