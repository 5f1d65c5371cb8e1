//! Team Planner Server
//!
//! Serves the JSON API and health checks. Falls back to the in-memory store
//! when the database is unreachable.

use std::sync::Arc;

use axum::{routing::get, Router};
use mockable::DefaultClock;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tp_advisor::AdvisorClient;
use tp_api::AppState;
use tp_core::config::AppConfig;
use tp_db::{Database, DeveloperRepository, InMemoryStore, ProjectRepository, TaskRepository};
use tp_services::SharedClock;

mod health;

use health::{HealthChecker, HealthConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.server.host,
        port = config.server.port,
        advisor = %config.advisor.base_url,
        "Starting Team Planner"
    );

    let db = connect_database(&config).await?;
    let advisor = Arc::new(AdvisorClient::new(&config.advisor)?);
    let clock: SharedClock = Arc::new(DefaultClock);

    let state = match db {
        Some(ref db) => AppState::new(
            Arc::new(ProjectRepository::new(db.pool().clone())),
            Arc::new(DeveloperRepository::new(db.pool().clone())),
            Arc::new(TaskRepository::new(db.pool().clone())),
            advisor,
            clock,
        ),
        None => AppState::in_memory(&InMemoryStore::new(), advisor, clock),
    };
    let health = Arc::new(HealthChecker::new(HealthConfig::default()).with_database(db.clone()));

    let app = build_router(state, health);

    let addr = config.server_addr();
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(db) = db {
        db.close().await;
    }
    info!("Server shutdown complete");
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,tp_server=debug,tp_api=debug,tower_http=debug".into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Connect and migrate; `None` when the database cannot be reached
async fn connect_database(config: &AppConfig) -> anyhow::Result<Option<Database>> {
    let db = match Database::connect(&config.database).await {
        Ok(db) => db,
        Err(e) => {
            warn!("Failed to connect to database: {}. Using the in-memory store.", e);
            return Ok(None);
        }
    };

    db.migrate().await?;
    info!("Connected to database");
    Ok(Some(db))
}

/// Build the application router
fn build_router(state: AppState, health: Arc<HealthChecker>) -> Router {
    let health_routes = Router::new()
        .route("/health", get(health::liveness))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .with_state(health);

    Router::new()
        .merge(health_routes)
        .merge(tp_api::router().with_state(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
