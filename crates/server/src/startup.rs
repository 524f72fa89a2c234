use std::future::Future;
use std::net::SocketAddr;

use configs::{AppConfig, DatabaseConfig};
use migration::MigratorTrait;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Connect, migrate when enabled, and wire the SeaORM-backed services.
pub async fn connect_state(cfg: &DatabaseConfig) -> anyhow::Result<AppState> {
    let db = models::db::connect_with_config(cfg).await?;
    if cfg.run_migrations {
        migration::Migrator::up(&db, None).await?;
        info!(event = "migrations_applied", "database schema is up to date");
    }
    Ok(AppState::with_db(db))
}

/// Resolves once `signal` fires. A signal that cannot be installed never
/// resolves, so the server keeps running.
async fn shutdown_on<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
}

async fn shutdown_signal() {
    shutdown_on(tokio::signal::ctrl_c()).await
}

/// Public entry: build the app and run the HTTP server until Ctrl+C
pub async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::load_optional_database()?;

    let state = if cfg.database.is_configured() {
        connect_state(&cfg.database).await?
    } else {
        warn!(event = "no_database", "database.url is not set; records are kept in memory only");
        AppState::in_memory()
    };

    let app = routes::build_router(state, build_cors());

    let addr: SocketAddr = cfg.bind_addr().parse()?;
    info!(%addr, "starting vet clinic server");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    info!("server stopped");
    Ok(())
}
