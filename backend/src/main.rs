//! Backend entry-point: loads settings, prepares the store, and serves the REST API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use exam_backend::inbound::http::health::HealthState;
use exam_backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use exam_backend::settings::ServerSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let config = build_config(&settings).await?;

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}

async fn build_config(settings: &ServerSettings) -> std::io::Result<ServerConfig> {
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let config = ServerConfig::new(bind_addr)
        .with_grading(settings.grading_mode().map_err(std::io::Error::other)?)
        .with_policy(settings.resubmission_policy().map_err(std::io::Error::other)?);

    let Some(database_url) = settings.database_url() else {
        info!(%bind_addr, "no database configured; using in-memory store");
        return Ok(config);
    };

    let url = database_url.to_owned();
    let applied = tokio::task::spawn_blocking(move || run_pending_migrations(&url))
        .await
        .map_err(|e| std::io::Error::other(format!("migration task failed: {e}")))?
        .map_err(|e| std::io::Error::other(format!("failed to apply migrations: {e}")))?;
    info!(applied, "database migrations applied");

    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(settings.pool_max_size()))
        .await
        .map_err(|e| std::io::Error::other(format!("failed to build database pool: {e}")))?;
    info!(%bind_addr, "using PostgreSQL store");
    Ok(config.with_db_pool(pool))
}
