//! HTTP server entry point for the tasklist backend.
//!
//! Reads configuration from the environment (see [`tasklist::config`])
//! and serves the task API. With `DATABASE_URL` set, tasks persist to
//! `PostgreSQL`; otherwise an in-memory store backs the API.

use std::sync::Arc;

use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use tasklist::api::{self, AppState};
use tasklist::config::{Config, ConfigError};
use tasklist::task::adapters::memory::InMemoryTaskRepository;
use tasklist::task::adapters::postgres::{PostgresTaskRepository, TaskPgPool};
use tasklist::task::ports::TaskInputGateway;
use tasklist::task::services::TaskService;

/// Errors that abort server startup.
#[derive(Debug, Error)]
enum StartupError {
    /// Configuration could not be read.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The database connection pool could not be built.
    #[error("failed to build database pool: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),

    /// Binding the listener or serving requests failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tasklist=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let tasks = build_gateway(&config)?;
    let app = api::router(AppState { tasks });

    let addr = config.bind_addr();
    info!("starting server on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Wires the task use case to the store the configuration selects.
fn build_gateway(config: &Config) -> Result<Arc<dyn TaskInputGateway>, StartupError> {
    let clock = Arc::new(DefaultClock);
    match config.database_url.as_deref() {
        Some(url) => {
            info!("using PostgreSQL task store");
            let pool: TaskPgPool = Pool::builder().build(ConnectionManager::new(url))?;
            Ok(Arc::new(TaskService::new(
                Arc::new(PostgresTaskRepository::new(pool)),
                clock,
            )))
        }
        None => {
            info!("DATABASE_URL not set, keeping tasks in memory");
            Ok(Arc::new(TaskService::new(
                Arc::new(InMemoryTaskRepository::new()),
                clock,
            )))
        }
    }
}
