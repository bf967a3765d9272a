//! Lazy Postgres connection pool shared by every server function.
//!
//! The pool is created on first use and reused for the process
//! lifetime. Pool bounds are deliberately conservative for a small
//! deployment: 20 connections, 30 second idle reaping, 5 second
//! acquire deadline.

use std::time::Duration;

use anyhow::Context as _;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;
use tokio::sync::OnceCell;

use crate::settings::Settings;

static CONNECTION_POOL: OnceCell<PgPool> = OnceCell::const_new();

const MAX_CONNECTIONS: u32 = 20;
const IDLE_TIMEOUT: Duration = Duration::from_secs(30);
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Initialize a connection pool to the database
async fn init_connection_pool() -> anyhow::Result<PgPool> {
    dotenvy::dotenv().ok();
    let settings = Settings::new().context("failed to load settings")?;
    let mut options: PgConnectOptions = settings
        .db
        .url()
        .parse()
        .context("invalid Postgres connection URL")?;
    if settings.tls_required() {
        options = options.ssl_mode(PgSslMode::Require);
    }
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .idle_timeout(IDLE_TIMEOUT)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_with(options)
        .await
        .context("failed to connect to Postgres")?;
    tracing::info!("database pool ready");
    Ok(pool)
}

/// Get the connection pool, creating it on first use.
pub async fn connection_pool() -> anyhow::Result<&'static PgPool> {
    Ok(CONNECTION_POOL.get_or_try_init(init_connection_pool).await?)
}
