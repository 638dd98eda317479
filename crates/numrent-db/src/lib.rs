//! # numrent-db
//!
//! Persistence gateway for numrent. All access goes through `sqlx::AnyPool`
//! so the same repository code runs against PostgreSQL in production and
//! embedded SQLite in development and tests. Every column that is not a
//! primitive (UUIDs, timestamps, money) crosses this boundary as TEXT; the
//! codecs live in `numrent_common::any_row`.

pub mod repository;
pub mod schema;

use std::sync::Once;
use std::time::Duration;

use anyhow::Result;
use sqlx::AnyPool;
use sqlx::any::AnyPoolOptions;

static DRIVERS: Once = Once::new();

/// Shared database handle passed to the operations layer.
#[derive(Clone)]
pub struct Database {
    pub pool: AnyPool,
}

impl Database {
    /// Connect using the application configuration.
    pub async fn connect(config: &numrent_common::config::AppConfig) -> Result<Self> {
        tracing::info!("Connecting to database...");
        let db = Self::connect_url(
            &config.database.url,
            config.database.max_connections,
            config.database.min_connections,
        )
        .await?;
        tracing::info!("Connected");
        Ok(db)
    }

    /// Connect to an explicit URL (`postgres://...` or `sqlite:...`).
    pub async fn connect_url(url: &str, max_connections: u32, min_connections: u32) -> Result<Self> {
        DRIVERS.call_once(sqlx::any::install_default_drivers);
        let pool = AnyPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .connect(url)
            .await?;
        Ok(Self { pool })
    }

    /// In-memory SQLite database for tests and tooling.
    ///
    /// Pinned to a single never-expiring connection: an in-memory SQLite
    /// database lives and dies with its connection.
    pub async fn connect_memory() -> Result<Self> {
        DRIVERS.call_once(sqlx::any::install_default_drivers);
        let pool = AnyPoolOptions::new()
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect("sqlite::memory:")
            .await?;
        Ok(Self { pool })
    }

    /// Create any missing tables and indexes.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Ensuring database schema...");
        schema::ensure_schema(&self.pool).await?;
        tracing::info!("Schema ready");
        Ok(())
    }
}

/// Health check — verify the database is reachable.
pub async fn health_check(pool: &AnyPool) -> bool {
    sqlx::query("SELECT 1").execute(pool).await.is_ok()
}
