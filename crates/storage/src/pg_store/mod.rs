//! PostgreSQL store backend using sqlx.
//!
//! Split into modular files by domain concern. All lookups are parameterized
//! equality filters; empty result sets are ordinary, not errors.

#![allow(clippy::absolute_paths, reason = "std paths in error handling are clear")]

mod fertilization;
mod fluxes;
mod sites;
mod stats;
mod tillage;
mod treatments;

use fieldflux_core::{
    PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS,
};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::error::StoreError;
use crate::schema::run_schema_bootstrap;

/// Explicitly constructed store handle, shared by reference with request
/// handlers. Holds nothing but the connection pool.
#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect to the backing store. Does NOT create or alter schema — the
    /// tables are owned by the external import pipeline.
    pub async fn new(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(std::time::Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(std::time::Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        tracing::info!("PgStore initialized");
        Ok(Self { pool })
    }

    /// Idempotent `CREATE TABLE IF NOT EXISTS` bootstrap for dev
    /// environments and integration tests.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        run_schema_bootstrap(&self.pool).await
    }

    /// Raw pool access for test fixtures.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
