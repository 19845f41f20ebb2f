//! Schema bootstrap for dev environments and integration tests.
//!
//! Production tables are owned by the external bulk-import pipeline; this
//! module only mirrors that shape idempotently so a fresh database can be
//! stood up for local work. No data is ever written by the application.

use sqlx::PgPool;

use crate::error::StoreError;

/// Create the record tables (and the PostGIS extension) if absent.
pub async fn run_schema_bootstrap(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::query("CREATE EXTENSION IF NOT EXISTS postgis")
        .execute(pool)
        .await
        .map_err(|e| StoreError::Schema(format!("postgis extension: {e}")))?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS site (
            id SERIAL PRIMARY KEY,
            name TEXT,
            geometry geometry(Point, 4326)
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| StoreError::Schema(format!("site table: {e}")))?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS fertilization (
            site TEXT NOT NULL,
            dataset TEXT NOT NULL,
            date DATE NOT NULL,
            treatment TEXT NOT NULL,
            replicate TEXT NOT NULL,
            n_rate DOUBLE PRECISION,
            formulation TEXT,
            unit TEXT,
            placement TEXT,
            PRIMARY KEY (site, dataset, date, treatment, replicate)
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| StoreError::Schema(format!("fertilization table: {e}")))?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS treatment (
            site TEXT NOT NULL,
            dataset TEXT NOT NULL,
            year INTEGER NOT NULL,
            crop TEXT,
            tillage TEXT,
            irrigation TEXT,
            cover_crop TEXT,
            comments TEXT,
            PRIMARY KEY (site, dataset, year)
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| StoreError::Schema(format!("treatment table: {e}")))?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tillage (
            site TEXT NOT NULL,
            dataset TEXT NOT NULL,
            date DATE,
            tillage_type TEXT,
            depth TEXT,
            time TEXT,
            comments TEXT
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| StoreError::Schema(format!("tillage table: {e}")))?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS flux (
            site TEXT NOT NULL,
            dataset TEXT NOT NULL,
            sample_date DATE NOT NULL,
            treatment_name TEXT NOT NULL,
            replicate_name TEXT NOT NULL,
            crop TEXT,
            fertilized BOOLEAN,
            tillage TEXT,
            n_inhibitor TEXT,
            irrigation TEXT,
            gas TEXT,
            flux DOUBLE PRECISION
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| StoreError::Schema(format!("flux table: {e}")))?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_flux_dataset ON flux (dataset)")
        .execute(pool)
        .await
        .map_err(|e| StoreError::Schema(format!("flux index: {e}")))?;

    tracing::info!("schema bootstrap complete");
    Ok(())
}
