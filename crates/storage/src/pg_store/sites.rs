//! SiteStore implementation for PgStore.

use async_trait::async_trait;
use fieldflux_core::{Site, decode_ewkb_point};
use sqlx::Row;

use super::PgStore;
use crate::error::StoreError;
use crate::traits::SiteStore;

fn row_to_site(row: &sqlx::postgres::PgRow) -> Result<Site, StoreError> {
    let id: i32 = row.try_get("id")?;
    let name: Option<String> = row.try_get("name")?;
    let geom: Option<Vec<u8>> = row.try_get("geom")?;
    let coords = match geom {
        Some(bytes) => Some(
            decode_ewkb_point(&bytes)
                .map_err(|e| StoreError::corrupt(format!("site {id} geometry"), e))?,
        ),
        None => None,
    };
    Ok(Site { id, name, coords })
}

#[async_trait]
impl SiteStore for PgStore {
    async fn list_sites(&self) -> Result<Vec<Site>, StoreError> {
        let rows =
            sqlx::query("SELECT id, name, ST_AsEWKB(geometry) AS geom FROM site ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        rows.iter().map(row_to_site).collect()
    }
}
