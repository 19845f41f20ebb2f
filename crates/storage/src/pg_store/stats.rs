//! StatsStore implementation for PgStore.

use async_trait::async_trait;

use super::PgStore;
use crate::error::StoreError;
use crate::traits::StatsStore;
use crate::types::StoreStats;

#[async_trait]
impl StatsStore for PgStore {
    async fn store_stats(&self) -> Result<StoreStats, StoreError> {
        let site_count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM site").fetch_one(&self.pool).await?;
        let fertilization_count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM fertilization").fetch_one(&self.pool).await?;
        let treatment_count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM treatment").fetch_one(&self.pool).await?;
        let tillage_count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM tillage").fetch_one(&self.pool).await?;
        let flux_count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM flux").fetch_one(&self.pool).await?;
        Ok(StoreStats {
            site_count: u64::try_from(site_count).unwrap_or(0),
            fertilization_count: u64::try_from(fertilization_count).unwrap_or(0),
            treatment_count: u64::try_from(treatment_count).unwrap_or(0),
            tillage_count: u64::try_from(tillage_count).unwrap_or(0),
            flux_count: u64::try_from(flux_count).unwrap_or(0),
        })
    }
}
