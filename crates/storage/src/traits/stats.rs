use async_trait::async_trait;

use crate::error::StoreError;
use crate::types::StoreStats;

/// Aggregate row counts across the record tables.
#[async_trait]
pub trait StatsStore: Send + Sync {
    async fn store_stats(&self) -> Result<StoreStats, StoreError>;
}
