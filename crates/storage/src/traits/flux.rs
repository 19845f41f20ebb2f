use async_trait::async_trait;
use fieldflux_core::FluxSample;

use crate::error::StoreError;

/// Flux sample lookups for timeline aggregation.
#[async_trait]
pub trait FluxStore: Send + Sync {
    /// The full sample set, ordered by (site, dataset, sample_date).
    async fn list_flux_samples(&self) -> Result<Vec<FluxSample>, StoreError>;
}
