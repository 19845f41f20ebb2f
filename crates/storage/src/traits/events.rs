use async_trait::async_trait;
use fieldflux_core::{FertilizationEvent, TillageEvent, TreatmentDefinition};

use crate::error::StoreError;

/// Fertilization event lookups for the cascading site → dataset selection.
#[async_trait]
pub trait FertilizationStore: Send + Sync {
    /// Distinct site names present in the fertilization table, ordered.
    async fn fertilization_site_names(&self) -> Result<Vec<String>, StoreError>;

    /// Distinct datasets recorded for a site, ordered.
    async fn fertilization_datasets(&self, site: &str) -> Result<Vec<String>, StoreError>;

    /// Events matching (site, dataset), ordered by key columns.
    async fn fertilization_records(
        &self,
        site: &str,
        dataset: &str,
    ) -> Result<Vec<FertilizationEvent>, StoreError>;
}

/// Treatment definition lookups.
#[async_trait]
pub trait TreatmentStore: Send + Sync {
    async fn treatment_site_names(&self) -> Result<Vec<String>, StoreError>;

    async fn treatment_datasets(&self, site: &str) -> Result<Vec<String>, StoreError>;

    async fn treatment_records(
        &self,
        site: &str,
        dataset: &str,
    ) -> Result<Vec<TreatmentDefinition>, StoreError>;
}

/// Tillage operation lookups.
#[async_trait]
pub trait TillageStore: Send + Sync {
    async fn tillage_site_names(&self) -> Result<Vec<String>, StoreError>;

    async fn tillage_datasets(&self, site: &str) -> Result<Vec<String>, StoreError>;

    async fn tillage_records(
        &self,
        site: &str,
        dataset: &str,
    ) -> Result<Vec<TillageEvent>, StoreError>;
}
