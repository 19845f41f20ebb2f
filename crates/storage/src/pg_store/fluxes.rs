//! FluxStore implementation for PgStore.

use async_trait::async_trait;
use chrono::NaiveDate;
use fieldflux_core::FluxSample;
use sqlx::Row;

use super::PgStore;
use crate::error::StoreError;
use crate::traits::FluxStore;

fn row_to_sample(row: &sqlx::postgres::PgRow) -> Result<FluxSample, StoreError> {
    let sample_date: NaiveDate = row.try_get("sample_date")?;
    Ok(FluxSample {
        site: row.try_get("site")?,
        dataset: row.try_get("dataset")?,
        sample_date,
        treatment_name: row.try_get("treatment_name")?,
        replicate_name: row.try_get("replicate_name")?,
        crop: row.try_get("crop")?,
        fertilized: row.try_get("fertilized")?,
        tillage: row.try_get("tillage")?,
        n_inhibitor: row.try_get("n_inhibitor")?,
        irrigation: row.try_get("irrigation")?,
        gas: row.try_get("gas")?,
        flux: row.try_get("flux")?,
    })
}

#[async_trait]
impl FluxStore for PgStore {
    async fn list_flux_samples(&self) -> Result<Vec<FluxSample>, StoreError> {
        let rows = sqlx::query(
            "SELECT site, dataset, sample_date, treatment_name, replicate_name, crop,
                    fertilized, tillage, n_inhibitor, irrigation, gas, flux
               FROM flux
              ORDER BY site, dataset, sample_date",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_sample).collect()
    }
}
