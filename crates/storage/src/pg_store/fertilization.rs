//! FertilizationStore implementation for PgStore.

use async_trait::async_trait;
use chrono::NaiveDate;
use fieldflux_core::FertilizationEvent;
use sqlx::Row;

use super::PgStore;
use crate::error::StoreError;
use crate::traits::FertilizationStore;

fn row_to_event(row: &sqlx::postgres::PgRow) -> Result<FertilizationEvent, StoreError> {
    let date: NaiveDate = row.try_get("date")?;
    Ok(FertilizationEvent {
        site: row.try_get("site")?,
        dataset: row.try_get("dataset")?,
        date,
        treatment: row.try_get("treatment")?,
        replicate: row.try_get("replicate")?,
        n_rate: row.try_get("n_rate")?,
        formulation: row.try_get("formulation")?,
        unit: row.try_get("unit")?,
        placement: row.try_get("placement")?,
    })
}

#[async_trait]
impl FertilizationStore for PgStore {
    async fn fertilization_site_names(&self) -> Result<Vec<String>, StoreError> {
        let names: Vec<String> =
            sqlx::query_scalar("SELECT DISTINCT site FROM fertilization ORDER BY site")
                .fetch_all(&self.pool)
                .await?;
        Ok(names)
    }

    async fn fertilization_datasets(&self, site: &str) -> Result<Vec<String>, StoreError> {
        let datasets: Vec<String> = sqlx::query_scalar(
            "SELECT DISTINCT dataset FROM fertilization WHERE site = $1 ORDER BY dataset",
        )
        .bind(site)
        .fetch_all(&self.pool)
        .await?;
        Ok(datasets)
    }

    async fn fertilization_records(
        &self,
        site: &str,
        dataset: &str,
    ) -> Result<Vec<FertilizationEvent>, StoreError> {
        let rows = sqlx::query(
            "SELECT site, dataset, date, treatment, replicate, n_rate, formulation, unit, placement
               FROM fertilization
              WHERE site = $1 AND dataset = $2
              ORDER BY date, treatment, replicate",
        )
        .bind(site)
        .bind(dataset)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_event).collect()
    }
}
