//! TreatmentStore implementation for PgStore.

use async_trait::async_trait;
use fieldflux_core::TreatmentDefinition;
use sqlx::Row;

use super::PgStore;
use crate::error::StoreError;
use crate::traits::TreatmentStore;

fn row_to_definition(row: &sqlx::postgres::PgRow) -> Result<TreatmentDefinition, StoreError> {
    Ok(TreatmentDefinition {
        site: row.try_get("site")?,
        dataset: row.try_get("dataset")?,
        year: row.try_get("year")?,
        crop: row.try_get("crop")?,
        tillage: row.try_get("tillage")?,
        irrigation: row.try_get("irrigation")?,
        cover_crop: row.try_get("cover_crop")?,
        comments: row.try_get("comments")?,
    })
}

#[async_trait]
impl TreatmentStore for PgStore {
    async fn treatment_site_names(&self) -> Result<Vec<String>, StoreError> {
        let names: Vec<String> =
            sqlx::query_scalar("SELECT DISTINCT site FROM treatment ORDER BY site")
                .fetch_all(&self.pool)
                .await?;
        Ok(names)
    }

    async fn treatment_datasets(&self, site: &str) -> Result<Vec<String>, StoreError> {
        let datasets: Vec<String> = sqlx::query_scalar(
            "SELECT DISTINCT dataset FROM treatment WHERE site = $1 ORDER BY dataset",
        )
        .bind(site)
        .fetch_all(&self.pool)
        .await?;
        Ok(datasets)
    }

    async fn treatment_records(
        &self,
        site: &str,
        dataset: &str,
    ) -> Result<Vec<TreatmentDefinition>, StoreError> {
        let rows = sqlx::query(
            "SELECT site, dataset, year, crop, tillage, irrigation, cover_crop, comments
               FROM treatment
              WHERE site = $1 AND dataset = $2
              ORDER BY year",
        )
        .bind(site)
        .bind(dataset)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_definition).collect()
    }
}
