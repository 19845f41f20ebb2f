//! TillageStore implementation for PgStore.

use async_trait::async_trait;
use chrono::NaiveDate;
use fieldflux_core::TillageEvent;
use sqlx::Row;

use super::PgStore;
use crate::error::StoreError;
use crate::traits::TillageStore;

fn row_to_event(row: &sqlx::postgres::PgRow) -> Result<TillageEvent, StoreError> {
    let date: Option<NaiveDate> = row.try_get("date")?;
    Ok(TillageEvent {
        site: row.try_get("site")?,
        dataset: row.try_get("dataset")?,
        date,
        tillage_type: row.try_get("tillage_type")?,
        depth: row.try_get("depth")?,
        time: row.try_get("time")?,
        comments: row.try_get("comments")?,
    })
}

#[async_trait]
impl TillageStore for PgStore {
    async fn tillage_site_names(&self) -> Result<Vec<String>, StoreError> {
        let names: Vec<String> =
            sqlx::query_scalar("SELECT DISTINCT site FROM tillage ORDER BY site")
                .fetch_all(&self.pool)
                .await?;
        Ok(names)
    }

    async fn tillage_datasets(&self, site: &str) -> Result<Vec<String>, StoreError> {
        let datasets: Vec<String> = sqlx::query_scalar(
            "SELECT DISTINCT dataset FROM tillage WHERE site = $1 ORDER BY dataset",
        )
        .bind(site)
        .fetch_all(&self.pool)
        .await?;
        Ok(datasets)
    }

    async fn tillage_records(
        &self,
        site: &str,
        dataset: &str,
    ) -> Result<Vec<TillageEvent>, StoreError> {
        let rows = sqlx::query(
            "SELECT site, dataset, date, tillage_type, depth, time, comments
               FROM tillage
              WHERE site = $1 AND dataset = $2
              ORDER BY date NULLS LAST",
        )
        .bind(site)
        .bind(dataset)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_event).collect()
    }
}
