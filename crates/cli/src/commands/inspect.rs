//! Read-only inspection commands: dump store contents as pretty JSON.

use anyhow::Result;
use fieldflux_core::timeline::{spans_by_crop, spans_by_gas, spans_by_tillage};
use fieldflux_storage::PgStore;
use fieldflux_storage::traits::{FluxStore, SiteStore, StatsStore};

pub(crate) async fn run_sites(store: &PgStore) -> Result<()> {
    let sites = store.list_sites().await?;
    println!("{}", serde_json::to_string_pretty(&sites)?);
    Ok(())
}

pub(crate) async fn run_timeline(store: &PgStore) -> Result<()> {
    let samples = store.list_flux_samples().await?;
    let timeline = serde_json::json!({
        "by_gas": spans_by_gas(&samples),
        "by_crop": spans_by_crop(&samples),
        "by_tillage": spans_by_tillage(&samples),
    });
    println!("{}", serde_json::to_string_pretty(&timeline)?);
    Ok(())
}

pub(crate) async fn run_stats(store: &PgStore) -> Result<()> {
    let stats = store.store_stats().await?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
