use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};

use fieldflux_core::FertilizationEvent;
use fieldflux_storage::traits::FertilizationStore;

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::SelectionQuery;

pub async fn get_site_names(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, ApiError> {
    let names = state.store.fertilization_site_names().await?;
    Ok(Json(names))
}

pub async fn get_datasets(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SelectionQuery>,
) -> Result<Json<Vec<String>>, ApiError> {
    let datasets = match query.site.as_deref() {
        Some(site) => state.store.fertilization_datasets(site).await?,
        None => Vec::new(),
    };
    Ok(Json(datasets))
}

pub async fn get_records(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SelectionQuery>,
) -> Result<Json<Vec<FertilizationEvent>>, ApiError> {
    let records = match query.as_pair() {
        Some((site, dataset)) => state.store.fertilization_records(site, dataset).await?,
        None => Vec::new(),
    };
    Ok(Json(records))
}
