use std::sync::Arc;

use axum::{Json, extract::State};

use fieldflux_core::map_center;
use fieldflux_storage::StoreStats;
use fieldflux_storage::traits::{SiteStore, StatsStore};

use crate::AppState;
use crate::api_error::ApiError;
use crate::response_types::{MapConfigResponse, SiteResponse};

/// `/data` — every site with its decoded coordinates. An empty site table
/// is reported as an explicit 404 "No data found"; no rows is a state,
/// not a failure.
pub async fn get_sites(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SiteResponse>>, ApiError> {
    let sites = state.store.list_sites().await?;
    if sites.is_empty() {
        return Err(ApiError::NoData("No data found".to_owned()));
    }
    Ok(Json(sites.into_iter().map(SiteResponse::from).collect()))
}

/// `/api/map/config` — marker data plus the computed center for the map
/// page. Unlike `/data`, an empty site table is fine here: the page renders
/// an empty map at the (0, 0) fallback.
pub async fn get_map_config(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MapConfigResponse>, ApiError> {
    let sites = state.store.list_sites().await?;
    let (lat, lon) = map_center(&sites);
    Ok(Json(MapConfigResponse {
        center: [lat, lon],
        sites: sites.into_iter().map(SiteResponse::from).collect(),
    }))
}

pub async fn get_stats(State(state): State<Arc<AppState>>) -> Result<Json<StoreStats>, ApiError> {
    let stats = state.store.store_stats().await?;
    Ok(Json(stats))
}
