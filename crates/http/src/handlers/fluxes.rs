use std::sync::Arc;

use axum::{Json, extract::State};

use fieldflux_core::timeline::{spans_by_crop, spans_by_gas, spans_by_tillage};
use fieldflux_storage::traits::FluxStore;

use crate::AppState;
use crate::api_error::ApiError;
use crate::response_types::FluxTimelineResponse;

/// `/api/fluxes/timeline` — the full sample set partitioned three ways,
/// each group reduced to its min/max sample date. One pass per grouping
/// over a single fetch.
pub async fn get_timeline(
    State(state): State<Arc<AppState>>,
) -> Result<Json<FluxTimelineResponse>, ApiError> {
    let samples = state.store.list_flux_samples().await?;
    Ok(Json(FluxTimelineResponse {
        by_gas: spans_by_gas(&samples),
        by_crop: spans_by_crop(&samples),
        by_tillage: spans_by_tillage(&samples),
    }))
}
