//! HTTP API server for fieldflux.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;
mod views;

use std::sync::Arc;

use axum::{Json, Router, routing::get};
use tower_http::cors::CorsLayer;

use fieldflux_storage::PgStore;

pub use response_types::VersionResponse;

/// Shared application state for all HTTP handlers.
///
/// Nothing here is mutable: one read-only store handle behind the pool.
/// Wrapped in `Arc` for sharing across handlers.
pub struct AppState {
    /// Pool-backed record store.
    pub store: PgStore,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(views::serve_index))
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/data", get(handlers::sites::get_sites))
        .route("/map", get(views::serve_map))
        .route("/fertilization_data", get(views::serve_records))
        .route("/treatment", get(views::serve_records))
        .route("/tillage", get(views::serve_records))
        .route("/fluxes", get(views::serve_fluxes))
        .route("/api/map/config", get(handlers::sites::get_map_config))
        .route("/api/stats", get(handlers::sites::get_stats))
        .route("/api/fertilization/sites", get(handlers::fertilization::get_site_names))
        .route("/api/fertilization/datasets", get(handlers::fertilization::get_datasets))
        .route("/api/fertilization/records", get(handlers::fertilization::get_records))
        .route("/api/treatment/sites", get(handlers::treatments::get_site_names))
        .route("/api/treatment/datasets", get(handlers::treatments::get_datasets))
        .route("/api/treatment/records", get(handlers::treatments::get_records))
        .route("/api/tillage/sites", get(handlers::tillage::get_site_names))
        .route("/api/tillage/datasets", get(handlers::tillage::get_datasets))
        .route("/api/tillage/records", get(handlers::tillage::get_records))
        .route("/api/fluxes/timeline", get(handlers::fluxes::get_timeline))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
