//! Embedded HTML views.
//!
//! Each page is a small static document embedded at compile time and served
//! with the right content type; the pages fetch their data from the JSON
//! endpoints. `/fertilization_data`, `/treatment`, and `/tillage` share one
//! document that keys its table columns off `location.pathname`.

use axum::{
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};

const INDEX_HTML: &str = include_str!("views/index.html");
const MAP_HTML: &str = include_str!("views/map.html");
const RECORDS_HTML: &str = include_str!("views/records.html");
const FLUXES_HTML: &str = include_str!("views/fluxes.html");

fn serve(html: &'static str) -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/html; charset=utf-8")], Html(html))
        .into_response()
}

pub async fn serve_index() -> Response {
    serve(INDEX_HTML)
}

pub async fn serve_map() -> Response {
    serve(MAP_HTML)
}

pub async fn serve_records() -> Response {
    serve(RECORDS_HTML)
}

pub async fn serve_fluxes() -> Response {
    serve(FLUXES_HTML)
}
