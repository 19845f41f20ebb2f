use std::sync::Arc;

use anyhow::Result;
use fieldflux_http::{AppState, create_router};
use fieldflux_storage::PgStore;

pub(crate) async fn run(store: PgStore, port: u16, host: String) -> Result<()> {
    let state = Arc::new(AppState { store });
    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
