use anyhow::{Context, Result};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::{self, AppState};
use crate::demo;

/// Assemble the full application: travel routes plus the demo app.
pub fn app(state: AppState) -> axum::Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api::build_router(state)
        .merge(demo::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn run(state: AppState, port: u16) -> Result<()> {
    let app = app(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://localhost:{}", port);
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
