//! HTTP host for the rendered page.
//!
//! The page is rendered once before the host starts; requests only ever see
//! that immutable copy.

use crate::config::ServerSettings;
use crate::core::{EmbedOptions, RenderedPage};
use crate::utils::error::Result;
use axum::{
    body::Bytes,
    extract::State,
    response::{Html, Json},
    routing::get,
    Router,
};
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
struct AppState {
    markup: Bytes,
    options: EmbedOptions,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    #[serde(flatten)]
    options: EmbedOptions,
}

pub fn router(page: RenderedPage) -> Router {
    let state = Arc::new(AppState {
        markup: Bytes::from(page.markup),
        options: page.options,
    });

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index(State(state): State<Arc<AppState>>) -> Html<Bytes> {
    Html(state.markup.clone())
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        options: state.options,
    })
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn serve(settings: &ServerSettings, page: RenderedPage) -> Result<()> {
    let listener = TcpListener::bind(settings.bind).await?;
    serve_with_shutdown(listener, page, shutdown_signal()).await
}

pub async fn serve_with_shutdown<F>(listener: TcpListener, page: RenderedPage, signal: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!("🌐 Serving viewer on http://{}", addr);

    axum::serve(listener, router(page))
        .with_graceful_shutdown(signal)
        .await?;

    tracing::info!("Viewer host stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
