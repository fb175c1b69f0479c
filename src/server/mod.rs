//! HTTPサーバー
//!
//! - `POST /upload`   盤リスト画像（multipart `image`）→ Excel
//! - `GET /api/health`

mod response;
mod upload;

pub use upload::upload_panel_schedule;

use crate::config::Config;
use crate::error::Result;
use crate::extractor::ExtractionClient;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

/// ハンドラ間で共有する状態（リクエスト間で変更しない）
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub extractor: ExtractionClient,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let extractor = ExtractionClient::from_config(&config)?;
        Ok(Self::with_extractor(config, extractor))
    }

    pub fn with_extractor(config: Config, extractor: ExtractionClient) -> Self {
        Self {
            config: Arc::new(config),
            extractor,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/upload", post(upload::upload_panel_schedule))
        .route("/api/health", get(|| async { "OK" }))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 取得済みのリスナーでサーバーを起動
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let app = build_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

pub async fn start_server(state: AppState) -> Result<()> {
    let addr = state.config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;

    info!(addr = %addr, "Server running");
    serve(listener, state).await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutting down"),
        Err(e) => {
            warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await
        }
    }
}
