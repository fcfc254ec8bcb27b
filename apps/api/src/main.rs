mod config;
mod errors;
mod routes;
mod screening;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::routes::build_router;
use crate::screening::extract::PdfTextExtractor;
use crate::screening::similarity::{EmbeddingScorer, FastEmbedder};
use crate::screening::store::ResultsStore;
use crate::screening::uploads::ensure_upload_dir;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Screener v{}", env!("CARGO_PKG_VERSION"));

    // Upload directory
    ensure_upload_dir(&config.upload_dir).await?;
    info!("Uploads are stored in {}", config.upload_dir.display());

    // Embedding model load is blocking (may download on first run)
    let cache_dir = config.fastembed_cache_dir.clone();
    let embedder = tokio::task::spawn_blocking(move || FastEmbedder::try_new(cache_dir)).await??;
    info!("Embedding model loaded (all-MiniLM-L6-v2)");

    info!(
        "Thresholds: approve > {}, partial > {}",
        config.thresholds.approve, config.thresholds.partial
    );

    // Build app state
    let state = AppState {
        config: Arc::new(config.clone()),
        extractor: Arc::new(PdfTextExtractor),
        scorer: Arc::new(EmbeddingScorer::new(Arc::new(embedder))),
        results: ResultsStore::new(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
