mod analysis;
mod config;
mod errors;
mod extraction;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::catalog::KeywordCatalog;
use crate::analysis::Analyzer;
use crate::config::Config;
use crate::extraction::LocalExtractor;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS checker v{}", env!("CARGO_PKG_VERSION"));

    // Keyword catalog: built-in tables unless a JSON override is configured
    let catalog = match &config.keyword_catalog_path {
        Some(path) => {
            let catalog = KeywordCatalog::from_json_file(path)?;
            info!("Keyword catalog loaded from {}", path.display());
            catalog
        }
        None => KeywordCatalog::default(),
    };
    let analyzer = Analyzer::new(Arc::new(catalog));
    info!(
        "Analyzer ready ({} skill keywords)",
        analyzer.catalog().all_skill_keywords().count()
    );

    let state = AppState {
        config: config.clone(),
        analyzer: Arc::new(analyzer),
        extractor: Arc::new(LocalExtractor::new(config.max_upload_bytes)),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!(
        "Listening on {addr} (max upload {} bytes)",
        config.max_upload_bytes
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
