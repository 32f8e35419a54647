use std::sync::Arc;

use crate::analysis::Analyzer;
use crate::config::Config;
use crate::extraction::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Immutable after startup; one instance serves every request.
    pub analyzer: Arc<Analyzer>,
    /// Pluggable extraction backend. Default: LocalExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}
