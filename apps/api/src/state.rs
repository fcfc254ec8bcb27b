use std::sync::Arc;

use crate::config::Config;
use crate::screening::extract::TextExtractor;
use crate::screening::similarity::SimilarityScorer;
use crate::screening::store::ResultsStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Pluggable PDF text extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
    /// Pluggable similarity scorer. Default: EmbeddingScorer over FastEmbedder.
    pub scorer: Arc<dyn SimilarityScorer>,
    /// Append-only screening results, shared by every request.
    pub results: ResultsStore,
}
