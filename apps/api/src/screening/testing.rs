//! Test doubles shared by the pipeline and router tests.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use crate::config::Config;
use crate::errors::AppError;
use crate::screening::extract::TextExtractor;
use crate::screening::similarity::SimilarityScorer;
use crate::screening::store::ResultsStore;
use crate::state::AppState;

/// Treats the uploaded bytes as the document text; "corrupt" fails extraction.
pub struct Utf8Extractor;

#[async_trait]
impl TextExtractor for Utf8Extractor {
    async fn extract(&self, pdf_bytes: Bytes) -> Result<String, AppError> {
        let text = String::from_utf8_lossy(&pdf_bytes).to_string();
        if text == "corrupt" {
            return Err(AppError::PdfExtraction("invalid xref table".to_string()));
        }
        Ok(text)
    }
}

/// Reads the score from the first line of the résumé text.
pub struct FirstLineScorer;

#[async_trait]
impl SimilarityScorer for FirstLineScorer {
    async fn score(&self, _job: &str, resume_text: &str) -> Result<f32, AppError> {
        resume_text
            .lines()
            .next()
            .and_then(|line| line.trim().parse::<f32>().ok())
            .ok_or_else(|| AppError::Embedding("no score line".to_string()))
    }
}

/// Default config with uploads written to `upload_dir`.
pub fn test_state(upload_dir: &Path) -> AppState {
    let vars: HashMap<&str, String> =
        HashMap::from([("UPLOAD_DIR", upload_dir.to_string_lossy().to_string())]);
    let config = Config::from_lookup(|key| vars.get(key).cloned()).unwrap();

    AppState {
        config: Arc::new(config),
        extractor: Arc::new(Utf8Extractor),
        scorer: Arc::new(FirstLineScorer),
        results: ResultsStore::new(),
    }
}
