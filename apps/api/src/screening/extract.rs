//! Text Extractor: PDF → plain text in page order.
//!
//! `pdf-extract` is CPU-bound and may panic on malformed documents, so every call
//! runs inside `tokio::task::spawn_blocking` and both failure modes surface as
//! `AppError::PdfExtraction`.

use std::path::Path;

use async_trait::async_trait;
use bytes::Bytes;

use crate::errors::AppError;

/// Pluggable text extractor. Carried in `AppState` as `Arc<dyn TextExtractor>`.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, pdf_bytes: Bytes) -> Result<String, AppError>;
}

/// Production extractor backed by `pdf-extract`.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, pdf_bytes: Bytes) -> Result<String, AppError> {
        tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&pdf_bytes)
                .map_err(|e| AppError::PdfExtraction(e.to_string()))
        })
        .await
        .map_err(|e| AppError::PdfExtraction(format!("PDF reader aborted: {e}")))?
    }
}

/// Reads a PDF from disk and returns the text of every page, in page order.
///
/// The upload pipeline extracts from the request bytes instead, since a saved
/// file can be overwritten by a concurrent upload with the same name.
#[allow(dead_code)]
pub async fn extract_text_from_pdf(
    extractor: &dyn TextExtractor,
    path: &Path,
) -> Result<String, AppError> {
    let bytes = tokio::fs::read(path).await?;
    extractor.extract(Bytes::from(bytes)).await
}
