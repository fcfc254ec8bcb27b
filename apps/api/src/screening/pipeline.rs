//! Screening pipeline: save → extract → score → evaluate → record.

use bytes::Bytes;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::screening::evaluation::evaluate;
use crate::screening::nlp::{analyze_text, TextAnalysis};
use crate::screening::sections::{bucket_lines, SectionBuckets};
use crate::screening::store::ProcessedResult;
use crate::screening::uploads::{is_allowed, save_upload};
use crate::state::AppState;

/// A file pulled from a multipart request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub content: Bytes,
}

/// Screens one upload and appends the result to the shared store.
///
/// Returns `Ok(None)` when the file is skipped (not a PDF). Extraction and
/// scoring failures propagate; nothing is recorded for the failing file.
pub async fn screen_upload(
    state: &AppState,
    upload: &UploadedFile,
) -> Result<Option<ProcessedResult>, AppError> {
    if !is_allowed(&upload.filename) {
        debug!(file = %upload.filename, "Skipping non-PDF upload");
        return Ok(None);
    }

    save_upload(&state.config.upload_dir, &upload.filename, &upload.content).await?;
    // Same-named uploads overwrite each other on disk; score the bytes this request sent.
    let text = state.extractor.extract(upload.content.clone()).await?;

    let similarity_score = if text.trim().is_empty() {
        // Image-only PDFs carry no text to embed.
        warn!(file = %upload.filename, "No extractable text; scoring as 0.0");
        0.0
    } else {
        state
            .scorer
            .score(&state.config.job_description, &text)
            .await?
    };
    let evaluation = evaluate(similarity_score, &state.config.thresholds);

    info!(
        file = %upload.filename,
        score = similarity_score,
        evaluation = %evaluation,
        "Resume screened"
    );

    let result = ProcessedResult {
        file: upload.filename.clone(),
        similarity_score,
        evaluation,
    };
    state.results.append(result.clone()).await;
    Ok(Some(result))
}

/// Section buckets and NLP output for one résumé. Not recorded anywhere.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeAnalysis {
    pub file: String,
    pub sections: SectionBuckets,
    pub analysis: TextAnalysis,
}

/// Extracts and analyses one upload without saving it or touching the store.
pub async fn analyze_upload(
    state: &AppState,
    upload: UploadedFile,
) -> Result<Option<ResumeAnalysis>, AppError> {
    if !is_allowed(&upload.filename) {
        debug!(file = %upload.filename, "Skipping non-PDF upload");
        return Ok(None);
    }

    let text = state.extractor.extract(upload.content).await?;
    let sections = bucket_lines(&text);
    let analysis = analyze_text(&text);
    debug!(
        file = %upload.filename,
        section_lines = sections.total_lines(),
        entities = analysis.named_entities.len(),
        "Resume analysed"
    );

    Ok(Some(ResumeAnalysis {
        file: upload.filename,
        sections,
        analysis,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screening::testing::test_state;

    fn upload(filename: &str, content: &'static str) -> UploadedFile {
        UploadedFile {
            filename: filename.to_string(),
            content: Bytes::from_static(content.as_bytes()),
        }
    }

    #[tokio::test]
    async fn test_screen_upload_records_result() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());

        let result = screen_upload(&state, &upload("cv.pdf", "0.9")).await.unwrap();
        assert_eq!(result.unwrap().evaluation.label(), "Approved");
        assert_eq!(state.results.len().await, 1);
        assert!(dir.path().join("cv.pdf").exists());
    }

    #[tokio::test]
    async fn test_screen_upload_skips_non_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());

        let result = screen_upload(&state, &upload("cv.docx", "0.9")).await.unwrap();
        assert!(result.is_none());
        assert!(state.results.is_empty().await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_same_name_uploads_score_their_own_content() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());
        let high = upload("cv.pdf", "0.9");
        let low = upload("cv.pdf", "0.1");

        for _ in 0..50 {
            let (a, b) = tokio::join!(
                tokio::spawn({
                    let state = state.clone();
                    let high = high.clone();
                    async move { screen_upload(&state, &high).await }
                }),
                tokio::spawn({
                    let state = state.clone();
                    let low = low.clone();
                    async move { screen_upload(&state, &low).await }
                }),
            );
            let a = a.unwrap().unwrap().unwrap();
            let b = b.unwrap().unwrap().unwrap();
            assert!((a.similarity_score - 0.9).abs() < 1e-6, "Score was {}", a.similarity_score);
            assert!((b.similarity_score - 0.1).abs() < 1e-6, "Score was {}", b.similarity_score);
        }
        assert_eq!(state.results.len().await, 100);
    }
}
