//! Axum route handlers for the screening API.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::screening::pipeline::{analyze_upload, screen_upload, ResumeAnalysis, UploadedFile};
use crate::screening::store::ProcessedResult;
use crate::state::AppState;

/// Multipart field carrying résumé files. Repeatable.
pub const FILES_FIELD: &str = "files";

pub const ROOT_POST_MESSAGE: &str = "POST request received at root.";
pub const UPLOAD_MESSAGE: &str = "Files uploaded and processed!";
pub const RESULTS_MESSAGE: &str = "Analysis results.";
pub const NO_RESULTS_MESSAGE: &str = "No resume has been processed yet.";

const INDEX_HTML: &str = include_str!("../../static/index.html");
const SCRIPT_JS: &str = include_str!("../../static/script.js");

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ResultsResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<ProcessedResult>>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analyses: Vec<ResumeAnalysis>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
pub async fn handle_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// POST /
///
/// Acknowledges the request and does nothing else.
pub async fn handle_index_post() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: ROOT_POST_MESSAGE,
    })
}

/// GET /static/script.js
pub async fn handle_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        SCRIPT_JS,
    )
}

/// POST /upload
///
/// Screens every PDF under the `files` field in order. Non-PDF files are skipped
/// silently; the acknowledgement is the same however many files were processed.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let uploads = collect_files(multipart).await?;

    let mut processed = 0usize;
    for upload in &uploads {
        if screen_upload(&state, upload).await?.is_some() {
            processed += 1;
        }
    }

    let total = state.results.len().await;
    info!(
        received = uploads.len(),
        processed,
        skipped = uploads.len() - processed,
        total,
        "Upload batch complete"
    );

    Ok(Json(MessageResponse {
        message: UPLOAD_MESSAGE,
    }))
}

/// GET /result
///
/// Every result recorded since startup, in upload order.
pub async fn handle_result(State(state): State<AppState>) -> Json<ResultsResponse> {
    let results = state.results.snapshot().await;
    if results.is_empty() {
        return Json(ResultsResponse {
            message: NO_RESULTS_MESSAGE,
            results: None,
        });
    }
    Json(ResultsResponse {
        message: RESULTS_MESSAGE,
        results: Some(results),
    })
}

/// POST /analyze
///
/// Section buckets, filtered tokens and named entities for each uploaded PDF.
/// Read-only: nothing is saved and the results list is untouched.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let uploads = collect_files(multipart).await?;

    let mut analyses = Vec::with_capacity(uploads.len());
    for upload in uploads {
        if let Some(analysis) = analyze_upload(&state, upload).await? {
            analyses.push(analysis);
        }
    }

    Ok(Json(AnalyzeResponse { analyses }))
}

/// Reads every `files` field that carries a non-empty filename, in request order.
///
/// A request without a multipart body is an empty batch.
async fn collect_files(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Vec<UploadedFile>, AppError> {
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(MultipartRejection::InvalidBoundary(_)) => return Ok(Vec::new()),
        Err(rejection) => return Err(AppError::Validation(rejection.body_text())),
    };

    let mut files = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILES_FIELD) {
            continue;
        }
        let filename = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => continue,
        };
        let content = field.bytes().await?;
        files.push(UploadedFile { filename, content });
    }
    Ok(files)
}
