//! Similarity Scorer: sentence embeddings + cosine similarity.
//!
//! Two seams:
//! - `Embedder` turns texts into vectors (sync, CPU-bound). Default: `FastEmbedder`
//!   (all-MiniLM-L6-v2 via fastembed).
//! - `SimilarityScorer` compares a job description with a résumé. Default:
//!   `EmbeddingScorer`, which runs the embedder on the blocking pool.
//!
//! `AppState` holds an `Arc<dyn SimilarityScorer>`.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use tracing::info;

use crate::errors::AppError;

pub trait Embedder: Send + Sync {
    /// Returns one vector per input text, in input order.
    fn embed(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>, AppError>;
}

#[async_trait]
pub trait SimilarityScorer: Send + Sync {
    async fn score(&self, job_description: &str, resume_text: &str) -> Result<f32, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// FastEmbedder
// ────────────────────────────────────────────────────────────────────────────

pub struct FastEmbedder {
    model: TextEmbedding,
}

impl FastEmbedder {
    /// Loads all-MiniLM-L6-v2, downloading it into `cache_dir` on first use.
    pub fn try_new(cache_dir: PathBuf) -> anyhow::Result<Self> {
        info!("Loading embedding model into {}", cache_dir.display());
        let model = TextEmbedding::try_new(
            InitOptions::new(EmbeddingModel::AllMiniLML6V2)
                .with_cache_dir(cache_dir)
                .with_show_download_progress(true),
        )?;
        Ok(Self { model })
    }
}

impl Embedder for FastEmbedder {
    fn embed(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>, AppError> {
        self.model
            .embed(texts, None)
            .map_err(|e| AppError::Embedding(e.to_string()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// EmbeddingScorer
// ────────────────────────────────────────────────────────────────────────────

pub struct EmbeddingScorer {
    embedder: Arc<dyn Embedder>,
}

impl EmbeddingScorer {
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        Self { embedder }
    }
}

#[async_trait]
impl SimilarityScorer for EmbeddingScorer {
    async fn score(&self, job_description: &str, resume_text: &str) -> Result<f32, AppError> {
        if job_description.trim().is_empty() {
            return Err(AppError::Validation(
                "job description cannot be empty".to_string(),
            ));
        }
        if resume_text.trim().is_empty() {
            return Err(AppError::Validation(
                "resume contains no extractable text".to_string(),
            ));
        }

        let embedder = Arc::clone(&self.embedder);
        let job_description = job_description.to_string();
        let resume_text = resume_text.to_string();

        // Each text is encoded independently.
        let (job_vec, resume_vec) = tokio::task::spawn_blocking(move || {
            let job_vec = first_embedding(embedder.embed(vec![job_description])?)?;
            let resume_vec = first_embedding(embedder.embed(vec![resume_text])?)?;
            Ok::<_, AppError>((job_vec, resume_vec))
        })
        .await
        .map_err(|e| AppError::Embedding(format!("embedding task failed: {e}")))??;

        Ok(cosine_similarity(&job_vec, &resume_vec))
    }
}

fn first_embedding(embeddings: Vec<Vec<f32>>) -> Result<Vec<f32>, AppError> {
    embeddings
        .into_iter()
        .next()
        .ok_or_else(|| AppError::Embedding("model returned no embedding".to_string()))
}

/// Cosine similarity in [-1, 1]. Returns 0.0 for zero-norm or mismatched vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).clamp(-1.0, 1.0)
}
