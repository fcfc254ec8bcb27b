use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::screening::evaluation::Evaluation;

/// One screened résumé.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedResult {
    pub file: String,
    pub similarity_score: f32,
    pub evaluation: Evaluation,
}

/// Process-wide, append-only list of screening results in upload order.
///
/// Cloning shares the underlying list. Entries are never updated or removed;
/// they are lost when the process exits.
#[derive(Debug, Clone, Default)]
pub struct ResultsStore {
    inner: Arc<RwLock<Vec<ProcessedResult>>>,
}

impl ResultsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn append(&self, result: ProcessedResult) {
        self.inner.write().await.push(result);
    }

    /// Copy of every result recorded so far.
    pub async fn snapshot(&self) -> Vec<ProcessedResult> {
        self.inner.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(file: &str, score: f32) -> ProcessedResult {
        ProcessedResult {
            file: file.to_string(),
            similarity_score: score,
            evaluation: Evaluation::Rejected,
        }
    }

    #[tokio::test]
    async fn test_starts_empty() {
        let store = ResultsStore::new();
        assert!(store.is_empty().await);
        assert!(store.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn test_append_preserves_order_and_duplicates() {
        let store = ResultsStore::new();
        store.append(result("a.pdf", 0.1)).await;
        store.append(result("b.pdf", 0.2)).await;
        store.append(result("a.pdf", 0.1)).await;

        let files: Vec<String> = store.snapshot().await.into_iter().map(|r| r.file).collect();
        assert_eq!(files, vec!["a.pdf", "b.pdf", "a.pdf"]);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = ResultsStore::new();
        let handle = store.clone();
        handle.append(result("a.pdf", 0.5)).await;
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_concurrent_appends_are_not_lost() {
        let store = ResultsStore::new();
        let mut tasks = Vec::new();
        for i in 0..50 {
            let store = store.clone();
            tasks.push(tokio::spawn(async move {
                store.append(result(&format!("{i}.pdf"), 0.0)).await;
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }
        assert_eq!(store.len().await, 50);
    }

    #[test]
    fn test_result_json_shape() {
        let value = serde_json::to_value(ProcessedResult {
            file: "cv.pdf".to_string(),
            similarity_score: 0.5,
            evaluation: Evaluation::PartiallyApproved,
        })
        .unwrap();
        assert_eq!(value["file"], "cv.pdf");
        assert_eq!(value["similarity_score"], 0.5);
        assert_eq!(value["evaluation"], "Partially approved");
    }
}
