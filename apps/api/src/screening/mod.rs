// Résumé screening: PDF text extraction, section bucketing, NLP filtering,
// embedding similarity against the job description, and threshold evaluation.
// Model and PDF work is CPU-bound and runs inside tokio::task::spawn_blocking.

pub mod evaluation;
pub mod extract;
pub mod handlers;
pub mod job_description;
pub mod nlp;
pub mod pipeline;
pub mod sections;
pub mod similarity;
pub mod store;
#[cfg(test)]
pub(crate) mod testing;
pub mod uploads;
