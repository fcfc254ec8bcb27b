use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};

use crate::screening::evaluation::Thresholds;
use crate::screening::job_description::DEFAULT_JOB_DESCRIPTION;

/// Application configuration loaded from environment variables.
/// Every variable has a default; startup fails only on malformed values.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub upload_dir: PathBuf,
    pub job_description: String,
    pub thresholds: Thresholds,
    pub max_upload_bytes: usize,
    pub fastembed_cache_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let job_description = match lookup("JOB_DESCRIPTION_FILE") {
            Some(path) => std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read JOB_DESCRIPTION_FILE '{path}'"))?,
            None => DEFAULT_JOB_DESCRIPTION.to_string(),
        };
        if job_description.trim().is_empty() {
            bail!("Job description must not be empty");
        }

        let defaults = Thresholds::default();
        let thresholds = Thresholds {
            approve: parse_threshold(&lookup, "APPROVE_THRESHOLD", defaults.approve)?,
            partial: parse_threshold(&lookup, "PARTIAL_THRESHOLD", defaults.partial)?,
        };
        if thresholds.partial >= thresholds.approve {
            bail!(
                "PARTIAL_THRESHOLD ({}) must be lower than APPROVE_THRESHOLD ({})",
                thresholds.partial,
                thresholds.approve
            );
        }

        Ok(Config {
            port: parse_or(&lookup, "PORT", 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            upload_dir: lookup("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("uploads")),
            job_description,
            thresholds,
            max_upload_bytes: parse_or(&lookup, "MAX_UPLOAD_BYTES", 16 * 1024 * 1024)?,
            fastembed_cache_dir: lookup("FASTEMBED_CACHE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".fastembed_cache")),
        })
    }
}

/// Cosine scores live in [-1, 1]; a threshold outside that range (or NaN) can never be met.
fn parse_threshold<F>(lookup: &F, key: &str, default: f32) -> Result<f32>
where
    F: Fn(&str) -> Option<String>,
{
    let value = parse_or(lookup, key, default)?;
    if !value.is_finite() || !(-1.0..=1.0).contains(&value) {
        return Err(anyhow!("must be a finite number between -1 and 1, got {value}"))
            .with_context(|| format!("Environment variable '{key}' is out of range"));
    }
    Ok(value)
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}
