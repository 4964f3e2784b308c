//! Error types for the file, configuration, and batch surfaces.
//!
//! Extraction, classification, and scoring never fail; these errors only
//! arise around them (reading inputs, loading config, formatting output,
//! building the worker pool).

use thiserror::Error;

/// Errors raised outside the pure analysis pipeline.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Invalid or missing input (e.g. non-existent path, empty batch).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration value out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Worker pool could not be created.
    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Convenience alias for results with [`AnalyzerError`].
pub type Result<T> = std::result::Result<T, AnalyzerError>;
