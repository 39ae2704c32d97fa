//! Error types for plan resolution, config loading and manifest emission.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;

/// Configuration errors. All of these are raised while planning, before any
/// file is written.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unrecognized mode '{value}' (expected 'development' or 'production')")]
    UnknownMode { value: String },

    #[error("no mode given (expected 'development' or 'production')")]
    MissingMode,

    #[error("no entries specified")]
    NoEntries,

    #[error(
        "entry '{name}' declared twice with conflicting settings (sources {} and {})",
        .existing.display(),
        .conflicting.display()
    )]
    DuplicateEntry {
        name: String,
        existing: PathBuf,
        conflicting: PathBuf,
    },

    #[error("transform rule '{name}' declared twice")]
    DuplicateRule { name: String },

    #[error("invalid pattern in rule '{rule}': {message}")]
    InvalidPattern { rule: String, message: String },

    #[error("invalid config value for '{field}'{}", .hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    #[error("failed to load config: {0}")]
    Load(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    pub(crate) fn invalid(field: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            hint: Some(hint.into()),
        }
    }
}

/// Errors raised while turning written output into a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("no output file found for entry '{entry}'")]
    MissingOutput { entry: String },

    #[error("entry '{entry}' matches several output files: {}", .candidates.join(", "))]
    AmbiguousOutput {
        entry: String,
        candidates: Vec<String>,
    },

    #[error("manifest is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
