//! CLI error type and its rendering as miette reports.
//!
//! Configuration errors are raised while planning, before anything is
//! written, and are kept distinct from manifest and I/O failures so the
//! message says which stage failed.

use std::path::{Path, PathBuf};

use miette::Report;
use plank_config::{ConfigError, ManifestError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    #[error("Entry '{name}' not found: {}", .path.display())]
    EntryNotFound { name: String, path: PathBuf },

    #[error("Output directory not found: {}", .0.display())]
    OutputNotFound(PathBuf),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Attach a path to I/O failures.
pub trait ResultExt<T> {
    fn with_path(self, path: impl AsRef<Path>) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }
}

impl CliError {
    fn hint(&self) -> Option<String> {
        let hint = match self {
            CliError::Config(ConfigError::UnknownMode { .. } | ConfigError::MissingMode) => {
                "Pass --mode=development or --mode=production".to_string()
            }
            CliError::Config(ConfigError::DuplicateEntry { name, .. }) => {
                format!("Give each [[entries]] table in plank.toml a unique name; '{name}' is used twice")
            }
            CliError::Config(ConfigError::NoEntries) => {
                "Declare at least one [[entries]] table in plank.toml".to_string()
            }
            CliError::Manifest(ManifestError::MissingOutput { .. }) => {
                "Run the bundler for the same --mode before writing the manifest".to_string()
            }
            CliError::Manifest(ManifestError::AmbiguousOutput { .. }) => {
                "Stale bundles are present; build with output cleaning enabled".to_string()
            }
            CliError::EntryNotFound { .. } => {
                "Check the entry source paths in plank.toml".to_string()
            }
            CliError::OutputNotFound(_) => {
                "Run the bundler first, or check output.dir in plank.toml".to_string()
            }
            _ => return None,
        };
        Some(hint)
    }
}

/// Convert a CLI error into a miette report.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err.hint() {
        Some(hint) => miette::miette!(help = hint, "{}", err),
        None => miette::miette!("{}", err),
    }
}
