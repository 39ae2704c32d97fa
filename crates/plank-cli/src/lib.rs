//! Plank CLI - resolve front-end build plans and emit asset manifests.
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - `plan`, `explain`, `manifest` and `check`
//! - [`error`] - CLI error type and miette rendering
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status messages on stderr

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
