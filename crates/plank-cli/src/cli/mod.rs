//! Command-line interface definition.
//!
//! - `plank plan` - resolve and print the build plan for a mode
//! - `plank explain` - show which transform rule applies to a module
//! - `plank manifest` - write the asset manifest after a build
//! - `plank check` - validate the project config for every mode

mod commands;
mod tests;

use clap::Parser;

pub use commands::{CheckArgs, Command, ExplainArgs, ManifestArgs, ModeArgs, PlanArgs, ProjectArgs};

/// Plank - build plan resolver for the front-end asset pipeline
#[derive(Parser, Debug)]
#[command(
    name = "plank",
    version,
    about = "Resolve front-end build plans and emit asset manifests",
    long_about = "Plank resolves the build plan an external bundler executes: transform rules,\n\
                  entry points, output naming and source-map policy for development or\n\
                  production, and writes the manifest that maps entry names to built files."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
