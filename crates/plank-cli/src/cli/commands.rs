use std::path::PathBuf;

use clap::{Args, Subcommand};
use plank_config::{ConfigError, InvocationArgs, InvocationContext};

/// Available Plank subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the build plan for a mode
    ///
    /// Prints the plan handed to the bundler as JSON, or writes it to a file.
    Plan(PlanArgs),

    /// Show which transform rule applies to each module path
    Explain(ExplainArgs),

    /// Write the asset manifest for a finished build
    ///
    /// Lists the files the bundler wrote to the output directory and maps
    /// every entry to its actual filename, content hash included.
    Manifest(ManifestArgs),

    /// Validate the project config for every mode
    ///
    /// Resolves a plan for development and production and checks that every
    /// entry source exists.
    Check(CheckArgs),
}

/// Build mode selection
#[derive(Args, Debug, Clone)]
pub struct ModeArgs {
    /// Build mode: development or production
    ///
    /// Any other value is a configuration error.
    #[arg(long, value_name = "MODE")]
    pub mode: String,
}

impl ModeArgs {
    pub fn context(&self) -> Result<InvocationContext, ConfigError> {
        InvocationContext::from_args(&InvocationArgs::with_mode(self.mode.as_str()))
    }
}

/// Project location
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Directory containing plank.toml (defaults to the current directory)
    #[arg(long = "config-dir", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct PlanArgs {
    #[command(flatten)]
    pub mode: ModeArgs,

    #[command(flatten)]
    pub project: ProjectArgs,

    /// Write the plan to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ExplainArgs {
    #[command(flatten)]
    pub mode: ModeArgs,

    #[command(flatten)]
    pub project: ProjectArgs,

    /// Module paths to look up
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ManifestArgs {
    #[command(flatten)]
    pub mode: ModeArgs,

    #[command(flatten)]
    pub project: ProjectArgs,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}
