//! Plank CLI entry point: argument parsing, logging setup and dispatch.

use clap::Parser;
use miette::Result;
use plank_cli::{cli, commands, error, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Plan(plan_args) => commands::plan_execute(plan_args).await,
        cli::Command::Explain(explain_args) => commands::explain_execute(explain_args),
        cli::Command::Manifest(manifest_args) => commands::manifest_execute(manifest_args).await,
        cli::Command::Check(check_args) => commands::check_execute(check_args),
    };

    result.map_err(error::cli_error_to_miette)
}
