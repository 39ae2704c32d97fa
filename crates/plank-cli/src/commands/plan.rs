//! `plank plan`: resolve the build plan and print or write it as JSON.

use crate::cli::PlanArgs;
use crate::commands::utils;
use crate::error::{Result, ResultExt};
use crate::ui;

pub async fn execute(args: PlanArgs) -> Result<()> {
    let plan = utils::load_plan(&args.mode, &args.project)?;
    let json = serde_json::to_string_pretty(&plan)?;

    match args.out {
        Some(path) => {
            tokio::fs::write(&path, format!("{json}\n"))
                .await
                .with_path(&path)?;
            ui::success(&format!(
                "Wrote {} plan to {}",
                plan.mode,
                path.display()
            ));
        }
        None => println!("{json}"),
    }

    Ok(())
}
