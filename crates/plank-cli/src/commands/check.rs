//! `plank check`: validate the project config without building.

use plank_config::{InvocationContext, Mode};

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::{CliError, Result};
use crate::ui;

pub fn execute(args: CheckArgs) -> Result<()> {
    let (root, builder) = utils::load_builder(&args.project)?;

    for mode in Mode::ALL {
        let plan = builder.build(InvocationContext::new(mode))?;
        ui::success(&format!(
            "{mode}: {} entries, {} -> {}",
            plan.entries.len(),
            plan.output.filename_template.as_str(),
            plan.output.base_dir.display()
        ));
    }

    for (name, entry) in builder.entries().iter() {
        let path = utils::resolve_path(&entry.source, &root);
        if !path.is_file() {
            return Err(CliError::EntryNotFound {
                name: name.to_string(),
                path,
            });
        }
        tracing::debug!(entry = name, path = %path.display(), "entry exists");
    }

    ui::success("Configuration is valid");
    Ok(())
}
