//! Shared helpers for commands.

use std::path::{Path, PathBuf};

use plank_config::{BuildPlan, ConfigDiscovery, PlanBuilder};

use crate::cli::{ModeArgs, ProjectArgs};
use crate::error::Result;

pub(crate) fn project_root(project: &ProjectArgs) -> Result<PathBuf> {
    match &project.config_dir {
        Some(dir) if dir.is_absolute() => Ok(dir.clone()),
        Some(dir) => Ok(std::env::current_dir()?.join(dir)),
        None => Ok(std::env::current_dir()?),
    }
}

pub(crate) fn load_builder(project: &ProjectArgs) -> Result<(PathBuf, PlanBuilder)> {
    let root = project_root(project)?;
    let builder = ConfigDiscovery::new(&root).load_builder()?;
    Ok((root, builder))
}

/// Validate the mode, then load the project and resolve the plan. Nothing is
/// written before this succeeds.
pub(crate) fn load_plan(mode: &ModeArgs, project: &ProjectArgs) -> Result<BuildPlan> {
    let ctx = mode.context()?;
    let (_, builder) = load_builder(project)?;
    let plan = builder.build(ctx)?;
    tracing::info!(mode = %plan.mode, entries = plan.entries.len(), "build plan resolved");
    Ok(plan)
}

pub(crate) fn resolve_path(path: &Path, root: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
