//! `plank manifest`: map entries to the files the bundler actually wrote.
//!
//! Run after a successful build. The manifest is written only when every
//! opted-in entry resolves to exactly one output file.

use std::path::{Path, PathBuf};

use plank_config::{BuildPlan, Manifest};

use crate::cli::ManifestArgs;
use crate::commands::utils;
use crate::error::{CliError, Result, ResultExt};
use crate::ui;

pub async fn execute(args: ManifestArgs) -> Result<()> {
    let plan = utils::load_plan(&args.mode, &args.project)?;
    let out_dir = &plan.output.base_dir;

    if !tokio::fs::try_exists(out_dir).await.with_path(out_dir)? {
        return Err(CliError::OutputNotFound(out_dir.clone()));
    }

    let written = list_files(out_dir).await?;
    tracing::debug!(files = written.len(), dir = %out_dir.display(), "scanned output");

    let manifest = Manifest::collect(&plan, &written)?;
    for stray in unclaimed_bundles(&plan, &written) {
        ui::warning(&format!(
            "{} in {} belongs to no entry (stale output?)",
            stray,
            out_dir.display()
        ));
    }

    let path = plan.manifest_path();
    write_atomic(&path, manifest.to_json()?).await?;

    for (name, url) in manifest.iter() {
        ui::info(&format!("{name} -> {url}"));
    }
    ui::success(&format!(
        "Wrote manifest with {} entries to {}",
        manifest.len(),
        path.display()
    ));
    Ok(())
}

/// Temp file plus rename, so a failed write never leaves a truncated manifest.
async fn write_atomic(path: &Path, contents: String) -> Result<()> {
    let temp_path = Manifest::temp_path(path);
    if let Err(err) = tokio::fs::write(&temp_path, contents).await {
        return Err::<(), _>(err).with_path(&temp_path);
    }
    if let Err(err) = tokio::fs::rename(&temp_path, path).await {
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err::<(), _>(err).with_path(path);
    }
    Ok(())
}

/// Script bundles in the output directory that no declared entry produced.
fn unclaimed_bundles(plan: &BuildPlan, written: &[PathBuf]) -> Vec<String> {
    let matchers: Vec<_> = plan
        .entries
        .iter()
        .map(|(name, _)| plan.output.filename_template.matcher(name))
        .collect();

    written
        .iter()
        .filter_map(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".js"))
        .filter(|name| !matchers.iter().any(|re| re.is_match(name)))
        .collect()
}

async fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut entries = tokio::fs::read_dir(dir).await.with_path(dir)?;
    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_file() {
            files.push(entry.path());
        }
    }
    Ok(files)
}
