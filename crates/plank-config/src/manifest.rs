//! Manifest emission contract.
//!
//! After the engine has written every output file of a successful build, one
//! manifest maps each opted-in entry to the file that was actually written,
//! content hash included. Consumers resolve asset URLs through it instead of
//! hardcoding hashed names.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ManifestError, Result};
use crate::plan::BuildPlan;

/// Where the manifest goes, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestSpec {
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for ManifestSpec {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
        }
    }
}

impl ManifestSpec {
    pub fn validate(&self) -> Result<()> {
        let name = self.file_name.trim();
        if name.is_empty() || name.contains(['/', '\\']) {
            return Err(ConfigError::invalid(
                "manifest.file_name",
                format!("'{}' must be a plain file name", self.file_name),
            ));
        }
        Ok(())
    }
}

fn default_file_name() -> String {
    "manifest.json".to_string()
}

/// Logical asset name to public URL of the written file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    assets: BTreeMap<String, String>,
}

impl Manifest {
    /// Build the manifest from the files the engine wrote.
    ///
    /// Fails without producing anything when an opted-in entry has no
    /// matching file or more than one.
    pub fn collect<P: AsRef<Path>>(
        plan: &BuildPlan,
        written: &[P],
    ) -> std::result::Result<Self, ManifestError> {
        let file_names: Vec<String> = written
            .iter()
            .filter_map(|path| path.as_ref().file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();

        let template = &plan.output.filename_template;
        let mut assets = BTreeMap::new();

        for (name, entry) in plan.entries.iter() {
            if !entry.manifest {
                continue;
            }

            let matcher = template.matcher(name);
            let mut candidates: Vec<&String> =
                file_names.iter().filter(|f| matcher.is_match(f)).collect();
            candidates.sort();
            candidates.dedup();

            let file = match candidates.as_slice() {
                [] => {
                    return Err(ManifestError::MissingOutput {
                        entry: name.to_string(),
                    });
                }
                [file] => *file,
                many => {
                    return Err(ManifestError::AmbiguousOutput {
                        entry: name.to_string(),
                        candidates: many.iter().map(|f| f.to_string()).collect(),
                    });
                }
            };

            tracing::debug!(entry = %name, file = %file, "manifest entry");
            assets.insert(
                format!("{name}.js"),
                format!("{}{}", plan.output.public_path, file),
            );
        }

        Ok(Self { assets })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.assets.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.assets.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn to_json(&self) -> std::result::Result<String, ManifestError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write atomically: a temporary sibling file is renamed over `path`, so
    /// readers never see a truncated manifest.
    pub fn write(&self, path: impl AsRef<Path>) -> std::result::Result<PathBuf, ManifestError> {
        let path = path.as_ref();
        let json = self.to_json()?;
        let temp_path = Self::temp_path(path);
        let written = fs::write(&temp_path, json).and_then(|()| fs::rename(&temp_path, path));
        if let Err(err) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(err.into());
        }
        Ok(path.to_path_buf())
    }

    /// Staging file used while writing the manifest at `path`.
    pub fn temp_path(path: &Path) -> PathBuf {
        path.with_extension("tmp")
    }

    pub fn read(path: impl AsRef<Path>) -> std::result::Result<Self, ManifestError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
