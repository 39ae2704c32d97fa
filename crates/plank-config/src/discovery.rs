//! File-based config discovery for CLI use
//!
//! Looks for `plank.toml` in a project root and layers `PLANK_`-prefixed
//! environment variables over it.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Toml};

use crate::config::ProjectConfig;
use crate::error::{ConfigError, Result};
use crate::plan::PlanBuilder;

pub const CONFIG_FILE: &str = "plank.toml";
pub const ENV_PREFIX: &str = "PLANK_";

/// File-based configuration discovery
///
/// # Example
///
/// ```no_run
/// use plank_config::{ConfigDiscovery, InvocationContext, Mode};
///
/// let builder = ConfigDiscovery::new(".").load_builder().unwrap();
/// let plan = builder.build(InvocationContext::new(Mode::Production)).unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn find(&self) -> Option<PathBuf> {
        let path = self.root.join(CONFIG_FILE);
        path.is_file().then_some(path)
    }

    /// Load the project config. Without a config file the defaults apply,
    /// still subject to environment overrides.
    ///
    /// A relative output directory is resolved against the root.
    pub fn load(&self) -> Result<ProjectConfig> {
        let mut figment = Figment::new();
        match self.find() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading project config");
                figment = figment.merge(Toml::file(path));
            }
            None => tracing::debug!(root = %self.root.display(), "no {CONFIG_FILE}, using defaults"),
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let mut config: ProjectConfig = figment
            .extract()
            .map_err(|e| ConfigError::Load(e.to_string()))?;

        if config.output.dir.is_relative() {
            config.output.dir = self.root.join(&config.output.dir);
        }
        Ok(config)
    }

    pub fn load_builder(&self) -> Result<PlanBuilder> {
        self.load()?.into_builder()
    }
}

/// Discover and load the builder from the current directory.
pub fn discover() -> Result<PlanBuilder> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(root).load_builder()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn find_returns_none_when_no_config() {
        let dir = TempDir::new().unwrap();
        assert!(ConfigDiscovery::new(dir.path()).find().is_none());
    }

    #[test]
    fn find_discovers_toml_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "[output]\ndir = \"build\"\n").unwrap();
        assert_eq!(ConfigDiscovery::new(dir.path()).find().unwrap(), config_path);
    }

    #[test]
    fn output_dir_resolved_against_root() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[output]\ndir = \"build\"\n").unwrap();
        let config = ConfigDiscovery::new(dir.path()).load().unwrap();
        assert_eq!(config.output.dir, dir.path().join("build"));
    }
}
