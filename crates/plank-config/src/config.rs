//! Project-level build configuration.
//!
//! Everything here is mode-independent. Mode-dependent values live in
//! [`ModePolicy`](crate::policy::ModePolicy) and are applied by the plan
//! builder.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entries::{EntryPoint, EntrySet};
use crate::error::{ConfigError, Result};
use crate::manifest::ManifestSpec;
use crate::output::OutputSettings;
use crate::plan::PlanBuilder;
use crate::rules::RuleTable;
use crate::watch::WatchSettings;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Entry declarations. `None` means the standard entry set.
    ///
    /// Declared as a list rather than a table so a repeated name reaches
    /// the uniqueness check instead of being collapsed by the parser.
    #[serde(default)]
    pub entries: Option<Vec<EntryDecl>>,

    #[serde(default)]
    pub output: OutputSettings,

    #[serde(default)]
    pub manifest: ManifestSpec,

    #[serde(default)]
    pub watch: WatchSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDecl {
    pub name: String,
    pub source: PathBuf,
    #[serde(default = "default_true")]
    pub manifest: bool,
}

fn default_true() -> bool {
    true
}

impl ProjectConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use plank_config::ProjectConfig;
    /// use serde_json::json;
    ///
    /// let config = ProjectConfig::from_value(json!({
    ///     "entries": [{ "name": "frontend", "source": "./lib/frontend/entry.tsx" }],
    ///     "output": { "dir": "build" }
    /// }))
    /// .unwrap();
    /// assert_eq!(config.output.public_path, "/static/js/");
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ConfigError::InvalidValue {
            field: "toml".to_string(),
            hint: Some(format!("Invalid TOML: {e}")),
        })
    }

    pub fn entry_set(&self) -> Result<EntrySet> {
        let Some(decls) = &self.entries else {
            return Ok(EntrySet::standard());
        };

        let mut set = EntrySet::new();
        for decl in decls {
            set.insert(
                decl.name.clone(),
                EntryPoint {
                    source: decl.source.clone(),
                    manifest: decl.manifest,
                },
            )?;
        }
        Ok(set)
    }

    /// Plan builder over the standard rule table.
    pub fn into_builder(self) -> Result<PlanBuilder> {
        self.into_builder_with_rules(RuleTable::standard())
    }

    pub fn into_builder_with_rules(self, rules: RuleTable) -> Result<PlanBuilder> {
        let entries = self.entry_set()?;
        Ok(PlanBuilder::new(rules, entries)
            .with_output(self.output)
            .with_watch(self.watch)
            .with_manifest(self.manifest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_entries_means_standard() {
        let config = ProjectConfig::from_value(json!({})).unwrap();
        assert_eq!(config.entry_set().unwrap(), EntrySet::standard());
    }

    #[test]
    fn duplicate_entry_declarations_rejected() {
        let config = ProjectConfig::from_value(json!({
            "entries": [
                { "name": "frontend", "source": "a.tsx" },
                { "name": "frontend", "source": "b.tsx" }
            ]
        }))
        .unwrap();
        assert!(matches!(
            config.into_builder().unwrap_err(),
            ConfigError::DuplicateEntry { .. }
        ));
    }

    #[test]
    fn repeated_entry_cannot_change_manifest_flag() {
        let config = ProjectConfig::from_value(json!({
            "entries": [
                { "name": "frontend", "source": "a.tsx" },
                { "name": "frontend", "source": "a.tsx", "manifest": false }
            ]
        }))
        .unwrap();
        assert!(matches!(
            config.entry_set().unwrap_err(),
            ConfigError::DuplicateEntry { ref name, .. } if name == "frontend"
        ));
    }

    #[test]
    fn identical_repeat_is_accepted() {
        let config = ProjectConfig::from_value(json!({
            "entries": [
                { "name": "frontend", "source": "a.tsx" },
                { "name": "frontend", "source": "a.tsx", "manifest": true }
            ]
        }))
        .unwrap();
        assert_eq!(config.entry_set().unwrap().len(), 1);
    }

    #[test]
    fn manifest_opt_out_is_kept() {
        let config = ProjectConfig::from_toml_str(
            r#"
[[entries]]
name = "frontend"
source = "./lib/frontend/entry.tsx"

[[entries]]
name = "worker"
source = "./lib/worker.ts"
manifest = false
"#,
        )
        .unwrap();
        let set = config.entry_set().unwrap();
        assert!(set.get("frontend").unwrap().manifest);
        assert!(!set.get("worker").unwrap().manifest);
    }

    #[test]
    fn wrong_types_are_reported() {
        let err = ProjectConfig::from_value(json!({ "output": { "clean": "yes" } })).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "config"));
    }
}
