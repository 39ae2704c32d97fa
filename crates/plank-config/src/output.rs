//! Output location and naming.

use std::path::PathBuf;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::policy::CapabilitySet;

pub const NAME_TOKEN: &str = "[name]";
pub const CONTENT_HASH_TOKEN: &str = "[contenthash]";

/// Bundle filename template such as `[name].[contenthash].bundle.js`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilenameTemplate(String);

impl FilenameTemplate {
    pub fn new(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        // Without a name token every entry would write the same file.
        if !template.contains(NAME_TOKEN) {
            return Err(ConfigError::invalid(
                "output.filename",
                format!("template '{template}' must contain {NAME_TOKEN}"),
            ));
        }
        Ok(Self(template))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn has_content_hash(&self) -> bool {
        self.0.contains(CONTENT_HASH_TOKEN)
    }

    pub fn render(&self, name: &str, hash: Option<&str>) -> String {
        let named = self.0.replace(NAME_TOKEN, name);
        match hash {
            Some(hash) => named.replace(CONTENT_HASH_TOKEN, hash),
            None => named,
        }
    }

    /// Regex matching a physical filename written for `name`.
    pub fn matcher(&self, name: &str) -> Regex {
        let mut pattern = String::from("^");
        let mut rest = self.0.as_str();
        while !rest.is_empty() {
            if let Some(tail) = rest.strip_prefix(NAME_TOKEN) {
                pattern.push_str(&regex::escape(name));
                rest = tail;
            } else if let Some(tail) = rest.strip_prefix(CONTENT_HASH_TOKEN) {
                pattern.push_str("[0-9a-f]+");
                rest = tail;
            } else {
                let next = rest
                    .char_indices()
                    .skip(1)
                    .find(|&(_, c)| c == '[')
                    .map_or(rest.len(), |(idx, _)| idx);
                pattern.push_str(&regex::escape(&rest[..next]));
                rest = &rest[next..];
            }
        }
        pattern.push('$');
        // Every literal piece is escaped, so the pattern always compiles.
        Regex::new(&pattern).unwrap_or_else(|err| unreachable!("filename matcher: {err}"))
    }
}

/// Mode-independent output settings supplied by the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_public_path")]
    pub public_path: String,

    /// Remove previous output before the build writes anything.
    #[serde(default = "default_clean")]
    pub clean: bool,

    #[serde(default = "default_library_export")]
    pub library_export: Option<String>,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            public_path: default_public_path(),
            clean: default_clean(),
            library_export: default_library_export(),
        }
    }
}

impl OutputSettings {
    pub fn validate(&self) -> Result<()> {
        if self.dir.as_os_str().is_empty() {
            return Err(ConfigError::invalid("output.dir", "output directory cannot be empty"));
        }
        if !self.public_path.ends_with('/') {
            return Err(ConfigError::invalid(
                "output.public_path",
                format!("'{}' must end with '/'", self.public_path),
            ));
        }
        Ok(())
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_public_path() -> String {
    "/static/js/".to_string()
}

fn default_clean() -> bool {
    true
}

fn default_library_export() -> Option<String> {
    Some("default".to_string())
}

/// Resolved output policy for one build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputPolicy {
    pub base_dir: PathBuf,
    pub public_path: String,
    pub filename_template: FilenameTemplate,
    pub clean: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library_export: Option<String>,
    pub environment: CapabilitySet,
}
