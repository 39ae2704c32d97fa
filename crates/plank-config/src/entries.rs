//! Named entry points, one independently loadable bundle each.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPoint {
    pub source: PathBuf,
    /// Whether the entry is listed in the emitted manifest.
    #[serde(default = "default_true")]
    pub manifest: bool,
}

impl EntryPoint {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            manifest: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Entry set keyed by logical name. Insertion order is kept for stable
/// output only; it carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EntrySet {
    entries: IndexMap<String, EntryPoint>,
}

impl EntrySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The two bundles the frontend ships.
    pub fn standard() -> Self {
        let mut set = Self::new();
        set.entries.insert(
            "frontend".to_string(),
            EntryPoint::new("./lib/frontend/entry.tsx"),
        );
        set.entries
            .insert("stats".to_string(), EntryPoint::new("./lib/stats/entry.tsx"));
        set
    }

    pub fn from_pairs<N, P>(pairs: impl IntoIterator<Item = (N, P)>) -> Result<Self>
    where
        N: Into<String>,
        P: Into<PathBuf>,
    {
        let mut set = Self::new();
        for (name, source) in pairs {
            set.insert(name, EntryPoint::new(source))?;
        }
        Ok(set)
    }

    /// Add an entry. Re-declaring a name identically is a no-op; re-declaring
    /// it with another source or manifest flag is an error, never an overwrite.
    pub fn insert(&mut self, name: impl Into<String>, entry: EntryPoint) -> Result<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ConfigError::invalid(
                "entries",
                "entry names cannot be empty",
            ));
        }
        if name.contains(['/', '\\']) {
            return Err(ConfigError::invalid(
                format!("entries.{name}"),
                "entry names cannot contain path separators",
            ));
        }
        if entry.source.as_os_str().is_empty() {
            return Err(ConfigError::invalid(
                format!("entries.{name}"),
                "entry source path cannot be empty",
            ));
        }

        match self.entries.get(&name) {
            Some(existing) if existing == &entry => {
                tracing::debug!(entry = %name, "entry declared twice identically");
                Ok(())
            }
            Some(existing) => Err(ConfigError::DuplicateEntry {
                name,
                existing: existing.source.clone(),
                conflicting: entry.source,
            }),
            None => {
                self.entries.insert(name, entry);
                Ok(())
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&EntryPoint> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &EntryPoint)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn sources(&self) -> impl Iterator<Item = &Path> {
        self.entries.values().map(|entry| entry.source.as_path())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
