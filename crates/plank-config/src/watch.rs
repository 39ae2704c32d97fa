//! File-watch exclusions.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::rules::DEPENDENCY_DIR;

/// Extra watch exclusions declared by the project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchSettings {
    #[serde(default)]
    pub ignored: Vec<String>,
}

/// Directories the watcher ignores. Always contains the dependency directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WatchPolicy {
    pub ignored: Vec<String>,
}

impl WatchPolicy {
    pub fn new(extra: &WatchSettings) -> Self {
        let mut ignored = vec![format!("/{DEPENDENCY_DIR}/")];
        for pattern in &extra.ignored {
            let pattern = pattern.trim();
            if !pattern.is_empty() && !ignored.iter().any(|p| p == pattern) {
                ignored.push(pattern.to_string());
            }
        }
        Self { ignored }
    }

    /// True when the path contains any ignored pattern as a run of whole
    /// components, e.g. `/lib/generated/` matches `lib/generated/x.ts`.
    pub fn is_ignored(&self, path: &Path) -> bool {
        let normalized = path.to_string_lossy().replace('\\', "/");
        let wrapped = format!("/{}/", normalized.trim_matches('/'));
        self.ignored.iter().any(|pattern| {
            let segments = pattern.trim_matches('/');
            !segments.is_empty() && wrapped.contains(&format!("/{segments}/"))
        })
    }
}

impl Default for WatchPolicy {
    fn default() -> Self {
        Self::new(&WatchSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dependency_dir_always_ignored() {
        let policy = WatchPolicy::default();
        assert_eq!(policy.ignored, vec!["/node_modules/".to_string()]);
        assert!(policy.is_ignored(Path::new("node_modules/react/index.js")));
        assert!(policy.is_ignored(Path::new("/app/node_modules/x.js")));
        assert!(!policy.is_ignored(Path::new("lib/node_modules_shim.js")));
    }

    #[test]
    fn extra_patterns_are_appended_once() {
        let policy = WatchPolicy::new(&WatchSettings {
            ignored: vec!["/coverage/".into(), "/node_modules/".into(), " ".into()],
        });
        assert_eq!(policy.ignored, vec!["/node_modules/", "/coverage/"]);
        assert!(policy.is_ignored(Path::new("coverage/index.html")));
    }

    #[test]
    fn multi_segment_patterns_match_whole_components() {
        let policy = WatchPolicy::new(&WatchSettings {
            ignored: vec!["/lib/generated/".into()],
        });
        assert!(policy.is_ignored(Path::new("lib/generated/x.ts")));
        assert!(policy.is_ignored(Path::new("/srv/app/lib/generated/deep/y.ts")));
        assert!(policy.is_ignored(Path::new(r"lib\generated\x.ts")));
        assert!(!policy.is_ignored(Path::new("lib/generated_types.ts")));
        assert!(!policy.is_ignored(Path::new("mylib/generated/x.ts")));
    }
}
