use serde::Serialize;

/// Module resolution policy handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvePolicy {
    pub extensions: Vec<String>,
    pub symlinks: bool,
}

impl Default for ResolvePolicy {
    fn default() -> Self {
        Self {
            extensions: [".ts", ".tsx", ".js"].map(String::from).to_vec(),
            symlinks: false,
        }
    }
}
