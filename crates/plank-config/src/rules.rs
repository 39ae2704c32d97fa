//! Transform rules: which transformation chain applies to which module.
//!
//! Rules are kept in declaration order and evaluated first-match-wins. The
//! table is immutable once built and is injected into the plan builder, so a
//! caller can substitute its own table.

use std::fmt;
use std::path::Path;

use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;
use serde_json::{Value, json};

use crate::error::{ConfigError, Result};
use crate::mode::Mode;

/// Directory holding third-party, already distributable code.
pub const DEPENDENCY_DIR: &str = "node_modules";

/// A compiled path predicate. Compares and serializes by its source text.
#[derive(Clone)]
pub struct FilePattern {
    source: String,
    regex: Regex,
}

impl FilePattern {
    pub fn new(rule: &str, source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        let regex = Regex::new(&source).map_err(|err| ConfigError::InvalidPattern {
            rule: rule.to_string(),
            message: err.to_string(),
        })?;
        Ok(Self { source, regex })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, path: &Path) -> bool {
        self.regex.is_match(&normalize(path))
    }
}

impl fmt::Debug for FilePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.source)
    }
}

impl PartialEq for FilePattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for FilePattern {}

impl Serialize for FilePattern {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

fn normalize(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// One transformation engine invocation with its options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformStep {
    pub engine: String,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub options: IndexMap<String, Value>,
    /// Option key (inside the first preset entry that carries it) that
    /// receives the mode name when the table is bound to a mode.
    #[serde(skip)]
    pub mode_option: Option<String>,
}

impl TransformStep {
    pub fn new(engine: impl Into<String>) -> Self {
        Self {
            engine: engine.into(),
            options: IndexMap::new(),
            mode_option: None,
        }
    }

    pub fn option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }

    pub fn mode_option(mut self, key: impl Into<String>) -> Self {
        self.mode_option = Some(key.into());
        self
    }

    /// Engine id without its query suffix (`babel-loader?+cacheDirectory`).
    pub fn engine_name(&self) -> &str {
        self.engine
            .split_once('?')
            .map_or(self.engine.as_str(), |(name, _)| name)
    }

    /// Whether the step asks the engine to cache results between rebuilds.
    pub fn caching(&self) -> bool {
        self.engine
            .split_once('?')
            .is_some_and(|(_, query)| query.split('&').any(|flag| flag == "+cacheDirectory"))
    }

    fn bind_mode(&mut self, mode: Mode) {
        let Some(key) = self.mode_option.as_deref() else {
            return;
        };
        let Some(Value::Array(presets)) = self.options.get_mut("presets") else {
            return;
        };
        // A preset is `[name]` or `[name, { options }]`.
        for preset in presets {
            let Value::Array(parts) = preset else {
                continue;
            };
            if let Some(Value::Object(opts)) = parts.get_mut(1) {
                if opts.contains_key(key) {
                    opts.insert(key.to_string(), Value::String(mode.to_string()));
                    return;
                }
            }
        }
    }
}

/// What happens to a module matched by a rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "use", rename_all = "lowercase")]
pub enum RuleAction {
    /// Emitted as-is by the engine's asset handling.
    Asset,
    /// Passed through the listed steps.
    Chain(Vec<TransformStep>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformRule {
    pub name: String,
    pub test: FilePattern,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<FilePattern>,
    #[serde(flatten)]
    pub action: RuleAction,
}

impl TransformRule {
    pub fn new(name: impl Into<String>, test: &str, action: RuleAction) -> Result<Self> {
        let name = name.into();
        let test = FilePattern::new(&name, test)?;
        Ok(Self {
            name,
            test,
            exclude: None,
            action,
        })
    }

    pub fn exclude(mut self, pattern: &str) -> Result<Self> {
        self.exclude = Some(FilePattern::new(&self.name, pattern)?);
        Ok(self)
    }

    pub fn matches(&self, path: &Path) -> bool {
        self.test.is_match(path) && !self.exclude.as_ref().is_some_and(|ex| ex.is_match(path))
    }

    /// Steps in the order they touch a module: the last listed step runs
    /// first and the first listed step hands its output to the bundler.
    pub fn application_order(&self) -> impl Iterator<Item = &TransformStep> {
        let steps: &[TransformStep] = match &self.action {
            RuleAction::Asset => &[],
            RuleAction::Chain(steps) => steps,
        };
        steps.iter().rev()
    }
}

/// Ordered, immutable list of transform rules.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RuleTable {
    rules: Vec<TransformRule>,
}

impl RuleTable {
    pub fn new(rules: Vec<TransformRule>) -> Result<Self> {
        for (idx, rule) in rules.iter().enumerate() {
            if rules[..idx].iter().any(|earlier| earlier.name == rule.name) {
                return Err(ConfigError::DuplicateRule {
                    name: rule.name.clone(),
                });
            }
        }
        Ok(Self { rules })
    }

    /// The fixed precedence: images, then stylesheets, then scripts.
    pub fn standard() -> Self {
        // The patterns below are literals known to compile.
        Self::try_standard().unwrap_or_else(|err| unreachable!("standard rule table: {err}"))
    }

    fn try_standard() -> Result<Self> {
        let images = TransformRule::new("images", r"\.(png|jpg|jpeg|svg)$", RuleAction::Asset)?;

        let styles = TransformRule::new(
            "styles",
            r"\.css$",
            RuleAction::Chain(vec![
                TransformStep::new("style-loader"),
                TransformStep::new("css-loader"),
            ]),
        )?;

        let babel = TransformStep::new("babel-loader?+cacheDirectory")
            .option(
                "presets",
                json!([
                    [
                        "@babel/preset-env",
                        {
                            "useBuiltIns": "usage",
                            "corejs": "3.15",
                            "bugfixes": true,
                            "browserslistEnv": null
                        }
                    ],
                    ["@babel/preset-react"],
                    ["@babel/preset-typescript"]
                ]),
            )
            .mode_option("browserslistEnv");

        let scripts = TransformRule::new("scripts", r"\.[jt]sx?$", RuleAction::Chain(vec![babel]))?
            .exclude(&format!("({DEPENDENCY_DIR})"))?;

        Self::new(vec![images, styles, scripts])
    }

    pub fn rules(&self) -> &[TransformRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// First rule in declaration order that matches, if any. Unmatched
    /// modules pass through the engine unchanged.
    pub fn first_match(&self, path: impl AsRef<Path>) -> Option<&TransformRule> {
        let path = path.as_ref();
        self.rules.iter().find(|rule| rule.matches(path))
    }

    /// Copy of the table with mode-bound step options filled in.
    pub fn bind_mode(&self, mode: Mode) -> Self {
        let mut bound = self.clone();
        for rule in &mut bound.rules {
            if let RuleAction::Chain(steps) = &mut rule.action {
                steps.iter_mut().for_each(|step| step.bind_mode(mode));
            }
        }
        bound
    }
}
