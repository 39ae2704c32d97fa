//! The plan builder: one pure function from invocation context to build plan.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::diagnostics::{DiagnosticsPolicy, StatsOptions};
use crate::entries::EntrySet;
use crate::error::{ConfigError, Result};
use crate::manifest::ManifestSpec;
use crate::mode::{InvocationArgs, InvocationContext, Mode};
use crate::output::{FilenameTemplate, OutputPolicy, OutputSettings};
use crate::policy::ModePolicy;
use crate::resolution::ResolvePolicy;
use crate::rules::{RuleTable, TransformRule};
use crate::watch::{WatchPolicy, WatchSettings};

/// Step run by the engine once all output has been written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "step", rename_all = "kebab-case")]
pub enum PostBuildStep {
    EmitManifest(ManifestSpec),
}

/// Fully resolved description of one build, handed to the external engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildPlan {
    pub mode: Mode,
    pub rules: RuleTable,
    pub resolve: ResolvePolicy,
    pub entries: EntrySet,
    pub output: OutputPolicy,
    pub diagnostics: DiagnosticsPolicy,
    pub watch: WatchPolicy,
    post_build: Vec<PostBuildStep>,
}

impl BuildPlan {
    pub fn post_build(&self) -> &[PostBuildStep] {
        &self.post_build
    }

    /// The manifest emission step. Only the builder creates plans, and it
    /// always adds exactly one.
    pub fn manifest(&self) -> &ManifestSpec {
        match self.post_build.as_slice() {
            [PostBuildStep::EmitManifest(spec)] => spec,
            steps => unreachable!("plan has {} post-build steps", steps.len()),
        }
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.output.base_dir.join(&self.manifest().file_name)
    }

    /// Rule whose chain the engine applies to `path`, if any.
    pub fn rule_for(&self, path: impl AsRef<Path>) -> Option<&TransformRule> {
        self.rules.first_match(path)
    }
}

/// Holds the static inputs of planning. The rule table is injected so tests
/// and embedders can substitute their own.
#[derive(Debug, Clone)]
pub struct PlanBuilder {
    rules: RuleTable,
    entries: EntrySet,
    output: OutputSettings,
    watch: WatchSettings,
    manifest: ManifestSpec,
}

impl PlanBuilder {
    pub fn new(rules: RuleTable, entries: EntrySet) -> Self {
        Self {
            rules,
            entries,
            output: OutputSettings::default(),
            watch: WatchSettings::default(),
            manifest: ManifestSpec::default(),
        }
    }

    pub fn standard() -> Self {
        Self::new(RuleTable::standard(), EntrySet::standard())
    }

    pub fn with_output(mut self, output: OutputSettings) -> Self {
        self.output = output;
        self
    }

    pub fn with_watch(mut self, watch: WatchSettings) -> Self {
        self.watch = watch;
        self
    }

    pub fn with_manifest(mut self, manifest: ManifestSpec) -> Self {
        self.manifest = manifest;
        self
    }

    pub fn entries(&self) -> &EntrySet {
        &self.entries
    }

    pub fn output(&self) -> &OutputSettings {
        &self.output
    }

    /// Resolve the plan for `ctx`. Deterministic and free of I/O.
    pub fn build(&self, ctx: InvocationContext) -> Result<BuildPlan> {
        if self.entries.is_empty() {
            return Err(ConfigError::NoEntries);
        }
        self.output.validate()?;
        self.manifest.validate()?;

        let policy = ModePolicy::for_mode(ctx.mode);
        let filename_template = FilenameTemplate::new(policy.filename_template)?;

        tracing::debug!(
            mode = %ctx.mode,
            entries = self.entries.len(),
            filename = filename_template.as_str(),
            source_map = policy.source_map.as_str(),
            "resolved build plan"
        );

        Ok(BuildPlan {
            mode: ctx.mode,
            rules: self.rules.bind_mode(ctx.mode),
            resolve: ResolvePolicy::default(),
            entries: self.entries.clone(),
            output: OutputPolicy {
                base_dir: self.output.dir.clone(),
                public_path: self.output.public_path.clone(),
                filename_template,
                clean: self.output.clean,
                library_export: self.output.library_export.clone(),
                environment: policy.capabilities,
            },
            diagnostics: DiagnosticsPolicy {
                source_map: policy.source_map,
                stats: StatsOptions::default(),
            },
            watch: WatchPolicy::new(&self.watch),
            post_build: vec![PostBuildStep::EmitManifest(self.manifest.clone())],
        })
    }
}

impl Default for PlanBuilder {
    fn default() -> Self {
        Self::standard()
    }
}

/// Plan with the standard rules and entries.
pub fn build_plan(ctx: InvocationContext) -> Result<BuildPlan> {
    PlanBuilder::standard().build(ctx)
}

/// Raw invocation surface: an environment object (ignored) and the
/// arguments object carrying `mode`.
pub fn resolve(_env: &Value, args: &InvocationArgs) -> Result<BuildPlan> {
    build_plan(InvocationContext::from_args(args)?)
}
