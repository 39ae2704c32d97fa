//! Build plan resolution for the front-end asset pipeline.
//!
//! Given a mode, [`PlanBuilder::build`] produces a [`BuildPlan`]: which
//! transformation chain applies to which module, the named entry points,
//! output naming, source-map policy, watch exclusions and the manifest step.
//! The bundling itself is done by an external engine that consumes the plan.

pub mod config;
pub mod diagnostics;
pub mod discovery;
pub mod entries;
pub mod error;
pub mod manifest;
pub mod mode;
pub mod output;
pub mod plan;
pub mod policy;
pub mod resolution;
pub mod rules;
pub mod watch;

pub use config::{EntryDecl, ProjectConfig};
pub use diagnostics::{DiagnosticsPolicy, StatsOptions};
pub use discovery::{ConfigDiscovery, discover};
pub use entries::{EntryPoint, EntrySet};
pub use error::{ConfigError, ManifestError, Result};
pub use manifest::{Manifest, ManifestSpec};
pub use mode::{InvocationArgs, InvocationContext, Mode};
pub use output::{FilenameTemplate, OutputPolicy, OutputSettings};
pub use plan::{BuildPlan, PlanBuilder, PostBuildStep, build_plan, resolve};
pub use policy::{CapabilitySet, EnvironmentCapability, ModePolicy, SourceMapKind};
pub use resolution::ResolvePolicy;
pub use rules::{FilePattern, RuleAction, RuleTable, TransformRule, TransformStep};
pub use watch::{WatchPolicy, WatchSettings};
