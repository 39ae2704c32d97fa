//! Mode-dependent policy: one lookup table keyed by [`Mode`].
//!
//! Filename template, source-map kind and environment capabilities all vary
//! with the mode. They are resolved together here so a new mode is a single
//! new match arm.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::mode::Mode;

/// Native syntax features the target runtime is declared to support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EnvironmentCapability {
    ArrowFunction,
    Const,
    Destructuring,
    BigIntLiteral,
    DynamicImport,
    ForOf,
    Module,
}

pub type CapabilitySet = BTreeSet<EnvironmentCapability>;

/// Conservative capabilities every build may assume.
pub const BASELINE_CAPABILITIES: [EnvironmentCapability; 3] = [
    EnvironmentCapability::ArrowFunction,
    EnvironmentCapability::Const,
    EnvironmentCapability::Destructuring,
];

/// Extra capabilities granted to development builds so debug output is not
/// downleveled.
pub const DEVELOPMENT_CAPABILITIES: [EnvironmentCapability; 4] = [
    EnvironmentCapability::BigIntLiteral,
    EnvironmentCapability::DynamicImport,
    EnvironmentCapability::ForOf,
    EnvironmentCapability::Module,
];

/// Source map variant passed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceMapKind {
    /// Fast, evaluated per module. Development only.
    #[serde(rename = "eval-source-map")]
    EvalSourceMap,
    /// Separate distributable `.map` files.
    #[serde(rename = "source-map")]
    SourceMap,
}

impl SourceMapKind {
    pub fn is_eval(self) -> bool {
        matches!(self, SourceMapKind::EvalSourceMap)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SourceMapKind::EvalSourceMap => "eval-source-map",
            SourceMapKind::SourceMap => "source-map",
        }
    }
}

pub const DEVELOPMENT_FILENAME: &str = "[name].bundle.js";
pub const PRODUCTION_FILENAME: &str = "[name].[contenthash].bundle.js";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModePolicy {
    pub filename_template: &'static str,
    pub source_map: SourceMapKind,
    pub capabilities: CapabilitySet,
}

impl ModePolicy {
    pub fn for_mode(mode: Mode) -> Self {
        let mut capabilities: CapabilitySet = BASELINE_CAPABILITIES.into_iter().collect();

        match mode {
            Mode::Development => {
                capabilities.extend(DEVELOPMENT_CAPABILITIES);
                Self {
                    filename_template: DEVELOPMENT_FILENAME,
                    source_map: SourceMapKind::EvalSourceMap,
                    capabilities,
                }
            }
            Mode::Production => Self {
                filename_template: PRODUCTION_FILENAME,
                source_map: SourceMapKind::SourceMap,
                capabilities,
            },
        }
    }
}
