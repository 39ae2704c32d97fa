//! Source-map and build statistics policy.

use serde::Serialize;

use crate::policy::SourceMapKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticsPolicy {
    pub source_map: SourceMapKind,
    pub stats: StatsOptions,
}

/// Which details the engine reports. Errors are reported in full, with
/// stack and module trace, so a failing module can be located.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsOptions {
    pub env: bool,
    pub output_path: bool,
    pub warnings: bool,
    pub errors: bool,
    pub error_details: bool,
    pub error_stack: bool,
    pub module_trace: bool,
    pub timings: bool,
}

impl Default for StatsOptions {
    fn default() -> Self {
        Self {
            env: true,
            output_path: true,
            warnings: true,
            errors: true,
            error_details: true,
            error_stack: true,
            module_trace: true,
            timings: true,
        }
    }
}
