//! Invocation mode and the context handed to the plan builder.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Build mode selected by the invoker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Development,
    Production,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Development, Mode::Production];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    /// Parse a mode name. Only the two exact lowercase names are accepted;
    /// there is no fallback.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err(ConfigError::MissingMode),
            "development" => Ok(Mode::Development),
            "production" => Ok(Mode::Production),
            other => Err(ConfigError::UnknownMode {
                value: other.to_string(),
            }),
        }
    }
}

/// Raw invocation arguments, as received from the caller before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvocationArgs {
    #[serde(default)]
    pub mode: Option<String>,
}

impl InvocationArgs {
    pub fn with_mode(mode: impl Into<String>) -> Self {
        Self {
            mode: Some(mode.into()),
        }
    }
}

/// Validated input to one planning pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InvocationContext {
    pub mode: Mode,
}

impl InvocationContext {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    pub fn from_args(args: &InvocationArgs) -> Result<Self, ConfigError> {
        let raw = args.mode.as_deref().ok_or(ConfigError::MissingMode)?;
        Ok(Self::new(raw.parse()?))
    }
}
