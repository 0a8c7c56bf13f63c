use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::trim::{Platform, TrimOptions};

/// Root configuration structure for frametrim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrametrimConfig {
    /// Platform tag used when the input does not name one
    pub default_platform: String,

    /// Collapse compiler-generated lambda names
    pub normalize_lambdas: bool,

    /// Output configuration
    pub output: OutputConfig,

    /// Parallel processing configuration
    pub parallel: ParallelConfig,
}

impl Default for FrametrimConfig {
    fn default() -> Self {
        Self {
            default_platform: Platform::Native.as_str().to_string(),
            normalize_lambdas: true,
            output: OutputConfig::default(),
            parallel: ParallelConfig::default(),
        }
    }
}

impl FrametrimConfig {
    /// Reject values that would otherwise surface as confusing behaviour later.
    pub fn validate(&self) -> Result<()> {
        if Platform::from_tag(&self.default_platform).is_none() {
            return Err(Error::config(format!(
                "default_platform '{}' has no trimming rules",
                self.default_platform
            )));
        }
        Ok(())
    }

    pub fn trim_options(&self) -> TrimOptions {
        TrimOptions {
            normalize_lambdas: self.normalize_lambdas,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Parallel processing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelConfig {
    pub enabled: bool,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One trimmed name per line
    #[default]
    Plain,
    /// One JSON object per line with the raw and trimmed name
    Json,
}
