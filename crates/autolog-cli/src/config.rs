//! autolog.toml parsing

use crate::codegen::kotlin::{
    AccessStyle, DEFAULT_LOG_TABLE, DEFAULT_LOGGABLE_INPUTS, KotlinOptions,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "autolog.toml";

/// autolog.toml structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputSection,

    #[serde(default)]
    pub kotlin: KotlinSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputSection {
    /// Root directory for generated sources.
    #[serde(default)]
    pub dir: Option<PathBuf>,

    /// Namespace assigned to classes read from Rust sources.
    #[serde(default)]
    pub package: Option<String>,

    /// Make-style dependency file to write after generation.
    #[serde(default)]
    pub depfile: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KotlinSection {
    #[serde(default = "default_log_table")]
    pub log_table: String,

    #[serde(default = "default_loggable_inputs")]
    pub loggable_inputs: String,

    #[serde(default)]
    pub access: AccessStyle,
}

fn default_log_table() -> String {
    DEFAULT_LOG_TABLE.to_string()
}

fn default_loggable_inputs() -> String {
    DEFAULT_LOGGABLE_INPUTS.to_string()
}

impl Default for KotlinSection {
    fn default() -> Self {
        Self {
            log_table: default_log_table(),
            loggable_inputs: default_loggable_inputs(),
            access: AccessStyle::default(),
        }
    }
}

impl KotlinSection {
    pub fn options(&self) -> KotlinOptions {
        KotlinOptions {
            log_table: self.log_table.clone(),
            loggable_inputs: self.loggable_inputs.clone(),
            access: self.access,
        }
    }
}

impl Config {
    /// Load config from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config: {:?}", path.as_ref()))?;

        Self::from_str(&content)
    }

    /// Parse config from string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config")
    }

    /// Load the given config, or `autolog.toml` in the working directory if it
    /// exists, or the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(DEFAULT_CONFIG_FILE)
            }
            None => Ok(Self::default()),
        }
    }

    /// Validate the config
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("kotlin.log_table", &self.kotlin.log_table),
            ("kotlin.loggable_inputs", &self.kotlin.loggable_inputs),
        ] {
            if value.is_empty() {
                anyhow::bail!("{name} cannot be empty");
            }
            if value.split('.').any(str::is_empty) {
                anyhow::bail!("{name} is not a valid class name: {value}");
            }
        }

        if let Some(package) = &self.output.package
            && !package.is_empty()
            && package.split('.').any(str::is_empty)
        {
            anyhow::bail!("output.package is not a valid package name: {package}");
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
