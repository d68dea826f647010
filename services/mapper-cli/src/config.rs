//! Configuration for the mapper CLI.
//!
//! Optional YAML file:
//!
//! ```yaml
//! logging:
//!   level: info        # trace | debug | info | warn | error
//!   format: pretty     # pretty | json
//! catalog_files:
//!   - ${CATALOG_DIR:-/etc/geo-mapper}/satellites.yaml
//! ```
//!
//! Supports environment variable substitution using ${VAR} syntax.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Catalog override files, applied in order
    #[serde(default)]
    pub catalog_files: Vec<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl CliConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let expanded = calibration::expand_env_vars(content)?;
        let config: CliConfig =
            serde_yaml::from_str(&expanded).context("Failed to parse mapper config YAML")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            bail!(
                "Invalid log level '{}', expected one of {:?}",
                self.logging.level,
                LOG_LEVELS
            );
        }
        Ok(())
    }
}

/// Load and validate a CLI configuration file.
pub fn load_cli_config<P: AsRef<Path>>(path: P) -> Result<CliConfig> {
    let content = fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read mapper config from {:?}", path.as_ref()))?;
    CliConfig::from_yaml_str(&content)
        .with_context(|| format!("Invalid mapper config {:?}", path.as_ref()))
}
