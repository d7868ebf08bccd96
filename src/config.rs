//! Configuration file support for the commit-msg hook
//!
//! This module handles loading an optional TOML file that holds the same
//! settings as the command line, so a repository can keep its policy in one
//! place instead of repeating it in the hook arguments.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use tracing::debug;

use crate::policy::ValidationPolicy;

/// Hook configuration file structure
///
/// # Example TOML
///
/// ```toml
/// # Optional: custom types (feat and fix are always accepted)
/// types = ["feat", "fix", "chore", "release"]
///
/// # Optional: allowed scopes
/// scopes = ["api", "client"]
///
/// # Optional: require a scope (default: false)
/// force_scope = true
///
/// # Optional: validate autosquash and merge commits too (default: false)
/// strict = false
/// ```
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Accepted commit types
    pub types: Vec<String>,
    /// Allowed scopes
    pub scopes: Vec<String>,
    /// Whether a scope is mandatory
    pub force_scope: bool,
    /// Whether autosquash and merge commits are validated as well
    pub strict: bool,
}

impl Config {
    /// Policy described by this configuration alone
    pub fn to_policy(&self) -> ValidationPolicy {
        ValidationPolicy::default()
            .with_types(&self.types)
            .with_scopes(&self.scopes)
            .with_scope_optional(!self.force_scope)
            .with_strict(self.strict)
    }
}

/// Load configuration from a TOML file
///
/// # Arguments
///
/// * `config_path` - Path to the configuration file
///
/// # Returns
///
/// * `Result<Config>` - Parsed configuration
///
/// # Errors
///
/// * File does not exist
/// * Invalid TOML format or unknown fields
/// * A type or scope entry is empty or whitespace-only
///
/// # Example
///
/// ```no_run
/// use conventional_commit_hook::config::load_config;
///
/// # fn main() -> anyhow::Result<()> {
/// let config = load_config(".conventional-commits.toml")?;
/// println!("Types: {:?}", config.types);
/// # Ok(())
/// # }
/// ```
pub fn load_config(config_path: &str) -> Result<Config> {
    let content = fs::read_to_string(config_path)
        .context(format!("Failed to read config file: {}", config_path))?;
    let config: Config = toml::from_str(&content).context("Failed to parse config file as TOML")?;

    if config.types.iter().any(|t| t.trim().is_empty()) {
        anyhow::bail!(
            "Configuration error: 'types' cannot contain empty entries. \
             Please fix the type list in {}",
            config_path
        );
    }
    if config.scopes.iter().any(|s| s.trim().is_empty()) {
        anyhow::bail!(
            "Configuration error: 'scopes' cannot contain empty entries. \
             Please fix the scope list in {}",
            config_path
        );
    }

    debug!(path = config_path, ?config, "Loaded hook configuration");
    Ok(config)
}
