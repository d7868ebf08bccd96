//! commit-msg hook entry point
//!
//! Command-line arguments, policy resolution and the control flow that turns
//! a commit message file into an exit status.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use tracing::{debug, info};

use crate::config::{Config, load_config};
use crate::exemption::{has_autosquash_prefix, is_merge_commit};
use crate::output::{Verdict, fail, fail_verbose, unicode_decode_error, verbose_arg};
use crate::pattern::CommitPattern;
use crate::policy::{ValidationPolicy, parse_scopes};

/// Exit status for an accepted message
pub const RESULT_SUCCESS: i32 = 0;
/// Exit status for a rejected message
pub const RESULT_FAIL: i32 = 1;

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "conventional-commit-hook")]
#[command(about = "Check that a commit message follows Conventional Commits", long_about = None)]
pub struct Args {
    /// Optional types to support (feat and fix are always accepted),
    /// followed by the file containing the git commit message
    #[arg(required = true, num_args = 1.., value_name = "TYPES... INPUT")]
    pub args: Vec<String>,

    /// Disable color in output
    #[arg(long)]
    pub no_color: bool,

    /// Force commit to have scope defined
    #[arg(long)]
    pub force_scope: bool,

    /// Comma-separated list of scopes to support, e.g. api,client
    #[arg(long)]
    pub scopes: Option<String>,

    /// Force commit to strictly follow Conventional Commits formatting.
    /// Disallows fixup! and merge commits
    #[arg(long)]
    pub strict: bool,

    /// Print more verbose error output
    #[arg(long)]
    pub verbose: bool,

    /// Output the verdict as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<String>,
}

impl Args {
    /// Path of the commit message file, the last positional argument
    pub fn input(&self) -> &str {
        self.args.last().map(String::as_str).unwrap_or_default()
    }

    /// Custom types, every positional argument before the input
    pub fn types(&self) -> &[String] {
        self.args
            .split_last()
            .map(|(_, types)| types)
            .unwrap_or_default()
    }

    /// Combine the configuration file (if any) with the command line
    ///
    /// Types and scopes given on the command line replace those from the
    /// file. Boolean flags are enabled by either source.
    ///
    /// # Errors
    ///
    /// * The configuration file cannot be loaded
    pub fn policy(&self) -> Result<ValidationPolicy> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => Config::default(),
        };

        if !self.types().is_empty() {
            config.types = self.types().to_vec();
        }
        if let Some(raw) = &self.scopes {
            config.scopes = parse_scopes(raw);
        }
        config.force_scope |= self.force_scope;
        config.strict |= self.strict;

        Ok(config.to_policy())
    }
}

/// Check a commit message under `policy`
///
/// Autosquash and merge commits are accepted without validation unless the
/// policy is strict.
///
/// # Errors
///
/// * The pattern for `policy` cannot be compiled
///
/// # Example
///
/// ```
/// use conventional_commit_hook::{hook::check_message, policy::ValidationPolicy};
///
/// # fn main() -> anyhow::Result<()> {
/// let verdict = check_message("fixup! anything", &ValidationPolicy::default())?;
/// assert!(verdict.valid && verdict.exempt);
/// # Ok(())
/// # }
/// ```
pub fn check_message(message: &str, policy: &ValidationPolicy) -> Result<Verdict> {
    if !policy.strict() {
        if has_autosquash_prefix(message) {
            info!("Autosquash commit, skipping validation");
            return Ok(exempt(message));
        }
        if is_merge_commit(message) {
            info!("Merge commit, skipping validation");
            return Ok(exempt(message));
        }
    }

    let pattern = CommitPattern::new(policy)?;
    let valid = pattern.is_valid(message);
    let missing = if valid {
        Default::default()
    } else {
        pattern.missing_components(message)
    };
    debug!(valid, ?missing, "Checked commit message");

    Ok(Verdict {
        valid,
        exempt: false,
        missing,
        message: message.to_string(),
    })
}

fn exempt(message: &str) -> Verdict {
    Verdict {
        valid: true,
        exempt: true,
        missing: Default::default(),
        message: message.to_string(),
    }
}

/// Run the hook and return its exit status
///
/// # Process flow
///
/// 1. Resolve the policy from the configuration file and arguments
/// 2. Read the commit message file as UTF-8
/// 3. Accept autosquash and merge commits unless strict
/// 4. Validate the message and print a report when it is rejected
///
/// # Errors
///
/// * Configuration file not found or invalid
/// * Commit message file cannot be read
pub fn run(args: &Args) -> Result<i32> {
    let policy = args.policy()?;
    let use_color = !args.no_color;

    let bytes = fs::read(args.input())
        .context(format!("Failed to read commit message file: {}", args.input()))?;
    let Ok(message) = String::from_utf8(bytes) else {
        info!(path = args.input(), "Commit message is not valid UTF-8");
        if args.json {
            println!(
                "{}",
                serde_json::to_string(&Verdict {
                    valid: false,
                    exempt: false,
                    missing: Default::default(),
                    message: String::new(),
                })?
            );
        } else {
            println!("{}", unicode_decode_error(use_color));
        }
        return Ok(RESULT_FAIL);
    };

    let verdict = check_message(&message, &policy)?;

    if args.json {
        println!("{}", serde_json::to_string(&verdict)?);
    } else if !verdict.valid {
        println!("{}", fail(&message, use_color));
        if args.verbose {
            println!("{}", fail_verbose(&verdict.missing, &policy, use_color));
        } else {
            println!("{}", verbose_arg(use_color));
        }
    }

    Ok(if verdict.valid {
        RESULT_SUCCESS
    } else {
        RESULT_FAIL
    })
}
