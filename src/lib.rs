//! Conventional Commits commit-msg hook
//!
//! This library checks that a git commit message follows the
//! [Conventional Commits](https://www.conventionalcommits.org/) format and
//! reports which parts of a rejected message are missing.
//!
//! # Modules
//!
//! - [`preprocess`] - Removal of comment lines and verbose diff trailers
//! - [`pattern`] - Commit grammar built from a validation policy
//! - [`validation`] - Matching, verdicts and missing components
//! - [`exemption`] - Autosquash and merge commit detection
//! - [`policy`] - Accepted types and scope rules
//! - [`config`] - Configuration file loading and parsing
//! - [`output`] - Failure reports and JSON output
//! - [`hook`] - Command-line arguments and hook control flow
//!
//! # Example
//!
//! ```
//! use conventional_commit_hook::{pattern::CommitPattern, policy::ValidationPolicy};
//!
//! # fn main() -> anyhow::Result<()> {
//! let policy = ValidationPolicy::default().with_scopes(["api", "client"]);
//! let pattern = CommitPattern::new(&policy)?;
//!
//! assert!(pattern.is_valid("feat(api): add widget\n\nLonger description.\n"));
//! assert!(!pattern.is_valid("feat(test): add widget"));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod exemption;
pub mod hook;
pub mod output;
pub mod pattern;
pub mod policy;
pub mod preprocess;
pub mod validation;
