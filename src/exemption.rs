//! Messages that skip Conventional Commits validation
//!
//! Commits created by `git commit --fixup`/`--squash` and merge commits are
//! written by git itself. The hook lets them through unless strict mode is
//! on; the checks here only look at the start of the cleaned message.

use regex::Regex;
use std::sync::LazyLock;

use crate::preprocess::clean;

/// Prefixes written by `git commit --fixup`, `--fixup=amend:` and `--squash`
pub const AUTOSQUASH_PREFIXES: [&str; 3] = ["amend", "fixup", "squash"];

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static AUTOSQUASH_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\A(?:{})! ", AUTOSQUASH_PREFIXES.join("|"))).unwrap()
});

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static MERGE_HEADER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\Amerge\b").unwrap());

/// Whether the message starts with `amend! `, `fixup! ` or `squash! `
///
/// # Example
///
/// ```
/// use conventional_commit_hook::exemption::has_autosquash_prefix;
///
/// assert!(has_autosquash_prefix("fixup! feat: add widget"));
/// assert!(!has_autosquash_prefix("fixup!feat: add widget"));
/// ```
pub fn has_autosquash_prefix(text: &str) -> bool {
    AUTOSQUASH_PREFIX.is_match(&clean(text))
}

/// Whether the message is a merge commit header
///
/// # Example
///
/// ```
/// use conventional_commit_hook::exemption::is_merge_commit;
///
/// assert!(is_merge_commit("Merge branch 'x' into 'y'"));
/// assert!(!is_merge_commit("chore: merge config"));
/// ```
pub fn is_merge_commit(text: &str) -> bool {
    MERGE_HEADER.is_match(&clean(text))
}
