//! Removal of git-added noise from a raw commit message
//!
//! Git writes comment lines into the commit message template and, with
//! `git commit --verbose`, appends the staged diff below a scissors line.
//! Neither is part of the message git finally stores, so both are stripped
//! before the message is analysed.

use regex::Regex;
use std::sync::LazyLock;

/// A line whose first non-whitespace character is `#`, with its terminator
#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static COMMENT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[^\S\n]*#[^\n]*(?:\n|\z)").unwrap());

/// The scissors line git places above the verbose diff
#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static VERBOSE_SCISSORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^# -{24} >8 -{24}\r?$").unwrap());

/// Remove every comment line
///
/// Surviving lines keep their original line terminators.
///
/// # Example
///
/// ```
/// use conventional_commit_hook::preprocess::strip_comments;
///
/// assert_eq!(strip_comments("feat: x\n# comment\n"), "feat: x\n");
/// ```
pub fn strip_comments(text: &str) -> String {
    COMMENT_LINE.replace_all(text, "").into_owned()
}

/// Cut the text at the first verbose-commit scissors line
///
/// The scissors line and everything after it are dropped. Later scissors
/// lines fall inside the removed region and need no handling of their own.
///
/// # Example
///
/// ```
/// use conventional_commit_hook::preprocess::strip_verbose_trailer;
///
/// let scissors = format!("# {} >8 {}", "-".repeat(24), "-".repeat(24));
/// let text = format!("feat: x\n{scissors}\ndiff --git a/f b/f\n");
/// assert_eq!(strip_verbose_trailer(&text), "feat: x\n");
/// ```
pub fn strip_verbose_trailer(text: &str) -> String {
    match VERBOSE_SCISSORS.find(text) {
        Some(scissors) => text[..scissors.start()].to_string(),
        None => text.to_string(),
    }
}

/// Strip the verbose trailer, then comment lines
///
/// The trailer goes first so that comment lines inside the diff region are
/// discarded together with it.
pub fn clean(text: &str) -> String {
    strip_comments(&strip_verbose_trailer(text))
}
