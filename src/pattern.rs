//! Commit grammar as a composite regular expression
//!
//! Each Conventional Commits component has its own fragment builder. The
//! fragments are concatenated in order, each wrapped in an optional named
//! group, so the composite pattern always matches at the start of the text
//! and the match records how far a message got through the grammar. The
//! subject is only tried after a delimiter.
//!
//! ```text
//! type(scope)!: subject
//!
//! body
//! ```

use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

use crate::policy::ValidationPolicy;

/// Separators allowed between entries of a scope allow-list
const SCOPE_DELIMITERS: [&str; 4] = [":", ",", "-", "/"];

/// One non-empty line of text without its terminator
const LINE: &str = r"[^\r\n]+";

/// A line with at least one non-whitespace character
const TEXT_LINE: &str = r"[^\r\n]*\S[^\r\n]*";

/// Horizontal whitespace allowed on a blank line
const BLANK: &str = r"[^\S\r\n]*";

/// Join items with `|` to form a regex alternation
fn r_or<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| regex::escape(item.as_ref()))
        .collect::<Vec<_>>()
        .join("|")
}

/// Case-insensitive alternation of the accepted types
///
/// Longer types come first so that a custom `fixup` is not cut short by `fix`.
pub fn r_types(policy: &ValidationPolicy) -> String {
    let mut types: Vec<&str> = policy.types().iter().map(String::as_str).collect();
    types.sort_by(|a, b| b.len().cmp(&a.len()));
    format!("(?i:{})", r_or(types))
}

/// Parenthesized scope, optional unless the policy forces it
///
/// With an allow-list only the listed scopes are accepted, joined by one of
/// `:`, `,`, `-` or `/` with optional whitespace around them. Without one any
/// run of word characters, spaces and `/:,-` is accepted.
pub fn r_scope(policy: &ValidationPolicy) -> String {
    let scope = match policy.scopes() {
        Some(scopes) => {
            let names = format!("(?i:{})", r_or(scopes));
            let delimiters = r_or(SCOPE_DELIMITERS);
            format!(r"\(\s*{names}(?:\s*(?:{delimiters})\s*{names})*\s*\)")
        }
        None => r"\([\w /:,-]+\)".to_string(),
    };

    if policy.scope_optional() {
        format!("(?:{scope})?")
    } else {
        scope
    }
}

/// Optional breaking change marker followed by the colon
pub fn r_delim() -> &'static str {
    r"!?:"
}

/// A single space and the rest of the first line
pub fn r_subject() -> String {
    format!(" {LINE}")
}

/// Everything after the subject line
///
/// `multi` holds the body lines and `sep` the blank line that must separate
/// them from the subject. The first body line needs non-whitespace text. The
/// body has to account for the rest of the text: a second paragraph or a
/// doubled blank line leaves the whole group unmatched. Trailing blank or
/// whitespace-only lines are tolerated, as is a lone `\r` line ending.
pub fn r_body() -> String {
    format!(
        r"(?P<multi>\r?\n(?P<sep>{BLANK}\r?\n)?{TEXT_LINE}(?:\r?\n{LINE})*)?(?:[^\S\n]*\n)*[^\S\n]*\z"
    )
}

/// Compiled composite pattern for one policy
///
/// Build it once and reuse it for every message checked under the same
/// policy.
#[derive(Debug, Clone)]
pub struct CommitPattern {
    regex: Regex,
    policy: ValidationPolicy,
}

impl CommitPattern {
    /// Compile the composite pattern for `policy`
    ///
    /// # Errors
    ///
    /// * The generated pattern exceeds the regex engine's size limits
    ///   (only possible with very large type or scope lists)
    ///
    /// # Example
    ///
    /// ```
    /// use conventional_commit_hook::{pattern::CommitPattern, policy::ValidationPolicy};
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let pattern = CommitPattern::new(&ValidationPolicy::default())?;
    /// assert!(pattern.is_valid("feat(api)!: add widget"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(policy: &ValidationPolicy) -> Result<Self> {
        let source = format!(
            r"\A(?P<type>{})?(?P<scope>{})?(?:(?P<delim>{})(?P<subject>{})?)?(?P<body>{})?",
            r_types(policy),
            r_scope(policy),
            r_delim(),
            r_subject(),
            r_body(),
        );
        debug!(pattern = %source, "Built commit message pattern");

        let regex = Regex::new(&source).context("Failed to compile commit message pattern")?;
        Ok(Self {
            regex,
            policy: policy.clone(),
        })
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }
}
