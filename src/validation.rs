//! Commit message matching and validation
//!
//! This module applies a [`CommitPattern`] to a cleaned commit message and
//! turns the outcome into a verdict and a list of missing components.
//!
//! Every component is reported in one of three states, see [`GroupMatch`].
//! The distinction matters for the report: an optional scope that matched
//! nothing is fine, a scope the grammar never reached is not.

use anyhow::Result;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use tracing::debug;

use crate::pattern::CommitPattern;
use crate::policy::ValidationPolicy;
use crate::preprocess::clean;

/// Named component of a Conventional Commits message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    Type,
    Scope,
    Delim,
    Subject,
    Body,
    /// Body lines after the subject line
    Multi,
    /// Blank line separating the body from the subject
    Sep,
}

impl Component {
    pub const ALL: [Component; 7] = [
        Component::Type,
        Component::Scope,
        Component::Delim,
        Component::Subject,
        Component::Body,
        Component::Multi,
        Component::Sep,
    ];

    /// Name of the capture group for this component
    pub fn as_str(self) -> &'static str {
        match self {
            Component::Type => "type",
            Component::Scope => "scope",
            Component::Delim => "delim",
            Component::Subject => "subject",
            Component::Body => "body",
            Component::Multi => "multi",
            Component::Sep => "sep",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one capture group
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupMatch {
    /// The matcher never got this far
    Unmatched,
    /// The surrounding structure matched with zero-width content
    MatchedEmpty,
    Matched(String),
}

impl GroupMatch {
    fn from_capture(capture: Option<regex::Match<'_>>) -> Self {
        match capture {
            None => GroupMatch::Unmatched,
            Some(m) if m.as_str().is_empty() => GroupMatch::MatchedEmpty,
            Some(m) => GroupMatch::Matched(m.as_str().to_string()),
        }
    }

    pub fn is_unmatched(&self) -> bool {
        matches!(self, GroupMatch::Unmatched)
    }

    /// Matched with at least one character
    pub fn is_present(&self) -> bool {
        matches!(self, GroupMatch::Matched(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            GroupMatch::Unmatched => None,
            GroupMatch::MatchedEmpty => Some(""),
            GroupMatch::Matched(text) => Some(text),
        }
    }
}

/// Per-component outcome of matching a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    groups: BTreeMap<Component, GroupMatch>,
    body_supplied: bool,
}

impl MatchResult {
    pub fn get(&self, component: Component) -> &GroupMatch {
        self.groups
            .get(&component)
            .unwrap_or(&GroupMatch::Unmatched)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Component, &GroupMatch)> {
        self.groups.iter().map(|(c, g)| (*c, g))
    }

    /// Whether the cleaned message has any text after its first line
    pub fn body_supplied(&self) -> bool {
        self.body_supplied
    }

    fn body_is_valid(&self) -> bool {
        if self.get(Component::Body).is_unmatched() {
            return false;
        }
        !self.get(Component::Multi).is_present() || self.get(Component::Sep).is_present()
    }
}

impl CommitPattern {
    /// Clean `text` and match it against the pattern
    ///
    /// Every component appears in the result. The pattern is anchored at the
    /// start of the text and every component is optional, so a match always
    /// occurs even for empty input.
    pub fn match_message(&self, text: &str) -> MatchResult {
        let cleaned = clean(text);
        let groups = match self.regex().captures(&cleaned) {
            Some(caps) => Component::ALL
                .iter()
                .map(|c| (*c, GroupMatch::from_capture(caps.name(c.as_str()))))
                .collect(),
            None => Component::ALL
                .iter()
                .map(|c| (*c, GroupMatch::Unmatched))
                .collect(),
        };
        let body_supplied = cleaned
            .split_once('\n')
            .is_some_and(|(_, rest)| !rest.trim().is_empty());

        MatchResult {
            groups,
            body_supplied,
        }
    }

    /// Whether `text` is a valid Conventional Commits message
    ///
    /// # Example
    ///
    /// ```
    /// use conventional_commit_hook::{pattern::CommitPattern, policy::ValidationPolicy};
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let pattern = CommitPattern::new(&ValidationPolicy::default())?;
    /// assert!(pattern.is_valid("feat: add widget\n\nWith a body."));
    /// assert!(!pattern.is_valid("feat: add widget\nNo blank line."));
    /// # Ok(())
    /// # }
    /// ```
    pub fn is_valid(&self, text: &str) -> bool {
        let result = self.match_message(text);
        let scope_ok =
            self.policy().scope_optional() || result.get(Component::Scope).is_present();

        let valid = result.get(Component::Type).is_present()
            && scope_ok
            && result.get(Component::Delim).is_present()
            && result.get(Component::Subject).is_present()
            && result.body_is_valid();

        debug!(valid, "Validated commit message");
        valid
    }

    /// Components that are missing or malformed in `text`
    ///
    /// Once the type fails nothing after it can match, so only the type (and
    /// a forced scope) is reported. An optional scope is never reported, and
    /// the body components only when a body was actually written. A body
    /// that does not match at all is reported as `body` alone.
    ///
    /// # Example
    ///
    /// ```
    /// use conventional_commit_hook::{
    ///     pattern::CommitPattern, policy::ValidationPolicy, validation::Component,
    /// };
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let pattern = CommitPattern::new(&ValidationPolicy::default())?;
    /// let missing = pattern.missing_components("feat message");
    /// assert!(missing.contains(&Component::Delim));
    /// assert!(missing.contains(&Component::Subject));
    /// # Ok(())
    /// # }
    /// ```
    pub fn missing_components(&self, text: &str) -> BTreeSet<Component> {
        let result = self.match_message(text);
        let mut candidates: BTreeSet<Component> = Component::ALL.into_iter().collect();

        if result.get(Component::Type).is_unmatched() {
            for c in [
                Component::Delim,
                Component::Subject,
                Component::Body,
                Component::Multi,
                Component::Sep,
            ] {
                candidates.remove(&c);
            }
        }
        if self.policy().scope_optional() {
            candidates.remove(&Component::Scope);
        }
        if !result.body_supplied() {
            candidates.remove(&Component::Body);
            candidates.remove(&Component::Multi);
            candidates.remove(&Component::Sep);
        }
        // multi and sep live inside body
        if result.get(Component::Body).is_unmatched() {
            candidates.remove(&Component::Multi);
            candidates.remove(&Component::Sep);
        }

        candidates
            .into_iter()
            .filter(|c| result.get(*c).is_unmatched())
            .collect()
    }
}

/// Match `text` under `policy`, building the pattern for this call only
pub fn match_message(text: &str, policy: &ValidationPolicy) -> Result<MatchResult> {
    Ok(CommitPattern::new(policy)?.match_message(text))
}

/// Validate `text` under `policy`, building the pattern for this call only
///
/// # Errors
///
/// * The pattern for `policy` cannot be compiled
///
/// # Example
///
/// ```
/// use conventional_commit_hook::{policy::ValidationPolicy, validation::is_valid};
///
/// # fn main() -> anyhow::Result<()> {
/// let policy = ValidationPolicy::default();
/// assert!(is_valid("fix(api)!: patch", &policy)?);
/// assert!(!is_valid("wrong: message", &policy)?);
/// # Ok(())
/// # }
/// ```
pub fn is_valid(text: &str, policy: &ValidationPolicy) -> Result<bool> {
    Ok(CommitPattern::new(policy)?.is_valid(text))
}

/// Missing components of `text` under `policy`
pub fn missing_components(text: &str, policy: &ValidationPolicy) -> Result<BTreeSet<Component>> {
    Ok(CommitPattern::new(policy)?.missing_components(text))
}
