//! Validation policy shared by every check
//!
//! A [`ValidationPolicy`] collects the accepted types, the scope rules and
//! the strict flag into one immutable value. It is built once per hook
//! invocation and passed by reference into the pattern builder.

/// Types every Conventional Commits message may use
pub const CONVENTIONAL_TYPES: [&str; 2] = ["feat", "fix"];

/// Types accepted when no custom list is given
pub const DEFAULT_TYPES: [&str; 11] = [
    "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert", "style", "test",
];

/// Immutable configuration for one validation run
///
/// # Example
///
/// ```
/// use conventional_commit_hook::policy::ValidationPolicy;
///
/// let policy = ValidationPolicy::default()
///     .with_types(["custom"])
///     .with_scopes(["api", "client"])
///     .with_scope_optional(false);
///
/// assert_eq!(policy.types(), ["feat", "fix", "custom"]);
/// assert_eq!(policy.scopes(), Some(&["api".to_string(), "client".to_string()][..]));
/// assert!(!policy.scope_optional());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationPolicy {
    types: Vec<String>,
    scope_optional: bool,
    scopes: Option<Vec<String>>,
    strict: bool,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            types: DEFAULT_TYPES.iter().map(|t| (*t).to_string()).collect(),
            scope_optional: true,
            scopes: None,
            strict: false,
        }
    }
}

impl ValidationPolicy {
    /// Replace the accepted types with a custom list
    ///
    /// `feat` and `fix` are always kept; when the list omits them they are
    /// placed in front of it. Duplicates are dropped case-insensitively and
    /// an empty list keeps the current types.
    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let custom: Vec<String> = types
            .into_iter()
            .map(|t| t.as_ref().trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        if custom.is_empty() {
            return self;
        }

        let mut merged: Vec<String> = Vec::with_capacity(custom.len() + CONVENTIONAL_TYPES.len());
        for required in CONVENTIONAL_TYPES {
            if !custom.iter().any(|t| t.eq_ignore_ascii_case(required)) {
                merged.push(required.to_string());
            }
        }
        for t in custom {
            if !merged.iter().any(|m| m.to_lowercase() == t.to_lowercase()) {
                merged.push(t);
            }
        }

        self.types = merged;
        self
    }

    /// Set whether the `(scope)` component may be left out
    pub fn with_scope_optional(mut self, scope_optional: bool) -> Self {
        self.scope_optional = scope_optional;
        self
    }

    /// Restrict scopes to an allow-list; an empty list lifts the restriction
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let scopes: Vec<String> = scopes
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        self.scopes = if scopes.is_empty() { None } else { Some(scopes) };
        self
    }

    /// Disable the autosquash and merge-commit exemptions
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Effective type list, `feat` and `fix` included
    pub fn types(&self) -> &[String] {
        &self.types
    }

    pub fn scope_optional(&self) -> bool {
        self.scope_optional
    }

    pub fn scopes(&self) -> Option<&[String]> {
        self.scopes.as_deref()
    }

    pub fn strict(&self) -> bool {
        self.strict
    }
}

/// Split a comma-separated scope list as given on the command line
///
/// # Example
///
/// ```
/// use conventional_commit_hook::policy::parse_scopes;
///
/// assert_eq!(parse_scopes("api, client,,"), vec!["api", "client"]);
/// ```
pub fn parse_scopes(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
