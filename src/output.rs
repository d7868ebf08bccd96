//! Hook output rendering
//!
//! This module renders the diagnostics printed when a commit message is
//! rejected, with or without ANSI colors, and the [`Verdict`] structure
//! printed in JSON mode.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::policy::ValidationPolicy;
use crate::validation::Component;

/// ANSI escape sequences, or empty strings when colors are disabled
#[derive(Debug, Clone, Copy)]
pub struct Colors {
    pub blue: &'static str,
    pub red: &'static str,
    pub restore: &'static str,
    pub yellow: &'static str,
}

impl Colors {
    pub fn new(use_color: bool) -> Self {
        if use_color {
            Self {
                blue: "\x1b[00;34m",
                red: "\x1b[01;31m",
                restore: "\x1b[0m",
                yellow: "\x1b[00;33m",
            }
        } else {
            Self {
                blue: "",
                red: "",
                restore: "",
                yellow: "",
            }
        }
    }
}

/// Validation outcome for JSON output
///
/// # Example
///
/// ```
/// use conventional_commit_hook::output::Verdict;
///
/// let verdict = Verdict {
///     valid: true,
///     exempt: false,
///     missing: Default::default(),
///     message: "feat: add widget".to_string(),
/// };
///
/// let json = serde_json::to_string(&verdict).unwrap();
/// assert_eq!(
///     json,
///     r#"{"valid":true,"exempt":false,"missing":[],"message":"feat: add widget"}"#
/// );
/// ```
#[derive(Debug, Serialize)]
pub struct Verdict {
    /// Whether the hook accepts the message
    pub valid: bool,
    /// Accepted as an autosquash or merge commit without validation
    pub exempt: bool,
    /// Missing or malformed components
    pub missing: BTreeSet<Component>,
    /// The commit message as read from the file
    pub message: String,
}

/// Short failure notice shown for every rejected message
pub fn fail(message: &str, use_color: bool) -> String {
    let c = Colors::new(use_color);
    [
        format!("{}[Bad commit message] >>{} {}", c.red, c.restore, message),
        format!(
            "{}Your commit message does not follow Conventional Commits formatting{}",
            c.yellow, c.restore
        ),
        format!("{}https://www.conventionalcommits.org/{}", c.blue, c.restore),
    ]
    .join("\n")
}

/// Hint pointing at `--verbose`
pub fn verbose_arg(use_color: bool) -> String {
    let c = Colors::new(use_color);
    format!(
        "{y}Use the {r}--verbose{y} arg for more information{r}",
        y = c.yellow,
        r = c.restore
    )
}

/// Detailed report listing each missing component
///
/// # Example
///
/// ```
/// use conventional_commit_hook::{
///     output::fail_verbose, policy::ValidationPolicy, validation::Component,
/// };
///
/// let missing = [Component::Delim].into_iter().collect();
/// let report = fail_verbose(&missing, &ValidationPolicy::default(), false);
/// assert!(report.contains("Expected value for delim but found none."));
/// ```
pub fn fail_verbose(
    missing: &BTreeSet<Component>,
    policy: &ValidationPolicy,
    use_color: bool,
) -> String {
    let c = Colors::new(use_color);
    let mut lines = vec![String::new()];

    if !missing.is_empty() {
        lines.push(format!(
            "{}Conventional Commit messages follow a pattern like:{}",
            c.yellow, c.restore
        ));
        lines.push(String::new());
        lines.push("    type(scope): subject".to_string());
        lines.push(String::new());
        lines.push("    extended body".to_string());
        lines.push(String::new());
        lines.push(format!(
            "{}Please correct the following errors:{}",
            c.yellow, c.restore
        ));
        lines.push(String::new());
    }

    for component in missing {
        lines.push(describe_missing(*component, policy, &c));
    }

    lines.extend([
        String::new(),
        format!("{}Run:{}", c.yellow, c.restore),
        String::new(),
        "    git commit --edit --file=.git/COMMIT_EDITMSG".to_string(),
        String::new(),
        format!(
            "{}to edit the commit message and retry the commit.{}",
            c.yellow, c.restore
        ),
    ]);
    lines.join("\n")
}

fn describe_missing(component: Component, policy: &ValidationPolicy, c: &Colors) -> String {
    let separator = format!("{}, {}", c.yellow, c.restore);
    let options = |values: &[String]| values.join(separator.as_str());

    match (component, policy.scopes()) {
        (Component::Type, _) => format!(
            "{y}  - Expected value for {r}type{y} from: {r}{}",
            options(policy.types()),
            y = c.yellow,
            r = c.restore
        ),
        (Component::Scope, Some(scopes)) => format!(
            "{y}  - Expected value for {r}scope{y} from: {r}{}",
            options(scopes),
            y = c.yellow,
            r = c.restore
        ),
        (Component::Sep, _) => format!(
            "{y}  - Expected a blank line after the subject, before the {r}body{y}.{r}",
            y = c.yellow,
            r = c.restore
        ),
        (other, _) => format!(
            "{y}  - Expected value for {r}{other}{y} but found none.{r}",
            y = c.yellow,
            r = c.restore
        ),
    }
}

/// Notice for a commit message file that is not valid UTF-8
pub fn unicode_decode_error(use_color: bool) -> String {
    let c = Colors::new(use_color);
    format!(
        "\n{red}[Bad commit message encoding]{r}\n\n\
         {y}conventional-commit-hook couldn't decode your commit message.\n\
         UTF-8 encoding is assumed, please configure git to write commit messages in UTF-8.\n\
         See {b}https://git-scm.com/docs/git-commit/#_discussion{y} for more.{r}\n",
        red = c.red,
        r = c.restore,
        y = c.yellow,
        b = c.blue
    )
}
