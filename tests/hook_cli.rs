//! End-to-end checks of the hook over the public API

use std::io::Write;

use conventional_commit_hook::exemption::{has_autosquash_prefix, is_merge_commit};
use conventional_commit_hook::hook::{Args, RESULT_FAIL, RESULT_SUCCESS, check_message, run};
use conventional_commit_hook::pattern::CommitPattern;
use conventional_commit_hook::policy::ValidationPolicy;
use conventional_commit_hook::preprocess::clean;
use conventional_commit_hook::validation::{Component, GroupMatch, is_valid, match_message};

use clap::Parser;

fn scissors() -> String {
    format!("# {} >8 {}", "-".repeat(24), "-".repeat(24))
}

fn run_hook(argv: &[&str], message: &str) -> i32 {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(message.as_bytes()).unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let mut full = vec!["conventional-commit-hook"];
    full.extend_from_slice(argv);
    full.push(&path);
    run(&Args::try_parse_from(full).unwrap()).unwrap()
}

#[test]
fn simple_feature_is_valid() {
    // Act
    let result = match_message("feat: add widget", &ValidationPolicy::default()).unwrap();

    // Assert
    assert_eq!(result.get(Component::Type), &GroupMatch::Matched("feat".to_string()));
    assert!(is_valid("feat: add widget", &ValidationPolicy::default()).unwrap());
}

#[test]
fn breaking_marker_with_scope_is_valid() {
    assert!(is_valid("fix(api)!: patch", &ValidationPolicy::default()).unwrap());
}

#[test]
fn bad_type_reports_only_type() {
    // Act
    let verdict = check_message("wrong: message", &ValidationPolicy::default()).unwrap();

    // Assert
    assert!(!verdict.valid);
    assert_eq!(verdict.missing.into_iter().collect::<Vec<_>>(), vec![Component::Type]);
}

#[test]
fn empty_forced_scope_is_invalid() {
    // Arrange
    let policy = ValidationPolicy::default().with_scope_optional(false);

    // Act & Assert
    assert!(!is_valid("feat(): x", &policy).unwrap());
}

#[test]
fn scope_allow_list_is_exclusive() {
    // Arrange
    let pattern = CommitPattern::new(&ValidationPolicy::default().with_scopes(["api", "client"]))
        .unwrap();

    // Assert
    assert!(!pattern.is_valid("feat(test): x"));
    assert!(pattern.is_valid("feat(api): x"));
    assert!(pattern.is_valid("feat(api, client): x"));
    assert!(!pattern.is_valid("feat(api; client): x"));
}

#[test]
fn body_needs_exactly_one_blank_line() {
    let pattern = CommitPattern::new(&ValidationPolicy::default()).unwrap();

    assert!(pattern.is_valid("feat: x\n\nbody"));
    assert!(!pattern.is_valid("feat: x\nbody"));
    assert!(!pattern.is_valid("feat: x\n\nbody\n\nmore"));
}

#[test]
fn verbose_commit_template_is_valid() {
    // Arrange - what git writes with `git commit --verbose`
    let message = format!(
        "feat(api): add widget\n\n\
         Widgets can now be created through the API.\n\
         # Please enter the commit message for your changes. Lines starting\n\
         # with '#' will be ignored, and an empty message aborts the commit.\n\
         {}\n\
         # Do not modify or remove the line above.\n\
         diff --git a/src/api.rs b/src/api.rs\n\
         +fn widget() {{}}\n",
        scissors()
    );

    // Act
    let cleaned = clean(&message);

    // Assert
    assert_eq!(
        cleaned,
        "feat(api): add widget\n\nWidgets can now be created through the API.\n"
    );
    assert_eq!(run_hook(&[], &message), RESULT_SUCCESS);
}

#[test]
fn exemptions() {
    assert!(has_autosquash_prefix("fixup! message"));
    assert!(!has_autosquash_prefix("fixup!message"));
    assert!(!has_autosquash_prefix(" fixup! message"));
    assert!(is_merge_commit("Merge branch 'x' into 'y'"));
    assert!(!is_merge_commit("chore: merge config"));
}

#[test]
fn hook_exit_codes() {
    assert_eq!(run_hook(&[], "feat: add widget\n"), RESULT_SUCCESS);
    assert_eq!(run_hook(&["--no-color"], "feat message\n"), RESULT_FAIL);
    assert_eq!(run_hook(&[], "fixup! whatever\n"), RESULT_SUCCESS);
    assert_eq!(run_hook(&["--strict"], "fixup! whatever\n"), RESULT_FAIL);
    assert_eq!(run_hook(&[], "Merge branch 'main' into dev\n"), RESULT_SUCCESS);
    assert_eq!(run_hook(&["--strict"], "Merge branch 'main' into dev\n"), RESULT_FAIL);
    assert_eq!(run_hook(&["--force-scope"], "feat: x\n"), RESULT_FAIL);
    assert_eq!(run_hook(&["--scopes", "api"], "feat(api): x\n"), RESULT_SUCCESS);
    assert_eq!(run_hook(&["--json"], "feat message\n"), RESULT_FAIL);
}
