// End-to-end coverage of the filemod pipeline through the library API:
// request parsing, workspace resolution, transformation, and reports.

use std::fs;

use filemod::commands::filemod::file_mod;
use filemod::core::state::{create_shared_state, SharedState};
use filemod::error::TransformError;
use filemod::transform::{self, TextEncoding, TransformOutcome};
use tempfile::{tempdir, TempDir};

fn workspace() -> (TempDir, SharedState) {
    let dir = tempdir().unwrap();
    let state = create_shared_state(dir.path(), TextEncoding::Utf8).unwrap();
    (dir, state)
}

fn request(file_path: &str, regex_target: &str, replacement: &str) -> String {
    serde_json::json!({
        "file_path": file_path,
        "regex_target": regex_target,
        "replacement": replacement,
    })
    .to_string()
}

// ============================================================================
// Report contract
// ============================================================================

#[tokio::test]
async fn success_report_names_path_and_count() {
    let (dir, state) = workspace();
    fs::write(dir.path().join("notes.txt"), "hello world").unwrap();

    let report = file_mod(&state, &request("notes.txt", "world", "there"))
        .await
        .unwrap();

    assert_eq!(
        report,
        "File mod completed successfully on 'notes.txt'. 1 replacement(s) were made."
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("notes.txt")).unwrap(),
        "hello there"
    );
}

#[tokio::test]
async fn success_report_counts_every_occurrence() {
    let (dir, state) = workspace();
    fs::write(dir.path().join("list.txt"), "ab ab ab ab").unwrap();

    let report = file_mod(&state, &request("list.txt", "ab", "cd"))
        .await
        .unwrap();

    assert_eq!(
        report,
        "File mod completed successfully on 'list.txt'. 4 replacement(s) were made."
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("list.txt")).unwrap(),
        "cd cd cd cd"
    );
}

#[tokio::test]
async fn warning_report_quotes_pattern_and_path() {
    let (dir, state) = workspace();
    fs::write(dir.path().join("notes.txt"), "hello world").unwrap();

    let report = file_mod(&state, &request("notes.txt", "absent", "there"))
        .await
        .unwrap();

    assert_eq!(
        report,
        "Warning: Regex 'absent' did not match in file 'notes.txt'. No replacements were made."
    );
}

#[tokio::test]
async fn error_report_prefixes_failure_detail() {
    let (dir, state) = workspace();
    fs::write(dir.path().join("notes.txt"), "stay").unwrap();

    let report = file_mod(&state, &request("notes.txt", "(", "x"))
        .await
        .unwrap();

    assert!(report.starts_with("Error during reverse search and replace: "));
    assert_eq!(
        fs::read_to_string(dir.path().join("notes.txt")).unwrap(),
        "stay"
    );
}

// ============================================================================
// File materialization
// ============================================================================

#[tokio::test]
async fn missing_file_is_created_empty_with_warning() {
    let (dir, state) = workspace();

    let report = file_mod(&state, &request("empty.txt", "x", "y"))
        .await
        .unwrap();

    assert_eq!(
        report,
        "Warning: Regex 'x' did not match in file 'empty.txt'. No replacements were made."
    );
    let created = dir.path().join("empty.txt");
    assert!(created.exists());
    assert_eq!(fs::read_to_string(&created).unwrap(), "");
}

#[tokio::test]
async fn missing_parent_directories_are_created() {
    let (dir, state) = workspace();

    let report = file_mod(&state, &request("deep/nested/notes.txt", "x", "y"))
        .await
        .unwrap();

    assert!(report.starts_with("Warning: Regex 'x' did not match"));
    assert!(dir.path().join("deep").join("nested").join("notes.txt").exists());
}

#[tokio::test]
async fn existing_file_is_never_truncated_by_creation() {
    let (dir, state) = workspace();
    fs::write(dir.path().join("keep.txt"), "precious content").unwrap();

    file_mod(&state, &request("keep.txt", "nomatch", "y"))
        .await
        .unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join("keep.txt")).unwrap(),
        "precious content"
    );
}

// ============================================================================
// Substitution semantics
// ============================================================================

#[tokio::test]
async fn capture_groups_expand_in_replacement() {
    let (dir, state) = workspace();
    fs::write(dir.path().join("items.txt"), "a1 a2 a3").unwrap();

    let report = file_mod(&state, &request("items.txt", r"a(\d)", "b$1"))
        .await
        .unwrap();

    assert_eq!(
        report,
        "File mod completed successfully on 'items.txt'. 3 replacement(s) were made."
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("items.txt")).unwrap(),
        "b1 b2 b3"
    );
}

#[tokio::test]
async fn no_op_transformation_is_idempotent() {
    let (dir, state) = workspace();
    fs::write(dir.path().join("stable.txt"), "unchanging body").unwrap();

    for _ in 0..2 {
        let report = file_mod(&state, &request("stable.txt", "absent", "y"))
            .await
            .unwrap();
        assert!(report.starts_with("Warning:"));
        assert_eq!(
            fs::read(dir.path().join("stable.txt")).unwrap(),
            b"unchanging body"
        );
    }
}

#[tokio::test]
async fn rewrite_replaces_content_in_full() {
    let (dir, state) = workspace();
    fs::write(dir.path().join("shrink.txt"), "abcabcabc").unwrap();

    file_mod(&state, &request("shrink.txt", "abc", "x"))
        .await
        .unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join("shrink.txt")).unwrap(),
        "xxx"
    );
}

// ============================================================================
// Engine outcomes for embedders
// ============================================================================

#[tokio::test]
async fn transform_reports_typed_outcomes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("typed.txt");
    fs::write(&path, "one two two").unwrap();

    let replaced = transform::transform(&path, "two", "2", TextEncoding::Utf8)
        .await
        .unwrap();
    assert_eq!(replaced, TransformOutcome::Replaced { count: 2 });

    let untouched = transform::transform(&path, "two", "2", TextEncoding::Utf8)
        .await
        .unwrap();
    assert_eq!(untouched, TransformOutcome::NoMatch);
}

#[tokio::test]
async fn transform_reports_typed_compile_failure() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("typed.txt");
    fs::write(&path, "content").unwrap();

    let err = transform::transform(&path, "(", "x", TextEncoding::Utf8)
        .await
        .unwrap_err();

    assert!(matches!(err, TransformError::Compile { .. }));
}
