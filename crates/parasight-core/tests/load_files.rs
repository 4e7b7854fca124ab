//! End-to-end checks over puzzle files on disk.

use std::path::PathBuf;

use parasight_core::{check_file, load_document, LoadError, Puzzle, Report};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn valid_file_passes() {
    let errors = check_file(fixture("valid_puzzle.json")).unwrap();
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);

    let report = Report::new(errors);
    assert_eq!(report.exit_code(), 0);
    assert_eq!(report.render(), "Validation PASSED: JSON is valid.");
}

#[test]
fn invalid_file_reports_every_violation() {
    let errors = check_file(fixture("invalid_puzzle.json")).unwrap();
    assert_eq!(
        errors,
        vec![
            "Missing top-level key: 'title'",
            "Invalid date format: '2024/06/01' (expected YYYY-MM-DD)",
            "'hiddenWords' must contain exactly 10 entries, found 9",
            "hiddenWords[2]: Invalid difficulty 'Expert'",
            "hiddenWords[5].clues[1]: 'points' must be an integer",
            "hiddenWords[7]: 'related_words' cannot have more than 3 items",
        ]
    );

    let rendered = Report::new(errors).render();
    let mut lines = rendered.lines();
    assert_eq!(
        lines.next(),
        Some("Validation FAILED with the following errors:")
    );
    assert_eq!(lines.next(), Some("- Missing top-level key: 'title'"));
    assert_eq!(lines.count(), 5);
}

#[test]
fn missing_file_is_not_found() {
    let path = fixture("does_not_exist.json");
    let err = load_document(&path).unwrap_err();
    assert!(matches!(err, LoadError::NotFound { .. }));
    assert_eq!(
        err.to_string(),
        format!("File '{}' not found.", path.display())
    );
}

#[test]
fn malformed_file_is_invalid_json() {
    let err = check_file(fixture("malformed.json")).unwrap_err();
    assert!(matches!(err, LoadError::InvalidJson(_)));

    let message = err.to_string();
    assert!(message.starts_with("Invalid JSON - "), "{}", message);
    assert!(message.contains("EOF while parsing"), "{}", message);
}

#[test]
fn valid_file_converts_to_puzzle() {
    let puzzle = Puzzle::from_json_file(fixture("valid_puzzle.json")).unwrap();
    assert_eq!(puzzle.date, "2024-06-01");
    assert_eq!(puzzle.hidden_words.len(), 10);
    assert_eq!(puzzle.max_score(), 300);
}
