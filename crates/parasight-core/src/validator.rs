//! Structural validation of puzzle documents.
//!
//! The validator walks a decoded JSON value top-down and records every
//! violation it finds instead of stopping at the first one. A shape mismatch
//! (a non-list `hiddenWords`, a `clues` value of the wrong shape) only skips
//! the checks nested beneath it.
//!
//! Traversal order, and therefore error order, is fixed: top-level keys,
//! date, `hiddenWords` as a whole, then each entry's keys, difficulty,
//! clues and related words.

use std::borrow::Cow;
use std::fmt;

use serde_json::{Map, Value};
use tracing::debug;

use crate::schema::{
    is_valid_date_format, ClueType, Difficulty, CLUES_PER_WORD, HIDDEN_WORD_COUNT,
    MAX_RELATED_WORDS, REQUIRED_CLUE_KEYS, REQUIRED_ENTRY_KEYS, REQUIRED_TOP_KEYS,
};

/// Category of a schema violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// A required key is absent.
    MissingKey,
    /// A value has the wrong JSON type.
    TypeMismatch,
    /// A value is outside its enumerated set.
    InvalidValue,
    /// The date does not have the `YYYY-MM-DD` shape.
    FormatMismatch,
    /// A sequence has the wrong number of items.
    CountMismatch,
    /// A container that must be an object is something else.
    ShapeMismatch,
}

/// A single schema violation.
///
/// `Display` renders the exact line reported to users: `<location>: <message>`
/// for nested violations, or the bare message at the top level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Path prefix such as `hiddenWords[3]` or `hiddenWords[3].clues[1]`
    pub location: Option<String>,

    pub kind: ViolationKind,

    pub message: String,
}

impl Violation {
    fn top_level(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            location: None,
            kind,
            message: message.into(),
        }
    }

    fn at(location: &str, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            location: Some(location.to_string()),
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{}: {}", location, self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Validate a puzzle document and return one message per violation.
///
/// An empty list means the document is valid.
pub fn validate(document: &Value) -> Vec<String> {
    validate_violations(document)
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Validate a puzzle document, keeping the structured form of each violation.
pub fn validate_violations(document: &Value) -> Vec<Violation> {
    let mut violations = Vec::new();

    match document.as_object() {
        Some(doc) => check_document(doc, &mut violations),
        None => violations.push(Violation::top_level(
            ViolationKind::ShapeMismatch,
            "Document is not a JSON object",
        )),
    }

    debug!(violations = violations.len(), "Validated puzzle document");
    violations
}

fn check_document(doc: &Map<String, Value>, out: &mut Vec<Violation>) {
    for key in REQUIRED_TOP_KEYS {
        if !doc.contains_key(key) {
            out.push(Violation::top_level(
                ViolationKind::MissingKey,
                format!("Missing top-level key: '{}'", key),
            ));
        }
    }

    if let Some(date) = doc.get("date") {
        if !date.as_str().is_some_and(is_valid_date_format) {
            out.push(Violation::top_level(
                ViolationKind::FormatMismatch,
                format!("Invalid date format: '{}' (expected YYYY-MM-DD)", render(date)),
            ));
        }
    }

    if let Some(hidden_words) = doc.get("hiddenWords") {
        check_hidden_words(hidden_words, out);
    }
}

fn check_hidden_words(value: &Value, out: &mut Vec<Violation>) {
    let Some(entries) = value.as_array() else {
        out.push(Violation::top_level(
            ViolationKind::TypeMismatch,
            "'hiddenWords' is not a list",
        ));
        return;
    };

    // A wrong count is reported, but the entries that do exist are still checked.
    if entries.len() != HIDDEN_WORD_COUNT {
        out.push(Violation::top_level(
            ViolationKind::CountMismatch,
            format!(
                "'hiddenWords' must contain exactly {} entries, found {}",
                HIDDEN_WORD_COUNT,
                entries.len()
            ),
        ));
    }

    for (i, entry) in entries.iter().enumerate() {
        check_entry(&format!("hiddenWords[{}]", i), entry, out);
    }
}

fn check_entry(prefix: &str, entry: &Value, out: &mut Vec<Violation>) {
    let Some(entry) = entry.as_object() else {
        out.push(Violation::at(
            prefix,
            ViolationKind::ShapeMismatch,
            "Entry is not a JSON object",
        ));
        return;
    };

    for key in REQUIRED_ENTRY_KEYS {
        if !entry.contains_key(key) {
            out.push(Violation::at(
                prefix,
                ViolationKind::MissingKey,
                format!("Missing key '{}'", key),
            ));
        }
    }

    if let Some(difficulty) = entry.get("difficulty") {
        let known = difficulty
            .as_str()
            .is_some_and(|name| Difficulty::from_name(name).is_some());
        if !known {
            out.push(Violation::at(
                prefix,
                ViolationKind::InvalidValue,
                format!("Invalid difficulty '{}'", render(difficulty)),
            ));
        }
    }

    if let Some(clues) = entry.get("clues") {
        check_clues(prefix, clues, out);
    }

    if let Some(related) = entry.get("related_words") {
        match related.as_array() {
            None => out.push(Violation::at(
                prefix,
                ViolationKind::TypeMismatch,
                "'related_words' must be a list",
            )),
            Some(words) if words.len() > MAX_RELATED_WORDS => out.push(Violation::at(
                prefix,
                ViolationKind::CountMismatch,
                format!(
                    "'related_words' cannot have more than {} items",
                    MAX_RELATED_WORDS
                ),
            )),
            Some(_) => {}
        }
    }
}

fn check_clues(prefix: &str, clues: &Value, out: &mut Vec<Violation>) {
    let kind = match clues.as_array() {
        Some(items) if items.len() == CLUES_PER_WORD => {
            for (j, clue) in items.iter().enumerate() {
                check_clue(&format!("{}.clues[{}]", prefix, j), clue, out);
            }
            return;
        }
        Some(_) => ViolationKind::CountMismatch,
        None => ViolationKind::TypeMismatch,
    };

    out.push(Violation::at(
        prefix,
        kind,
        format!("'clues' must be a list of {} items", CLUES_PER_WORD),
    ));
}

fn check_clue(prefix: &str, clue: &Value, out: &mut Vec<Violation>) {
    let Some(clue) = clue.as_object() else {
        out.push(Violation::at(
            prefix,
            ViolationKind::ShapeMismatch,
            "Clue is not a JSON object",
        ));
        return;
    };

    for key in REQUIRED_CLUE_KEYS {
        if !clue.contains_key(key) {
            out.push(Violation::at(
                prefix,
                ViolationKind::MissingKey,
                format!("Missing key '{}'", key),
            ));
        }
    }

    if let Some(kind) = clue.get("type") {
        let known = kind
            .as_str()
            .is_some_and(|name| ClueType::from_name(name).is_some());
        if !known {
            out.push(Violation::at(
                prefix,
                ViolationKind::InvalidValue,
                format!("Invalid type '{}'", render(kind)),
            ));
        }
    }

    if clue.get("clue").is_some_and(|text| !text.is_string()) {
        out.push(Violation::at(
            prefix,
            ViolationKind::TypeMismatch,
            "'clue' must be a string",
        ));
    }

    if clue.get("points").is_some_and(|points| !is_integer(points)) {
        out.push(Violation::at(
            prefix,
            ViolationKind::TypeMismatch,
            "'points' must be an integer",
        ));
    }
}

/// Integer literals of any size; booleans and floats such as `3.0` or `1e2`
/// are rejected. Relies on `arbitrary_precision` keeping the literal text.
fn is_integer(value: &Value) -> bool {
    match value {
        Value::Number(n) => !n
            .to_string()
            .contains(|c: char| matches!(c, '.' | 'e' | 'E')),
        _ => false,
    }
}

/// Strings are shown raw, anything else as compact JSON.
fn render(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}
