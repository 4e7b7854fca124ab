//! # parasight-core
//!
//! Schema validation for ParaSight daily puzzle files.
//!
//! A puzzle file is a JSON object with an id, a `YYYY-MM-DD` date, a title,
//! the puzzle text and exactly ten hidden words. Each hidden word has a
//! difficulty, three clues and up to three related words.
//!
//! ## Key Guarantees
//!
//! 1. **Total**: any JSON value can be validated; problems become messages
//! 2. **Exhaustive**: every violation is reported, not just the first
//! 3. **Stable**: messages and their order are fixed, so output can be diffed
//!
//! ## Example
//!
//! ```rust
//! use parasight_core::{validate, Report};
//! use serde_json::json;
//!
//! let errors = validate(&json!({ "id": 1 }));
//! assert_eq!(errors[0], "Missing top-level key: 'date'");
//!
//! let report = Report::new(errors);
//! assert_eq!(report.exit_code(), 1);
//! ```

pub mod loader;
pub mod puzzle;
pub mod report;
pub mod schema;
pub mod validator;

// Re-export main types at crate root
pub use loader::{check_file, load_document, LoadError};
pub use puzzle::{Clue, HiddenWord, Puzzle, PuzzleError};
pub use report::{Report, USAGE};
pub use schema::{ClueType, Difficulty};
pub use validator::{validate, validate_violations, Violation, ViolationKind};
