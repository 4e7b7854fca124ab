//! Fixed schema tables for ParaSight puzzle documents.
//!
//! Every puzzle file shares one shape: five top-level fields, a
//! `YYYY-MM-DD` date and exactly ten hidden words, each carrying three clues
//! and at most three related words. The tables here are the single source of
//! truth for the validator and the typed puzzle model.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level keys every document must carry, in reporting order.
pub const REQUIRED_TOP_KEYS: [&str; 5] = ["id", "date", "title", "text", "hiddenWords"];

/// Keys every hidden word entry must carry, in reporting order.
pub const REQUIRED_ENTRY_KEYS: [&str; 4] = ["word", "difficulty", "clues", "related_words"];

/// Keys every clue must carry, in reporting order.
pub const REQUIRED_CLUE_KEYS: [&str; 3] = ["type", "clue", "points"];

/// Number of hidden words in a puzzle.
pub const HIDDEN_WORD_COUNT: usize = 10;

/// Number of clues attached to each hidden word.
pub const CLUES_PER_WORD: usize = 3;

/// Upper bound on `related_words` per hidden word.
pub const MAX_RELATED_WORDS: usize = 3;

lazy_static! {
    /// Date shape only: `9999-99-99` matches, calendar validity is not checked.
    /// A single trailing newline is tolerated.
    pub static ref DATE_PATTERN: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}\n?$").unwrap();
}

/// Check a date string against [`DATE_PATTERN`].
pub fn is_valid_date_format(date: &str) -> bool {
    DATE_PATTERN.is_match(date)
}

/// Difficulty level of a hidden word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Intermediate,
    Medium,
    Hard,
}

impl Difficulty {
    /// All levels, in the order they are listed in puzzle files.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Intermediate,
        Difficulty::Medium,
        Difficulty::Hard,
    ];

    /// Wire name of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Look up a level by its exact (case-sensitive) wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == name)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rhetorical type of a clue, from most oblique to most direct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClueType {
    Indirect,
    Suggestive,
    Straight,
}

impl ClueType {
    pub const ALL: [ClueType; 3] = [ClueType::Indirect, ClueType::Suggestive, ClueType::Straight];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClueType::Indirect => "Indirect",
            ClueType::Suggestive => "Suggestive",
            ClueType::Straight => "Straight",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

impl fmt::Display for ClueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_pattern_accepts_shape_only() {
        assert!(is_valid_date_format("2024-01-31"));
        assert!(is_valid_date_format("2024-13-45"));
        assert!(is_valid_date_format("9999-99-99"));
        assert!(is_valid_date_format("2024-01-01\n"));
    }

    #[test]
    fn test_date_pattern_rejects_other_shapes() {
        assert!(!is_valid_date_format("24-01-01"));
        assert!(!is_valid_date_format("2024/01/01"));
        assert!(!is_valid_date_format("2024-1-01"));
        assert!(!is_valid_date_format("2024-01-01T00:00"));
        assert!(!is_valid_date_format(" 2024-01-01"));
        assert!(!is_valid_date_format(""));
        assert!(!is_valid_date_format("2024-01-01\n\n"));
        assert!(!is_valid_date_format("2024-01-01\r\n"));
    }

    #[test]
    fn test_difficulty_names() {
        for level in Difficulty::ALL {
            assert_eq!(Difficulty::from_name(level.as_str()), Some(level));
        }
        assert_eq!(Difficulty::from_name("easy"), None);
        assert_eq!(Difficulty::from_name("Expert"), None);
    }

    #[test]
    fn test_clue_type_names() {
        for kind in ClueType::ALL {
            assert_eq!(ClueType::from_name(kind.as_str()), Some(kind));
        }
        assert_eq!(ClueType::from_name("Direct"), None);
    }

    #[test]
    fn test_serde_names_match_wire_names() {
        let json = serde_json::to_string(&Difficulty::Intermediate).unwrap();
        assert_eq!(json, "\"Intermediate\"");
        let parsed: ClueType = serde_json::from_str("\"Suggestive\"").unwrap();
        assert_eq!(parsed, ClueType::Suggestive);
    }
}
