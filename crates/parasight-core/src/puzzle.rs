//! Typed view of a validated puzzle.
//!
//! The validator works on untyped JSON so it can report every problem in a
//! malformed file. Once a document passes, it can be turned into these types
//! for code that consumes puzzles.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::schema::{ClueType, Difficulty};
use crate::validator::validate;

/// Errors that can occur when building a [`Puzzle`].
#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("Failed to read puzzle file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Puzzle failed validation with {} error(s)", .0.len())]
    Invalid(Vec<String>),
}

/// A single clue for a hidden word.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Clue {
    #[serde(rename = "type")]
    pub kind: ClueType,

    pub clue: String,

    pub points: i64,
}

/// A word hidden in the puzzle text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HiddenWord {
    /// Answer text. Not constrained by the schema, so kept as raw JSON.
    pub word: Value,

    pub difficulty: Difficulty,

    /// Ordered from the most oblique clue to the most direct one
    pub clues: Vec<Clue>,

    pub related_words: Vec<Value>,
}

impl HiddenWord {
    /// Points for solving on the best clue.
    pub fn max_points(&self) -> i64 {
        self.clues.iter().map(|c| c.points).max().unwrap_or(0)
    }
}

/// A daily puzzle: one paragraph of text with ten hidden words.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Puzzle {
    pub id: Value,

    /// `YYYY-MM-DD`
    pub date: String,

    pub title: String,

    pub text: String,

    #[serde(rename = "hiddenWords")]
    pub hidden_words: Vec<HiddenWord>,
}

impl Puzzle {
    /// Validate a decoded document and convert it.
    pub fn from_value(document: Value) -> Result<Self, PuzzleError> {
        let errors = validate(&document);
        if !errors.is_empty() {
            return Err(PuzzleError::Invalid(errors));
        }
        Ok(serde_json::from_value(document)?)
    }

    /// Parse a puzzle from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, PuzzleError> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Parse a puzzle from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PuzzleError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Score reachable when every word is solved on its best clue.
    pub fn max_score(&self) -> i64 {
        self.hidden_words.iter().map(HiddenWord::max_points).sum()
    }

    /// Hidden words at the given difficulty, in puzzle order.
    pub fn words_with_difficulty(
        &self,
        difficulty: Difficulty,
    ) -> impl Iterator<Item = &HiddenWord> + '_ {
        self.hidden_words
            .iter()
            .filter(move |w| w.difficulty == difficulty)
    }
}
