//! User-facing rendering of validation results.

use std::fmt;

/// Usage line printed when the wrong number of arguments is given.
pub const USAGE: &str = "Usage: jsonvalidator <filename>";

const PASSED_LINE: &str = "Validation PASSED: JSON is valid.";
const FAILED_HEADER: &str = "Validation FAILED with the following errors:";

/// Outcome of validating one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    errors: Vec<String>,
}

impl Report {
    pub fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }

    pub fn is_passed(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Process exit code: 0 when valid, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.is_passed() {
            0
        } else {
            1
        }
    }

    /// Full report text, without a trailing newline.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_passed() {
            return f.write_str(PASSED_LINE);
        }

        f.write_str(FAILED_HEADER)?;
        for error in &self.errors {
            write!(f, "\n- {}", error)?;
        }
        Ok(())
    }
}
