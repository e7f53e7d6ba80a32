//! Commonly used simplifiers.

use crate::error::Result;
use crate::simplifier::Simplifier;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Converts to lower case.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lowercase;

impl Simplifier for Lowercase {
    fn simplify(&self, input: &str) -> String {
        input.to_lowercase()
    }
}

/// Converts to upper case.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uppercase;

impl Simplifier for Uppercase {
    fn simplify(&self, input: &str) -> String {
        input.to_uppercase()
    }
}

/// Strips accents and other combining marks after canonical decomposition.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveDiacritics;

impl Simplifier for RemoveDiacritics {
    fn simplify(&self, input: &str) -> String {
        input.nfd().filter(|&c| !is_combining_mark(c)).collect()
    }
}

/// Removes every character that is not a word character.
///
/// Word characters are Unicode letters, digits and connector punctuation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveNonWord;

impl Simplifier for RemoveNonWord {
    fn simplify(&self, input: &str) -> String {
        input
            .chars()
            .filter(|&c| c.is_alphanumeric() || c == '_')
            .collect()
    }
}

/// Replaces every match of a regular expression.
#[derive(Debug, Clone)]
pub struct Replace {
    regex: Regex,
    replacement: String,
}

impl Replace {
    /// Compiles `pattern`; matches are replaced by `replacement` (which may
    /// refer to capture groups as `$1`).
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self> {
        Ok(Self {
            regex: Regex::new(pattern)?,
            replacement: replacement.into(),
        })
    }
}

impl Simplifier for Replace {
    fn simplify(&self, input: &str) -> String {
        self.regex
            .replace_all(input, self.replacement.as_str())
            .into_owned()
    }

    fn name(&self) -> String {
        format!("Replace({} -> {})", self.regex.as_str(), self.replacement)
    }
}
