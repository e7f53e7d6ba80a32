//! Commonly used tokenizers.

use crate::error::{Error, Result};
use crate::tokenizer::Tokenizer;
use regex::Regex;

/// Splits on runs of whitespace. Leading and trailing whitespace produce no tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct Whitespace;

impl Tokenizer for Whitespace {
    fn tokenize_to_list(&self, input: &str) -> Vec<String> {
        input.split_whitespace().map(str::to_owned).collect()
    }
}

/// Splits on every match of a regular expression, dropping empty tokens.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compiles `pattern` into a splitting tokenizer.
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }
}

impl Tokenizer for Pattern {
    fn tokenize_to_list(&self, input: &str) -> Vec<String> {
        self.regex
            .split(input)
            .filter(|token| !token.is_empty())
            .map(str::to_owned)
            .collect()
    }

    fn name(&self) -> String {
        format!("Pattern({})", self.regex.as_str())
    }
}

/// Produces every run of `q` consecutive characters.
///
/// Input shorter than `q` yields itself as the only token; empty input yields
/// no tokens.
#[derive(Debug, Clone, Copy)]
pub struct QGram {
    q: usize,
}

impl QGram {
    /// Creates a q-gram tokenizer. `q` must be at least 1.
    pub fn new(q: usize) -> Result<Self> {
        if q == 0 {
            return Err(Error::InvalidQGramLength(q));
        }
        Ok(Self { q })
    }

    /// Returns the gram length.
    pub fn q(&self) -> usize {
        self.q
    }
}

impl Tokenizer for QGram {
    fn tokenize_to_list(&self, input: &str) -> Vec<String> {
        let chars: Vec<char> = input.chars().collect();
        if chars.is_empty() {
            return Vec::new();
        }
        if chars.len() <= self.q {
            return vec![input.to_owned()];
        }
        chars
            .windows(self.q)
            .map(|window| window.iter().collect())
            .collect()
    }

    fn name(&self) -> String {
        format!("QGram({})", self.q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_collapses_runs() {
        assert_eq!(
            Whitespace.tokenize_to_list("  To  repeat\trepeat \n"),
            vec!["To", "repeat", "repeat"]
        );
        assert!(Whitespace.tokenize_to_list("").is_empty());
        assert!(Whitespace.tokenize_to_list("   ").is_empty());
    }

    #[test]
    fn test_pattern_split() {
        let pattern = Pattern::new(r"[,;]\s*").expect("valid pattern");
        assert_eq!(pattern.tokenize_to_list("a, b;c,,"), vec!["a", "b", "c"]);
        assert_eq!(pattern.name(), r"Pattern([,;]\s*)");
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(matches!(Pattern::new("("), Err(Error::InvalidPattern(_))));
    }

    #[test]
    fn test_qgram() {
        let qgram = QGram::new(2).expect("valid q");
        assert_eq!(qgram.tokenize_to_list("abcd"), vec!["ab", "bc", "cd"]);
        assert_eq!(qgram.tokenize_to_list("a"), vec!["a"]);
        assert_eq!(qgram.tokenize_to_list("ab"), vec!["ab"]);
        assert!(qgram.tokenize_to_list("").is_empty());
    }

    #[test]
    fn test_qgram_counts_characters() {
        let qgram = QGram::new(2).expect("valid q");
        assert_eq!(qgram.tokenize_to_list("éçà"), vec!["éç", "çà"]);
    }

    #[test]
    fn test_qgram_rejects_zero() {
        assert!(matches!(QGram::new(0), Err(Error::InvalidQGramLength(0))));
    }
}
