use thiserror::Error;

/// Errors raised while constructing the bundled simplifiers and tokenizers.
///
/// Composition itself never fails: every shape has a flattening rule or a
/// fallback wrap.
#[derive(Debug, Error)]
pub enum Error {
    /// A regular expression handed to a pattern based collaborator did not compile.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A q-gram tokenizer was requested with a gram length of zero.
    #[error("q-gram length must be at least 1, got {0}")]
    InvalidQGramLength(usize),
}

/// A specialized `Result` type for collaborator construction.
pub type Result<T> = std::result::Result<T, Error>;
