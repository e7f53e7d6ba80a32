use crate::multiset::Multiset;
use crate::type_label;
use ahash::AHashSet;

/// A deduplicated collection of tokens.
pub type TokenSet = AHashSet<String>;

/// Splits a string into an ordered sequence of tokens.
///
/// Only [`tokenize_to_list`](Tokenizer::tokenize_to_list) must be provided;
/// the set and multiset views are derived from it on demand.
pub trait Tokenizer: Send + Sync {
    /// Returns the tokens of `input` in order of appearance.
    fn tokenize_to_list(&self, input: &str) -> Vec<String>;

    /// Returns the distinct tokens of `input`.
    fn tokenize_to_set(&self, input: &str) -> TokenSet {
        self.tokenize_to_list(input).into_iter().collect()
    }

    /// Returns the tokens of `input` with their number of occurrences.
    fn tokenize_to_multiset(&self, input: &str) -> Multiset {
        self.tokenize_to_list(input).into_iter().collect()
    }

    /// Human readable name used when describing a pipeline.
    fn name(&self) -> String {
        type_label::<Self>()
    }
}

/// A tokenizer backed by a closure.
pub struct FnTokenizer<F> {
    name: &'static str,
    function: F,
}

/// Creates a named tokenizer from a closure.
pub fn from_fn<F>(name: &'static str, function: F) -> FnTokenizer<F>
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    FnTokenizer { name, function }
}

impl<F> Tokenizer for FnTokenizer<F>
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    fn tokenize_to_list(&self, input: &str) -> Vec<String> {
        (self.function)(input)
    }

    fn name(&self) -> String {
        self.name.to_owned()
    }
}
