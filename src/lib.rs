//! # simcompose - composable string comparators
//!
//! Builds string comparison functions out of small, independently testable
//! parts:
//!
//! 1. **Simplifiers** map a string to a simpler form (case, accents, punctuation)
//! 2. **Tokenizers** split a string into an ordered sequence of tokens, viewed
//!    as a sequence, a set or a multiset
//! 3. **Filters and transforms** drop or rewrite individual tokens
//! 4. A **base comparator** scores two strings, sequences, sets or multisets
//!
//! Composition is flattened at build time: however many simplifiers,
//! filters or transforms are added, a comparator holds one simplifier chain
//! and one decorator layer per kind, and steps run in the order they were
//! declared.
//!
//! ## Example
//!
//! ```
//! use simcompose::simplifiers::Lowercase;
//! use simcompose::tokenizers::Whitespace;
//! use simcompose::{comparator, StringComparatorBuilder};
//!
//! let same = comparator::from_fn::<[String], _>("same", |a, b| if a == b { 1.0 } else { 0.0 });
//!
//! let comparator = StringComparatorBuilder::with(same)
//!     .simplify(Lowercase)
//!     .tokenize(Whitespace)
//!     .filter(|token| token != "the")
//!     .build();
//!
//! assert_eq!(comparator.compare("The Mouse", "mouse"), 1.0);
//! println!("{comparator}");
//! ```
//!
//! ## Concurrency
//!
//! Every type is immutable after construction and `Send + Sync`. Adding a
//! step returns a new value that shares the unchanged parts, so old and new
//! comparators can be used from any number of threads at once.

mod builder;
pub mod comparator;
mod error;
pub mod factory;
mod multiset;
pub mod simplifier;
pub mod simplifiers;
mod token_stream;
pub mod tokenizer;
pub mod tokenizers;

#[cfg(test)]
mod tests;

pub use builder::{SimplifyStep, StringComparatorBuilder, TokenizeStep};
pub use comparator::{Comparator, StringComparator, TokenCollection};
pub use error::{Error, Result};
pub use multiset::Multiset;
pub use simplifier::{Chain, Simplifier};
pub use token_stream::{Composition, Conjunction, TokenFunction, TokenPredicate, TokenStream};
pub use tokenizer::{TokenSet, Tokenizer};

/// Short, path-free name of a type, used as the default description of
/// collaborators.
pub(crate) fn type_label<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base).to_owned()
}
