use crate::multiset::Multiset;
use crate::simplifier::{Chain, Simplifier};
use crate::token_stream::TokenStream;
use crate::tokenizer::{TokenSet, Tokenizer};
use crate::type_label;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// A deterministic comparison of two values producing a finite score.
///
/// The associated `Input` type declares which shape the comparator consumes:
/// `str`, an ordered token sequence `[String]`, a [`TokenSet`] or a
/// [`Multiset`]. The factory uses it to pick the matching adapter.
pub trait Comparator: Send + Sync {
    /// The shape of value this comparator consumes.
    type Input: ?Sized;

    /// Compares `a` with `b`.
    fn compare(&self, a: &Self::Input, b: &Self::Input) -> f32;

    /// Human readable name used when describing a pipeline.
    fn name(&self) -> String {
        type_label::<Self>()
    }

    /// Returns `Some` if this comparator is already an adapted string
    /// comparator, letting the factory flatten onto it instead of wrapping.
    fn as_adapted(&self) -> Option<&StringComparator> {
        None
    }
}

/// Token collections a comparator may consume after tokenization.
///
/// Implemented for `[String]`, [`TokenSet`] and [`Multiset`]; the set is closed.
pub trait TokenCollection: sealed::Sealed + 'static {
    #[doc(hidden)]
    fn adapt(comparator: Arc<dyn Comparator<Input = Self>>, tokenizer: TokenStream)
        -> StringComparator;
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for [String] {}
    impl Sealed for crate::tokenizer::TokenSet {}
    impl Sealed for crate::multiset::Multiset {}
}

impl TokenCollection for [String] {
    fn adapt(comparator: Arc<dyn Comparator<Input = Self>>, tokenizer: TokenStream) -> StringComparator {
        StringComparator::OverSequence {
            comparator,
            tokenizer,
        }
    }
}

impl TokenCollection for TokenSet {
    fn adapt(comparator: Arc<dyn Comparator<Input = Self>>, tokenizer: TokenStream) -> StringComparator {
        StringComparator::OverSet {
            comparator,
            tokenizer,
        }
    }
}

impl TokenCollection for Multiset {
    fn adapt(comparator: Arc<dyn Comparator<Input = Self>>, tokenizer: TokenStream) -> StringComparator {
        StringComparator::OverMultiset {
            comparator,
            tokenizer,
        }
    }
}

/// A comparator over strings built from a base comparator of any shape.
///
/// Both inputs are simplified and tokenized identically before being handed
/// to the base comparator. Each variant holds at most one simplifier chain and
/// one token stream; adding steps goes through
/// [`simplified`](StringComparator::simplified) or the
/// [`factory`](crate::factory) functions, which merge instead of nesting.
///
/// Cloning is cheap: every part is reference counted and immutable.
#[derive(Clone)]
pub enum StringComparator {
    /// Compares the raw strings.
    OverString {
        comparator: Arc<dyn Comparator<Input = str>>,
    },
    /// Compares the simplified strings.
    OverStringSimplified {
        comparator: Arc<dyn Comparator<Input = str>>,
        simplifier: Chain,
    },
    /// Compares the ordered token sequences.
    OverSequence {
        comparator: Arc<dyn Comparator<Input = [String]>>,
        tokenizer: TokenStream,
    },
    OverSequenceSimplified {
        comparator: Arc<dyn Comparator<Input = [String]>>,
        simplifier: Chain,
        tokenizer: TokenStream,
    },
    OverSet {
        comparator: Arc<dyn Comparator<Input = TokenSet>>,
        tokenizer: TokenStream,
    },
    OverSetSimplified {
        comparator: Arc<dyn Comparator<Input = TokenSet>>,
        simplifier: Chain,
        tokenizer: TokenStream,
    },
    OverMultiset {
        comparator: Arc<dyn Comparator<Input = Multiset>>,
        tokenizer: TokenStream,
    },
    OverMultisetSimplified {
        comparator: Arc<dyn Comparator<Input = Multiset>>,
        simplifier: Chain,
        tokenizer: TokenStream,
    },
}

impl StringComparator {
    /// Compares two strings through the full pipeline.
    pub fn compare(&self, a: &str, b: &str) -> f32 {
        match self {
            StringComparator::OverString { comparator } => comparator.compare(a, b),
            StringComparator::OverStringSimplified {
                comparator,
                simplifier,
            } => comparator.compare(&simplifier.simplify(a), &simplifier.simplify(b)),
            StringComparator::OverSequence {
                comparator,
                tokenizer,
            } => comparator.compare(&tokenizer.tokenize_to_list(a), &tokenizer.tokenize_to_list(b)),
            StringComparator::OverSequenceSimplified {
                comparator,
                simplifier,
                tokenizer,
            } => comparator.compare(
                &tokenizer.tokenize_to_list(&simplifier.simplify(a)),
                &tokenizer.tokenize_to_list(&simplifier.simplify(b)),
            ),
            StringComparator::OverSet {
                comparator,
                tokenizer,
            } => comparator.compare(&tokenizer.tokenize_to_set(a), &tokenizer.tokenize_to_set(b)),
            StringComparator::OverSetSimplified {
                comparator,
                simplifier,
                tokenizer,
            } => comparator.compare(
                &tokenizer.tokenize_to_set(&simplifier.simplify(a)),
                &tokenizer.tokenize_to_set(&simplifier.simplify(b)),
            ),
            StringComparator::OverMultiset {
                comparator,
                tokenizer,
            } => comparator.compare(
                &tokenizer.tokenize_to_multiset(a),
                &tokenizer.tokenize_to_multiset(b),
            ),
            StringComparator::OverMultisetSimplified {
                comparator,
                simplifier,
                tokenizer,
            } => comparator.compare(
                &tokenizer.tokenize_to_multiset(&simplifier.simplify(a)),
                &tokenizer.tokenize_to_multiset(&simplifier.simplify(b)),
            ),
        }
    }

    /// Returns the attached simplifier chain, if any.
    pub fn simplifier(&self) -> Option<&Chain> {
        match self {
            StringComparator::OverStringSimplified { simplifier, .. }
            | StringComparator::OverSequenceSimplified { simplifier, .. }
            | StringComparator::OverSetSimplified { simplifier, .. }
            | StringComparator::OverMultisetSimplified { simplifier, .. } => Some(simplifier),
            StringComparator::OverString { .. }
            | StringComparator::OverSequence { .. }
            | StringComparator::OverSet { .. }
            | StringComparator::OverMultiset { .. } => None,
        }
    }

    /// Returns the attached token stream, if any.
    pub fn tokenizer(&self) -> Option<&TokenStream> {
        match self {
            StringComparator::OverString { .. } | StringComparator::OverStringSimplified { .. } => {
                None
            }
            StringComparator::OverSequence { tokenizer, .. }
            | StringComparator::OverSequenceSimplified { tokenizer, .. }
            | StringComparator::OverSet { tokenizer, .. }
            | StringComparator::OverSetSimplified { tokenizer, .. }
            | StringComparator::OverMultiset { tokenizer, .. }
            | StringComparator::OverMultisetSimplified { tokenizer, .. } => Some(tokenizer),
        }
    }

    /// Name of the variant, for diagnostics.
    pub fn shape(&self) -> &'static str {
        match self {
            StringComparator::OverString { .. } => "OverString",
            StringComparator::OverStringSimplified { .. } => "OverStringSimplified",
            StringComparator::OverSequence { .. } => "OverSequence",
            StringComparator::OverSequenceSimplified { .. } => "OverSequenceSimplified",
            StringComparator::OverSet { .. } => "OverSet",
            StringComparator::OverSetSimplified { .. } => "OverSetSimplified",
            StringComparator::OverMultiset { .. } => "OverMultiset",
            StringComparator::OverMultisetSimplified { .. } => "OverMultisetSimplified",
        }
    }

    fn comparator_name(&self) -> String {
        match self {
            StringComparator::OverString { comparator }
            | StringComparator::OverStringSimplified { comparator, .. } => comparator.name(),
            StringComparator::OverSequence { comparator, .. }
            | StringComparator::OverSequenceSimplified { comparator, .. } => comparator.name(),
            StringComparator::OverSet { comparator, .. }
            | StringComparator::OverSetSimplified { comparator, .. } => comparator.name(),
            StringComparator::OverMultiset { comparator, .. }
            | StringComparator::OverMultisetSimplified { comparator, .. } => comparator.name(),
        }
    }
}

impl Comparator for StringComparator {
    type Input = str;

    fn compare(&self, a: &str, b: &str) -> f32 {
        StringComparator::compare(self, a, b)
    }

    fn name(&self) -> String {
        self.to_string()
    }

    fn as_adapted(&self) -> Option<&StringComparator> {
        Some(self)
    }
}

impl fmt::Display for StringComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.comparator_name())?;
        match (self.simplifier(), self.tokenizer()) {
            (None, None) => Ok(()),
            (Some(simplifier), None) => write!(f, " [{simplifier}]"),
            (None, Some(tokenizer)) => write!(f, " [{tokenizer}]"),
            (Some(simplifier), Some(tokenizer)) => write!(f, " [{simplifier} -> {tokenizer}]"),
        }
    }
}

impl fmt::Debug for StringComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(self.shape()).field(&self.to_string()).finish()
    }
}

/// A comparator backed by a closure.
pub struct FnComparator<I: ?Sized, F> {
    name: &'static str,
    function: F,
    _input: PhantomData<fn(&I)>,
}

/// Creates a named comparator over `I` from a closure.
///
/// ```rust
/// use simcompose::{comparator, Comparator};
///
/// let exact = comparator::from_fn::<str, _>("exact", |a, b| if a == b { 1.0 } else { 0.0 });
/// assert_eq!(exact.compare("a", "a"), 1.0);
/// ```
pub fn from_fn<I, F>(name: &'static str, function: F) -> FnComparator<I, F>
where
    I: ?Sized,
    F: Fn(&I, &I) -> f32 + Send + Sync,
{
    FnComparator {
        name,
        function,
        _input: PhantomData,
    }
}

impl<I, F> Comparator for FnComparator<I, F>
where
    I: ?Sized,
    F: Fn(&I, &I) -> f32 + Send + Sync,
{
    type Input = I;

    fn compare(&self, a: &I, b: &I) -> f32 {
        (self.function)(a, b)
    }

    fn name(&self) -> String {
        self.name.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simplifiers::Lowercase;
    use crate::tests::Identity;
    use crate::tokenizers::Whitespace;

    fn lowercase() -> Chain {
        Chain::single(Arc::new(Lowercase))
    }

    fn whitespace() -> TokenStream {
        TokenStream::new(Whitespace)
    }

    #[test]
    fn test_over_string() {
        let comparator = StringComparator::OverString {
            comparator: Arc::new(Identity::<str>::new()),
        };
        assert_eq!(comparator.compare("a b c", "a b c"), 1.0);
        assert_eq!(comparator.compare("a b c", "a b c d"), 0.0);
        assert_eq!(comparator.compare("", "a b c"), 0.0);
    }

    #[test]
    fn test_over_string_simplified() {
        let comparator = StringComparator::OverStringSimplified {
            comparator: Arc::new(Identity::<str>::new()),
            simplifier: lowercase(),
        };
        assert_eq!(comparator.compare("A B C", "a b c"), 1.0);
        assert_eq!(comparator.compare("a b c", "a b c d"), 0.0);
    }

    #[test]
    fn test_over_sequence() {
        let comparator = StringComparator::OverSequence {
            comparator: Arc::new(Identity::<[String]>::new()),
            tokenizer: whitespace(),
        };
        assert_eq!(comparator.compare("a b c", "a  b   c"), 1.0);
        assert_eq!(comparator.compare("a b c", "c b a"), 0.0);
        assert_eq!(comparator.compare("", "a b c"), 0.0);
    }

    #[test]
    fn test_over_sequence_simplified() {
        let comparator = StringComparator::OverSequenceSimplified {
            comparator: Arc::new(Identity::<[String]>::new()),
            simplifier: lowercase(),
            tokenizer: whitespace(),
        };
        assert_eq!(comparator.compare("A B C", "a b c"), 1.0);
        assert_eq!(comparator.compare("a b c", "a b c d"), 0.0);
    }

    #[test]
    fn test_over_set() {
        let comparator = StringComparator::OverSet {
            comparator: Arc::new(Identity::<TokenSet>::new()),
            tokenizer: whitespace(),
        };
        assert_eq!(comparator.compare("a b c", "c b a a"), 1.0);
        assert_eq!(comparator.compare("a b c", "a b c d"), 0.0);
    }

    #[test]
    fn test_over_set_simplified() {
        let comparator = StringComparator::OverSetSimplified {
            comparator: Arc::new(Identity::<TokenSet>::new()),
            simplifier: lowercase(),
            tokenizer: whitespace(),
        };
        assert_eq!(comparator.compare("A B C", "c b a"), 1.0);
        assert_eq!(comparator.compare("", "a b c"), 0.0);
    }

    #[test]
    fn test_over_multiset() {
        let comparator = StringComparator::OverMultiset {
            comparator: Arc::new(Identity::<Multiset>::new()),
            tokenizer: whitespace(),
        };
        assert_eq!(comparator.compare("a b a", "b a a"), 1.0);
        assert_eq!(comparator.compare("a b a", "a b"), 0.0);
    }

    #[test]
    fn test_over_multiset_simplified() {
        let comparator = StringComparator::OverMultisetSimplified {
            comparator: Arc::new(Identity::<Multiset>::new()),
            simplifier: lowercase(),
            tokenizer: whitespace(),
        };
        assert_eq!(comparator.compare("A B C", "a b c"), 1.0);
        assert_eq!(comparator.compare("a b c", "a b c c"), 0.0);
    }

    #[test]
    fn test_simplifier_runs_before_tokenizer() {
        let comparator = StringComparator::OverSequenceSimplified {
            comparator: Arc::new(from_fn::<[String], _>("length", |a, _| a.len() as f32)),
            simplifier: Chain::single(Arc::new(crate::simplifier::from_fn("spaces", |s| {
                s.replace('-', " ")
            }))),
            tokenizer: whitespace(),
        };
        assert_eq!(comparator.compare("a-b-c", ""), 3.0);
    }

    #[test]
    fn test_display() {
        let bare = StringComparator::OverString {
            comparator: Arc::new(Identity::<str>::new()),
        };
        assert_eq!(bare.to_string(), "Identity");

        let full = StringComparator::OverSetSimplified {
            comparator: Arc::new(Identity::<TokenSet>::new()),
            simplifier: lowercase(),
            tokenizer: whitespace(),
        };
        assert_eq!(full.to_string(), "Identity [Lowercase -> Whitespace]");
        assert_eq!(full.shape(), "OverSetSimplified");
    }

    #[test]
    fn test_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StringComparator>();
        assert_send_sync::<TokenStream>();
        assert_send_sync::<Chain>();
    }
}
