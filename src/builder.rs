use crate::comparator::{Comparator, StringComparator, TokenCollection};
use crate::factory::{wrap, wrap_tokenized};
use crate::simplifier::Simplifier;
use crate::token_stream::TokenStream;
use crate::tokenizer::Tokenizer;
use std::sync::Arc;
use tracing::debug;

/// Entry point for assembling a [`StringComparator`] step by step.
///
/// Steps run in the order they are declared: simplifiers first, then the
/// tokenizer, then filters, transforms and further tokenizers. Comparators
/// over token collections cannot be built until a tokenizer is given, and
/// simplifiers cannot follow tokenization; both are enforced by the types.
///
/// # Example
///
/// ```rust
/// use simcompose::simplifiers::{Lowercase, RemoveDiacritics};
/// use simcompose::tokenizers::Whitespace;
/// use simcompose::{comparator, StringComparatorBuilder, TokenSet};
///
/// let overlap = comparator::from_fn::<TokenSet, _>("overlap", |a, b| {
///     a.intersection(b).count() as f32
/// });
///
/// let comparator = StringComparatorBuilder::with(overlap)
///     .simplify(RemoveDiacritics)
///     .simplify(Lowercase)
///     .tokenize(Whitespace)
///     .filter(|token| token != "of")
///     .build();
///
/// assert_eq!(comparator.compare("Chilpéric son of Childeric", "chilperic of childeric"), 2.0);
/// ```
pub struct StringComparatorBuilder;

impl StringComparatorBuilder {
    /// Starts a pipeline around `comparator`.
    pub fn with<C: Comparator + 'static>(comparator: C) -> SimplifyStep<C> {
        SimplifyStep {
            comparator,
            simplifiers: Vec::new(),
        }
    }
}

/// Builder state before tokenization. Accepts simplifiers.
pub struct SimplifyStep<C> {
    comparator: C,
    /// In declared order
    simplifiers: Vec<Arc<dyn Simplifier>>,
}

impl<C: Comparator + 'static> SimplifyStep<C> {
    /// Adds a simplifier that runs after the previously declared ones.
    pub fn simplify<S: Simplifier + 'static>(self, simplifier: S) -> Self {
        self.simplify_shared(Arc::new(simplifier))
    }

    /// Shared-simplifier variant of [`simplify`](SimplifyStep::simplify).
    pub fn simplify_shared(mut self, simplifier: Arc<dyn Simplifier>) -> Self {
        self.simplifiers.push(simplifier);
        self
    }
}

impl<C: Comparator<Input = str> + 'static> SimplifyStep<C> {
    /// Builds a comparator over simplified strings.
    pub fn build(self) -> StringComparator {
        finish(wrap(self.comparator), self.simplifiers)
    }
}

impl<C> SimplifyStep<C>
where
    C: Comparator + 'static,
    C::Input: TokenCollection,
{
    /// Sets the tokenizer that splits the simplified strings.
    pub fn tokenize<T: Tokenizer + 'static>(self, tokenizer: T) -> TokenizeStep<C> {
        self.tokenize_stream(TokenStream::new(tokenizer))
    }

    /// Uses an already assembled token stream as the tokenizer.
    pub fn tokenize_stream(self, tokenizer: TokenStream) -> TokenizeStep<C> {
        TokenizeStep {
            comparator: self.comparator,
            simplifiers: self.simplifiers,
            tokenizer,
        }
    }
}

/// Builder state after tokenization. Accepts token level steps.
pub struct TokenizeStep<C> {
    comparator: C,
    simplifiers: Vec<Arc<dyn Simplifier>>,
    tokenizer: TokenStream,
}

impl<C> TokenizeStep<C>
where
    C: Comparator + 'static,
    C::Input: TokenCollection,
{
    /// Keeps only tokens accepted by `predicate`.
    pub fn filter<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.tokenizer = self.tokenizer.filter(predicate);
        self
    }

    /// Maps every token through `function`.
    pub fn transform<F>(mut self, function: F) -> Self
    where
        F: Fn(String) -> String + Send + Sync + 'static,
    {
        self.tokenizer = self.tokenizer.transform(function);
        self
    }

    /// Tokenizes every token produced so far again with `tokenizer`.
    pub fn tokenize<T: Tokenizer + 'static>(mut self, tokenizer: T) -> Self {
        self.tokenizer = self.tokenizer.tokenize(tokenizer);
        self
    }

    /// Builds a comparator over the resulting token collection.
    pub fn build(self) -> StringComparator {
        finish(
            wrap_tokenized(self.comparator, self.tokenizer),
            self.simplifiers,
        )
    }
}

/// Attaches `simplifiers`, given in declared order, so that the first
/// declared one runs first on the raw input.
fn finish(adapted: StringComparator, simplifiers: Vec<Arc<dyn Simplifier>>) -> StringComparator {
    // Each addition runs before what is already attached
    let comparator = simplifiers
        .into_iter()
        .rev()
        .fold(adapted, |comparator, simplifier| comparator.simplified(simplifier));

    debug!(comparator = %comparator, shape = comparator.shape(), "built string comparator");
    comparator
}
