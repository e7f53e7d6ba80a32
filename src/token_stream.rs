use crate::tokenizer::Tokenizer;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// A shared predicate deciding whether a token is kept.
pub type TokenPredicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// A shared function mapping one token to another.
pub type TokenFunction = Arc<dyn Fn(String) -> String + Send + Sync>;

/// Predicates that must all accept a token, evaluated left to right.
#[derive(Clone)]
pub struct Conjunction {
    predicates: Vec<TokenPredicate>,
}

impl Conjunction {
    fn single(predicate: TokenPredicate) -> Self {
        Self {
            predicates: vec![predicate],
        }
    }

    /// Returns a new conjunction that also requires `predicate`, checked last.
    fn and(&self, predicate: TokenPredicate) -> Self {
        let mut predicates = self.predicates.clone();
        predicates.push(predicate);
        Self { predicates }
    }

    /// Returns true if every predicate accepts `token`.
    pub fn test(&self, token: &str) -> bool {
        self.predicates.iter().all(|predicate| predicate(token))
    }

    /// Number of predicates folded into this conjunction.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Always false; a conjunction holds at least one predicate.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

/// Functions applied to every token, first declared first.
#[derive(Clone)]
pub struct Composition {
    functions: Vec<TokenFunction>,
}

impl Composition {
    fn single(function: TokenFunction) -> Self {
        Self {
            functions: vec![function],
        }
    }

    /// Returns a new composition that applies `function` after the existing ones.
    fn then(&self, function: TokenFunction) -> Self {
        let mut functions = self.functions.clone();
        functions.push(function);
        Self { functions }
    }

    /// Maps `token` through every function in order.
    pub fn apply(&self, token: String) -> String {
        self.functions
            .iter()
            .fold(token, |token, function| function(token))
    }

    /// Number of functions folded into this composition.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Always false; a composition holds at least one function.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

/// A tokenizer together with the filters, transforms and follow-up
/// tokenizers attached to it.
///
/// The shapes form a closed set. Adding a step to a stream never mutates
/// it; the `filter`, `transform` and `tokenize` methods return a new stream
/// that shares the untouched parts. Consecutive steps of the same kind are
/// merged into one layer so the token sequence is walked once per kind:
///
/// | existing shape      | `filter(p)`                       | `transform(f)`               |
/// |---------------------|-----------------------------------|------------------------------|
/// | `Filter`            | same layer, predicate `and` `p`   | new `Transform` layer        |
/// | `TransformFilter`   | same layer, predicate `and` `p`   | new `Transform` layer        |
/// | `Transform`         | new `TransformFilter` layer       | same layer, function then `f`|
/// | `Tokenizer`, `Recursive` | new `Filter` layer           | new `Transform` layer        |
#[derive(Clone)]
pub enum TokenStream {
    /// A plain tokenizer.
    Tokenizer(Arc<dyn Tokenizer>),

    /// Drops tokens rejected by the predicate.
    Filter {
        source: Arc<TokenStream>,
        predicate: Conjunction,
    },

    /// Maps every token through the function.
    Transform {
        source: Arc<TokenStream>,
        function: Composition,
    },

    /// Drops tokens coming out of a `Transform` layer.
    TransformFilter {
        source: Arc<TokenStream>,
        predicate: Conjunction,
    },

    /// Tokenizes with the first stage, then re-tokenizes every token with
    /// each following stage.
    Recursive { stages: Vec<TokenStream> },
}

impl TokenStream {
    /// Starts a stream from a plain tokenizer.
    pub fn new<T: Tokenizer + 'static>(tokenizer: T) -> Self {
        TokenStream::Tokenizer(Arc::new(tokenizer))
    }

    /// Returns a stream that additionally drops tokens for which `predicate`
    /// returns false.
    pub fn filter<P>(&self, predicate: P) -> TokenStream
    where
        P: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.with_predicate(Arc::new(predicate))
    }

    /// Shared-predicate variant of [`filter`](TokenStream::filter).
    pub fn with_predicate(&self, predicate: TokenPredicate) -> TokenStream {
        match self {
            TokenStream::Filter {
                source,
                predicate: existing,
            } => {
                trace!(predicates = existing.len() + 1, "merging filter");
                TokenStream::Filter {
                    source: Arc::clone(source),
                    predicate: existing.and(predicate),
                }
            }
            TokenStream::TransformFilter {
                source,
                predicate: existing,
            } => {
                trace!(predicates = existing.len() + 1, "merging transform filter");
                TokenStream::TransformFilter {
                    source: Arc::clone(source),
                    predicate: existing.and(predicate),
                }
            }
            TokenStream::Transform { .. } => {
                debug!(stream = %self, "wrapping transform in filter");
                TokenStream::TransformFilter {
                    source: Arc::new(self.clone()),
                    predicate: Conjunction::single(predicate),
                }
            }
            TokenStream::Tokenizer(_) | TokenStream::Recursive { .. } => {
                debug!(stream = %self, "wrapping stream in filter");
                TokenStream::Filter {
                    source: Arc::new(self.clone()),
                    predicate: Conjunction::single(predicate),
                }
            }
        }
    }

    /// Returns a stream that additionally maps every token through `function`.
    pub fn transform<F>(&self, function: F) -> TokenStream
    where
        F: Fn(String) -> String + Send + Sync + 'static,
    {
        self.with_function(Arc::new(function))
    }

    /// Shared-function variant of [`transform`](TokenStream::transform).
    pub fn with_function(&self, function: TokenFunction) -> TokenStream {
        match self {
            TokenStream::Transform {
                source,
                function: existing,
            } => {
                trace!(functions = existing.len() + 1, "merging transform");
                TokenStream::Transform {
                    source: Arc::clone(source),
                    function: existing.then(function),
                }
            }
            TokenStream::Tokenizer(_)
            | TokenStream::Filter { .. }
            | TokenStream::TransformFilter { .. }
            | TokenStream::Recursive { .. } => {
                debug!(stream = %self, "wrapping stream in transform");
                TokenStream::Transform {
                    source: Arc::new(self.clone()),
                    function: Composition::single(function),
                }
            }
        }
    }

    /// Returns a stream whose tokens are each tokenized again by `tokenizer`.
    pub fn tokenize<T: Tokenizer + 'static>(&self, tokenizer: T) -> TokenStream {
        self.then_stream(TokenStream::new(tokenizer))
    }

    /// Appends a whole stream as the next recursive stage.
    pub fn then_stream(&self, next: TokenStream) -> TokenStream {
        match self {
            TokenStream::Recursive { stages } => {
                trace!(stages = stages.len() + 1, "appending tokenizer stage");
                let mut stages = stages.clone();
                stages.push(next);
                TokenStream::Recursive { stages }
            }
            TokenStream::Tokenizer(_)
            | TokenStream::Filter { .. }
            | TokenStream::Transform { .. }
            | TokenStream::TransformFilter { .. } => {
                debug!(stream = %self, "starting recursive tokenization");
                TokenStream::Recursive {
                    stages: vec![self.clone(), next],
                }
            }
        }
    }

    /// Number of nested decorator layers above the innermost tokenizer or
    /// recursive stage list.
    pub fn layers(&self) -> usize {
        match self {
            TokenStream::Tokenizer(_) | TokenStream::Recursive { .. } => 0,
            TokenStream::Filter { source, .. }
            | TokenStream::Transform { source, .. }
            | TokenStream::TransformFilter { source, .. } => 1 + source.layers(),
        }
    }
}

impl Tokenizer for TokenStream {
    fn tokenize_to_list(&self, input: &str) -> Vec<String> {
        match self {
            TokenStream::Tokenizer(tokenizer) => tokenizer.tokenize_to_list(input),
            TokenStream::Filter { source, predicate }
            | TokenStream::TransformFilter { source, predicate } => source
                .tokenize_to_list(input)
                .into_iter()
                .filter(|token| predicate.test(token))
                .collect(),
            TokenStream::Transform { source, function } => source
                .tokenize_to_list(input)
                .into_iter()
                .map(|token| function.apply(token))
                .collect(),
            TokenStream::Recursive { stages } => {
                let Some((first, rest)) = stages.split_first() else {
                    return Vec::new();
                };
                let mut tokens = first.tokenize_to_list(input);
                for stage in rest {
                    tokens = tokens
                        .iter()
                        .flat_map(|token| stage.tokenize_to_list(token))
                        .collect();
                }
                tokens
            }
        }
    }

    fn name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TokenStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenStream::Tokenizer(tokenizer) => f.write_str(&tokenizer.name()),
            TokenStream::Filter { source, predicate }
            | TokenStream::TransformFilter { source, predicate } => {
                write!(f, "{source} -> filter({})", predicate.len())
            }
            TokenStream::Transform { source, function } => {
                write!(f, "{source} -> transform({})", function.len())
            }
            TokenStream::Recursive { stages } => {
                for (i, stage) in stages.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" -> ")?;
                    }
                    write!(f, "{stage}")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Debug for TokenStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TokenStream").field(&self.to_string()).finish()
    }
}
