//! Construction and flattening of [`StringComparator`]s.
//!
//! Every function here builds a new comparator and leaves its inputs intact.
//! Adding a simplifier to an adapted comparator merges it into the existing
//! simplifier slot instead of wrapping another layer around it:
//!
//! | existing                         | after adding `s`                                   |
//! |----------------------------------|----------------------------------------------------|
//! | `OverString { c }`               | `OverStringSimplified { c, [s] }`                  |
//! | `OverStringSimplified { c, ch }` | `OverStringSimplified { c, [s, ..ch] }`            |
//! | `OverSequence { c, t }`          | `OverSequenceSimplified { c, [s], t }`             |
//! | `OverSequenceSimplified { c, ch, t }` | `OverSequenceSimplified { c, [s, ..ch], t }`  |
//! | set and multiset variants        | same as the sequence variants                      |
//! | any other string comparator `x`  | `OverStringSimplified { x, [s] }`                  |
//!
//! The newly added simplifier runs first on the raw input. Builders that
//! want declared order to equal application order add their simplifiers
//! last-declared first, as [`StringComparatorBuilder`](crate::StringComparatorBuilder) does.

use crate::comparator::{Comparator, StringComparator, TokenCollection};
use crate::simplifier::{Chain, Simplifier};
use crate::token_stream::TokenStream;
use std::sync::Arc;
use tracing::{debug, trace};

/// Adapts a string comparator.
///
/// Returns `comparator` itself (as a clone sharing all parts) if it already
/// is an adapted comparator, so `wrap(wrap(x))` has the same structure as
/// `wrap(x)`. Anything else becomes a bare `OverString`.
pub fn wrap<C>(comparator: C) -> StringComparator
where
    C: Comparator<Input = str> + 'static,
{
    if let Some(adapted) = comparator.as_adapted() {
        return adapted.clone();
    }
    StringComparator::OverString {
        comparator: Arc::new(comparator),
    }
}

/// Adapts a comparator over tokens.
///
/// The comparator's input type selects the adapter: `[String]` gives
/// `OverSequence`, [`TokenSet`](crate::TokenSet) gives `OverSet` and
/// [`Multiset`](crate::Multiset) gives `OverMultiset`.
pub fn wrap_tokenized<C>(comparator: C, tokenizer: TokenStream) -> StringComparator
where
    C: Comparator + 'static,
    C::Input: TokenCollection,
{
    <C::Input as TokenCollection>::adapt(Arc::new(comparator), tokenizer)
}

/// Adds a simplifier in front of any string comparator.
///
/// Adapted comparators are flattened through
/// [`StringComparator::simplified`]. A comparator the factory does not
/// recognise is treated as an opaque string comparator and wrapped once.
pub fn with_simplifier<C>(comparator: C, simplifier: Arc<dyn Simplifier>) -> StringComparator
where
    C: Comparator<Input = str> + 'static,
{
    if let Some(adapted) = comparator.as_adapted() {
        return adapted.simplified(simplifier);
    }
    debug!(
        comparator = %comparator.name(),
        "wrapping unrecognised string comparator with simplifier"
    );
    StringComparator::OverStringSimplified {
        comparator: Arc::new(comparator),
        simplifier: Chain::single(simplifier),
    }
}

impl StringComparator {
    /// Returns a comparator that runs `simplifier` on both inputs before
    /// everything this comparator already does.
    ///
    /// The result always has exactly one simplifier chain; an existing chain
    /// is extended rather than wrapped.
    pub fn simplified(&self, simplifier: Arc<dyn Simplifier>) -> StringComparator {
        trace!(shape = self.shape(), simplifier = %simplifier.name(), "adding simplifier");

        match self {
            StringComparator::OverString { comparator } => StringComparator::OverStringSimplified {
                comparator: Arc::clone(comparator),
                simplifier: Chain::single(simplifier),
            },
            StringComparator::OverStringSimplified {
                comparator,
                simplifier: existing,
            } => StringComparator::OverStringSimplified {
                comparator: Arc::clone(comparator),
                simplifier: Chain::compose(simplifier, existing),
            },
            StringComparator::OverSequence {
                comparator,
                tokenizer,
            } => StringComparator::OverSequenceSimplified {
                comparator: Arc::clone(comparator),
                simplifier: Chain::single(simplifier),
                tokenizer: tokenizer.clone(),
            },
            StringComparator::OverSequenceSimplified {
                comparator,
                simplifier: existing,
                tokenizer,
            } => StringComparator::OverSequenceSimplified {
                comparator: Arc::clone(comparator),
                simplifier: Chain::compose(simplifier, existing),
                tokenizer: tokenizer.clone(),
            },
            StringComparator::OverSet {
                comparator,
                tokenizer,
            } => StringComparator::OverSetSimplified {
                comparator: Arc::clone(comparator),
                simplifier: Chain::single(simplifier),
                tokenizer: tokenizer.clone(),
            },
            StringComparator::OverSetSimplified {
                comparator,
                simplifier: existing,
                tokenizer,
            } => StringComparator::OverSetSimplified {
                comparator: Arc::clone(comparator),
                simplifier: Chain::compose(simplifier, existing),
                tokenizer: tokenizer.clone(),
            },
            StringComparator::OverMultiset {
                comparator,
                tokenizer,
            } => StringComparator::OverMultisetSimplified {
                comparator: Arc::clone(comparator),
                simplifier: Chain::single(simplifier),
                tokenizer: tokenizer.clone(),
            },
            StringComparator::OverMultisetSimplified {
                comparator,
                simplifier: existing,
                tokenizer,
            } => StringComparator::OverMultisetSimplified {
                comparator: Arc::clone(comparator),
                simplifier: Chain::compose(simplifier, existing),
                tokenizer: tokenizer.clone(),
            },
        }
    }
}
