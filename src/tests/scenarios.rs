use super::Identity;
use crate::comparator::StringComparator;
use crate::factory::{wrap, wrap_tokenized, with_simplifier};
use crate::multiset::Multiset;
use crate::simplifier::{Chain, Simplifier};
use crate::simplifiers::{Lowercase, RemoveNonWord, Replace};
use crate::token_stream::TokenStream;
use crate::tokenizer::Tokenizer;
use crate::tokenizers::Whitespace;
use crate::StringComparatorBuilder;
use std::sync::Arc;
use std::thread;

#[test]
fn test_over_string_without_simplifier() {
    let comparator = wrap(Identity::<str>::new());

    assert!(matches!(comparator, StringComparator::OverString { .. }));
    assert_eq!(comparator.compare("abc", "abc"), 1.0);
    assert_eq!(comparator.compare("abc", "abd"), 0.0);
}

#[test]
fn test_sequence_with_lowercase() {
    let comparator = wrap_tokenized(Identity::<[String]>::new(), TokenStream::new(Whitespace))
        .simplified(Arc::new(Lowercase));

    assert!(matches!(comparator, StringComparator::OverSequenceSimplified { .. }));
    assert_eq!(comparator.compare("A B C", "a b c"), 1.0);
}

#[test]
fn test_multiset_absorbs_whitespace() {
    let comparator = wrap_tokenized(Identity::<Multiset>::new(), TokenStream::new(Whitespace));
    let text = "To repeat repeat is to repeat";

    assert_eq!(comparator.compare(text, ""), 0.0);
    assert_eq!(comparator.compare(text, "To repeat is to repeat"), 0.0);
    assert_eq!(comparator.compare(text, "To  repeat  repeat  is  to  repeat"), 1.0);
}

#[test]
fn test_filter_stop_words() {
    let stream = TokenStream::new(Whitespace)
        .filter(|t| t != "the")
        .filter(|t| !["and", "or"].contains(&t));

    assert_eq!(stream.layers(), 1);
    assert_eq!(
        stream.tokenize_to_list("the mouse and cat or dog"),
        vec!["mouse", "cat", "dog"]
    );
}

#[test]
fn test_chained_simplifiers_match_direct_chain() {
    let expand: Arc<dyn Simplifier> = Arc::new(Replace::new("!", "ab").expect("valid pattern"));
    let comparator = wrap(Identity::<str>::new())
        .simplified(Arc::new(RemoveNonWord))
        .simplified(Arc::clone(&expand));
    let chain = comparator.simplifier().expect("simplifier attached");

    // The most recently added simplifier sees the raw input
    let input = "Hi!";
    let direct = RemoveNonWord.simplify(&expand.simplify(input));

    assert_eq!(chain.simplify(input), direct);
    assert_eq!(direct, "Hiab");
    assert_ne!(expand.simplify(&RemoveNonWord.simplify(input)), direct);
}

#[test]
fn test_builder_chained_simplifiers() {
    let comparator = StringComparatorBuilder::with(Identity::<str>::new())
        .simplify(RemoveNonWord)
        .simplify(Lowercase)
        .build();

    let chain = comparator.simplifier().expect("simplifier attached");
    assert_eq!(chain.to_string(), "RemoveNonWord -> Lowercase");
    assert_eq!(comparator.compare("Ça Va!", "ça va"), 1.0);
}

#[test]
fn test_unrecognised_comparator_falls_back_to_one_wrap() {
    let opaque = crate::comparator::from_fn::<str, _>("exact", |a, b| f32::from(u8::from(a == b)));
    let comparator = with_simplifier(opaque, Arc::new(Lowercase));

    match &comparator {
        StringComparator::OverStringSimplified { comparator, simplifier } => {
            assert_eq!(comparator.name(), "exact");
            assert_eq!(simplifier.len(), 1);
        }
        _ => panic!("expected OverStringSimplified"),
    }
    assert_eq!(comparator.compare("ABC", "abc"), 1.0);
}

#[test]
fn test_old_and_new_versions_coexist() {
    let bare = wrap_tokenized(Identity::<[String]>::new(), TokenStream::new(Whitespace));
    let lower = bare.simplified(Arc::new(Lowercase));
    let cleaned = lower.simplified(Arc::new(RemoveNonWord));

    assert_eq!(bare.compare("A", "a"), 0.0);
    assert_eq!(lower.compare("A", "a"), 1.0);
    assert_eq!(lower.compare("a!", "a"), 0.0);
    assert_eq!(cleaned.compare("A!", "a"), 1.0);
    assert_eq!(cleaned.simplifier().map(Chain::len), Some(2));
}

#[test]
fn test_concurrent_compare_and_build() {
    let shared = StringComparatorBuilder::with(Identity::<Multiset>::new())
        .simplify(Lowercase)
        .tokenize(Whitespace)
        .build();

    thread::scope(|scope| {
        for i in 0..8 {
            let shared = &shared;
            scope.spawn(move || {
                let extended = shared.simplified(Arc::new(RemoveNonWord));
                for _ in 0..100 {
                    assert_eq!(shared.compare("B a", "a b"), 1.0);
                    assert_eq!(extended.compare("a, b!", "A,B"), 1.0);
                    assert_eq!(shared.compare(&format!("a {i}"), "a"), 0.0);
                }
            });
        }
    });
}
