use simcompose::simplifiers::{Lowercase, RemoveDiacritics};
use simcompose::tokenizers::{Pattern, QGram, Whitespace};
use simcompose::{comparator, StringComparatorBuilder, TokenSet};
use std::collections::HashSet;

fn or_exit<T>(result: simcompose::Result<T>) -> T {
    result.unwrap_or_else(|err| {
        eprintln!("{err}");
        std::process::exit(1);
    })
}

/// Walks through the builder steps one at a time.
///
/// Usage: cargo run --example builder
fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let a = "Chilpéric II son of Childeric II";
    let b = "chilperic ii son of childeric ii";

    let levenshtein = || {
        comparator::from_fn::<str, _>("levenshtein", |a, b| {
            strsim::normalized_levenshtein(a, b) as f32
        })
    };

    // Plain comparison
    let plain = StringComparatorBuilder::with(levenshtein()).build();
    println!("{plain}: {:.4}", plain.compare(a, b));

    // Simplifiers run in declared order
    let simplified = StringComparatorBuilder::with(levenshtein())
        .simplify(RemoveDiacritics)
        .simplify(Lowercase)
        .build();
    println!("{simplified}: {:.4}", simplified.compare(a, b));

    let a = "A quirky thing it is. This is a sentence.";
    let b = "This sentence is similar; a quirky thing it is.";

    let jaccard = || {
        comparator::from_fn::<TokenSet, _>("jaccard", |a, b| {
            let union = a.union(b).count();
            if union == 0 {
                return 1.0;
            }
            a.intersection(b).count() as f32 / union as f32
        })
    };

    // Tokenized comparison
    let tokenized = StringComparatorBuilder::with(jaccard())
        .tokenize(Whitespace)
        .build();
    println!("{tokenized}: {:.4}", tokenized.compare(a, b));

    // Filters are merged into a single layer
    let common: HashSet<&'static str> = ["it", "is", "a"].into_iter().collect();
    let filtered = StringComparatorBuilder::with(jaccard())
        .simplify(Lowercase)
        .tokenize(or_exit(Pattern::new(r"\W+")))
        .filter(move |token| !common.contains(token))
        .filter(|token| token.len() > 1)
        .build();
    println!("{filtered}: {:.4}", filtered.compare(a, b));

    // Tokens can be tokenized again and transformed
    let grams = StringComparatorBuilder::with(jaccard())
        .simplify(Lowercase)
        .tokenize(Whitespace)
        .transform(|token| token.chars().rev().collect())
        .tokenize(or_exit(QGram::new(3)))
        .build();
    println!("{grams}: {:.4}", grams.compare(a, b));
}
