use ahash::AHashMap as HashMap;

/// A bag of tokens: each distinct token together with its number of occurrences.
///
/// Equality is by value: two multisets are equal when every token occurs the
/// same number of times in both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Multiset {
    counts: HashMap<String, usize>,
    total: usize,
}

impl Multiset {
    /// Creates an empty multiset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `token`.
    pub fn insert(&mut self, token: String) {
        *self.counts.entry(token).or_insert(0) += 1;
        self.total += 1;
    }

    /// Returns how often `token` occurs.
    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Returns the total number of occurrences, counting duplicates.
    pub fn len(&self) -> usize {
        self.total
    }

    /// Returns true if no token was added.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Returns the number of distinct tokens.
    pub fn distinct_len(&self) -> usize {
        self.counts.len()
    }

    /// Iterates over distinct tokens and their counts in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(token, &count)| (token.as_str(), count))
    }
}

impl FromIterator<String> for Multiset {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut multiset = Multiset::new();
        for token in iter {
            multiset.insert(token);
        }
        multiset
    }
}

impl Extend<String> for Multiset {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for token in iter {
            self.insert(token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let multiset: Multiset = ["to", "be", "or", "not", "to", "be"]
            .into_iter()
            .map(String::from)
            .collect();

        assert_eq!(multiset.count("to"), 2);
        assert_eq!(multiset.count("not"), 1);
        assert_eq!(multiset.count("missing"), 0);
        assert_eq!(multiset.len(), 6);
        assert_eq!(multiset.distinct_len(), 4);
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let a: Multiset = ["x", "y", "x"].into_iter().map(String::from).collect();
        let b: Multiset = ["y", "x", "x"].into_iter().map(String::from).collect();
        let c: Multiset = ["y", "x"].into_iter().map(String::from).collect();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_empty() {
        let multiset = Multiset::new();
        assert!(multiset.is_empty());
        assert_eq!(multiset.iter().count(), 0);
    }
}
