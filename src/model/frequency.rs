//! Token frequency tables.
//!
//! A [`Frequencies`] table maps each token to the number of times it was seen.
//! Tables are built per document, summed per category, and summed again into
//! the model's global table. Summation never mutates its inputs.

use ahash::AHashMap;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::standard::StandardAnalyzer;
use crate::corpus::document::DocumentRef;
use crate::corpus::extractor::TextExtractor;
use crate::error::Result;

/// A multiset of tokens, stored as token → count.
///
/// Looking up a token that was never counted yields `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frequencies {
    counts: AHashMap<String, u64>,
}

impl Frequencies {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every token produced by `tokens`.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counts: AHashMap<String, u64> = AHashMap::new();
        for token in tokens {
            *counts.entry(token.into()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Analyze `text` and count the resulting tokens.
    pub fn from_text(analyzer: &dyn Analyzer, text: &str) -> Result<Self> {
        Ok(Self::from_tokens(analyzer.analyze(text)?.map(|t| t.text)))
    }

    /// Occurrences of `token`, or `0` when unseen.
    pub fn get(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Whether `token` has been counted at least once.
    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the table holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterate over `(token, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(token, count)| (token.as_str(), *count))
    }

    /// `(token, count)` pairs ordered by token. Float sums over a table walk
    /// this order so they come out bit-identical for equal tables.
    pub fn sorted(&self) -> Vec<(&str, u64)> {
        let mut pairs: Vec<(&str, u64)> = self.iter().collect();
        pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));
        pairs
    }

    /// A new table holding the counts of `self` plus those of `other`.
    pub fn merged(&self, other: &Frequencies) -> Frequencies {
        let mut counts = self.counts.clone();
        for (token, count) in &other.counts {
            *counts.entry(token.clone()).or_insert(0) += count;
        }
        Frequencies { counts }
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for Frequencies {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut counts: AHashMap<String, u64> = AHashMap::new();
        for (token, count) in iter {
            *counts.entry(token.into()).or_insert(0) += count;
        }
        Self { counts }
    }
}

/// Tokenize `text` with the standard analyzer and count the tokens.
pub fn document_frequencies(text: &str) -> Result<Frequencies> {
    let analyzer = StandardAnalyzer::new()?;
    Frequencies::from_text(&analyzer, text)
}

/// Sum any number of tables into a new one. An empty input yields an empty
/// table.
pub fn sum_frequencies<'a, I>(tables: I) -> Frequencies
where
    I: IntoIterator<Item = &'a Frequencies>,
{
    tables
        .into_iter()
        .fold(Frequencies::new(), |acc, table| acc.merged(table))
}

/// Sum the frequencies of every document in `training_documents`.
///
/// Returns `None` (not an empty table) when there are no training documents,
/// so "no data" stays distinguishable from "data without overlap".
/// Extraction failures propagate.
pub fn category_frequencies(
    analyzer: &dyn Analyzer,
    extractor: &dyn TextExtractor,
    training_documents: &[DocumentRef],
) -> Result<Option<Frequencies>> {
    if training_documents.is_empty() {
        return Ok(None);
    }

    let mut tables = Vec::with_capacity(training_documents.len());
    for document in training_documents {
        let text = extractor.extract_text(document)?;
        tables.push(Frequencies::from_text(analyzer, &text)?);
    }

    Ok(Some(sum_frequencies(&tables)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::extractor::InMemoryExtractor;
    use crate::error::CatbayesError;

    #[test]
    fn test_document_frequencies() {
        let freqs = document_frequencies("Meow meow PURR meow").unwrap();

        assert_eq!(freqs.get("meow"), 3);
        assert_eq!(freqs.get("purr"), 1);
        assert_eq!(freqs.get("bark"), 0);
        assert_eq!(freqs.len(), 2);
        assert_eq!(freqs.total(), 4);
    }

    #[test]
    fn test_document_frequencies_blank() {
        let freqs = document_frequencies("  \n ").unwrap();
        assert!(freqs.is_empty());
        assert!(!freqs.contains(""));
    }

    #[test]
    fn test_sum_frequencies() {
        let a: Frequencies = [("meow", 2), ("purr", 1)].into_iter().collect();
        let b: Frequencies = [("meow", 1), ("hiss", 4)].into_iter().collect();

        let sum = sum_frequencies([&a, &b]);

        assert_eq!(sum.get("meow"), 3);
        assert_eq!(sum.get("purr"), 1);
        assert_eq!(sum.get("hiss"), 4);
        // inputs are untouched
        assert_eq!(a.get("meow"), 2);
        assert_eq!(b.get("hiss"), 4);
    }

    #[test]
    fn test_sum_frequencies_commutative_and_associative() {
        let a: Frequencies = [("x", 1), ("y", 2)].into_iter().collect();
        let b: Frequencies = [("y", 5), ("z", 3)].into_iter().collect();
        let c: Frequencies = [("x", 7)].into_iter().collect();

        assert_eq!(sum_frequencies([&a, &b]), sum_frequencies([&b, &a]));

        let left = sum_frequencies([&sum_frequencies([&a, &b]), &c]);
        let right = sum_frequencies([&a, &sum_frequencies([&b, &c])]);
        assert_eq!(left, right);
    }

    #[test]
    fn test_sorted_ignores_insertion_order() {
        let forward: Frequencies = [("purr", 1), ("hiss", 2), ("meow", 3)].into_iter().collect();
        let backward: Frequencies = [("meow", 3), ("hiss", 2), ("purr", 1)].into_iter().collect();

        assert_eq!(forward.sorted(), vec![("hiss", 2), ("meow", 3), ("purr", 1)]);
        assert_eq!(forward.sorted(), backward.sorted());
        assert!(Frequencies::new().sorted().is_empty());
    }

    #[test]
    fn test_sum_frequencies_empty() {
        let none: Vec<Frequencies> = Vec::new();
        assert!(sum_frequencies(&none).is_empty());
    }

    #[test]
    fn test_category_frequencies() {
        let extractor = InMemoryExtractor::new()
            .with_text("cats/1", "meow purr")
            .with_text("cats/2", "Meow");
        let docs = vec![
            DocumentRef::new("cats/1", "cats"),
            DocumentRef::new("cats/2", "cats"),
        ];
        let analyzer = StandardAnalyzer::new().unwrap();

        let freqs = category_frequencies(&analyzer, &extractor, &docs)
            .unwrap()
            .unwrap();

        assert_eq!(freqs.get("meow"), 2);
        assert_eq!(freqs.get("purr"), 1);
    }

    #[test]
    fn test_category_frequencies_absent_without_documents() {
        let extractor = InMemoryExtractor::new();
        let analyzer = StandardAnalyzer::new().unwrap();

        let freqs = category_frequencies(&analyzer, &extractor, &[]).unwrap();

        assert!(freqs.is_none());
    }

    #[test]
    fn test_category_frequencies_propagates_extraction_error() {
        let extractor = InMemoryExtractor::new();
        let analyzer = StandardAnalyzer::new().unwrap();
        let docs = vec![DocumentRef::new("missing", "cats")];

        let result = category_frequencies(&analyzer, &extractor, &docs);

        assert!(matches!(result, Err(CatbayesError::Extraction { .. })));
    }
}
