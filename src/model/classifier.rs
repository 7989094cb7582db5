//! Naive Bayes scoring.
//!
//! For every category `c` a document is scored as
//!
//! ```text
//! L(c) = Σ count(token) · ln P(token | c)
//! ```
//!
//! over the document's token counts, where `P` is the smoothed estimator in
//! [`probability`](crate::model::probability). Each `L(c)` is brought back to
//! linear scale with [`DecimalExp`], the linear scores are normalized to sum
//! to one, and each share is truncated (never rounded) to the configured number
//! of decimal digits.

use bigdecimal::BigDecimal;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::config::ClassifierConfig;
use crate::corpus::document::DocumentRef;
use crate::corpus::extractor::TextExtractor;
use crate::error::{CatbayesError, Result};
use crate::model::TrainingResult;
use crate::model::frequency::Frequencies;
use crate::model::precision::{DecimalExp, truncate_to_f64};
use crate::model::probability::probability;

/// One category's share of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    /// Category name.
    pub category: String,
    /// Relative score in `[0, 1]`.
    pub score: f64,
}

/// Relative scores for one document, in model category order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreMap {
    scores: Vec<CategoryScore>,
}

impl ScoreMap {
    /// Build a score map from `(category, score)` pairs, keeping their order.
    pub fn from_pairs<S, I>(pairs: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, f64)>,
    {
        Self {
            scores: pairs
                .into_iter()
                .map(|(category, score)| CategoryScore {
                    category: category.into(),
                    score,
                })
                .collect(),
        }
    }

    /// Score of `category`, if it is part of the map.
    pub fn get(&self, category: &str) -> Option<f64> {
        self.scores
            .iter()
            .find(|s| s.category == category)
            .map(|s| s.score)
    }

    /// Iterate over the scores in category order.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryScore> {
        self.scores.iter()
    }

    /// Number of categories scored.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether no category was scored.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Sum of all scores; close to 1 up to truncation error.
    pub fn total(&self) -> f64 {
        self.scores.iter().map(|s| s.score).sum()
    }

    /// The best category; see [`select_best`].
    pub fn best(&self) -> Option<&str> {
        select_best(self)
    }
}

/// The category with the highest score.
///
/// Ties go to the category that comes first in model order. Returns `None`
/// only for an empty map.
pub fn select_best(scores: &ScoreMap) -> Option<&str> {
    let mut best: Option<&CategoryScore> = None;
    for candidate in scores.iter() {
        match best {
            Some(current) if candidate.score <= current.score => {}
            _ => best = Some(candidate),
        }
    }
    best.map(|s| s.category.as_str())
}

/// Unnormalized linear-scale scores, `e^L(c)` per category, in model order.
#[derive(Debug, Clone, PartialEq)]
pub struct RawScoreMap {
    scores: Vec<(String, BigDecimal)>,
}

impl RawScoreMap {
    /// Linear score of `category`.
    pub fn get(&self, category: &str) -> Option<&BigDecimal> {
        self.scores
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, score)| score)
    }

    /// Iterate over `(category, score)` pairs in model order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BigDecimal)> {
        self.scores.iter().map(|(name, score)| (name.as_str(), score))
    }

    /// Number of categories scored.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether no category was scored.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Sum of the linear scores.
    pub fn total(&self) -> BigDecimal {
        self.scores
            .iter()
            .fold(BigDecimal::zero(), |acc, (_, score)| acc + score)
    }

    /// Divide every score by the total and truncate the share to `digits`
    /// decimal places.
    pub fn normalize(&self, digits: u32) -> Result<ScoreMap> {
        let total = self.total();
        if total.is_zero() {
            return Err(CatbayesError::invalid_model(
                "linear scores sum to zero; nothing to normalize",
            ));
        }

        let mut scores = Vec::with_capacity(self.scores.len());
        for (name, score) in &self.scores {
            let share = score / &total;
            scores.push((name.as_str(), truncate_to_f64(&share, digits)?));
        }
        Ok(ScoreMap::from_pairs(scores))
    }
}

/// Scores documents against a trained model.
///
/// The classifier only borrows the model and keeps no mutable state, so
/// repeated calls with the same input return identical results and a single
/// instance can be shared across threads.
pub struct NaiveBayesClassifier<'a> {
    model: &'a TrainingResult,
    extractor: &'a dyn TextExtractor,
    exp: DecimalExp,
    score_precision: u32,
}

impl<'a> NaiveBayesClassifier<'a> {
    /// Create a classifier over `model`, reading documents through
    /// `extractor`.
    pub fn new(
        model: &'a TrainingResult,
        extractor: &'a dyn TextExtractor,
        config: &ClassifierConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            model,
            extractor,
            exp: DecimalExp::new(config.decimal_precision)?,
            score_precision: config.score_precision,
        })
    }

    /// The model being scored against.
    pub fn model(&self) -> &TrainingResult {
        self.model
    }

    /// Extract, tokenize and score `document`.
    pub fn classify(&self, document: &DocumentRef) -> Result<ScoreMap> {
        let text = self.extractor.extract_text(document)?;
        self.classify_text(&text)
    }

    /// Tokenize and score raw text.
    pub fn classify_text(&self, text: &str) -> Result<ScoreMap> {
        let frequencies = Frequencies::from_text(self.model.analyzer(), text)?;
        self.classify_frequencies(&frequencies)
    }

    /// Score a document given as token counts.
    pub fn classify_frequencies(&self, frequencies: &Frequencies) -> Result<ScoreMap> {
        self.raw_scores(frequencies)?.normalize(self.score_precision)
    }

    /// Whether the best category for `document` is its true category.
    pub fn is_correct(&self, document: &DocumentRef) -> Result<bool> {
        let scores = self.classify(document)?;
        Ok(select_best(&scores) == Some(document.true_category()))
    }

    /// Per-category log-likelihoods, in model order.
    ///
    /// Terms are summed in token order, so the same document always yields
    /// the same bits.
    pub fn log_likelihoods(&self, frequencies: &Frequencies) -> Result<Vec<(String, f64)>> {
        self.ensure_categories()?;

        let global = self.model.global_frequencies();
        let category_count = self.model.category_count();
        let tokens = frequencies.sorted();

        Ok(self
            .model
            .categories()
            .iter()
            .map(|category| {
                let likelihood = tokens
                    .iter()
                    .map(|&(token, count)| {
                        count as f64 * probability(global, category_count, category, token).ln()
                    })
                    .sum::<f64>();
                (category.name().to_string(), likelihood)
            })
            .collect())
    }

    /// Per-category linear scores `e^L(c)`, computed in decimal arithmetic.
    pub fn raw_scores(&self, frequencies: &Frequencies) -> Result<RawScoreMap> {
        let mut scores = Vec::with_capacity(self.model.category_count());
        for (name, likelihood) in self.log_likelihoods(frequencies)? {
            log::trace!("{name}: log-likelihood {likelihood}");
            scores.push((name, self.exp.exp(likelihood)?));
        }
        Ok(RawScoreMap { scores })
    }

    fn ensure_categories(&self) -> Result<()> {
        if self.model.category_count() == 0 {
            return Err(CatbayesError::invalid_model(
                "cannot classify against a model with no categories",
            ));
        }
        Ok(())
    }
}

impl std::fmt::Debug for NaiveBayesClassifier<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NaiveBayesClassifier")
            .field("model", self.model)
            .field("extractor", &self.extractor.name())
            .field("decimal_precision", &self.exp.precision())
            .field("score_precision", &self.score_precision)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::extractor::InMemoryExtractor;
    use std::str::FromStr;

    fn freqs(pairs: &[(&str, u64)]) -> Frequencies {
        pairs.iter().map(|(t, c)| (*t, *c)).collect()
    }

    fn cats_and_dogs() -> TrainingResult {
        TrainingResult::from_frequencies(vec![
            ("cats", freqs(&[("meow", 10), ("purr", 5)])),
            ("dogs", freqs(&[("bark", 10), ("woof", 5)])),
        ])
        .unwrap()
    }

    #[test]
    fn test_cats_beat_dogs_on_meow() {
        let model = cats_and_dogs();
        let extractor = InMemoryExtractor::new();
        let classifier =
            NaiveBayesClassifier::new(&model, &extractor, &ClassifierConfig::default()).unwrap();

        let scores = classifier
            .classify_frequencies(&freqs(&[("meow", 3)]))
            .unwrap();

        assert!(scores.get("cats").unwrap() > scores.get("dogs").unwrap());
        assert_eq!(select_best(&scores), Some("cats"));
        // (11/12)^3 / ((11/12)^3 + (1/12)^3) = 1331 / 1332
        assert_eq!(scores.get("cats"), Some(0.9992));
        assert_eq!(scores.get("dogs"), Some(0.0007));
    }

    #[test]
    fn test_log_likelihoods() {
        let model = cats_and_dogs();
        let extractor = InMemoryExtractor::new();
        let classifier =
            NaiveBayesClassifier::new(&model, &extractor, &ClassifierConfig::default()).unwrap();

        let likelihoods = classifier
            .log_likelihoods(&freqs(&[("meow", 3)]))
            .unwrap();

        assert_eq!(likelihoods[0].0, "cats");
        assert!((likelihoods[0].1 - 3.0 * (11.0f64 / 12.0).ln()).abs() < 1e-12);
        assert_eq!(likelihoods[1].0, "dogs");
        assert!((likelihoods[1].1 - 3.0 * (1.0f64 / 12.0).ln()).abs() < 1e-12);
    }

    #[test]
    fn test_unseen_tokens_get_full_score_map() {
        let model = cats_and_dogs();
        let extractor = InMemoryExtractor::new();
        let classifier =
            NaiveBayesClassifier::new(&model, &extractor, &ClassifierConfig::default()).unwrap();

        let scores = classifier.classify_text("tweet chirp squawk").unwrap();

        assert_eq!(scores.len(), 2);
        for score in scores.iter() {
            assert!(score.score.is_finite());
            assert!(score.score > 0.0);
        }
        assert_eq!(scores.get("cats"), Some(0.5));
        assert_eq!(scores.get("dogs"), Some(0.5));
    }

    #[test]
    fn test_long_document_does_not_underflow() {
        let model = cats_and_dogs();
        let extractor = InMemoryExtractor::new();
        let classifier =
            NaiveBayesClassifier::new(&model, &extractor, &ClassifierConfig::default()).unwrap();

        let document = freqs(&[("meow", 4000), ("bark", 3990), ("zebra", 2000)]);
        let likelihoods = classifier.log_likelihoods(&document).unwrap();
        assert!(likelihoods.iter().all(|(_, l)| l.exp() == 0.0));

        let raw = classifier.raw_scores(&document).unwrap();
        assert!(raw.get("cats").unwrap() > raw.get("dogs").unwrap());
        assert!(!raw.get("dogs").unwrap().is_zero());

        let scores = classifier.classify_frequencies(&document).unwrap();
        assert_eq!(select_best(&scores), Some("cats"));
    }

    #[test]
    fn test_scores_sum_close_to_one() {
        let model = TrainingResult::from_frequencies(vec![
            ("a", freqs(&[("x", 3), ("y", 1)])),
            ("b", freqs(&[("y", 4), ("z", 2)])),
            ("c", freqs(&[("z", 5), ("x", 1)])),
        ])
        .unwrap();
        let extractor = InMemoryExtractor::new();
        let classifier =
            NaiveBayesClassifier::new(&model, &extractor, &ClassifierConfig::default()).unwrap();

        for text in ["x y z", "x x x", "z z y w", "", "q"] {
            let scores = classifier.classify_text(text).unwrap();
            let total = scores.total();
            assert!(total <= 1.0 + 1e-9, "{text}: {total}");
            assert!(1.0 - total <= 4e-4 * 3.0, "{text}: {total}");
        }
    }

    #[test]
    fn test_classify_is_idempotent() {
        let model = cats_and_dogs();
        let extractor = InMemoryExtractor::new().with_text("doc", "meow bark purr purr");
        let classifier =
            NaiveBayesClassifier::new(&model, &extractor, &ClassifierConfig::default()).unwrap();
        let document = DocumentRef::new("doc", "cats");

        let first = classifier.classify(&document).unwrap();
        let second = classifier.classify(&document).unwrap();

        assert_eq!(first, second);
        assert!(classifier.is_correct(&document).unwrap());
    }

    #[test]
    fn test_log_likelihoods_are_bit_identical_across_rebuilds() {
        let cats: Frequencies = (0..200u64).map(|i| (format!("w{i}"), 1 + i % 7)).collect();
        let dogs: Frequencies = (100..300u64).map(|i| (format!("w{i}"), 1 + i % 5)).collect();
        let model = TrainingResult::from_frequencies(vec![("cats", cats), ("dogs", dogs)]).unwrap();
        let extractor = InMemoryExtractor::new();
        let classifier =
            NaiveBayesClassifier::new(&model, &extractor, &ClassifierConfig::default()).unwrap();
        let text = (0..900u64)
            .map(|i| format!("w{}", (i * 37) % 350))
            .collect::<Vec<_>>()
            .join(" ");

        let mut patterns = std::collections::HashSet::new();
        let mut raw = Vec::new();
        for _ in 0..50 {
            let frequencies = Frequencies::from_text(model.analyzer(), &text).unwrap();
            let bits: Vec<(String, u64)> = classifier
                .log_likelihoods(&frequencies)
                .unwrap()
                .into_iter()
                .map(|(name, likelihood)| (name, likelihood.to_bits()))
                .collect();
            patterns.insert(bits);
            raw.push(classifier.raw_scores(&frequencies).unwrap().scores);
        }

        assert_eq!(patterns.len(), 1);
        assert!(raw.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn test_classify_propagates_extraction_error() {
        let model = cats_and_dogs();
        let extractor = InMemoryExtractor::new();
        let classifier =
            NaiveBayesClassifier::new(&model, &extractor, &ClassifierConfig::default()).unwrap();

        let result = classifier.classify(&DocumentRef::new("missing", "cats"));

        assert!(matches!(result, Err(CatbayesError::Extraction { .. })));
    }

    #[test]
    fn test_empty_model_is_invalid() {
        let model = TrainingResult::from_frequencies(Vec::<(String, Frequencies)>::new()).unwrap();
        let extractor = InMemoryExtractor::new();
        let classifier =
            NaiveBayesClassifier::new(&model, &extractor, &ClassifierConfig::default()).unwrap();

        let result = classifier.classify_text("meow");

        assert!(matches!(result, Err(CatbayesError::InvalidModel(_))));
    }

    #[test]
    fn test_select_best_tie_prefers_first() {
        let scores = ScoreMap::from_pairs(vec![("b", 0.4), ("a", 0.4), ("c", 0.2)]);
        assert_eq!(select_best(&scores), Some("b"));

        let scores = ScoreMap::from_pairs(vec![("b", 0.1), ("a", 0.45), ("c", 0.45)]);
        assert_eq!(scores.best(), Some("a"));

        assert_eq!(select_best(&ScoreMap::default()), None);
    }

    #[test]
    fn test_normalize_truncates() {
        let raw = RawScoreMap {
            scores: vec![
                ("a".to_string(), BigDecimal::from_str("2").unwrap()),
                ("b".to_string(), BigDecimal::from_str("1").unwrap()),
            ],
        };

        let scores = raw.normalize(4).unwrap();

        // 2/3 = 0.66666.. and 1/3 = 0.33333.. are cut, not rounded
        assert_eq!(scores.get("a"), Some(0.6666));
        assert_eq!(scores.get("b"), Some(0.3333));
    }

    #[test]
    fn test_normalize_zero_total() {
        let raw = RawScoreMap {
            scores: vec![("a".to_string(), BigDecimal::zero())],
        };
        assert!(raw.normalize(4).is_err());
    }
}
