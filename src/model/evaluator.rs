//! Accuracy evaluation on held-out documents.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::ClassifierConfig;
use crate::corpus::extractor::TextExtractor;
use crate::error::Result;
use crate::model::classifier::NaiveBayesClassifier;
use crate::model::{Category, TrainingResult};

/// Accuracy of one category on its test documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryReport {
    /// Category name.
    pub category: String,
    /// Test documents whose best category was this one.
    pub correct: usize,
    /// Test documents assigned elsewhere.
    pub incorrect: usize,
    /// `100 * correct / (correct + incorrect)`, or `0` with no test documents.
    pub accuracy: f64,
}

impl CategoryReport {
    /// Build a report from raw counts.
    pub fn new<S: Into<String>>(category: S, correct: usize, incorrect: usize) -> Self {
        Self {
            category: category.into(),
            correct,
            incorrect,
            accuracy: accuracy(correct, incorrect),
        }
    }

    /// Number of test documents evaluated.
    pub fn total(&self) -> usize {
        self.correct + self.incorrect
    }
}

/// Per-category reports plus corpus-wide totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationSummary {
    /// One report per category, in model order.
    pub reports: Vec<CategoryReport>,
    /// Correct predictions across all categories.
    pub total_correct: usize,
    /// Incorrect predictions across all categories.
    pub total_incorrect: usize,
    /// Accuracy over every test document, in percent.
    pub overall_accuracy: f64,
}

impl EvaluationSummary {
    /// Aggregate per-category reports.
    pub fn from_reports(reports: Vec<CategoryReport>) -> Self {
        let total_correct = reports.iter().map(|r| r.correct).sum();
        let total_incorrect = reports.iter().map(|r| r.incorrect).sum();
        Self {
            reports,
            total_correct,
            total_incorrect,
            overall_accuracy: accuracy(total_correct, total_incorrect),
        }
    }
}

fn accuracy(correct: usize, incorrect: usize) -> f64 {
    let total = correct + incorrect;
    if total == 0 {
        0.0
    } else {
        100.0 * correct as f64 / total as f64
    }
}

/// Classifies every held-out document of a model and tallies the results.
#[derive(Debug)]
pub struct Evaluator<'a> {
    classifier: NaiveBayesClassifier<'a>,
    parallel: bool,
}

impl<'a> Evaluator<'a> {
    /// Create an evaluator over `model`.
    pub fn new(
        model: &'a TrainingResult,
        extractor: &'a dyn TextExtractor,
        config: &ClassifierConfig,
    ) -> Result<Self> {
        Ok(Self {
            classifier: NaiveBayesClassifier::new(model, extractor, config)?,
            parallel: config.parallel,
        })
    }

    /// Evaluate a single category's test documents.
    pub fn evaluate_category(&self, category: &Category) -> Result<CategoryReport> {
        let documents = category.test_documents();
        let outcomes: Vec<bool> = if self.parallel {
            documents
                .par_iter()
                .map(|document| self.classifier.is_correct(document))
                .collect::<Result<_>>()?
        } else {
            documents
                .iter()
                .map(|document| self.classifier.is_correct(document))
                .collect::<Result<_>>()?
        };

        let correct = outcomes.iter().filter(|&&ok| ok).count();
        let report = CategoryReport::new(category.name(), correct, outcomes.len() - correct);
        log::info!(
            "{}: {}/{} correct ({:.2}%)",
            report.category,
            report.correct,
            report.total(),
            report.accuracy
        );
        Ok(report)
    }

    /// Evaluate every category, including those without test documents.
    pub fn test_all(&self) -> Result<Vec<CategoryReport>> {
        self.classifier
            .model()
            .categories()
            .iter()
            .map(|category| self.evaluate_category(category))
            .collect()
    }

    /// Evaluate every category and aggregate the totals.
    pub fn summarize(&self) -> Result<EvaluationSummary> {
        Ok(EvaluationSummary::from_reports(self.test_all()?))
    }
}
