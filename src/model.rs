//! The Naive Bayes model: categories, their frequency tables, and the
//! immutable [`TrainingResult`] shared by classification and evaluation.
//!
//! # Pipeline
//!
//! ```text
//! CategoryDocuments ──partition──▶ Category (Untrained)
//!                                      │ train
//!                                      ▼
//!                          Category (Trained | Empty) ──▶ TrainingResult
//!                                                            │
//!                                    NaiveBayesClassifier ◀──┤
//!                                             │              │
//!                                             ▼              ▼
//!                                         ScoreMap       Evaluator
//! ```

pub mod classifier;
pub mod evaluator;
pub mod frequency;
pub mod precision;
pub mod probability;
pub mod trainer;

use std::collections::HashSet;
use std::sync::Arc;

pub use classifier::{CategoryScore, NaiveBayesClassifier, RawScoreMap, ScoreMap, select_best};
pub use evaluator::{CategoryReport, EvaluationSummary, Evaluator};
pub use frequency::{Frequencies, category_frequencies, document_frequencies, sum_frequencies};
pub use probability::probability;
pub use trainer::{Trainer, partition_documents};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::standard::StandardAnalyzer;
use crate::config::ClassifierConfig;
use crate::corpus::document::DocumentRef;
use crate::corpus::extractor::TextExtractor;
use crate::error::{CatbayesError, Result};

/// Training state of a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryState {
    /// Not trained yet.
    Untrained,
    /// Trained on an empty training set; the category has no frequencies.
    Empty,
    /// Trained; token counts summed over the training documents.
    Trained(Frequencies),
}

/// A classification label with its train/test split and, once trained, its
/// token frequencies.
#[derive(Debug, Clone)]
pub struct Category {
    name: String,
    training_documents: Vec<DocumentRef>,
    test_documents: Vec<DocumentRef>,
    state: CategoryState,
}

impl Category {
    /// Create an untrained category. Fails if a document appears in both the
    /// training and the test set.
    pub fn new<S: Into<String>>(
        name: S,
        training_documents: Vec<DocumentRef>,
        test_documents: Vec<DocumentRef>,
    ) -> Result<Self> {
        let name = name.into();
        let training: HashSet<&DocumentRef> = training_documents.iter().collect();
        if let Some(shared) = test_documents.iter().find(|d| training.contains(d)) {
            return Err(CatbayesError::corpus(format!(
                "document {shared} is in both the training and test sets of {name}"
            )));
        }

        Ok(Self {
            name,
            training_documents,
            test_documents,
            state: CategoryState::Untrained,
        })
    }

    /// Create an already-trained category from a frequency table, with no
    /// documents attached.
    pub fn with_frequencies<S: Into<String>>(name: S, frequencies: Frequencies) -> Self {
        Self {
            name: name.into(),
            training_documents: Vec::new(),
            test_documents: Vec::new(),
            state: CategoryState::Trained(frequencies),
        }
    }

    /// Populate the frequency table from the training documents.
    ///
    /// Re-running replaces the previous table; counts never accumulate.
    pub fn train(&mut self, analyzer: &dyn Analyzer, extractor: &dyn TextExtractor) -> Result<()> {
        self.state =
            match category_frequencies(analyzer, extractor, &self.training_documents)? {
                Some(frequencies) => CategoryState::Trained(frequencies),
                None => CategoryState::Empty,
            };
        Ok(())
    }

    /// The category name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Documents used for training.
    pub fn training_documents(&self) -> &[DocumentRef] {
        &self.training_documents
    }

    /// Documents held out for evaluation.
    pub fn test_documents(&self) -> &[DocumentRef] {
        &self.test_documents
    }

    /// Current training state.
    pub fn state(&self) -> &CategoryState {
        &self.state
    }

    /// Whether [`train`](Self::train) has run.
    pub fn is_trained(&self) -> bool {
        !matches!(self.state, CategoryState::Untrained)
    }

    /// The token table, or `None` when untrained or trained without data.
    pub fn token_frequencies(&self) -> Option<&Frequencies> {
        match &self.state {
            CategoryState::Trained(frequencies) => Some(frequencies),
            _ => None,
        }
    }

    /// Occurrences of `token` in this category, `0` when unseen or absent.
    pub fn count(&self, token: &str) -> u64 {
        self.token_frequencies().map_or(0, |f| f.get(token))
    }
}

/// The complete trained model.
///
/// Holds the categories in a fixed order, the global frequency table summed
/// across them, and the analyzer that produced the tables so classification
/// tokenizes exactly as training did. It exposes no mutation and is `Send +
/// Sync`, so one instance can serve concurrent classification.
#[derive(Clone)]
pub struct TrainingResult {
    global_frequencies: Frequencies,
    categories: Vec<Category>,
    analyzer: Arc<dyn Analyzer>,
}

impl TrainingResult {
    /// Assemble a model from trained categories. Untrained categories are
    /// rejected.
    pub fn new(categories: Vec<Category>, analyzer: Arc<dyn Analyzer>) -> Result<Self> {
        if let Some(untrained) = categories.iter().find(|c| !c.is_trained()) {
            return Err(CatbayesError::invalid_model(format!(
                "category {} has not been trained",
                untrained.name()
            )));
        }

        let global_frequencies =
            sum_frequencies(categories.iter().filter_map(Category::token_frequencies));

        Ok(Self {
            global_frequencies,
            categories,
            analyzer,
        })
    }

    /// Build a model directly from per-category frequency tables, using the
    /// standard analyzer.
    pub fn from_frequencies<S, I>(tables: I) -> Result<Self>
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, Frequencies)>,
    {
        let categories = tables
            .into_iter()
            .map(|(name, frequencies)| Category::with_frequencies(name, frequencies))
            .collect();
        Self::new(categories, Arc::new(StandardAnalyzer::new()?))
    }

    /// Token counts summed over every category.
    pub fn global_frequencies(&self) -> &Frequencies {
        &self.global_frequencies
    }

    /// Categories in model order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by name.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name() == name)
    }

    /// Number of categories.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Number of distinct tokens seen during training.
    pub fn vocabulary_size(&self) -> usize {
        self.global_frequencies.len()
    }

    /// The analyzer used for training.
    pub fn analyzer(&self) -> &dyn Analyzer {
        self.analyzer.as_ref()
    }
}

impl std::fmt::Debug for TrainingResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrainingResult")
            .field(
                "categories",
                &self.categories.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .field("vocabulary_size", &self.vocabulary_size())
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

/// Classify `document` against `model` with the default configuration.
pub fn classify(
    model: &TrainingResult,
    extractor: &dyn TextExtractor,
    document: &DocumentRef,
) -> Result<ScoreMap> {
    NaiveBayesClassifier::new(model, extractor, &ClassifierConfig::default())?.classify(document)
}

/// Evaluate every category's held-out documents with the default
/// configuration.
pub fn test_all(model: &TrainingResult, extractor: &dyn TextExtractor) -> Result<Vec<CategoryReport>> {
    Evaluator::new(model, extractor, &ClassifierConfig::default())?.test_all()
}
