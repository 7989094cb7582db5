//! Train/test partitioning and model training.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::standard::StandardAnalyzer;
use crate::config::ClassifierConfig;
use crate::corpus::CategoryDocuments;
use crate::corpus::document::DocumentRef;
use crate::corpus::extractor::TextExtractor;
use crate::error::Result;
use crate::model::{Category, TrainingResult};

/// Shuffle `documents` and split them into `(training, test)`.
///
/// The training set receives the first `floor(n * split_ratio)` shuffled
/// documents and the test set the rest; with the default ratio of `0.5` that
/// is `floor(n / 2)`. A single document therefore always lands in the test
/// set.
pub fn partition_documents<R: Rng + ?Sized>(
    mut documents: Vec<DocumentRef>,
    split_ratio: f64,
    rng: &mut R,
) -> (Vec<DocumentRef>, Vec<DocumentRef>) {
    documents.shuffle(rng);
    let split = ((documents.len() as f64) * split_ratio).floor() as usize;
    let test = documents.split_off(split.min(documents.len()));
    (documents, test)
}

/// Partitions categories and builds a [`TrainingResult`].
pub struct Trainer {
    config: ClassifierConfig,
    analyzer: Arc<dyn Analyzer>,
    extractor: Arc<dyn TextExtractor>,
}

impl Trainer {
    /// Create a trainer using the standard analyzer.
    pub fn new(config: ClassifierConfig, extractor: Arc<dyn TextExtractor>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            analyzer: Arc::new(StandardAnalyzer::new()?),
            extractor,
        })
    }

    /// Replace the analyzer used to tokenize training documents.
    pub fn with_analyzer(mut self, analyzer: Arc<dyn Analyzer>) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// The trainer's configuration.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Split every category into training and test sets.
    ///
    /// Uses a generator seeded from `config.seed`, or from the operating
    /// system when no seed is set. Categories are processed in input order,
    /// so a fixed seed reproduces the same split.
    pub fn split(&self, categories: Vec<CategoryDocuments>) -> Result<Vec<Category>> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.split_with_rng(categories, &mut rng)
    }

    /// Split every category using the supplied generator.
    pub fn split_with_rng<R: Rng + ?Sized>(
        &self,
        categories: Vec<CategoryDocuments>,
        rng: &mut R,
    ) -> Result<Vec<Category>> {
        categories
            .into_iter()
            .map(|listing| {
                let (training, test) =
                    partition_documents(listing.documents, self.config.split_ratio, rng);
                log::debug!(
                    "{}: {} training / {} test documents",
                    listing.name,
                    training.len(),
                    test.len()
                );
                Category::new(listing.name, training, test)
            })
            .collect()
    }

    /// Partition, then train every category.
    pub fn train(&self, categories: Vec<CategoryDocuments>) -> Result<TrainingResult> {
        let categories = self.split(categories)?;
        self.train_partitioned(categories)
    }

    /// Train categories whose split is already fixed.
    ///
    /// Categories are trained independently (on the rayon pool when
    /// `config.parallel` is set); the global table is summed only after every
    /// category has finished.
    pub fn train_partitioned(&self, mut categories: Vec<Category>) -> Result<TrainingResult> {
        let analyzer = self.analyzer.as_ref();
        let extractor = self.extractor.as_ref();

        if self.config.parallel {
            categories
                .par_iter_mut()
                .try_for_each(|category| category.train(analyzer, extractor))?;
        } else {
            for category in categories.iter_mut() {
                category.train(analyzer, extractor)?;
            }
        }

        for category in &categories {
            match category.token_frequencies() {
                Some(frequencies) => log::info!(
                    "trained {}: {} documents, {} distinct tokens",
                    category.name(),
                    category.training_documents().len(),
                    frequencies.len()
                ),
                None => log::warn!(
                    "category {} has no training documents",
                    category.name()
                ),
            }
        }

        let model = TrainingResult::new(categories, Arc::clone(&self.analyzer))?;
        log::info!(
            "model ready: {} categories, vocabulary of {} tokens",
            model.category_count(),
            model.vocabulary_size()
        );
        Ok(model)
    }
}

impl std::fmt::Debug for Trainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trainer")
            .field("config", &self.config)
            .field("analyzer", &self.analyzer.name())
            .field("extractor", &self.extractor.name())
            .finish()
    }
}
