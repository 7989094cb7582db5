//! Configuration for training and classification.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatbayesError, Result};
use crate::model::precision::MAX_DECIMAL_PRECISION;

/// Configuration shared by the trainer, classifier, evaluator and corpus
/// discovery.
///
/// Every field has a default, so a JSON file only needs to name the settings
/// it changes:
///
/// ```
/// use catbayes::config::ClassifierConfig;
///
/// let config: ClassifierConfig = serde_json::from_str(r#"{ "seed": 7 }"#).unwrap();
/// assert_eq!(config.seed, Some(7));
/// assert_eq!(config.split_ratio, 0.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Fraction of each category's documents used for training (0.0-1.0).
    /// The training set holds `floor(n * split_ratio)` documents.
    pub split_ratio: f64,
    /// Seed for the train/test shuffle. `None` draws a fresh seed every run.
    pub seed: Option<u64>,
    /// Decimal digits kept when truncating relative scores.
    pub score_precision: u32,
    /// Significant digits carried through high-precision exponentiation.
    pub decimal_precision: u64,
    /// Eligible document extensions (case-insensitive, without the dot).
    /// An empty list accepts every regular file.
    pub extensions: Vec<String>,
    /// Train categories and evaluate documents on the rayon thread pool.
    pub parallel: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            split_ratio: 0.5,
            seed: None,
            score_precision: 4,
            decimal_precision: 64,
            extensions: vec!["txt".to_string()],
            parallel: false,
        }
    }
}

impl ClassifierConfig {
    /// Load a configuration from a JSON file and validate it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: ClassifierConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every setting is within its supported range.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.split_ratio) {
            return Err(CatbayesError::config(format!(
                "split_ratio must be within [0, 1], got {}",
                self.split_ratio
            )));
        }
        if self.score_precision > 15 {
            return Err(CatbayesError::config(format!(
                "score_precision must be at most 15, got {}",
                self.score_precision
            )));
        }
        if !(16..=MAX_DECIMAL_PRECISION).contains(&self.decimal_precision) {
            return Err(CatbayesError::config(format!(
                "decimal_precision must be within 16..={MAX_DECIMAL_PRECISION}, got {}",
                self.decimal_precision
            )));
        }
        Ok(())
    }

    /// Builder-style setter for the shuffle seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder-style setter for the training fraction.
    pub fn with_split_ratio(mut self, split_ratio: f64) -> Self {
        self.split_ratio = split_ratio;
        self
    }

    /// Builder-style setter for parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
