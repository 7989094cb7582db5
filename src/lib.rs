//! # catbayes
//!
//! Supervised Naive Bayes text classification over a directory tree, where
//! every directory holding documents is a category.
//!
//! ## Features
//!
//! - Randomized train/test split per category
//! - Laplace-smoothed token probabilities
//! - Log-domain scoring with arbitrary-precision exponentiation, so long
//!   documents never underflow to a zero score
//! - Per-category and overall accuracy on held-out documents
//! - Pluggable text analysis and text extraction
//!
//! ```
//! use catbayes::model::{Frequencies, NaiveBayesClassifier, TrainingResult};
//! use catbayes::config::ClassifierConfig;
//! use catbayes::corpus::InMemoryExtractor;
//!
//! let model = TrainingResult::from_frequencies(vec![
//!     ("cats", [("meow", 3)].into_iter().collect::<Frequencies>()),
//!     ("dogs", [("woof", 3)].into_iter().collect::<Frequencies>()),
//! ])
//! .unwrap();
//! let extractor = InMemoryExtractor::new();
//! let classifier =
//!     NaiveBayesClassifier::new(&model, &extractor, &ClassifierConfig::default()).unwrap();
//!
//! let scores = classifier.classify_text("meow meow").unwrap();
//! assert_eq!(scores.best(), Some("cats"));
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod model;

pub mod prelude {
    pub use crate::config::ClassifierConfig;
    pub use crate::corpus::{Corpus, DocumentRef, InMemoryExtractor, PlainTextExtractor, TextExtractor};
    pub use crate::error::{CatbayesError, Result};
    pub use crate::model::{
        EvaluationSummary, Evaluator, NaiveBayesClassifier, ScoreMap, Trainer, TrainingResult,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
