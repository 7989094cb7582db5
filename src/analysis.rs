//! Text analysis for Catbayes.
//!
//! Documents are turned into tokens by an [`Analyzer`]: a tokenizer followed
//! by a chain of token filters. The classifier uses [`StandardAnalyzer`],
//! which splits on runs of whitespace and case-folds every token. No stemming,
//! stop-word removal or punctuation stripping is performed, so `"dog,"` and
//! `"dog"` are distinct tokens.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::pipeline::PipelineAnalyzer;
pub use analyzer::standard::StandardAnalyzer;
pub use analyzer::Analyzer;
pub use token::{Token, TokenStream};
pub use token_filter::Filter;
pub use tokenizer::Tokenizer;

use crate::error::Result;

/// Split `text` into case-folded, whitespace-delimited tokens.
///
/// Leading and trailing whitespace never produces an empty token, and empty
/// or all-whitespace input yields an empty vector.
///
/// ```
/// use catbayes::analysis::tokenize;
///
/// let tokens = tokenize("  The quick\tbrown FOX. ").unwrap();
/// assert_eq!(tokens, vec!["the", "quick", "brown", "fox."]);
/// ```
pub fn tokenize(text: &str) -> Result<Vec<String>> {
    StandardAnalyzer::new()?.analyze_to_strings(text)
}
