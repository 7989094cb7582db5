//! Analyzers turn a document's text into the tokens that get counted.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Text to tokens. A trained model keeps its analyzer so that documents are
/// classified with exactly the tokenization used for training, which is why
/// implementations must be shareable across threads.
pub trait Analyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    fn name(&self) -> &'static str;

    /// Token texts only, in input order.
    fn analyze_to_strings(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }
}

pub mod pipeline;
pub mod standard;
