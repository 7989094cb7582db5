//! Tokenizers: the first pipeline stage, turning raw text into tokens.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Splits text into a stream of tokens.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    fn name(&self) -> &'static str;
}

pub mod whitespace;

pub use whitespace::WhitespaceTokenizer;
