//! Case folding.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Folds every token to lower case so `Meow` and `meow` count as one token.
#[derive(Clone, Copy, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    pub fn new() -> Self {
        Self
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|token| {
            token.map_text(|text| {
                if text.bytes().any(|b| b.is_ascii_uppercase()) || !text.is_ascii() {
                    text.to_lowercase()
                } else {
                    text
                }
            })
        })))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
