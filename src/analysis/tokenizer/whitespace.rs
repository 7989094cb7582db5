//! Whitespace tokenizer.

use regex::Regex;

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::error::{CatbayesError, Result};

/// Emits every maximal run of non-whitespace characters as a token.
///
/// Punctuation stays attached to its word. Because only non-empty runs match,
/// leading or trailing whitespace never produces an empty token.
#[derive(Clone, Debug)]
pub struct WhitespaceTokenizer {
    word: Regex,
}

impl WhitespaceTokenizer {
    pub fn new() -> Result<Self> {
        let word = Regex::new(r"\S+")
            .map_err(|e| CatbayesError::analysis(format!("invalid word pattern: {e}")))?;
        Ok(Self { word })
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .word
            .find_iter(text)
            .enumerate()
            .map(|(position, word)| Token::new(word.as_str(), position, word.range()))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
