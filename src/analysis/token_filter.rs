//! Token filters: stream-to-stream transformations applied after tokenizing.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// A stage that rewrites, drops or adds tokens.
///
/// ```
/// use catbayes::analysis::token::{Token, TokenStream};
/// use catbayes::analysis::token_filter::Filter;
/// use catbayes::error::Result;
///
/// /// Keeps only tokens made of letters.
/// struct AlphabeticFilter;
///
/// impl Filter for AlphabeticFilter {
///     fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
///         Ok(Box::new(
///             tokens.filter(|t| t.text.chars().all(char::is_alphabetic)),
///         ))
///     }
///
///     fn name(&self) -> &'static str {
///         "alphabetic"
///     }
/// }
///
/// let tokens = vec![Token::new("meow", 0, 0..4), Token::new("42", 1, 5..7)];
/// let kept: Vec<Token> = AlphabeticFilter.filter(Box::new(tokens.into_iter()))?.collect();
/// assert_eq!(kept.len(), 1);
/// # Ok::<(), catbayes::error::CatbayesError>(())
/// ```
pub trait Filter: Send + Sync {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod remove_empty;

pub use lowercase::LowercaseFilter;
pub use remove_empty::RemoveEmptyFilter;
