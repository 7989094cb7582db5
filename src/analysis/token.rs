//! Tokens produced by the analysis pipeline.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A word taken from a document, with its ordinal and byte span in the input.
///
/// Only `text` takes part in classification; `position` and `span` let a
/// caller point back into the source when inspecting a score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    /// 0-based index among the tokens of the same input.
    pub position: usize,
    /// Byte range of the original word.
    pub span: Range<usize>,
}

impl Token {
    pub fn new<S: Into<String>>(text: S, position: usize, span: Range<usize>) -> Self {
        Self {
            text: text.into(),
            position,
            span,
        }
    }

    /// Replace the text, keeping position and span.
    pub fn map_text<F: FnOnce(String) -> String>(self, f: F) -> Self {
        Self {
            text: f(self.text),
            ..self
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Lazily evaluated sequence of tokens passed between pipeline stages.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
