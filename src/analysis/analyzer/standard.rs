//! The analyzer a model uses unless told otherwise.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{LowercaseFilter, RemoveEmptyFilter};
use crate::analysis::tokenizer::WhitespaceTokenizer;
use crate::error::Result;

/// `whitespace → lowercase → remove_empty`.
///
/// No stemming, stop words or punctuation stripping: `"dog,"` and `"dog"`
/// are distinct tokens.
#[derive(Clone, Debug)]
pub struct StandardAnalyzer(PipelineAnalyzer);

impl StandardAnalyzer {
    pub fn new() -> Result<Self> {
        let pipeline = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()?))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(RemoveEmptyFilter::new()));
        Ok(Self(pipeline))
    }

    pub fn pipeline(&self) -> &PipelineAnalyzer {
        &self.0
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.0.analyze(text)
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}
