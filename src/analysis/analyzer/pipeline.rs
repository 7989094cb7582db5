//! An analyzer assembled from one tokenizer and any number of filters.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// Runs `tokenizer`, then each filter in insertion order.
///
/// ```
/// use std::sync::Arc;
/// use catbayes::analysis::{Analyzer, PipelineAnalyzer};
/// use catbayes::analysis::token_filter::LowercaseFilter;
/// use catbayes::analysis::tokenizer::WhitespaceTokenizer;
///
/// let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()?))
///     .add_filter(Arc::new(LowercaseFilter::new()));
///
/// assert_eq!(analyzer.analyze_to_strings("Purr PURR")?, vec!["purr", "purr"]);
/// # Ok::<(), catbayes::error::CatbayesError>(())
/// ```
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    stages: Vec<Arc<dyn Filter>>,
    label: String,
}

impl PipelineAnalyzer {
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self {
            label: tokenizer.name().to_string(),
            tokenizer,
            stages: Vec::new(),
        }
    }

    /// Append a filter after the existing ones.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.label = format!("{}+{}", self.label, filter.name());
        self.stages.push(filter);
        self
    }

    /// Override the generated label, e.g. `whitespace+lowercase`.
    pub fn with_label<S: Into<String>>(mut self, label: S) -> Self {
        self.label = label.into();
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of filters after the tokenizer.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.stages
            .iter()
            .try_fold(self.tokenizer.tokenize(text)?, |tokens, stage| {
                stage.filter(tokens)
            })
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PipelineAnalyzer").field(&self.label).finish()
    }
}
