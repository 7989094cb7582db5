//! Command implementations for the catbayes CLI.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::ClassifierConfig;
use crate::corpus::document::DocumentRef;
use crate::corpus::extractor::PlainTextExtractor;
use crate::corpus::Corpus;
use crate::error::{CatbayesError, Result};
use crate::model::{Evaluator, NaiveBayesClassifier, Trainer, TrainingResult, select_best};

/// Execute a CLI command.
pub fn execute_command(args: CatbayesArgs) -> Result<()> {
    match &args.command {
        Command::Categories(categories_args) => list_categories(categories_args, &args),
        Command::Evaluate(evaluate_args) => evaluate_corpus(evaluate_args, &args),
        Command::Classify(classify_args) => classify_files(classify_args, &args),
    }
}

/// List categories and their document counts.
fn list_categories(args: &CategoriesArgs, cli_args: &CatbayesArgs) -> Result<()> {
    let config = args.options.resolve()?;
    let corpus = Corpus::discover(&args.root, &config.extensions)?;

    let categories = corpus
        .categories()
        .iter()
        .map(|c| CategoryListing {
            name: c.name.clone(),
            documents: c.documents.len(),
        })
        .collect();

    output_result(
        &format!("Categories under {}", args.root.display()),
        &CategoriesResult {
            root: args.root.to_string_lossy().to_string(),
            categories,
            total_documents: corpus.document_count(),
        },
        cli_args,
    )
}

/// Train on part of each category and evaluate on the rest.
fn evaluate_corpus(args: &EvaluateArgs, cli_args: &CatbayesArgs) -> Result<()> {
    let config = args.options.resolve()?;
    let start_time = Instant::now();

    let extractor = Arc::new(PlainTextExtractor::new());
    let model = train_corpus(&args.root, &config, extractor.clone())?;
    let summary = Evaluator::new(&model, extractor.as_ref(), &config)?.summarize()?;

    output_result(
        &format!("Evaluation of {}", args.root.display()),
        &EvaluationResult {
            root: args.root.to_string_lossy().to_string(),
            summary,
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

/// Train on a corpus and score each requested file.
fn classify_files(args: &ClassifyArgs, cli_args: &CatbayesArgs) -> Result<()> {
    let mut config = args.options.resolve()?;
    if args.options.split_ratio.is_none() {
        config.split_ratio = 1.0;
    }

    let extractor = Arc::new(PlainTextExtractor::new());
    let model = train_corpus(&args.root, &config, extractor.clone())?;
    let classifier = NaiveBayesClassifier::new(&model, extractor.as_ref(), &config)?;

    let mut results = Vec::with_capacity(args.files.len());
    for file in &args.files {
        let document = DocumentRef::new(file, "");
        let scores = classifier.classify(&document)?;
        results.push(FileClassification {
            file: file.to_string_lossy().to_string(),
            best: select_best(&scores).map(str::to_string),
            scores: scores.iter().cloned().collect(),
        });
    }

    output_result(
        &format!("Classified against {}", args.root.display()),
        &ClassificationResults {
            root: args.root.to_string_lossy().to_string(),
            results,
        },
        cli_args,
    )
}

/// Discover the corpus under `root` and train a model on it.
fn train_corpus(
    root: &Path,
    config: &ClassifierConfig,
    extractor: Arc<PlainTextExtractor>,
) -> Result<TrainingResult> {
    let corpus = Corpus::discover(root, &config.extensions)?;
    if corpus.categories().is_empty() {
        return Err(CatbayesError::corpus(format!(
            "no documents found under {}",
            root.display()
        )));
    }
    log::info!(
        "discovered {} categories with {} documents",
        corpus.categories().len(),
        corpus.document_count()
    );

    Trainer::new(config.clone(), extractor)?.train(corpus.into_categories())
}
