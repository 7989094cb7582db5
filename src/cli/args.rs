//! Command line argument parsing for the catbayes CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::ClassifierConfig;
use crate::error::Result;

/// catbayes - Naive Bayes classification of directory-labelled text corpora
#[derive(Parser, Debug, Clone)]
#[command(name = "catbayes")]
#[command(about = "Train and evaluate a Naive Bayes text classifier over a directory tree")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct CatbayesArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl CatbayesArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List the categories found under a corpus root
    Categories(CategoriesArgs),

    /// Train on part of each category and report accuracy on the rest
    Evaluate(EvaluateArgs),

    /// Train on a corpus and classify individual files
    Classify(ClassifyArgs),
}

/// Settings shared by every command that reads a corpus.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ModelOptions {
    /// JSON configuration file
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Seed for the train/test shuffle
    #[arg(long)]
    pub seed: Option<u64>,

    /// Fraction of each category used for training
    #[arg(long, value_name = "RATIO")]
    pub split_ratio: Option<f64>,

    /// Train and evaluate on the rayon thread pool
    #[arg(long)]
    pub parallel: bool,

    /// Eligible document extension (repeatable)
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,
}

impl ModelOptions {
    /// Load the configuration file (or defaults) and apply flag overrides.
    pub fn resolve(&self) -> Result<ClassifierConfig> {
        let mut config = match &self.config {
            Some(path) => ClassifierConfig::from_file(path)?,
            None => ClassifierConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(ratio) = self.split_ratio {
            config.split_ratio = ratio;
        }
        if self.parallel {
            config.parallel = true;
        }
        if !self.extensions.is_empty() {
            config.extensions = self
                .extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();
        }

        config.validate()?;
        Ok(config)
    }
}

/// Arguments for listing categories
#[derive(Parser, Debug, Clone)]
pub struct CategoriesArgs {
    /// Corpus root directory
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    #[command(flatten)]
    pub options: ModelOptions,
}

/// Arguments for evaluation
#[derive(Parser, Debug, Clone)]
pub struct EvaluateArgs {
    /// Corpus root directory
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    #[command(flatten)]
    pub options: ModelOptions,
}

/// Arguments for classifying files
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Corpus root directory to train on
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    /// Files to classify
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub options: ModelOptions,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
