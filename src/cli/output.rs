//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{CatbayesArgs, OutputFormat};
use crate::error::Result;
use crate::model::{CategoryScore, EvaluationSummary};

/// One discovered category.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryListing {
    pub name: String,
    pub documents: usize,
}

/// Result of the `categories` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoriesResult {
    pub root: String,
    pub categories: Vec<CategoryListing>,
    pub total_documents: usize,
}

/// Result of the `evaluate` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub root: String,
    #[serde(flatten)]
    pub summary: EvaluationSummary,
    pub duration_ms: u64,
}

/// Scores for one classified file.
#[derive(Debug, Serialize, Deserialize)]
pub struct FileClassification {
    pub file: String,
    pub best: Option<String>,
    pub scores: Vec<CategoryScore>,
}

/// Result of the `classify` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassificationResults {
    pub root: String,
    pub results: Vec<FileClassification>,
}

/// Rendering of a command result for the human output format.
pub trait HumanOutput {
    fn render_human(&self) -> String;
}

impl HumanOutput for CategoriesResult {
    fn render_human(&self) -> String {
        let width = name_width(self.categories.iter().map(|c| c.name.as_str()));
        let mut out = String::new();
        for category in &self.categories {
            out.push_str(&format!(
                "{:<width$}  {} documents\n",
                category.name, category.documents
            ));
        }
        out.push_str(&format!(
            "{} categories, {} documents",
            self.categories.len(),
            self.total_documents
        ));
        out
    }
}

impl HumanOutput for EvaluationResult {
    fn render_human(&self) -> String {
        let summary = &self.summary;
        let width = name_width(summary.reports.iter().map(|r| r.category.as_str()));
        let mut out = String::new();
        for report in &summary.reports {
            out.push_str(&format!(
                "{:<width$}  {:>5}/{:<5}  {:>6.2}%\n",
                report.category,
                report.correct,
                report.total(),
                report.accuracy
            ));
        }
        out.push_str(&format!(
            "overall: {}/{} correct ({:.2}%) in {}",
            summary.total_correct,
            summary.total_correct + summary.total_incorrect,
            summary.overall_accuracy,
            format_duration(self.duration_ms)
        ));
        out
    }
}

impl HumanOutput for ClassificationResults {
    fn render_human(&self) -> String {
        let mut blocks = Vec::with_capacity(self.results.len());
        for result in &self.results {
            let mut block = format!(
                "{}: {}\n",
                result.file,
                result.best.as_deref().unwrap_or("-")
            );
            let width = name_width(result.scores.iter().map(|s| s.category.as_str()));
            for score in &result.scores {
                block.push_str(&format!("  {:<width$}  {}\n", score.category, score.score));
            }
            blocks.push(block.trim_end().to_string());
        }
        blocks.join("\n\n")
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &CatbayesArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(message: &str, result: &T, args: &CatbayesArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    println!("{}", result.render_human());
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &CatbayesArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

fn name_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    names.map(|n| n.chars().count()).max().unwrap_or(0)
}

/// Format milliseconds into a human-readable duration.
fn format_duration(ms: u64) -> String {
    if ms < 1000 {
        format!("{ms} ms")
    } else {
        format!("{:.2} s", ms as f64 / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CategoryReport;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0 ms");
        assert_eq!(format_duration(999), "999 ms");
        assert_eq!(format_duration(1500), "1.50 s");
    }

    #[test]
    fn test_categories_human() {
        let result = CategoriesResult {
            root: "corpus".to_string(),
            categories: vec![
                CategoryListing {
                    name: "cats".to_string(),
                    documents: 3,
                },
                CategoryListing {
                    name: "big/dogs".to_string(),
                    documents: 10,
                },
            ],
            total_documents: 13,
        };

        let text = result.render_human();

        assert!(text.starts_with("cats      3 documents\n"));
        assert!(text.contains("big/dogs  10 documents\n"));
        assert!(text.ends_with("2 categories, 13 documents"));
    }

    #[test]
    fn test_evaluation_json_is_flattened() {
        let result = EvaluationResult {
            root: "corpus".to_string(),
            summary: EvaluationSummary::from_reports(vec![CategoryReport::new("cats", 3, 1)]),
            duration_ms: 12,
        };

        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["total_correct"], 3);
        assert_eq!(value["overall_accuracy"], 75.0);
        assert_eq!(value["reports"][0]["category"], "cats");
        assert!(result.render_human().contains("overall: 3/4 correct (75.00%) in 12 ms"));
    }

    #[test]
    fn test_classification_human() {
        let result = ClassificationResults {
            root: "corpus".to_string(),
            results: vec![FileClassification {
                file: "new.txt".to_string(),
                best: Some("cats".to_string()),
                scores: vec![
                    CategoryScore {
                        category: "cats".to_string(),
                        score: 0.9992,
                    },
                    CategoryScore {
                        category: "dogs".to_string(),
                        score: 0.0007,
                    },
                ],
            }],
        };

        assert_eq!(
            result.render_human(),
            "new.txt: cats\n  cats  0.9992\n  dogs  0.0007"
        );
    }
}
