//! Integration tests for discovery, training and evaluation on a directory tree.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use catbayes::config::ClassifierConfig;
use catbayes::corpus::{Corpus, DocumentRef, PlainTextExtractor};
use catbayes::error::{CatbayesError, Result};
use catbayes::model::{CategoryState, Evaluator, NaiveBayesClassifier, Trainer};
use tempfile::TempDir;

fn write_category(root: &Path, category: &str, texts: &[&str]) {
    let dir = root.join(category);
    fs::create_dir_all(&dir).unwrap();
    for (i, text) in texts.iter().enumerate() {
        fs::write(dir.join(format!("doc{i}.txt")), text).unwrap();
    }
}

fn animal_corpus() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_category(
        root,
        "animals/cats",
        &[
            "Meow purr meow",
            "purr purr MEOW",
            "meow meow",
            "meow whiskers purr",
            "purr meow meow",
            "purr purr",
        ],
    );
    write_category(
        root,
        "animals/dogs",
        &[
            "woof bark woof",
            "BARK bark woof",
            "woof woof",
            "woof tail bark",
            "bark woof woof",
            "bark bark",
        ],
    );
    write_category(root, "birds", &["tweet chirp"]);
    fs::write(root.join("animals/cats/notes.md"), "woof woof woof").unwrap();
    temp_dir
}

#[test]
fn test_discover_corpus() -> Result<()> {
    let temp_dir = animal_corpus();

    let corpus = Corpus::discover(temp_dir.path(), &ClassifierConfig::default().extensions)?;

    let names: Vec<_> = corpus.categories().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["animals/cats", "animals/dogs", "birds"]);
    assert_eq!(corpus.document_count(), 13);

    Ok(())
}

#[test]
fn test_evaluate_corpus() -> Result<()> {
    let temp_dir = animal_corpus();
    let config = ClassifierConfig::default().with_seed(2024);
    let extractor = Arc::new(PlainTextExtractor::new());

    let corpus = Corpus::discover(temp_dir.path(), &config.extensions)?;
    let model = Trainer::new(config.clone(), extractor.clone())?.train(corpus.into_categories())?;

    let birds = model.category("birds").unwrap();
    assert_eq!(birds.state(), &CategoryState::Empty);
    assert_eq!(birds.test_documents().len(), 1);

    let summary = Evaluator::new(&model, extractor.as_ref(), &config)?.summarize()?;

    assert_eq!(summary.reports.len(), 3);
    let cats = &summary.reports[0];
    let dogs = &summary.reports[1];
    assert_eq!((cats.total(), dogs.total()), (3, 3));
    assert_eq!(cats.accuracy, 100.0);
    assert_eq!(dogs.accuracy, 100.0);
    assert_eq!(summary.total_correct + summary.total_incorrect, 7);

    Ok(())
}

#[test]
fn test_seeded_split_is_reproducible() -> Result<()> {
    let temp_dir = animal_corpus();
    let config = ClassifierConfig::default().with_seed(99);
    let extractor = Arc::new(PlainTextExtractor::new());
    let trainer = Trainer::new(config.clone(), extractor)?;

    let discover = || Corpus::discover(temp_dir.path(), &config.extensions);

    let first = trainer.split(discover()?.into_categories())?;
    let second = trainer.split(discover()?.into_categories())?;

    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.training_documents(), b.training_documents());
        assert_eq!(a.test_documents(), b.test_documents());
    }

    Ok(())
}

#[test]
fn test_full_training_classifies_new_file() -> Result<()> {
    let temp_dir = animal_corpus();
    let config = ClassifierConfig::default()
        .with_split_ratio(1.0)
        .with_parallel(true);
    let extractor = Arc::new(PlainTextExtractor::new());

    let corpus = Corpus::discover(temp_dir.path(), &config.extensions)?;
    let model = Trainer::new(config.clone(), extractor.clone())?.train(corpus.into_categories())?;
    assert!(model.categories().iter().all(|c| c.test_documents().is_empty()));
    assert_eq!(model.category("birds").unwrap().count("tweet"), 1);

    let probe = temp_dir.path().join("probe.text");
    fs::write(&probe, "tweet tweet chirp").unwrap();
    let classifier = NaiveBayesClassifier::new(&model, extractor.as_ref(), &config)?;
    let scores = classifier.classify(&DocumentRef::new(&probe, "birds"))?;

    assert_eq!(scores.best(), Some("birds"));
    assert!(classifier.is_correct(&DocumentRef::new(&probe, "birds"))?);

    Ok(())
}

#[test]
fn test_missing_document_is_an_extraction_error() -> Result<()> {
    let temp_dir = animal_corpus();
    let config = ClassifierConfig::default().with_seed(5);
    let extractor = Arc::new(PlainTextExtractor::new());
    let model = Trainer::new(config.clone(), extractor.clone())?
        .train(Corpus::discover(temp_dir.path(), &config.extensions)?.into_categories())?;

    let classifier = NaiveBayesClassifier::new(&model, extractor.as_ref(), &config)?;
    let missing = DocumentRef::new(temp_dir.path().join("gone.txt"), "birds");
    let result = classifier.classify(&missing);

    assert!(matches!(result, Err(CatbayesError::Extraction { .. })));

    Ok(())
}
