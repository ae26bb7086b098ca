//! End-to-end tests: temp-dir corpora through discovery, tokenization,
//! matrix build, SVD, truncation, and the plain-text report sink.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use lsi_engine::{
    corpus, DistanceMatrix, LsiError, SimilarityReport, SvdFactors, TermDocumentMatrix,
    TermWeights,
};

fn run_pipeline(dir: &Path, stopwords: &HashSet<String>, k: usize) -> SimilarityReport {
    let documents = corpus::discover_documents(dir).unwrap();
    let weighted: Vec<(String, TermWeights)> = documents
        .iter()
        .map(|doc| {
            let text = corpus::read_document(&doc.path).unwrap();
            (doc.name.clone(), TermWeights::from_text(&text, stopwords))
        })
        .collect();
    let matrix = TermDocumentMatrix::build(weighted).unwrap();
    let factors = SvdFactors::decompose(&matrix).unwrap();
    DistanceMatrix::compute(&factors.truncate(k).unwrap()).ranked()
}

#[test]
fn two_document_corpus_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "ocean ocean wave wave wave").unwrap();
    fs::write(dir.path().join("b.txt"), "ocean ocean mountain mountain").unwrap();

    let report = run_pipeline(dir.path(), &HashSet::new(), 1);

    let mut rendered = Vec::new();
    report.write_to(&mut rendered).unwrap();
    assert_eq!(
        String::from_utf8(rendered).unwrap(),
        "Documents most similar to a:\n(in decreasing order)\nb\n\n\
         Documents most similar to b:\n(in decreasing order)\na\n\n"
    );
    assert!(report.entries[0].neighbors[0].distance > 1e-9);
}

#[test]
fn report_is_idempotent_for_a_fixed_corpus_and_rank() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("sea.txt"), "ocean wave tide surf swell ocean wave").unwrap();
    fs::write(dir.path().join("peak.txt"), "mountain ridge summit glacier mountain").unwrap();
    fs::write(dir.path().join("mixed.txt"), "ocean mountain wave ridge tide summit").unwrap();

    let stopwords: HashSet<String> = ["ridge"].iter().map(|s| s.to_string()).collect();
    let first = run_pipeline(dir.path(), &stopwords, 2);
    let second = run_pipeline(dir.path(), &stopwords, 2);
    assert_eq!(first, second);
}

#[test]
fn stopword_file_feeds_the_tokenizer() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("stop.txt"), " ocean \nmountain\n").unwrap();
    let stopwords = corpus::load_stopwords(&dir.path().join("stop.txt")).unwrap();

    let weights = TermWeights::from_text("ocean mountain glacier glacier", &stopwords);
    assert_eq!(weights.len(), 1);
    assert_eq!(weights.get("glacier"), Some(1.0));
}

#[test]
fn duplicate_base_names_across_directories_are_rejected() {
    let root = tempfile::tempdir().unwrap();
    let x = root.path().join("x");
    let y = root.path().join("y");
    fs::create_dir_all(&x).unwrap();
    fs::create_dir_all(&y).unwrap();
    fs::write(x.join("doc.txt"), "ocean wave wave").unwrap();
    fs::write(y.join("doc.txt"), "mountain glacier").unwrap();

    let mut documents = corpus::discover_documents(&x).unwrap();
    documents.extend(corpus::discover_documents(&y).unwrap());

    let weighted: Vec<(String, TermWeights)> = documents
        .iter()
        .map(|doc| {
            let text = corpus::read_document(&doc.path).unwrap();
            (doc.name.clone(), TermWeights::from_text(&text, &HashSet::new()))
        })
        .collect();
    let err = TermDocumentMatrix::build(weighted).unwrap_err();
    assert!(matches!(err, LsiError::DuplicateDocumentName(name) if name == "doc"));
}

#[test]
fn empty_directory_fails_at_the_decomposer() {
    let dir = tempfile::tempdir().unwrap();
    let documents = corpus::discover_documents(dir.path()).unwrap();
    assert!(documents.is_empty());

    let matrix = TermDocumentMatrix::build(Vec::new()).unwrap();
    assert!(matches!(
        SvdFactors::decompose(&matrix),
        Err(LsiError::EmptyCorpus { .. })
    ));
}

#[test]
fn all_stopword_document_is_ranked_without_nan() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "ocean ocean wave wave").unwrap();
    fs::write(dir.path().join("hollow.txt"), "the and for the").unwrap();
    fs::write(dir.path().join("b.txt"), "mountain mountain wave glacier").unwrap();

    let report = run_pipeline(dir.path(), &HashSet::new(), 2);
    for entry in &report.entries {
        assert_eq!(entry.neighbors.len(), 2);
        for neighbor in &entry.neighbors {
            assert!(!neighbor.distance.is_nan());
        }
    }
}
