use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use rayon::prelude::*;

use lsi_engine::{corpus, DistanceMatrix, LsiError, SvdFactors, TermDocumentMatrix, TermWeights};

/// Latent semantic indexing over a directory of plain-text documents.
#[derive(Debug, Parser)]
#[command(name = "lsi", version, about)]
struct Args {
    /// Directory containing the .txt document collection
    docset: PathBuf,

    /// Stopword file, one word per line
    stopwords: PathBuf,

    /// Where to write the similarity report
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,

    /// Number of singular values to retain; when omitted, the contribution
    /// list is printed and the rank is read from stdin
    #[arg(short = 'k', long)]
    rank: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let stopwords = corpus::load_stopwords(&args.stopwords)?;
    let documents = corpus::discover_documents(&args.docset)?;
    if documents.is_empty() {
        bail!("no .txt documents found in {}", args.docset.display());
    }

    // Tokenization is independent per document; par_iter keeps input order,
    // so the matrix columns stay deterministic.
    let weighted: Vec<(String, TermWeights)> = documents
        .par_iter()
        .map(|doc| {
            let text = corpus::read_document(&doc.path)?;
            Ok((doc.name.clone(), TermWeights::from_text(&text, &stopwords)))
        })
        .collect::<Result<_, LsiError>>()?;

    let matrix = TermDocumentMatrix::build(weighted)?;
    info!(
        "term-document matrix: {} terms x {} documents",
        matrix.n_terms(),
        matrix.n_docs()
    );

    let factors = SvdFactors::decompose(&matrix)?;
    let contributions = factors.singular_contribution();
    print_contributions(&contributions);

    let k = match args.rank {
        Some(k) => k,
        None => prompt_rank(contributions.len()).context("failed to read rank from stdin")?,
    };

    let truncated = factors.truncate(k)?;
    let report = DistanceMatrix::compute(&truncated).ranked();

    let file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    let mut writer = BufWriter::new(file);
    report.write_to(&mut writer)?;
    writer.flush()?;

    report.write_to(&mut io::stdout().lock())?;
    println!("Similarity report written to {}", args.output.display());
    Ok(())
}

/// One line per singular value with its share of the total squared
/// singular-value mass, to inform the rank choice.
fn print_contributions(contributions: &[f64]) {
    println!("Variation contribution per singular value:");
    for (i, c) in contributions.iter().enumerate() {
        println!("  {:>3}  {:.6}", i + 1, c);
    }
    println!();
}

/// Prompt until the operator supplies a rank in [1, max]. Out-of-range or
/// non-numeric input re-prompts; EOF aborts.
fn prompt_rank(max: usize) -> Result<usize> {
    let stdin = io::stdin();
    loop {
        print!("How many singular values would you like to retain (1-{max})? ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            bail!("stdin closed before a rank was supplied");
        }
        match line.trim().parse::<usize>() {
            Ok(k) if (1..=max).contains(&k) => return Ok(k),
            Ok(k) => eprintln!("rank {k} is out of range, expected 1-{max}"),
            Err(_) => eprintln!("not a positive integer: {:?}", line.trim()),
        }
    }
}
