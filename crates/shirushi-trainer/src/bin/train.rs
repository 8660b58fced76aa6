//! Trains an HMM tagging model from a tagged corpus file and writes it as JSON.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use shirushi_core::hmm::{DEFAULT_FLOOR, estimate_with_floor};
use shirushi_trainer::data::load_tagged_corpus;
use shirushi_trainer::eval::evaluate;

/// CLI arguments
#[derive(Parser)]
#[command(name = "train")]
#[command(about = "Train an HMM tagging model from a tagged corpus")]
#[command(version)]
struct Cli {
    /// Tagged corpus file (token<TAB>tag lines, blank line between sentences)
    #[arg(short, long)]
    corpus: PathBuf,

    /// Where to write the trained model (JSON)
    #[arg(short, long, default_value = "models/hmm.json")]
    output: PathBuf,

    /// Floor probability for transitions and emissions never seen in training
    #[arg(long, default_value_t = DEFAULT_FLOOR)]
    floor: f64,

    /// Number of sentences held out from the end of the corpus for evaluation
    #[arg(long, default_value_t = 0)]
    holdout: usize,

    /// Shuffle sentences with this seed before splitting off the holdout
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let mut corpus = load_tagged_corpus(&cli.corpus)
        .with_context(|| format!("failed to read corpus {:?}", cli.corpus))?;
    info!("loaded {} sentences from {:?}", corpus.len(), cli.corpus);

    if let Some(seed) = cli.seed {
        let mut rng = oorandom::Rand64::new(seed as u128);
        // Fisher-Yates
        for i in (1..corpus.len()).rev() {
            let j = rng.rand_range(0..(i as u64 + 1)) as usize;
            corpus.swap(i, j);
        }
        info!("shuffled corpus with seed {}", seed);
    }

    let split = corpus.len().saturating_sub(cli.holdout);
    let (train, held_out) = corpus.split_at(split);

    let model = estimate_with_floor(train, cli.floor).context("model estimation failed")?;
    info!(
        "estimated model: {} tags from {} training sentences",
        model.tags().len(),
        train.len()
    );

    if !held_out.is_empty() {
        let eval = evaluate(&model, held_out)?;
        info!(
            "holdout accuracy: {:.2}% ({}/{} tokens)",
            eval.accuracy() * 100.0,
            eval.correct,
            eval.tokens
        );
    }

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {:?}", parent))?;
        }
    }
    let json = serde_json::to_string_pretty(&model)?;
    fs::write(&cli.output, json)
        .with_context(|| format!("failed to write model to {:?}", cli.output))?;
    info!("model saved to {:?}", cli.output);

    Ok(())
}
