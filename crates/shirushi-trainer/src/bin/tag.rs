//! Tags a sentence with a trained HMM model and prints one word/tag pair per line.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use clap::Parser;
use tracing::info;

use shirushi_core::hmm::{Model, decode};
use shirushi_core::tokenizer::Tokenizer;

/// CLI arguments
#[derive(Parser)]
#[command(name = "tag")]
#[command(about = "Tag a sentence with a trained HMM model")]
#[command(version)]
struct Cli {
    /// Trained model file (JSON, produced by `train`)
    #[arg(short, long, default_value = "models/hmm.json")]
    model: PathBuf,

    /// Sentence to tokenize and tag
    sentence: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let json = fs::read_to_string(&cli.model)
        .with_context(|| format!("failed to read model {:?}", cli.model))?;
    let model: Model =
        serde_json::from_str(&json).with_context(|| format!("invalid model file {:?}", cli.model))?;
    info!("loaded model with {} tags", model.tags().len());

    let tokenizer = Tokenizer::new()?;
    let tokens = tokenizer.tokenize(&cli.sentence);
    ensure!(!tokens.is_empty(), "no tokens found in input sentence");

    let observations: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    let result = decode(&model, &observations)?;

    for (token, (_, tag)) in tokens.iter().zip(&result.pairs) {
        println!("{}\t{}", &cli.sentence[token.start..token.end], tag);
    }
    println!("log-probability: {:.4}", result.score);

    Ok(())
}
