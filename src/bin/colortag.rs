use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colortag::{classify_bytes, Options};
use tracing_subscriber::EnvFilter;

/// Print the dominant colors of an image, most dominant first.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Input image path
    input: PathBuf,

    /// Edge length of the downsampled classification grid
    #[arg(short = 's', long, default_value_t = 32)]
    image_size: u32,

    /// Minimum coverage fraction for a color to be reported
    #[arg(short = 'm', long, default_value_t = 0.005)]
    min_score: f64,

    /// Emit results as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let options = Options {
        image_size: args.image_size,
        min_score: args.min_score,
    };

    let bytes = fs::read(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let results = classify_bytes(&bytes, &options).context("classification failed")?;

    if args.json {
        let results: Vec<serde_json::Value> = results
            .iter()
            .map(|r| serde_json::json!({ "label": r.label, "score": r.score }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for result in &results {
            println!("{} (score: {:.10})", result.label, result.score);
        }
    }

    Ok(())
}
