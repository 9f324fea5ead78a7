mod artifact;
mod cli;
mod config;
mod error;
mod verify;

use artifact::{format_size, ArtifactFetcher, FetchManifest};
use clap::Parser;
use cli::{Cli, Commands};
use config::FetchConfig;
use error::Result;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => fetch(FetchConfig::from_env()),

        Some(Commands::Fetch {
            model_id,
            tokenizer_id,
            output_dir,
        }) => fetch(FetchConfig::new(model_id, tokenizer_id, output_dir)),

        Some(Commands::Verify { output_dir }) => {
            let report = verify::verify_dir(&output_dir)?;

            println!("✓ Artifact set complete: {:?}", output_dir);
            println!("  Weights: {}", report.weights);
            if let Some(model_type) = &report.model_type {
                println!("  Model type: {}", model_type);
            }
            println!("  Tokenizer: {}", report.tokenizer);
            println!("  Files: {}", report.file_count);

            Ok(())
        }

        Some(Commands::List { output_dir }) => {
            match FetchManifest::load(&output_dir)? {
                None => {
                    println!("No fetch manifest in {:?}.", output_dir);
                    println!("Use 'hubfetch fetch' to download artifacts.");
                }
                Some(manifest) => {
                    println!("Artifacts in {:?}:\n", output_dir);
                    println!("  Model: {}", manifest.model_id);
                    println!("  Tokenizer: {}", manifest.tokenizer_id);
                    println!("  Fetched: {}", manifest.fetched_at);
                    println!();
                    for file in &manifest.files {
                        println!("  {} ({})", file.name, format_size(file.size));
                    }
                }
            }

            Ok(())
        }
    }
}

fn fetch(config: FetchConfig) -> Result<()> {
    let fetcher = ArtifactFetcher::new()?;
    let manifest = fetcher.fetch_all(&config)?;

    println!("✓ Successfully fetched model: {}", config.model_id);
    println!("  Tokenizer: {}", config.tokenizer_id());
    println!("  Output: {:?}", config.output_dir);
    for file in &manifest.files {
        println!("    {} ({})", file.name, format_size(file.size));
    }

    Ok(())
}
