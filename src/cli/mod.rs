use crate::config::{DEFAULT_MODEL_ID, DEFAULT_OUTPUT_DIR};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hubfetch")]
#[command(version, about = "Prefetches Hugging Face model artifacts for offline loading", long_about = None)]
pub struct Cli {
	/// Running without a subcommand fetches the default model and tokenizer
	#[command(subcommand)]
	pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Download model and tokenizer artifacts into the output directory
	Fetch {
		/// Hub repository ID of the model, optionally pinned as "org/name@revision"
		#[arg(long, env = "HUBFETCH_MODEL_ID", default_value = DEFAULT_MODEL_ID)]
		model_id: String,

		/// Hub repository ID of the tokenizer (defaults to the model ID)
		#[arg(long, env = "HUBFETCH_TOKENIZER_ID")]
		tokenizer_id: Option<String>,

		/// Directory that receives the artifact files
		#[arg(long, env = "HUBFETCH_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
		output_dir: PathBuf,
	},

	/// Check that a directory holds a complete artifact set
	Verify {
		/// Directory to inspect
		#[arg(long, env = "HUBFETCH_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
		output_dir: PathBuf,
	},

	/// Show what a previous fetch wrote
	List {
		/// Directory holding fetched artifacts
		#[arg(long, env = "HUBFETCH_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
		output_dir: PathBuf,
	},
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::CommandFactory;

	#[test]
	fn cli_definition_is_consistent() {
		Cli::command().debug_assert();
	}

	#[test]
	fn bare_invocation_has_no_subcommand() {
		let cli = Cli::try_parse_from(["hubfetch"]).unwrap();
		assert!(cli.command.is_none());
	}

	#[test]
	fn fetch_accepts_explicit_identifiers() {
		let cli = Cli::try_parse_from([
			"hubfetch",
			"fetch",
			"--model-id",
			"org/model",
			"--tokenizer-id",
			"org/tokenizer",
			"--output-dir",
			"artifacts",
		])
		.unwrap();

		match cli.command {
			Some(Commands::Fetch {
				model_id,
				tokenizer_id,
				output_dir,
			}) => {
				assert_eq!(model_id, "org/model");
				assert_eq!(tokenizer_id.as_deref(), Some("org/tokenizer"));
				assert_eq!(output_dir, PathBuf::from("artifacts"));
			}
			_ => panic!("expected fetch subcommand"),
		}
	}

	#[test]
	fn verify_accepts_output_dir() {
		let cli = Cli::try_parse_from(["hubfetch", "verify", "--output-dir", "artifacts"]).unwrap();
		match cli.command {
			Some(Commands::Verify { output_dir }) => {
				assert_eq!(output_dir, PathBuf::from("artifacts"));
			}
			_ => panic!("expected verify subcommand"),
		}
	}
}
