use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_MODEL_ID: &str = "mrm8488/mobilebert-uncased-finetuned-squadv2";
pub const DEFAULT_OUTPUT_DIR: &str = "./model";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
	pub model_id: String,
	pub tokenizer_id: Option<String>,
	pub output_dir: PathBuf,
}

impl FetchConfig {
	pub fn new(model_id: String, tokenizer_id: Option<String>, output_dir: PathBuf) -> Self {
		Self {
			model_id,
			tokenizer_id,
			output_dir,
		}
	}

	pub fn from_env() -> Self {
		let model_id = std::env::var("HUBFETCH_MODEL_ID")
			.unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string());
		let tokenizer_id = std::env::var("HUBFETCH_TOKENIZER_ID").ok();
		let output_dir = std::env::var("HUBFETCH_OUTPUT_DIR")
			.map(PathBuf::from)
			.unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_DIR));

		Self {
			model_id,
			tokenizer_id,
			output_dir,
		}
	}

	pub fn tokenizer_id(&self) -> &str {
		self.tokenizer_id.as_deref().unwrap_or(&self.model_id)
	}

	pub fn ensure_output_dir(&self) -> crate::error::Result<()> {
		std::fs::create_dir_all(&self.output_dir)?;
		Ok(())
	}
}

impl Default for FetchConfig {
	fn default() -> Self {
		Self {
			model_id: DEFAULT_MODEL_ID.to_string(),
			tokenizer_id: None,
			output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_config_matches_original_invocation() {
		let config = FetchConfig::default();
		assert_eq!(config.model_id, DEFAULT_MODEL_ID);
		assert_eq!(config.tokenizer_id, None);
		assert_eq!(config.output_dir, PathBuf::from("./model"));
	}

	#[test]
	fn tokenizer_id_falls_back_to_model_id() {
		let config = FetchConfig::default();
		assert_eq!(config.tokenizer_id(), DEFAULT_MODEL_ID);

		let config = FetchConfig::new(
			"a/model".to_string(),
			Some("b/tokenizer".to_string()),
			PathBuf::from("./model"),
		);
		assert_eq!(config.tokenizer_id(), "b/tokenizer");
	}

	#[test]
	fn ensure_output_dir_creates_missing_directories() {
		let tmp = tempfile::tempdir().unwrap();
		let config = FetchConfig::new(
			DEFAULT_MODEL_ID.to_string(),
			None,
			tmp.path().join("nested").join("model"),
		);
		config.ensure_output_dir().unwrap();
		assert!(config.output_dir.is_dir());
	}
}
