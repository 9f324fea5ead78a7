use crate::artifact::fetcher::{MODEL_CONFIG_FILE, TOKENIZER_FILES, WEIGHT_FILES};
use crate::error::{Error, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Debug)]
pub struct VerifyReport {
    pub weights: String,
    pub model_type: Option<String>,
    pub tokenizer: String,
    pub file_count: usize,
}

/// Checks that a directory holds a loadable artifact set: a non-empty weight
/// file, a parseable model config, and a non-empty tokenizer file.
pub fn verify_dir(dir: &Path) -> Result<VerifyReport> {
    if !dir.is_dir() {
        return Err(Error::ArtifactMissing(format!(
            "artifact directory {:?} does not exist",
            dir
        )));
    }

    let weights = require_nonempty(dir, WEIGHT_FILES, "weight file")?;
    let tokenizer = require_nonempty(dir, TOKENIZER_FILES, "tokenizer file")?;

    let config_path = dir.join(MODEL_CONFIG_FILE);
    if !config_path.is_file() {
        return Err(Error::ArtifactMissing(format!(
            "no {} in {:?}",
            MODEL_CONFIG_FILE, dir
        )));
    }

    let config: Value = serde_json::from_str(&fs::read_to_string(&config_path)?)?;
    let model_type = config
        .get("model_type")
        .and_then(|v| v.as_str())
        .map(String::from);

    let file_count = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .count();

    Ok(VerifyReport {
        weights,
        model_type,
        tokenizer,
        file_count,
    })
}

fn require_nonempty(dir: &Path, candidates: &[&str], what: &str) -> Result<String> {
    for name in candidates {
        let path = dir.join(name);
        if path.is_file() && fs::metadata(&path)?.len() > 0 {
            return Ok(name.to_string());
        }
    }

    Err(Error::ArtifactMissing(format!(
        "no {} in {:?} (expected one of: {})",
        what,
        dir,
        candidates.join(", ")
    )))
}
