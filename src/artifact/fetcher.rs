use crate::artifact::{FetchManifest, FileEntry};
use crate::config::FetchConfig;
use crate::error::{Error, Result};
use hf_hub::api::sync::{Api, ApiRepo};
use hf_hub::{Repo, RepoType};
use std::path::{Path, PathBuf};

// Model and tokenizer artifacts share one output directory, so the two
// request lists must stay disjoint.
pub const WEIGHT_FILES: &[&str] = &["model.safetensors", "pytorch_model.bin"];
pub const MODEL_CONFIG_FILE: &str = "config.json";
pub const TOKENIZER_FILES: &[&str] = &["tokenizer.json", "vocab.txt"];
pub const TOKENIZER_COMPANION_FILES: &[&str] = &[
    "vocab.txt",
    "tokenizer_config.json",
    "special_tokens_map.json",
    "added_tokens.json",
];

pub struct ArtifactFetcher {
    api: Api,
}

impl ArtifactFetcher {
    pub fn new() -> Result<Self> {
        let api = Api::new().map_err(|e| Error::DownloadFailed(e.to_string()))?;
        Ok(Self { api })
    }

    /// Fetches the model and tokenizer artifact sets and records a manifest.
    ///
    /// Files staged before a failing step stay in the output directory; the
    /// manifest is only written once both sets are complete.
    pub fn fetch_all(&self, config: &FetchConfig) -> Result<FetchManifest> {
        config.ensure_output_dir()?;

        let mut files = self.fetch_model(&config.model_id, &config.output_dir)?;
        files.extend(self.fetch_tokenizer(config.tokenizer_id(), &config.output_dir)?);

        let manifest = FetchManifest::new(
            config.model_id.clone(),
            config.tokenizer_id().to_string(),
            files,
        );
        manifest.save(&config.output_dir)?;

        tracing::info!(
            "Fetched {} artifact files into {:?}",
            manifest.files.len(),
            config.output_dir
        );

        Ok(manifest)
    }

    pub fn fetch_model(&self, identifier: &str, dest_dir: &Path) -> Result<Vec<FileEntry>> {
        let repo = self.resolve(identifier)?;

        tracing::info!("Fetching model artifacts from: {}", identifier);

        let weights = first_available(&repo, WEIGHT_FILES).ok_or_else(|| {
            Error::DownloadFailed(format!(
                "Could not find a weight file in {} (tried {})",
                identifier,
                WEIGHT_FILES.join(", ")
            ))
        })?;

        let model_config = repo.get(MODEL_CONFIG_FILE).map_err(|e| {
            Error::DownloadFailed(format!(
                "Could not find {} in {}: {}",
                MODEL_CONFIG_FILE, identifier, e
            ))
        })?;

        Ok(vec![
            stage(&weights, dest_dir)?,
            stage(&model_config, dest_dir)?,
        ])
    }

    pub fn fetch_tokenizer(&self, identifier: &str, dest_dir: &Path) -> Result<Vec<FileEntry>> {
        let repo = self.resolve(identifier)?;

        tracing::info!("Fetching tokenizer artifacts from: {}", identifier);

        let primary = first_available(&repo, TOKENIZER_FILES).ok_or_else(|| {
            Error::DownloadFailed(format!(
                "Could not find a tokenizer file in {} (tried {})",
                identifier,
                TOKENIZER_FILES.join(", ")
            ))
        })?;

        let mut staged = vec![stage(&primary, dest_dir)?];

        for name in TOKENIZER_COMPANION_FILES {
            // vocab.txt may already be staged as the primary tokenizer file
            if staged.iter().any(|f| f.name == *name) {
                continue;
            }
            match repo.get(name) {
                Ok(path) => staged.push(stage(&path, dest_dir)?),
                Err(e) => tracing::debug!("Skipping optional {}: {}", name, e),
            }
        }

        Ok(staged)
    }

    fn resolve(&self, identifier: &str) -> Result<ApiRepo> {
        let (name, revision) = parse_identifier(identifier)?;
        let repo = match revision {
            Some(rev) => Repo::with_revision(name, RepoType::Model, rev),
            None => Repo::new(name, RepoType::Model),
        };
        Ok(self.api.repo(repo))
    }
}

/// Splits an identifier of the form "org/name@rev" into a repo name and an
/// optional revision. Rejects empty or whitespace-bearing identifiers before
/// any hub access happens.
fn parse_identifier(raw: &str) -> Result<(String, Option<String>)> {
    let id = raw.trim();
    if id.is_empty() {
        return Err(Error::InvalidIdentifier(
            "identifier must not be empty".to_string(),
        ));
    }
    if id.chars().any(char::is_whitespace) {
        return Err(Error::InvalidIdentifier(format!(
            "identifier {:?} contains whitespace",
            raw
        )));
    }

    match id.split_once('@') {
        Some(("", _)) => Err(Error::InvalidIdentifier(format!(
            "identifier {:?} names no repository",
            raw
        ))),
        Some((name, rev)) if !rev.is_empty() => Ok((name.to_string(), Some(rev.to_string()))),
        Some((name, _)) => Ok((name.to_string(), None)),
        None => Ok((id.to_string(), None)),
    }
}

fn first_available(repo: &ApiRepo, names: &[&str]) -> Option<PathBuf> {
    names.iter().find_map(|name| match repo.get(name) {
        Ok(path) => Some(path),
        Err(e) => {
            tracing::debug!("{} not retrievable: {}", name, e);
            None
        }
    })
}

/// Copies a file the hub client downloaded into its cache over to the
/// destination directory, overwriting any file of the same name.
fn stage(cached: &Path, dest_dir: &Path) -> Result<FileEntry> {
    let name = cached
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::DownloadFailed(format!("Unusable artifact path: {:?}", cached)))?;

    let dest = dest_dir.join(name);
    let size = std::fs::copy(cached, &dest)?;

    tracing::debug!("Staged {} ({} bytes)", name, size);

    Ok(FileEntry {
        name: name.to_string(),
        size,
    })
}
