use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const MANIFEST_FILE: &str = ".hubfetch.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchManifest {
    pub model_id: String,
    pub tokenizer_id: String,
    pub fetched_at: String,
    pub files: Vec<FileEntry>,
}

impl FetchManifest {
    pub fn new(model_id: String, tokenizer_id: String, files: Vec<FileEntry>) -> Self {
        Self {
            model_id,
            tokenizer_id,
            fetched_at: chrono::Utc::now().to_rfc3339(),
            files,
        }
    }

    pub fn load(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(MANIFEST_FILE);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        let manifest: FetchManifest = toml::from_str(&content)?;
        Ok(Some(manifest))
    }

    pub fn save(&self, dir: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(dir.join(MANIFEST_FILE), content)?;
        Ok(())
    }
}

pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else {
        format!("{:.1} GB", bytes as f64 / 1024.0 / 1024.0 / 1024.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn manifest_roundtrips_through_toml() {
        let tmp = tempfile::tempdir().unwrap();
        let manifest = FetchManifest::new(
            "org/model".to_string(),
            "org/tokenizer".to_string(),
            vec![
                FileEntry {
                    name: "model.safetensors".to_string(),
                    size: 98_304,
                },
                FileEntry {
                    name: "config.json".to_string(),
                    size: 1_021,
                },
            ],
        );

        manifest.save(tmp.path()).unwrap();
        let loaded = FetchManifest::load(tmp.path()).unwrap();
        assert_eq!(loaded, Some(manifest));
    }

    #[test]
    fn missing_manifest_loads_as_none() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(FetchManifest::load(tmp.path()).unwrap(), None);
    }

    #[test]
    fn malformed_manifest_is_a_serialization_error() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join(MANIFEST_FILE), "files = 3").unwrap();
        assert!(matches!(
            FetchManifest::load(tmp.path()),
            Err(Error::SerializationError(_))
        ));
    }

    #[test]
    fn format_size_picks_sensible_units() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(5_300_000), "5.1 MB");
        assert_eq!(format_size(3_221_225_472), "3.0 GB");
    }
}
