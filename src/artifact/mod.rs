pub mod fetcher;
pub mod manifest;

pub use fetcher::ArtifactFetcher;
pub use manifest::{format_size, FetchManifest, FileEntry};
