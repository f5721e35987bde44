use crate::ports::outbound::{ManifestFetcher, StagedManifest};
use crate::shared::error::PomGraphError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::PathBuf;

const FILE_SCHEME: &str = "file://";

/// FileSystemManifestFetcher adapter for manifests in a local checkout
///
/// Accepts plain paths and `file://` URLs. The manifest is parsed where it
/// lies, so no scratch copy is made.
pub struct FileSystemManifestFetcher;

impl FileSystemManifestFetcher {
    pub fn new() -> Self {
        Self
    }

    fn to_path(location: &str) -> PathBuf {
        PathBuf::from(location.strip_prefix(FILE_SCHEME).unwrap_or(location))
    }
}

impl Default for FileSystemManifestFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ManifestFetcher for FileSystemManifestFetcher {
    async fn fetch(&self, location: &str) -> Result<StagedManifest> {
        let path = Self::to_path(location);

        if !path.exists() {
            return Err(PomGraphError::ManifestNotFound {
                location: location.to_string(),
            }
            .into());
        }

        validate_regular_file(&path, "manifest").map_err(|e| PomGraphError::ManifestFetchError {
            location: location.to_string(),
            details: e.to_string(),
        })?;

        Ok(StagedManifest::in_place(location, path))
    }
}
