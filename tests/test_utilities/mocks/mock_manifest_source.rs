use async_trait::async_trait;
use pom_graph::prelude::*;
use pom_graph::shared::error::PomGraphError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

/// In-memory repository tree: location -> already structured manifest
///
/// Hands out a fetcher that knows which locations exist and a parser that
/// returns the manifest registered for a location, so tests can describe
/// repositories without writing XML.
#[derive(Default, Clone)]
pub struct MockManifestSource {
    manifests: HashMap<String, Manifest>,
    malformed: Vec<String>,
}

impl MockManifestSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manifest(mut self, location: &str, manifest: Manifest) -> Self {
        self.manifests.insert(location.to_string(), manifest);
        self
    }

    /// Registers a location that can be fetched but not parsed
    pub fn with_malformed(mut self, location: &str) -> Self {
        self.malformed.push(location.to_string());
        self
    }

    pub fn fetcher(&self) -> MockManifestFetcher {
        let mut known: Vec<String> = self.manifests.keys().cloned().collect();
        known.extend(self.malformed.iter().cloned());
        MockManifestFetcher {
            known,
            fetched: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn parser(&self) -> MockManifestParser {
        MockManifestParser {
            manifests: self.manifests.clone(),
        }
    }
}

/// Mock ManifestFetcher staging an empty scratch file per known location
#[derive(Clone)]
pub struct MockManifestFetcher {
    known: Vec<String>,
    pub fetched: Arc<Mutex<Vec<String>>>,
}

impl MockManifestFetcher {
    pub fn fetched_locations(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl ManifestFetcher for MockManifestFetcher {
    async fn fetch(&self, location: &str) -> Result<StagedManifest> {
        self.fetched.lock().unwrap().push(location.to_string());

        if !self.known.iter().any(|known| known == location) {
            return Err(PomGraphError::ManifestNotFound {
                location: location.to_string(),
            }
            .into());
        }

        let scratch = NamedTempFile::new()?.into_temp_path();
        Ok(StagedManifest::scratch(location, scratch))
    }
}

/// Mock ManifestParser returning the manifest registered for a location
pub struct MockManifestParser {
    manifests: HashMap<String, Manifest>,
}

impl ManifestParser for MockManifestParser {
    fn parse(&self, location: &str, _content: &str) -> Result<Manifest> {
        self.manifests.get(location).cloned().ok_or_else(|| {
            PomGraphError::ManifestMalformed {
                location: location.to_string(),
                details: "unreadable test manifest".to_string(),
            }
            .into()
        })
    }
}
