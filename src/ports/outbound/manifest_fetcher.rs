use crate::shared::security::safe_read_to_string;
use crate::shared::Result;
use async_trait::async_trait;
use std::fmt;
use std::path::{Path, PathBuf};
use tempfile::TempPath;

/// HTTP basic-auth credentials attached to every remote fetch
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Builds credentials only when both halves are present
    pub fn from_parts(username: Option<String>, password: Option<String>) -> Option<Self> {
        match (username, password) {
            (Some(username), Some(password)) => Some(Self { username, password }),
            _ => None,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// Keep the password out of logs and panics
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug)]
enum Storage {
    InPlace(PathBuf),
    Scratch(TempPath),
}

/// A fetched manifest, fully written to disk and ready to be parsed.
///
/// Remote manifests live in their own scratch file, removed on drop, so
/// concurrent fetches never share a staging location.
#[derive(Debug)]
pub struct StagedManifest {
    location: String,
    storage: Storage,
}

impl StagedManifest {
    /// A manifest that already exists on disk and is read where it lies
    pub fn in_place(location: impl Into<String>, path: PathBuf) -> Self {
        Self {
            location: location.into(),
            storage: Storage::InPlace(path),
        }
    }

    /// A manifest staged into a scratch file that has been written and closed
    pub fn scratch(location: impl Into<String>, path: TempPath) -> Self {
        Self {
            location: location.into(),
            storage: Storage::Scratch(path),
        }
    }

    /// The location the manifest was fetched from
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn path(&self) -> &Path {
        match &self.storage {
            Storage::InPlace(path) => path.as_path(),
            Storage::Scratch(path) => &**path,
        }
    }

    pub fn read_to_string(&self) -> Result<String> {
        safe_read_to_string(self.path(), "manifest")
    }
}

/// ManifestFetcher port for retrieving a manifest from a location
///
/// # Errors
/// Implementations fail with `PomGraphError::ManifestNotFound` when nothing
/// exists at the location and `PomGraphError::ManifestFetchError` for any
/// other transport or I/O failure.
#[async_trait]
pub trait ManifestFetcher: Send + Sync {
    /// Fetches the manifest at `location` (a URL or a filesystem path)
    async fn fetch(&self, location: &str) -> Result<StagedManifest>;
}
