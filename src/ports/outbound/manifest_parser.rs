use crate::graph_analysis::domain::Manifest;
use crate::shared::Result;

/// ManifestParser port turning raw manifest text into a [`Manifest`]
pub trait ManifestParser: Send + Sync {
    /// Parses `content` fetched from `location`
    ///
    /// # Errors
    /// Returns `PomGraphError::ManifestMalformed` when the document cannot be
    /// read as a manifest or lacks required coordinates.
    fn parse(&self, location: &str, content: &str) -> Result<Manifest>;
}
