use crate::ports::outbound::{ManifestFetcher, StagedManifest};
use crate::shared::Result;
use async_trait::async_trait;

/// RoutingManifestFetcher sends each location to the matching fetcher.
///
/// `http://` and `https://` locations go to the remote fetcher; everything
/// else (plain paths, `file://`) goes to the local one.
pub struct RoutingManifestFetcher<R: ManifestFetcher, L: ManifestFetcher> {
    remote: R,
    local: L,
}

impl<R: ManifestFetcher, L: ManifestFetcher> RoutingManifestFetcher<R, L> {
    pub fn new(remote: R, local: L) -> Self {
        Self { remote, local }
    }

    pub fn is_remote(location: &str) -> bool {
        let lower = location.to_ascii_lowercase();
        lower.starts_with("http://") || lower.starts_with("https://")
    }
}

#[async_trait]
impl<R: ManifestFetcher, L: ManifestFetcher> ManifestFetcher for RoutingManifestFetcher<R, L> {
    async fn fetch(&self, location: &str) -> Result<StagedManifest> {
        if Self::is_remote(location) {
            self.remote.fetch(location).await
        } else {
            self.local.fetch(location).await
        }
    }
}
