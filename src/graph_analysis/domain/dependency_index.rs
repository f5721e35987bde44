use super::ArtifactKey;
use std::collections::BTreeMap;

/// Required version -> referrers, in the order the declarations were processed
pub type VersionReferrers = BTreeMap<String, Vec<ArtifactKey>>;

/// Dependency edges grouped by depended-upon artifact, then by required version.
///
/// Every `(dependency, version, referrer)` triple is retained. The same
/// dependency appearing under several versions is expected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyIndex {
    edges: BTreeMap<ArtifactKey, VersionReferrers>,
}

impl DependencyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `referrer` to the list for `(dependency, version)`
    pub fn record(&mut self, dependency: ArtifactKey, version: &str, referrer: ArtifactKey) {
        self.edges
            .entry(dependency)
            .or_default()
            .entry(version.to_string())
            .or_default()
            .push(referrer);
    }

    pub fn versions(&self, dependency: &ArtifactKey) -> Option<&VersionReferrers> {
        self.edges.get(dependency)
    }

    pub fn referrers(&self, dependency: &ArtifactKey, version: &str) -> &[ArtifactKey] {
        self.edges
            .get(dependency)
            .and_then(|versions| versions.get(version))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, dependency: &ArtifactKey) -> bool {
        self.edges.contains_key(dependency)
    }

    /// `(dependency, versions)` pairs ordered by dependency key
    pub fn iter(&self) -> impl Iterator<Item = (&ArtifactKey, &VersionReferrers)> {
        self.edges.iter()
    }

    /// Flattened `(dependency, version, referrer)` triples
    pub fn edges(&self) -> impl Iterator<Item = (&ArtifactKey, &str, &ArtifactKey)> {
        self.edges.iter().flat_map(|(dependency, versions)| {
            versions.iter().flat_map(move |(version, referrers)| {
                referrers
                    .iter()
                    .map(move |referrer| (dependency, version.as_str(), referrer))
            })
        })
    }

    pub fn dependency_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges
            .values()
            .flat_map(BTreeMap::values)
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
