use super::ArtifactKey;
use std::collections::{BTreeMap, BTreeSet};

/// Artifacts observed under each groupId.
///
/// Groups and artifacts iterate in lexical order so that renders of the
/// same index are byte-identical.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupIndex {
    groups: BTreeMap<String, BTreeSet<String>>,
}

impl GroupIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an artifact under its group; returns false if already present
    pub fn insert(&mut self, key: &ArtifactKey) -> bool {
        self.groups
            .entry(key.group_id().to_string())
            .or_default()
            .insert(key.artifact_id().to_string())
    }

    pub fn contains(&self, key: &ArtifactKey) -> bool {
        self.groups
            .get(key.group_id())
            .is_some_and(|artifacts| artifacts.contains(key.artifact_id()))
    }

    pub fn artifacts(&self, group_id: &str) -> Option<&BTreeSet<String>> {
        self.groups.get(group_id)
    }

    /// `(groupId, artifactIds)` pairs in lexical order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.groups
            .iter()
            .map(|(group, artifacts)| (group.as_str(), artifacts))
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn artifact_count(&self) -> usize {
        self.groups.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
