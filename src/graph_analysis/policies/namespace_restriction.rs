use crate::graph_analysis::domain::ArtifactKey;

/// Prefix filter scoping the graph to a subset of groupIds.
///
/// The empty restriction matches everything and is the default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceRestriction(String);

impl NamespaceRestriction {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self(prefix.into())
    }

    /// No restriction at all
    pub fn unrestricted() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_unrestricted(&self) -> bool {
        self.0.is_empty()
    }

    /// Does `group_id` start with the restriction prefix?
    pub fn admits_group(&self, group_id: &str) -> bool {
        group_id.starts_with(&self.0)
    }

    /// Does the `groupId:artifactId` coordinate start with the restriction prefix?
    pub fn admits_coordinate(&self, key: &ArtifactKey) -> bool {
        key.coordinate().starts_with(&self.0)
    }
}

impl From<&str> for NamespaceRestriction {
    fn from(prefix: &str) -> Self {
        Self::new(prefix)
    }
}

impl std::fmt::Display for NamespaceRestriction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_restriction_admits_everything() {
        let restriction = NamespaceRestriction::unrestricted();
        assert!(restriction.is_unrestricted());
        assert!(restriction.admits_group("com.x"));
        assert!(restriction.admits_group(""));
        assert!(restriction.admits_coordinate(&ArtifactKey::new("org.y", "lib")));
    }

    #[test]
    fn test_prefix_match() {
        let restriction = NamespaceRestriction::new("com.x");
        assert!(restriction.admits_group("com.x"));
        assert!(restriction.admits_group("com.x.sub"));
        assert!(restriction.admits_group("com.xyz"));
        assert!(!restriction.admits_group("com.y"));
        assert!(!restriction.admits_group("org.com.x"));
    }

    #[test]
    fn test_coordinate_match_can_reach_into_artifact_id() {
        let restriction = NamespaceRestriction::new("com.x:co");
        assert!(restriction.admits_coordinate(&ArtifactKey::new("com.x", "core")));
        assert!(!restriction.admits_coordinate(&ArtifactKey::new("com.x", "app")));
        assert!(!restriction.admits_group("com.x"));
    }
}
