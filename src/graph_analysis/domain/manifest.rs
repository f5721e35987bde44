use super::ArtifactKey;
use crate::shared::Result;

/// Version key used for dependencies that do not declare a version
/// (typically managed by a parent's `dependencyManagement`).
pub const UNSPECIFIED_VERSION: &str = "unspecified";

/// The `<parent>` reference of a manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentReference {
    group_id: String,
    artifact_id: Option<String>,
}

impl ParentReference {
    pub fn new(group_id: String, artifact_id: Option<String>) -> Result<Self> {
        if group_id.trim().is_empty() {
            anyhow::bail!("Parent groupId cannot be empty");
        }
        Ok(Self {
            group_id,
            artifact_id,
        })
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> Option<&str> {
        self.artifact_id.as_deref()
    }
}

/// A declared dependency: the depended-upon artifact plus the version required
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    key: ArtifactKey,
    version: Option<String>,
}

impl Dependency {
    pub fn new(group_id: String, artifact_id: String, version: Option<String>) -> Result<Self> {
        if group_id.trim().is_empty() {
            anyhow::bail!("Dependency groupId cannot be empty");
        }
        if artifact_id.trim().is_empty() {
            anyhow::bail!("Dependency artifactId cannot be empty (groupId: {})", group_id);
        }
        let version = version.filter(|v| !v.trim().is_empty());
        Ok(Self {
            key: ArtifactKey::new(group_id, artifact_id),
            version,
        })
    }

    pub fn key(&self) -> &ArtifactKey {
        &self.key
    }

    pub fn group_id(&self) -> &str {
        self.key.group_id()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// The version string the dependency index is keyed by
    pub fn index_version(&self) -> &str {
        self.version.as_deref().unwrap_or(UNSPECIFIED_VERSION)
    }
}

/// Manifest aggregate: one discovered `pom.xml`
///
/// The effective groupId is the manifest's own groupId, or the parent's
/// when the manifest omits it. Construction fails if neither is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    group_id: Option<String>,
    artifact_id: String,
    parent: Option<ParentReference>,
    modules: Vec<String>,
    dependencies: Vec<Dependency>,
}

impl Manifest {
    pub fn new(
        group_id: Option<String>,
        artifact_id: String,
        parent: Option<ParentReference>,
    ) -> Result<Self> {
        let group_id = group_id.filter(|g| !g.trim().is_empty());

        if artifact_id.trim().is_empty() {
            anyhow::bail!("Manifest artifactId cannot be empty");
        }
        if group_id.is_none() && parent.is_none() {
            anyhow::bail!(
                "Manifest '{}' declares no groupId and has no parent to inherit one from",
                artifact_id
            );
        }

        Ok(Self {
            group_id,
            artifact_id,
            parent,
            modules: Vec::new(),
            dependencies: Vec::new(),
        })
    }

    pub fn with_modules(mut self, modules: Vec<String>) -> Self {
        self.modules = modules;
        self
    }

    pub fn with_dependencies(mut self, dependencies: Vec<Dependency>) -> Self {
        self.dependencies = dependencies;
        self
    }

    /// Effective groupId, inherited from the parent reference when absent
    pub fn group_id(&self) -> &str {
        match (&self.group_id, &self.parent) {
            (Some(own), _) => own,
            (None, Some(parent)) => parent.group_id(),
            // Unreachable: `new` rejects manifests with neither
            (None, None) => "",
        }
    }

    /// The groupId as written in the manifest itself
    pub fn declared_group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn parent(&self) -> Option<&ParentReference> {
        self.parent.as_ref()
    }

    pub fn key(&self) -> ArtifactKey {
        ArtifactKey::new(self.group_id(), self.artifact_id.as_str())
    }

    /// Child-module paths in declaration order
    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    /// Declared dependencies in declaration order
    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }
}
