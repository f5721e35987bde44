use crate::graph_analysis::domain::{Dependency, Manifest, ParentReference};
use crate::ports::outbound::ManifestParser;
use crate::shared::error::PomGraphError;
use crate::shared::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PomProject {
    #[serde(default)]
    group_id: Option<String>,
    #[serde(default)]
    artifact_id: Option<String>,
    #[serde(default)]
    parent: Option<PomParent>,
    #[serde(default)]
    modules: PomModules,
    #[serde(default)]
    dependencies: PomDependencies,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PomParent {
    #[serde(default)]
    group_id: Option<String>,
    #[serde(default)]
    artifact_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct PomModules {
    #[serde(default)]
    module: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct PomDependencies {
    #[serde(default)]
    dependency: Vec<PomDependency>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PomDependency {
    #[serde(default)]
    group_id: Option<String>,
    #[serde(default)]
    artifact_id: Option<String>,
    #[serde(default)]
    version: Option<String>,
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// PomXmlParser adapter for Maven `pom.xml` manifests
///
/// Only the coordinates, the parent reference, the module list and the
/// direct `<dependencies>` block are read. Property placeholders such as
/// `${project.version}` are kept verbatim.
pub struct PomXmlParser;

impl PomXmlParser {
    pub fn new() -> Self {
        Self
    }

    fn build_manifest(project: PomProject) -> Result<Manifest> {
        let artifact_id = trimmed(project.artifact_id)
            .ok_or_else(|| anyhow::anyhow!("missing <artifactId>"))?;

        let parent = match project.parent {
            Some(parent) => match trimmed(parent.group_id) {
                Some(group_id) => Some(ParentReference::new(group_id, trimmed(parent.artifact_id))?),
                None => None,
            },
            None => None,
        };

        let modules = project
            .modules
            .module
            .into_iter()
            .filter_map(|m| trimmed(Some(m)))
            .collect();

        let dependencies = project
            .dependencies
            .dependency
            .into_iter()
            .map(|dep| {
                let group_id = trimmed(dep.group_id).unwrap_or_default();
                let artifact_id = trimmed(dep.artifact_id).unwrap_or_default();
                Dependency::new(group_id, artifact_id, trimmed(dep.version))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Manifest::new(trimmed(project.group_id), artifact_id, parent)?
            .with_modules(modules)
            .with_dependencies(dependencies))
    }
}

impl Default for PomXmlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestParser for PomXmlParser {
    fn parse(&self, location: &str, content: &str) -> Result<Manifest> {
        let malformed = |details: String| PomGraphError::ManifestMalformed {
            location: location.to_string(),
            details,
        };

        let project: PomProject =
            quick_xml::de::from_str(content).map_err(|e| malformed(e.to_string()))?;

        Self::build_manifest(project).map_err(|e| malformed(e.to_string()).into())
    }
}
