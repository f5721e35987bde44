use crate::graph_analysis::domain::{ArtifactKey, DependencyIndex, GroupIndex, Manifest};
use crate::graph_analysis::policies::NamespaceRestriction;

/// Output of aggregation: the two indexes the renderer consumes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedGraph {
    pub group_index: GroupIndex,
    pub dependency_index: DependencyIndex,
    /// Declarations dropped because the dependency's groupId failed the restriction
    pub filtered_dependencies: usize,
}

/// DependencyAggregator - builds the group and dependency indexes from manifests
///
/// A dependency is recorded only when its groupId starts with the namespace
/// restriction. Accepted declarations register both sides in the group index,
/// each side filtered independently, and append the declaring artifact to the
/// referrer list for `(dependency, version)`.
pub struct DependencyAggregator {
    restriction: NamespaceRestriction,
    graph: AggregatedGraph,
}

impl DependencyAggregator {
    pub fn new(restriction: NamespaceRestriction) -> Self {
        Self {
            restriction,
            graph: AggregatedGraph::default(),
        }
    }

    /// Aggregates `manifests` in order under `restriction`
    pub fn aggregate(manifests: &[Manifest], restriction: &NamespaceRestriction) -> AggregatedGraph {
        let mut aggregator = Self::new(restriction.clone());
        for manifest in manifests {
            aggregator.add_manifest(manifest);
        }
        aggregator.finish()
    }

    /// Processes every dependency declared by `manifest`, in declaration order
    pub fn add_manifest(&mut self, manifest: &Manifest) {
        let referrer = manifest.key();

        for dependency in manifest.dependencies() {
            if !self.restriction.admits_group(dependency.group_id()) {
                self.graph.filtered_dependencies += 1;
                continue;
            }

            self.register_artifact(&referrer);
            self.register_artifact(dependency.key());

            self.graph.dependency_index.record(
                dependency.key().clone(),
                dependency.index_version(),
                referrer.clone(),
            );
        }
    }

    fn register_artifact(&mut self, key: &ArtifactKey) {
        if self.restriction.admits_group(key.group_id()) {
            self.graph.group_index.insert(key);
        }
    }

    pub fn finish(self) -> AggregatedGraph {
        self.graph
    }
}
