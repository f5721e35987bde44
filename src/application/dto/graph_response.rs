use crate::graph_analysis::services::{RenderedGraph, SkippedEdge};

/// GraphResponse - Internal response DTO from the graph generation use case
#[derive(Debug, Clone)]
pub struct GraphResponse {
    /// Rendered DOT text plus the edges that were skipped while rendering
    pub graph: RenderedGraph,
    /// Number of manifests discovered across all repositories
    pub manifest_count: usize,
    pub group_count: usize,
    pub artifact_count: usize,
    /// (dependency, version, referrer) triples held by the dependency index
    pub indexed_edges: usize,
    /// Dependency declarations dropped by the namespace restriction
    pub filtered_dependencies: usize,
}

impl GraphResponse {
    pub fn dot(&self) -> &str {
        &self.graph.dot
    }

    pub fn skipped_edges(&self) -> &[SkippedEdge] {
        &self.graph.skipped_edges
    }
}
