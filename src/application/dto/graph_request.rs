use crate::graph_analysis::policies::NamespaceRestriction;
use crate::graph_analysis::services::CanvasSize;

/// GraphRequest - Internal request DTO for the graph generation use case
#[derive(Debug, Clone)]
pub struct GraphRequest {
    /// Repository roots (URLs or local paths), in the order they were listed
    pub repositories: Vec<String>,
    /// GroupId prefix applied at aggregation and render time
    pub restriction: NamespaceRestriction,
    pub canvas: CanvasSize,
    /// Whether nodes are wrapped in one cluster per group
    pub cluster: bool,
}

impl GraphRequest {
    pub fn new(
        repositories: Vec<String>,
        restriction: NamespaceRestriction,
        canvas: CanvasSize,
        cluster: bool,
    ) -> Self {
        Self {
            repositories,
            restriction,
            canvas,
            cluster,
        }
    }
}
