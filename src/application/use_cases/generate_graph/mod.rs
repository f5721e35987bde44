use super::DiscoverManifestsUseCase;
use crate::application::dto::{GraphRequest, GraphResponse};
use crate::graph_analysis::services::{AggregatedGraph, DependencyAggregator, GraphRenderer};
use crate::ports::outbound::{ManifestFetcher, ManifestParser, ProgressReporter};
use crate::shared::Result;

/// GenerateGraphUseCase - Core use case for dependency graph generation
///
/// Discovers the manifests of every requested repository, aggregates them
/// into the group and dependency indexes, and renders the DOT graph.
///
/// # Type Parameters
/// * `F` - ManifestFetcher implementation
/// * `P` - ManifestParser implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateGraphUseCase<F, P, PR> {
    discovery: DiscoverManifestsUseCase<F, P, PR>,
}

impl<F, P, PR> GenerateGraphUseCase<F, P, PR>
where
    F: ManifestFetcher,
    P: ManifestParser,
    PR: ProgressReporter,
{
    /// Creates a new GenerateGraphUseCase with injected dependencies
    pub fn new(fetcher: F, parser: P, progress_reporter: PR) -> Self {
        Self {
            discovery: DiscoverManifestsUseCase::new(fetcher, parser, progress_reporter),
        }
    }

    fn progress_reporter(&self) -> &PR {
        self.discovery.progress_reporter()
    }

    /// Executes the graph generation use case
    ///
    /// # Errors
    /// Only rendering misuse is fatal; unreachable manifests and broken
    /// edges are reported and skipped.
    pub async fn execute(&self, request: GraphRequest) -> Result<GraphResponse> {
        // Step 1: Discover manifests, repositories in parallel
        self.progress_reporter().report(&format!(
            "🔍 Scanning {} repository location(s)",
            request.repositories.len()
        ));
        let manifests = self.discovery.discover_all(&request.repositories).await;
        self.progress_reporter()
            .report(&format!("✅ Processed {} manifest(s)", manifests.len()));

        // Step 2: Build the indexes
        let aggregated = DependencyAggregator::aggregate(&manifests, &request.restriction);
        self.report_aggregation(&aggregated, &request);

        // Step 3: Render
        let mut renderer = GraphRenderer::new();
        let graph = renderer.render(
            &aggregated.group_index,
            &aggregated.dependency_index,
            &request.restriction,
            request.canvas,
            request.cluster,
        )?;

        for skipped in &graph.skipped_edges {
            self.progress_reporter()
                .report_error(&format!("Skipped broken edge {}", skipped));
        }

        self.progress_reporter().report_completion(&format!(
            "Graph rendered: {} node(s), {} edge(s)",
            graph.node_count, graph.edge_count
        ));

        Ok(GraphResponse {
            graph,
            manifest_count: manifests.len(),
            group_count: aggregated.group_index.group_count(),
            artifact_count: aggregated.group_index.artifact_count(),
            indexed_edges: aggregated.dependency_index.edge_count(),
            filtered_dependencies: aggregated.filtered_dependencies,
        })
    }

    fn report_aggregation(&self, aggregated: &AggregatedGraph, request: &GraphRequest) {
        if aggregated.filtered_dependencies > 0 {
            self.progress_reporter().report(&format!(
                "🚫 Ignored {} dependency declaration(s) outside '{}'",
                aggregated.filtered_dependencies, request.restriction
            ));
        }

        self.progress_reporter().report(&format!(
            "📊 Indexed {} group(s), {} artifact(s), {} edge(s)",
            aggregated.group_index.group_count(),
            aggregated.group_index.artifact_count(),
            aggregated.dependency_index.edge_count()
        ));
    }
}

#[cfg(test)]
mod tests;
