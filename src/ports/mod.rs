/// Ports module defining interfaces for hexagonal architecture
///
/// Only outbound (driven) ports exist: the application core calls out to
/// fetch and parse manifests, read the repository list, report progress
/// and present the rendered graph.
pub mod outbound;
