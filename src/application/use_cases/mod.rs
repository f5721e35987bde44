/// Use cases module containing application business logic orchestration
mod discover_manifests;
mod generate_graph;

pub use discover_manifests::{DiscoverManifestsUseCase, MAX_MODULE_DEPTH, MANIFEST_FILENAME};
pub use generate_graph::GenerateGraphUseCase;
