pub mod artifact_key;
pub mod dependency_index;
pub mod group_index;
pub mod manifest;
pub mod node_id;

pub use artifact_key::ArtifactKey;
pub use dependency_index::DependencyIndex;
pub use group_index::GroupIndex;
pub use manifest::{Dependency, Manifest, ParentReference, UNSPECIFIED_VERSION};
pub use node_id::{NodeId, NodeIdAllocator};
