//! pom-graph - dependency graph rendering for Maven repositories
//!
//! This library discovers the `pom.xml` manifests of one or more Maven
//! repositories (following declared modules), indexes which artifacts depend
//! on which artifact versions, and renders the result as Graphviz DOT with
//! one colour-coded cluster per groupId.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`graph_analysis`): Artifact identities, indexes, filters and the renderer
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Filesystem, HTTP, XML and console implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pom_graph::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let fetcher = RoutingManifestFetcher::new(
//!     HttpManifestFetcher::new(None)?,
//!     FileSystemManifestFetcher::new(),
//! );
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = GenerateGraphUseCase::new(fetcher, PomXmlParser::new(), progress_reporter);
//!
//! // Execute
//! let request = GraphRequest::new(
//!     vec!["https://git.example.org/raw/main/".to_string()],
//!     NamespaceRestriction::new("com.example"),
//!     CanvasSize::default(),
//!     true,
//! );
//! let response = use_case.execute(request).await?;
//! println!("{}", response.dot());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod graph_analysis;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemManifestFetcher, FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::network::{HttpManifestFetcher, RoutingManifestFetcher};
    pub use crate::adapters::outbound::parsers::PomXmlParser;
    pub use crate::application::dto::{GraphRequest, GraphResponse};
    pub use crate::application::use_cases::{DiscoverManifestsUseCase, GenerateGraphUseCase};
    pub use crate::graph_analysis::domain::{
        ArtifactKey, Dependency, DependencyIndex, GroupIndex, Manifest, ParentReference,
    };
    pub use crate::graph_analysis::policies::{
        FixedImportance, Importance, ImportancePolicy, NamespaceRestriction,
    };
    pub use crate::graph_analysis::services::{
        AggregatedGraph, CanvasSize, DependencyAggregator, GraphRenderer, RenderedGraph,
        SkippedEdge,
    };
    pub use crate::ports::outbound::{
        Credentials, ManifestFetcher, ManifestParser, OutputPresenter, ProgressReporter,
        RepositoryListReader, StagedManifest,
    };
    pub use crate::shared::Result;
}
