/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod manifest_fetcher;
pub mod manifest_parser;
pub mod output_presenter;
pub mod progress_reporter;
pub mod repository_list_reader;

pub use manifest_fetcher::{Credentials, ManifestFetcher, StagedManifest};
pub use manifest_parser::ManifestParser;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use repository_list_reader::RepositoryListReader;
