/// Mock implementations for testing
mod mock_manifest_source;
mod mock_progress_reporter;

pub use mock_manifest_source::{MockManifestFetcher, MockManifestParser, MockManifestSource};
pub use mock_progress_reporter::MockProgressReporter;
