/// Filesystem adapters for file I/O operations
mod file_fetcher;
mod file_reader;
mod file_writer;

pub use file_fetcher::FileSystemManifestFetcher;
pub use file_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
