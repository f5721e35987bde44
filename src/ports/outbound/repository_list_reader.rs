use crate::shared::Result;
use std::path::Path;

/// RepositoryListReader port for loading repository root locations
pub trait RepositoryListReader {
    /// Reads the repository locations listed in the file at `path`, in file order
    ///
    /// # Errors
    /// Returns an error if the file does not exist or cannot be read
    fn read_repositories(&self, path: &Path) -> Result<Vec<String>>;
}
