use crate::ports::outbound::RepositoryListReader;
use crate::shared::error::PomGraphError;
use crate::shared::security::safe_read_to_string;
use crate::shared::Result;
use std::path::Path;

/// FileSystemReader adapter for reading the repository list file
///
/// One location per line; surrounding whitespace is trimmed and blank lines
/// or lines starting with `#` are ignored.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn parse_repository_list(content: &str) -> Vec<String> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect()
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryListReader for FileSystemReader {
    fn read_repositories(&self, path: &Path) -> Result<Vec<String>> {
        if !path.exists() {
            return Err(PomGraphError::RepositoryListNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let content = safe_read_to_string(path, "repository list")?;
        Ok(Self::parse_repository_list(&content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_repositories_success() {
        let temp_dir = TempDir::new().unwrap();
        let list_path = temp_dir.path().join("repos.txt");
        fs::write(
            &list_path,
            "https://git.example.org/a/raw/master/\n  /srv/repos/b/  \n",
        )
        .unwrap();

        let reader = FileSystemReader::new();
        let repositories = reader.read_repositories(&list_path).unwrap();

        assert_eq!(
            repositories,
            vec![
                "https://git.example.org/a/raw/master/".to_string(),
                "/srv/repos/b/".to_string(),
            ]
        );
    }

    #[test]
    fn test_read_repositories_skips_blank_and_comment_lines() {
        let temp_dir = TempDir::new().unwrap();
        let list_path = temp_dir.path().join("repos.txt");
        fs::write(&list_path, "# internal\n\nrepo-a/\n   \n#repo-b/\nrepo-c/").unwrap();

        let repositories = FileSystemReader::new().read_repositories(&list_path).unwrap();

        assert_eq!(repositories, vec!["repo-a/".to_string(), "repo-c/".to_string()]);
    }

    #[test]
    fn test_read_repositories_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let result = FileSystemReader::new().read_repositories(&temp_dir.path().join("missing.txt"));

        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PomGraphError>(),
            Some(PomGraphError::RepositoryListNotFound { .. })
        ));
    }

    #[test]
    fn test_read_repositories_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let list_path = temp_dir.path().join("repos.txt");
        fs::write(&list_path, "").unwrap();

        let repositories = FileSystemReader::new().read_repositories(&list_path).unwrap();
        assert!(repositories.is_empty());
    }
}
