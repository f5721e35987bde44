use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Clap already exits with `2` on argument errors, so the remaining
/// codes only distinguish success from an application failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Graph rendered and presented
    Success = 0,
    /// Application error (missing configuration, I/O error, render misuse, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for dependency graph generation.
#[derive(Debug, Error)]
pub enum PomGraphError {
    #[error("Missing configuration: {what}\n\n💡 Hint: {suggestion}")]
    MissingConfiguration { what: String, suggestion: String },

    #[error("Repository list file not found: {path}\n\n💡 Hint: Pass an existing file with --file, or list repositories in the config file")]
    RepositoryListNotFound { path: PathBuf },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("No manifest found at {location}")]
    ManifestNotFound { location: String },

    #[error("Failed to fetch manifest at {location}: {details}")]
    ManifestFetchError { location: String, details: String },

    #[error("Malformed manifest at {location}: {details}")]
    ManifestMalformed { location: String, details: String },

    /// Render operations called out of order; this is an integration defect
    #[error("Invalid render state: cannot {operation} while {state}")]
    RenderState {
        operation: &'static str,
        state: &'static str,
    },

    /// Validation error for value objects and configuration
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl PomGraphError {
    /// True for the manifest-level failures that only end one discovery branch
    pub fn is_manifest_failure(&self) -> bool {
        matches!(
            self,
            PomGraphError::ManifestNotFound { .. }
                | PomGraphError::ManifestFetchError { .. }
                | PomGraphError::ManifestMalformed { .. }
        )
    }
}
