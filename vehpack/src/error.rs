//! Error types for resource conversion.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors that can occur while converting a vehicle mod.
#[derive(Debug)]
pub enum ConvertError {
    /// The mod folder does not exist.
    SourceNotFound(PathBuf),

    /// The mod folder path is not a directory.
    NotADirectory(PathBuf),

    /// A combined conversion was requested without any mod folders.
    NoSources,

    /// The requested resource name cannot be used as a folder name.
    InvalidResourceName(String),

    /// Failed to read a file or directory.
    ReadFailed { path: PathBuf, source: io::Error },

    /// Failed to write a file.
    WriteFailed { path: PathBuf, source: io::Error },

    /// Failed to create a directory.
    CreateDirFailed { path: PathBuf, source: io::Error },

    /// Failed to copy a file into the resource.
    CopyFailed {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::SourceNotFound(path) => {
                write!(f, "mod folder not found: {}", path.display())
            }
            ConvertError::NotADirectory(path) => {
                write!(f, "not a directory: {}", path.display())
            }
            ConvertError::NoSources => write!(f, "no mod folders given"),
            ConvertError::InvalidResourceName(name) => {
                write!(f, "invalid resource name: '{}'", name)
            }
            ConvertError::ReadFailed { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            ConvertError::WriteFailed { path, source } => {
                write!(f, "failed to write {}: {}", path.display(), source)
            }
            ConvertError::CreateDirFailed { path, source } => {
                write!(
                    f,
                    "failed to create directory {}: {}",
                    path.display(),
                    source
                )
            }
            ConvertError::CopyFailed { from, to, source } => {
                write!(
                    f,
                    "failed to copy {} to {}: {}",
                    from.display(),
                    to.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::ReadFailed { source, .. } => Some(source),
            ConvertError::WriteFailed { source, .. } => Some(source),
            ConvertError::CreateDirFailed { source, .. } => Some(source),
            ConvertError::CopyFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_source_not_found_display() {
        let err = ConvertError::SourceNotFound(PathBuf::from("/mods/adder"));
        assert!(err.to_string().contains("/mods/adder"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_copy_failed_display() {
        let err = ConvertError::CopyFailed {
            from: PathBuf::from("a.yft"),
            to: PathBuf::from("out/stream/a.yft"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("a.yft"));
        assert!(msg.contains("out/stream/a.yft"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_error_source_io() {
        let err = ConvertError::ReadFailed {
            path: PathBuf::from("/test"),
            source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
        };
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_source_none() {
        assert!(ConvertError::NoSources.source().is_none());
    }
}
