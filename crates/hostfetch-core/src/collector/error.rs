//! Error type for collection failures.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error returned while reading or interpreting a host resource.
#[derive(Debug)]
pub enum CollectError {
    /// The resource could not be opened.
    ResourceUnavailable { path: PathBuf, source: io::Error },
    /// The resource was opened but reading failed partway through.
    Read { path: PathBuf, source: io::Error },
    /// The resource was read but its content does not have the expected shape.
    MalformedRecord { path: PathBuf, reason: String },
    /// The filesystem statistics call failed.
    FsStats { path: PathBuf, source: io::Error },
}

impl CollectError {
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        CollectError::MalformedRecord {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Path of the resource the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            CollectError::ResourceUnavailable { path, .. }
            | CollectError::Read { path, .. }
            | CollectError::MalformedRecord { path, .. }
            | CollectError::FsStats { path, .. } => path,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, CollectError::ResourceUnavailable { .. })
    }
}

impl fmt::Display for CollectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectError::ResourceUnavailable { path, source } => {
                write!(f, "cannot open {}: {}", path.display(), source)
            }
            CollectError::Read { path, source } => {
                write!(f, "read error in {}: {}", path.display(), source)
            }
            CollectError::MalformedRecord { path, reason } => {
                write!(f, "malformed {}: {}", path.display(), reason)
            }
            CollectError::FsStats { path, source } => {
                write!(f, "statvfs failed for {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for CollectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CollectError::ResourceUnavailable { source, .. }
            | CollectError::Read { source, .. }
            | CollectError::FsStats { source, .. } => Some(source),
            CollectError::MalformedRecord { .. } => None,
        }
    }
}
