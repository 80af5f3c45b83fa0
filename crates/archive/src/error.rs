use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Error returned when an archive cannot be listed.
#[derive(Debug)]
pub struct ArchiveError {
    path: PathBuf,
    kind: ArchiveErrorKind,
}

impl ArchiveError {
    pub(crate) fn new(path: PathBuf, kind: ArchiveErrorKind) -> Self {
        Self { path, kind }
    }

    pub(crate) fn open(path: PathBuf, source: io::Error) -> Self {
        Self::new(path, ArchiveErrorKind::Open { source })
    }

    pub(crate) fn read(path: PathBuf, source: io::Error) -> Self {
        Self::new(path, ArchiveErrorKind::Read { source })
    }

    pub(crate) fn not_an_archive(path: PathBuf) -> Self {
        Self::new(path, ArchiveErrorKind::NotAnArchive)
    }

    pub(crate) fn malformed(path: PathBuf, detail: &'static str) -> Self {
        Self::new(path, ArchiveErrorKind::Malformed { detail })
    }

    pub(crate) fn unsupported(path: PathBuf, feature: &'static str) -> Self {
        Self::new(path, ArchiveErrorKind::Unsupported { feature })
    }

    /// Returns the classification of the failure.
    #[must_use]
    pub fn kind(&self) -> &ArchiveErrorKind {
        &self.kind
    }

    /// Returns the archive that failed to list.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for ArchiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path.display();
        match &self.kind {
            ArchiveErrorKind::Open { source } => {
                write!(f, "failed to open archive '{path}': {source}")
            }
            ArchiveErrorKind::Read { source } => {
                write!(f, "failed to read archive '{path}': {source}")
            }
            ArchiveErrorKind::NotAnArchive => {
                write!(f, "'{path}' is not a zip archive")
            }
            ArchiveErrorKind::Malformed { detail } => {
                write!(f, "malformed archive '{path}': {detail}")
            }
            ArchiveErrorKind::Unsupported { feature } => {
                write!(f, "unsupported archive '{path}': {feature}")
            }
        }
    }
}

impl Error for ArchiveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            ArchiveErrorKind::Open { source } | ArchiveErrorKind::Read { source } => Some(source),
            _ => None,
        }
    }
}

/// Classification of archive failures.
#[derive(Debug)]
pub enum ArchiveErrorKind {
    /// The archive file could not be opened.
    Open {
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// Reading or seeking within the archive failed.
    Read {
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// No end-of-central-directory record was found.
    NotAnArchive,
    /// The central directory is truncated or inconsistent.
    Malformed {
        /// Which structure failed validation.
        detail: &'static str,
    },
    /// The archive uses a feature the reader does not implement.
    Unsupported {
        /// Name of the unsupported feature.
        feature: &'static str,
    },
}
