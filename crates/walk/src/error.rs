use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Step of the walk that failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkErrorKind {
    /// The resource root could not be inspected.
    RootMetadata,
    /// A directory could not be opened for listing.
    ReadDir,
    /// Listing a directory failed part way through.
    ReadDirEntry,
    /// An entry vanished or became unreadable between listing and inspection.
    Metadata,
    /// A directory could not be resolved to its canonical location.
    Canonicalize,
}

impl WalkErrorKind {
    const fn describe(self) -> &'static str {
        match self {
            Self::RootMetadata => "failed to inspect resource root",
            Self::ReadDir => "failed to list directory",
            Self::ReadDirEntry => "failed to read an entry of",
            Self::Metadata => "failed to inspect",
            Self::Canonicalize => "failed to resolve",
        }
    }
}

/// Failure that ended a walk, tied to the path being processed.
#[derive(Debug)]
pub struct WalkError {
    kind: WalkErrorKind,
    path: PathBuf,
    source: io::Error,
}

impl WalkError {
    const fn new(kind: WalkErrorKind, path: PathBuf, source: io::Error) -> Self {
        Self { kind, path, source }
    }

    pub(crate) const fn root_metadata(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::RootMetadata, path, source)
    }

    pub(crate) const fn read_dir(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::ReadDir, path, source)
    }

    pub(crate) const fn read_dir_entry(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::ReadDirEntry, path, source)
    }

    pub(crate) const fn metadata(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::Metadata, path, source)
    }

    pub(crate) const fn canonicalize(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::Canonicalize, path, source)
    }

    /// Which step of the walk failed.
    #[must_use]
    pub const fn kind(&self) -> WalkErrorKind {
        self.kind
    }

    /// Path that was being processed.
    ///
    /// # Examples
    ///
    /// ```
    /// use walk::{WalkBuilder, WalkErrorKind};
    ///
    /// let error = WalkBuilder::new("./no_such_resource_root")
    ///     .build()
    ///     .err()
    ///     .expect("missing root yields error");
    /// assert_eq!(error.kind(), WalkErrorKind::RootMetadata);
    /// assert!(error.path().ends_with("no_such_resource_root"));
    /// ```
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Operating-system error behind the failure.
    #[must_use]
    pub const fn io_error(&self) -> &io::Error {
        &self.source
    }
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} '{}': {}",
            self.kind.describe(),
            self.path.display(),
            self.source
        )
    }
}

impl Error for WalkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn denied() -> io::Error {
        io::Error::new(io::ErrorKind::PermissionDenied, "denied")
    }

    #[test]
    fn messages_name_the_step_and_path() {
        let cases = [
            (
                WalkError::root_metadata(PathBuf::from("/srv/pkg"), denied()),
                "failed to inspect resource root '/srv/pkg': denied",
            ),
            (
                WalkError::read_dir(PathBuf::from("/srv/pkg/lib"), denied()),
                "failed to list directory '/srv/pkg/lib': denied",
            ),
            (
                WalkError::read_dir_entry(PathBuf::from("/srv/pkg/lib"), denied()),
                "failed to read an entry of '/srv/pkg/lib': denied",
            ),
            (
                WalkError::metadata(PathBuf::from("/srv/pkg/lib/a.so"), denied()),
                "failed to inspect '/srv/pkg/lib/a.so': denied",
            ),
            (
                WalkError::canonicalize(PathBuf::from("/srv/pkg/link"), denied()),
                "failed to resolve '/srv/pkg/link': denied",
            ),
        ];
        for (error, expected) in cases {
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn accessors_expose_kind_path_and_source() {
        let error = WalkError::read_dir(PathBuf::from("payloads"), denied());
        assert_eq!(error.kind(), WalkErrorKind::ReadDir);
        assert_eq!(error.path(), Path::new("payloads"));
        assert_eq!(error.io_error().kind(), io::ErrorKind::PermissionDenied);

        let source = error
            .source()
            .and_then(|source| source.downcast_ref::<io::Error>())
            .expect("walk errors carry an io::Error");
        assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
    }
}
