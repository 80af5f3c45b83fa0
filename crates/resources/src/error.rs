use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = ResourceError> = std::result::Result<T, E>;

/// Failure of a single enumeration call.
///
/// Both variants abort the whole call; no partial result is returned.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The storage behind a resolved root could not be read.
    #[error("failed to read resource root '{origin}': {source}")]
    Io {
        /// Origin whose storage failed.
        origin: String,
        /// Underlying storage failure.
        #[source]
        source: StorageError,
    },
    /// An origin could not be translated into a filesystem or archive address.
    #[error("cannot resolve '{origin}': {reason}")]
    AddressResolution {
        /// Offending origin, or the virtual directory name for
        /// [`AddressErrorReason::EmptyName`].
        origin: String,
        /// What was wrong with the address.
        #[source]
        reason: AddressErrorReason,
    },
}

impl ResourceError {
    pub(crate) fn address(origin: impl Into<String>, reason: AddressErrorReason) -> Self {
        Self::AddressResolution {
            origin: origin.into(),
            reason,
        }
    }

    pub(crate) fn io(origin: impl Into<String>, source: impl Into<StorageError>) -> Self {
        Self::Io {
            origin: origin.into(),
            source: source.into(),
        }
    }

    /// Returns the origin the failure is attributed to.
    #[must_use]
    pub fn origin(&self) -> &str {
        match self {
            Self::Io { origin, .. } | Self::AddressResolution { origin, .. } => origin,
        }
    }

    /// Reports whether this is a storage failure rather than an addressing one.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

/// Storage failure from one of the root backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Walking a plain directory tree failed.
    #[error(transparent)]
    Walk(#[from] walk::WalkError),
    /// Reading an archive failed.
    #[error(transparent)]
    Archive(#[from] archive::ArchiveError),
}

/// Reason an origin address could not be resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum AddressErrorReason {
    /// The origin is not a syntactically valid URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(url::ParseError),
    /// An archive origin does not embed a `file:` address.
    #[error("archive address does not start with 'file:'")]
    MissingFileMarker,
    /// An archive origin has no `!` between archive path and entry prefix.
    #[error("archive address has no '!' separator")]
    MissingSeparator,
    /// The address does not denote a path on the local filesystem.
    #[error("not a local filesystem path")]
    NotLocalPath,
    /// The virtual directory name is empty.
    #[error("virtual directory name is empty")]
    EmptyName,
}
