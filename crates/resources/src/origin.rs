use crate::error::{AddressErrorReason, ResourceError, Result};
use crate::root::SearchRoot;
use logging::{trace_resolve, trace_skip};
use std::fmt;
use std::path::Path;
use url::Url;

const ARCHIVE_FILE_MARKER: &str = "file:";

/// URL-like address of a search root, before resolution.
///
/// `file:` origins denote directory trees. `jar:` origins have the form
/// `jar:file:<archive>!/<entry prefix>` and denote the part of an archive
/// below the prefix. Origins are not validated until [`Origin::resolve`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Origin(String);

/// Scheme family of an [`Origin`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OriginScheme {
    /// `file:`
    File,
    /// `jar:`
    Jar,
    /// Anything else, including strings with no scheme at all.
    Unknown,
}

impl Origin {
    /// Wraps an address string without validating it.
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Builds the `file:` origin for an absolute directory path.
    pub fn for_directory(directory: &Path) -> Result<Self> {
        let url = Url::from_directory_path(directory).map_err(|()| {
            ResourceError::address(
                directory.display().to_string(),
                AddressErrorReason::NotLocalPath,
            )
        })?;
        Ok(Self(url.into()))
    }

    /// Builds the `jar:` origin for `prefix` inside the archive at `archive`.
    ///
    /// ```
    /// use resources::Origin;
    /// use std::path::Path;
    ///
    /// # #[cfg(unix)]
    /// # {
    /// let origin = Origin::for_archive_entry(Path::new("/opt/app.jar"), "payloads").unwrap();
    /// assert_eq!(origin.as_str(), "jar:file:///opt/app.jar!/payloads");
    /// # }
    /// ```
    pub fn for_archive_entry(archive: &Path, prefix: &str) -> Result<Self> {
        let url = Url::from_file_path(archive).map_err(|()| {
            ResourceError::address(
                archive.display().to_string(),
                AddressErrorReason::NotLocalPath,
            )
        })?;
        Ok(Self(format!(
            "jar:{}!/{}",
            url.as_str(),
            prefix.trim_matches('/')
        )))
    }

    /// Returns the address string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Classifies the origin by its scheme, ignoring case.
    #[must_use]
    pub fn scheme(&self) -> OriginScheme {
        match self.0.split_once(':') {
            Some((scheme, _)) if scheme.eq_ignore_ascii_case("file") => OriginScheme::File,
            Some((scheme, _)) if scheme.eq_ignore_ascii_case("jar") => OriginScheme::Jar,
            _ => OriginScheme::Unknown,
        }
    }

    /// Translates the origin into a concrete search root.
    ///
    /// Returns `Ok(None)` for schemes other than `file` and `jar`; such
    /// origins contribute nothing to an enumeration.
    ///
    /// # Errors
    ///
    /// [`ResourceError::AddressResolution`] when the string is not a URL, when
    /// a `file:` URL does not name a local path, or when a `jar:` URL lacks the
    /// embedded `file:` marker or the `!` separator.
    pub fn resolve(&self) -> Result<Option<SearchRoot>> {
        let url = Url::parse(&self.0)
            .map_err(|error| self.fail(AddressErrorReason::InvalidUrl(error)))?;

        let root = match url.scheme() {
            "file" => {
                let directory = url
                    .to_file_path()
                    .map_err(|()| self.fail(AddressErrorReason::NotLocalPath))?;
                SearchRoot::PlainTree { directory }
            }
            "jar" => {
                // Split the raw text: `Url` would percent-encode the prefix and
                // move anything after `?` or `#` out of the path.
                let address = self.0.trim().split_once(':').map_or("", |(_, rest)| rest);
                let (archive, entry_prefix) = self.split_archive_address(address)?;
                SearchRoot::Archive {
                    archive: archive
                        .to_file_path()
                        .map_err(|()| self.fail(AddressErrorReason::NotLocalPath))?,
                    entry_prefix,
                }
            }
            other => {
                trace_skip!("ignoring origin {} with unsupported scheme '{}'", self, other);
                return Ok(None);
            }
        };

        trace_resolve!("{} resolved to {} root {}", self, root.scheme(), root);
        Ok(Some(root))
    }

    /// Splits `file:<archive>!/<prefix>` at the first `!`. Only the archive
    /// half is a URL; the prefix is an entry name taken verbatim.
    fn split_archive_address(&self, address: &str) -> Result<(Url, String)> {
        let rest = address
            .strip_prefix(ARCHIVE_FILE_MARKER)
            .ok_or_else(|| self.fail(AddressErrorReason::MissingFileMarker))?;
        let (archive, prefix) = rest
            .split_once('!')
            .ok_or_else(|| self.fail(AddressErrorReason::MissingSeparator))?;
        let archive = Url::parse(&format!("{ARCHIVE_FILE_MARKER}{archive}"))
            .map_err(|error| self.fail(AddressErrorReason::InvalidUrl(error)))?;
        Ok((archive, prefix.trim_matches('/').to_owned()))
    }

    fn fail(&self, reason: AddressErrorReason) -> ResourceError {
        ResourceError::address(self.0.clone(), reason)
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Origin {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Origin {
    fn from(address: &str) -> Self {
        Self::new(address)
    }
}

impl From<String> for Origin {
    fn from(address: String) -> Self {
        Self::new(address)
    }
}
