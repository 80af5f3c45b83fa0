use crate::error::{ResourceError, Result};
use crate::origin::Origin;
use archive::{ArchiveReader, looks_like_archive};
use logging::trace_discover;
use std::env;
use std::ffi::OsStr;
use std::fs;
use std::path::{self, Path, PathBuf};

/// Environment variable holding the default search path.
pub const SEARCH_PATH_ENV: &str = "RESOURCE_LISTER_PATH";

/// Source of origins for a virtual directory name.
pub trait RootProvider {
    /// Returns every origin that publishes resources under `virtual_dir`.
    fn origins(&self, virtual_dir: &str) -> Result<Vec<Origin>>;
}

impl<F> RootProvider for F
where
    F: Fn(&str) -> Result<Vec<Origin>>,
{
    fn origins(&self, virtual_dir: &str) -> Result<Vec<Origin>> {
        self(virtual_dir)
    }
}

/// Fixed origins returned for every name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticRoots {
    origins: Vec<Origin>,
}

impl StaticRoots {
    /// Creates a provider over `origins`.
    pub fn new<I, O>(origins: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<Origin>,
    {
        Self {
            origins: origins.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the configured origins.
    #[must_use]
    pub fn as_slice(&self) -> &[Origin] {
        &self.origins
    }
}

impl RootProvider for StaticRoots {
    fn origins(&self, _virtual_dir: &str) -> Result<Vec<Origin>> {
        Ok(self.origins.clone())
    }
}

/// Ordered list of directories and archives consulted like a class path.
///
/// For a name `N`, a directory element `D` contributes `D/N` when that is a
/// directory, and an archive element `A` contributes `jar:file:A!/N` when
/// some entry of `A` starts with `N/`. Elements that do not exist or are not
/// archives are skipped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchPath {
    elements: Vec<PathBuf>,
}

impl SearchPath {
    /// Creates a search path from explicit elements.
    pub fn new<I, P>(elements: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            elements: elements.into_iter().map(Into::into).collect(),
        }
    }

    /// Splits a platform path list (`:` on Unix, `;` on Windows).
    pub fn parse(list: &OsStr) -> Self {
        Self::new(env::split_paths(list).filter(|path| !path.as_os_str().is_empty()))
    }

    /// Reads [`SEARCH_PATH_ENV`]. An unset variable yields an empty path.
    pub fn from_env() -> Self {
        env::var_os(SEARCH_PATH_ENV).map_or_else(Self::default, |list| Self::parse(&list))
    }

    /// Returns the elements in lookup order.
    #[must_use]
    pub fn elements(&self) -> &[PathBuf] {
        &self.elements
    }
}

impl RootProvider for SearchPath {
    fn origins(&self, virtual_dir: &str) -> Result<Vec<Origin>> {
        let name = virtual_dir.trim_matches('/');
        let mut origins = Vec::new();
        for element in &self.elements {
            if let Some(origin) = discover(element, name)? {
                origins.push(origin);
            }
        }
        Ok(origins)
    }
}

fn discover(element: &Path, name: &str) -> Result<Option<Origin>> {
    let element = match path::absolute(element) {
        Ok(element) => element,
        Err(error) => {
            trace_discover!("skipping search path element {}: {}", element.display(), error);
            return Ok(None);
        }
    };
    let metadata = match fs::metadata(&element) {
        Ok(metadata) => metadata,
        Err(error) => {
            trace_discover!("skipping search path element {}: {}", element.display(), error);
            return Ok(None);
        }
    };

    if metadata.is_dir() {
        let candidate = name
            .split('/')
            .fold(element.clone(), |path, segment| path.join(segment));
        if candidate.is_dir() {
            trace_discover!("{} provides '{}'", element.display(), name);
            return Origin::for_directory(&candidate).map(Some);
        }
        return Ok(None);
    }

    if !looks_like_archive(&element).unwrap_or(true) {
        trace_discover!("skipping {}: not a zip archive", element.display());
        return Ok(None);
    }

    let origin = element.display().to_string();
    let reader =
        ArchiveReader::open(&element).map_err(|error| ResourceError::io(origin.clone(), error))?;
    let wanted = format!("{name}/");
    for entry in reader.entries() {
        let entry = entry.map_err(|error| ResourceError::io(origin.clone(), error))?;
        if entry.name().starts_with(&wanted) {
            trace_discover!("{} provides '{}'", element.display(), name);
            return Origin::for_archive_entry(&element, name).map(Some);
        }
    }
    Ok(None)
}
