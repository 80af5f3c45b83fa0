use crate::enumerate::EnumerateOptions;
use crate::error::{ResourceError, Result, StorageError};
use crate::set::ResourceSet;
use archive::ArchiveReader;
use logging::{targets, trace_archive};
use std::fmt;
use std::path::{Path, PathBuf};
use walk::WalkBuilder;

/// A resolved origin: one physical location holding resources.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "scheme", rename_all = "kebab-case"))]
pub enum SearchRoot {
    /// A directory whose regular files are resources.
    PlainTree {
        /// Directory listed recursively.
        directory: PathBuf,
    },
    /// The entries of an archive file below a name prefix.
    Archive {
        /// Archive file on disk.
        archive: PathBuf,
        /// `/`-separated prefix without leading or trailing `/`; empty means
        /// the whole archive.
        entry_prefix: String,
    },
}

/// Backend tag of a [`SearchRoot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RootScheme {
    /// Directory tree.
    PlainTree,
    /// Archive file.
    Archive,
}

impl RootScheme {
    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PlainTree => "plain-tree",
            Self::Archive => "archive",
        }
    }
}

impl fmt::Display for RootScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SearchRoot {
    /// Returns the backend tag.
    #[must_use]
    pub const fn scheme(&self) -> RootScheme {
        match self {
            Self::PlainTree { .. } => RootScheme::PlainTree,
            Self::Archive { .. } => RootScheme::Archive,
        }
    }

    /// Returns the directory or archive file backing the root.
    #[must_use]
    pub fn location(&self) -> &Path {
        match self {
            Self::PlainTree { directory } => directory,
            Self::Archive { archive, .. } => archive,
        }
    }
}

impl fmt::Display for SearchRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlainTree { directory } => write!(f, "{}", directory.display()),
            Self::Archive {
                archive,
                entry_prefix,
            } => write!(f, "{}!/{}", archive.display(), entry_prefix),
        }
    }
}

/// Lists every leaf resource under `root`, relative to the root.
///
/// Equivalent to [`list_under_root_with`] with default options.
///
/// # Errors
///
/// [`ResourceError::Io`] when the directory cannot be walked or the archive
/// cannot be read. Nothing is returned for a root that fails partway.
pub fn list_under_root(root: &SearchRoot) -> Result<ResourceSet> {
    list_under_root_with(root, EnumerateOptions::default())
}

/// Lists every leaf resource under `root` using `options`.
pub fn list_under_root_with(root: &SearchRoot, options: EnumerateOptions) -> Result<ResourceSet> {
    list_storage(root, options).map_err(|source| ResourceError::io(root.to_string(), source))
}

pub(crate) fn list_storage(
    root: &SearchRoot,
    options: EnumerateOptions,
) -> Result<ResourceSet, StorageError> {
    match root {
        SearchRoot::PlainTree { directory } => list_plain_tree(directory, options),
        SearchRoot::Archive {
            archive,
            entry_prefix,
        } => list_archive(archive, entry_prefix),
    }
}

fn list_plain_tree(
    directory: &Path,
    options: EnumerateOptions,
) -> Result<ResourceSet, StorageError> {
    let mut set = ResourceSet::new();
    let files = WalkBuilder::new(directory)
        .follow_symlinks(options.follow_links)
        .build()?
        .regular_files();
    for entry in files {
        set.insert(entry?.slash_path());
    }
    Ok(set)
}

fn list_archive(archive: &Path, entry_prefix: &str) -> Result<ResourceSet, StorageError> {
    let reader = ArchiveReader::open(archive)?;
    let mut set = ResourceSet::new();
    let mut outside = 0usize;

    for entry in reader.entries() {
        let entry = entry?;
        if entry.is_dir() {
            continue;
        }
        match relative_to_prefix(entry.name(), entry_prefix) {
            Some(relative) => {
                set.insert(relative);
            }
            None => {
                tracing::trace!(
                    target: targets::ARCHIVE,
                    "{} is outside prefix '{}'",
                    entry.name(),
                    entry_prefix
                );
                outside += 1;
            }
        }
    }

    trace_archive!(
        "{}: {} resources under '{}', {} entries outside",
        archive.display(),
        set.len(),
        entry_prefix,
        outside
    );
    Ok(set)
}

fn relative_to_prefix<'a>(name: &'a str, prefix: &str) -> Option<&'a str> {
    if prefix.is_empty() {
        return Some(name);
    }
    name.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('/'))
        .filter(|rest| !rest.is_empty())
}
