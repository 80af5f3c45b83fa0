use std::fs;
use std::path::{Path, PathBuf};

/// Coarse classification of a walked entry, taken from `symlink_metadata`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,
    /// A directory.
    Directory,
    /// A symbolic link, whatever it points at.
    Symlink,
    /// Sockets, FIFOs, device nodes and anything else.
    Other,
}

impl EntryKind {
    pub(crate) fn from_file_type(file_type: fs::FileType) -> Self {
        if file_type.is_symlink() {
            Self::Symlink
        } else if file_type.is_dir() {
            Self::Directory
        } else if file_type.is_file() {
            Self::File
        } else {
            Self::Other
        }
    }
}

/// Result of a filesystem traversal step.
#[derive(Debug)]
pub struct WalkEntry {
    pub(crate) full_path: PathBuf,
    pub(crate) relative_path: PathBuf,
    pub(crate) metadata: fs::Metadata,
    pub(crate) depth: usize,
    pub(crate) is_root: bool,
}

impl WalkEntry {
    /// Returns the absolute path to the filesystem entry.
    #[must_use]
    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    /// Returns the path relative to the traversal root.
    #[must_use]
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    /// Provides access to the [`fs::Metadata`] captured for the entry.
    ///
    /// Symlinks are not followed; the metadata describes the link itself.
    #[must_use]
    pub fn metadata(&self) -> &fs::Metadata {
        &self.metadata
    }

    /// Classifies the entry without following symlinks.
    #[must_use]
    pub fn kind(&self) -> EntryKind {
        EntryKind::from_file_type(self.metadata.file_type())
    }

    /// Reports whether the entry is a regular file, following symlinks.
    ///
    /// A symlink to a regular file counts; a symlink to a directory does not.
    /// A dangling symlink is not a regular file and is not an error either.
    #[must_use]
    pub fn is_regular_file(&self) -> bool {
        match self.kind() {
            EntryKind::File => true,
            EntryKind::Symlink => fs::metadata(&self.full_path).is_ok_and(|target| target.is_file()),
            EntryKind::Directory | EntryKind::Other => false,
        }
    }

    /// Returns the relative path with every separator rendered as `/`.
    ///
    /// Backslashes are rewritten even on platforms where they are legal file
    /// name characters, so the result is identical across hosts. Components
    /// that are not valid UTF-8 are converted lossily.
    ///
    /// # Examples
    ///
    /// ```
    /// use walk::WalkBuilder;
    /// # fn demo() -> Result<(), Box<dyn std::error::Error>> {
    /// let temp = tempfile::tempdir()?;
    /// std::fs::create_dir(temp.path().join("sub"))?;
    /// std::fs::write(temp.path().join("sub").join("file.bin"), b"")?;
    ///
    /// let mut files = WalkBuilder::new(temp.path()).build()?.regular_files();
    /// let entry = files.next().unwrap()?;
    /// assert_eq!(entry.slash_path(), "sub/file.bin");
    /// # Ok(())
    /// # }
    /// # demo().unwrap();
    /// ```
    #[must_use]
    pub fn slash_path(&self) -> String {
        let mut rendered = String::new();
        for (index, component) in self.relative_path.iter().enumerate() {
            if index > 0 {
                rendered.push('/');
            }
            rendered.push_str(&component.to_string_lossy());
        }
        rendered.replace('\\', "/")
    }

    /// Reports the depth of the entry relative to the root (root depth is `0`).
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Indicates whether this entry corresponds to the traversal root.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.is_root
    }
}
