use crate::entry::WalkEntry;
use crate::error::WalkError;
use logging::{targets, trace_walk};
use std::collections::HashSet;
use std::ffi::OsString;
use std::fs;
use std::path::{self, Path, PathBuf};
use std::vec;

/// Depth-first iterator over the entries below a resource root.
///
/// Each directory is listed once, sorted by file name, before any of its
/// children are visited. The first error ends the iteration.
#[derive(Debug)]
pub struct Walker {
    follow_symlinks: bool,
    pending_root: Option<WalkEntry>,
    frames: Vec<Frame>,
    seen: HashSet<PathBuf>,
    failed: bool,
}

impl Walker {
    pub(crate) fn new(
        root: PathBuf,
        follow_symlinks: bool,
        include_root: bool,
    ) -> Result<Self, WalkError> {
        let root =
            path::absolute(&root).map_err(|error| WalkError::canonicalize(root.clone(), error))?;
        trace_walk!("walking resource root {}", root.display());

        let link_metadata = fs::symlink_metadata(&root)
            .map_err(|error| WalkError::root_metadata(root.clone(), error))?;

        // The root itself is entered even when it is reached through a link.
        let enter_root = if link_metadata.file_type().is_symlink() {
            fs::metadata(&root)
                .map_err(|error| WalkError::metadata(root.clone(), error))?
                .is_dir()
        } else {
            link_metadata.is_dir()
        };

        let mut walker = Self {
            follow_symlinks,
            pending_root: None,
            frames: Vec::new(),
            seen: HashSet::new(),
            failed: false,
        };
        if enter_root {
            walker.enter(&root, PathBuf::new(), 0)?;
        }
        if include_root {
            walker.pending_root = Some(WalkEntry {
                full_path: root,
                relative_path: PathBuf::new(),
                metadata: link_metadata,
                depth: 0,
                is_root: true,
            });
        }
        Ok(walker)
    }

    /// Narrows the walk to entries that are regular files.
    ///
    /// Directories, symlinks to directories, dangling symlinks and special
    /// files are dropped. Errors are passed through unchanged.
    #[must_use]
    pub fn regular_files(self) -> RegularFiles {
        RegularFiles { inner: self }
    }

    /// Queues `dir` for listing unless its canonical form was already seen.
    fn enter(&mut self, dir: &Path, prefix: PathBuf, depth: usize) -> Result<(), WalkError> {
        let canonical =
            fs::canonicalize(dir).map_err(|error| WalkError::canonicalize(dir.to_path_buf(), error))?;
        if self.seen.insert(canonical) {
            self.frames.push(Frame::list(dir.to_path_buf(), prefix, depth)?);
        } else {
            trace_walk!("not re-entering {}", dir.display());
        }
        Ok(())
    }

    fn visit(&mut self, name: &OsString) -> Option<Result<WalkEntry, WalkError>> {
        let frame = self.frames.last()?;
        let full_path = frame.dir.join(name);
        let relative_path = frame.prefix.join(name);
        let depth = frame.depth + 1;
        tracing::trace!(target: targets::WALK, "visiting {}", relative_path.display());

        let metadata = match fs::symlink_metadata(&full_path) {
            Ok(metadata) => metadata,
            Err(error) => return Some(Err(WalkError::metadata(full_path, error))),
        };

        let descend = if metadata.is_dir() {
            true
        } else {
            // Dangling links stay entries; the caller decides what they are.
            metadata.file_type().is_symlink()
                && self.follow_symlinks
                && fs::metadata(&full_path).is_ok_and(|target| target.is_dir())
        };
        if descend {
            if let Err(error) = self.enter(&full_path, relative_path.clone(), depth) {
                return Some(Err(error));
            }
        }

        Some(Ok(WalkEntry {
            full_path,
            relative_path,
            metadata,
            depth,
            is_root: false,
        }))
    }
}

impl Iterator for Walker {
    type Item = Result<WalkEntry, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        if let Some(root) = self.pending_root.take() {
            return Some(Ok(root));
        }

        while let Some(frame) = self.frames.last_mut() {
            let Some(name) = frame.names.next() else {
                self.frames.pop();
                continue;
            };
            let item = self.visit(&name)?;
            self.failed = item.is_err();
            return Some(item);
        }
        None
    }
}

/// Iterator returned by [`Walker::regular_files`].
#[derive(Debug)]
pub struct RegularFiles {
    inner: Walker,
}

impl Iterator for RegularFiles {
    type Item = Result<WalkEntry, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .find(|item| !matches!(item, Ok(entry) if entry.is_root() || !entry.is_regular_file()))
    }
}

/// One directory being drained: where it lives, the relative prefix its
/// children receive, and the remaining sorted names.
#[derive(Debug)]
struct Frame {
    dir: PathBuf,
    prefix: PathBuf,
    names: vec::IntoIter<OsString>,
    depth: usize,
}

impl Frame {
    fn list(dir: PathBuf, prefix: PathBuf, depth: usize) -> Result<Self, WalkError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&dir).map_err(|error| WalkError::read_dir(dir.clone(), error))? {
            let entry = entry.map_err(|error| WalkError::read_dir_entry(dir.clone(), error))?;
            names.push(entry.file_name());
        }
        names.sort_unstable();
        trace_walk!("{} holds {} entries", dir.display(), names.len());

        Ok(Self {
            dir,
            prefix,
            names: names.into_iter(),
            depth,
        })
    }
}
