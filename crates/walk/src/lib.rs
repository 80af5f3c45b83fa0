#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `walk` provides the deterministic directory traversal behind plain-tree
//! resource roots. The walker enumerates regular files, directories, and
//! symbolic links below a root while keeping every reported path relative to
//! that root. Directory entries are sorted before they are yielded, so two
//! walks over an unchanged tree produce the same sequence on every platform.
//!
//! # Design
//!
//! - [`WalkBuilder`] configures traversal options such as whether the root
//!   entry should be emitted and if directory symlinks may be followed.
//! - [`Walker`] implements [`Iterator`] and yields [`WalkEntry`] values in
//!   depth-first order. [`Walker::regular_files`] narrows the stream to the
//!   leaf files a resource listing cares about.
//! - [`WalkEntry::slash_path`] renders the relative path with `/` as the only
//!   separator, whatever the host platform uses internally.
//! - [`WalkError`] describes I/O failures encountered while querying metadata
//!   or reading directories, together with the offending path.
//!
//! # Invariants
//!
//! - Relative paths never contain `..` segments and never escape the root.
//! - Directories are entered at most once. When symlink following is enabled,
//!   canonical paths are tracked so a link back to an ancestor cannot loop.
//! - Traversal never panics. The first failure is yielded as an error and ends
//!   the iteration.
//!
//! # Examples
//!
//! ```
//! use walk::WalkBuilder;
//! use std::fs;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let root = temp.path().join("payloads");
//! fs::create_dir_all(root.join("linux"))?;
//! fs::create_dir_all(root.join("empty"))?;
//! fs::write(root.join("linux/lib.so"), b"elf")?;
//!
//! let files = WalkBuilder::new(&root)
//!     .build()?
//!     .regular_files()
//!     .map(|entry| entry.map(|entry| entry.slash_path()))
//!     .collect::<Result<Vec<_>, _>>()?;
//!
//! assert_eq!(files, vec!["linux/lib.so".to_string()]);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod builder;
mod entry;
mod error;
mod walker;


pub use crate::builder::WalkBuilder;
pub use crate::entry::{EntryKind, WalkEntry};
pub use crate::error::{WalkError, WalkErrorKind};
pub use crate::walker::{RegularFiles, Walker};
