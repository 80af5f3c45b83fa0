#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `resources` answers one question: which resource files are published
//! under a virtual directory name, across every place that may publish them?
//! A place is either a plain directory tree or an archive (ZIP or JAR) and is
//! addressed by an [`Origin`] such as `file:///opt/pkg/payloads/` or
//! `jar:file:///opt/pkg/app.jar!/payloads`.
//!
//! # Design
//!
//! - A [`RootProvider`] maps the virtual directory to origins.
//!   [`StaticRoots`] returns a fixed list; [`SearchPath`] scans an ordered
//!   list of directories and archives the way a class path is searched.
//! - [`Origin::resolve`] turns an origin into a [`SearchRoot`], the closed set
//!   of storage backends. Unknown schemes resolve to nothing.
//! - [`list_under_root`] lists the leaf entries of one root relative to it.
//!   Directory trees are walked with the `walk` crate; archives are read with
//!   the `archive` crate and relativized against the entry prefix.
//! - [`enumerate`] unions the listings into a [`ResourceSet`].
//!
//! # Invariants
//!
//! - Every [`ResourceEntry`] uses `/` as its only separator.
//! - Directories and archive directory markers are never listed.
//! - A call either returns the complete union or fails; no partial results.
//! - Nothing is cached between calls, and archive handles are closed before a
//!   call returns.
//!
//! # Examples
//!
//! ```
//! use resources::{Origin, StaticRoots, enumerate};
//! use std::fs;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let tree = temp.path().join("payloads");
//! fs::create_dir_all(tree.join("linux"))?;
//! fs::write(tree.join("linux/libfoo.so"), b"elf")?;
//!
//! let provider = StaticRoots::new([
//!     Origin::for_directory(&tree)?,
//!     Origin::new("http://example.com/ignored"),
//! ]);
//! let resources = enumerate(&provider, "payloads")?;
//! assert_eq!(resources.into_sorted_vec(), vec!["linux/libfoo.so".to_string()]);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod entry;
mod enumerate;
mod error;
mod origin;
mod provider;
mod root;
mod set;

pub use crate::entry::ResourceEntry;
pub use crate::enumerate::{EnumerateOptions, Enumerator, enumerate};
pub use crate::error::{AddressErrorReason, ResourceError, Result, StorageError};
pub use crate::origin::{Origin, OriginScheme};
pub use crate::provider::{RootProvider, SEARCH_PATH_ENV, SearchPath, StaticRoots};
pub use crate::set::ResourceSet;
pub use crate::root::{RootScheme, SearchRoot, list_under_root, list_under_root_with};
