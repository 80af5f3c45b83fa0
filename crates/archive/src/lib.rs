#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `archive` lists the entry names stored in ZIP and JAR files. Only the
//! central directory is read; entry payloads are never decompressed, so the
//! reader does not care which compression method an entry uses.
//!
//! # Design
//!
//! - [`ArchiveReader::open`] locates the end-of-central-directory record in
//!   the trailing window of the file, follows the ZIP64 locator when one
//!   precedes it, validates the directory bounds against
//!   the file length and loads the directory with a single bounded read. The
//!   file handle is released before `open` returns.
//! - [`ArchiveReader::entries`] walks the loaded directory and yields one
//!   [`ArchiveEntry`] per file header, in storage order.
//! - [`is_zip_magic`] and [`looks_like_archive`] give callers a cheap sniff
//!   before committing to a full open.
//!
//! # Invariants
//!
//! - Every size and offset read from the file is untrusted and checked before
//!   it is used to slice a buffer.
//! - Multi-disk archives are rejected with [`ArchiveErrorKind::Unsupported`]
//!   instead of being misread.
//! - A central header whose sizes or offset hold the ZIP64 sentinel must carry
//!   a ZIP64 extra field wide enough for them.
//! - Entry names are decoded as UTF-8; invalid sequences are replaced rather
//!   than rejected.
//!
//! # Examples
//!
//! ```
//! use archive::ArchiveReader;
//! use test_support::ZipBuilder;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let path = temp.path().join("natives.jar");
//! ZipBuilder::new()
//!     .dir("payloads/")
//!     .file("payloads/linux/lib.so", b"elf")
//!     .write_to(&path)?;
//!
//! let reader = ArchiveReader::open(&path)?;
//! let files = reader
//!     .entries()
//!     .filter(|entry| entry.as_ref().map_or(true, |entry| !entry.is_dir()))
//!     .map(|entry| entry.map(|entry| entry.name().to_owned()))
//!     .collect::<Result<Vec<_>, _>>()?;
//! assert_eq!(files, vec!["payloads/linux/lib.so".to_string()]);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod entry;
mod error;
mod format;
mod reader;
mod sniff;


pub use crate::entry::ArchiveEntry;
pub use crate::error::{ArchiveError, ArchiveErrorKind};
pub use crate::reader::{ArchiveReader, Entries};
pub use crate::sniff::{is_zip_magic, looks_like_archive};
