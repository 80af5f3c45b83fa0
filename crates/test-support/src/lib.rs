#![deny(unsafe_code)]

//! Fixtures shared by the resource-lister workspace tests.
//!
//! [`ZipBuilder`] writes small, well-formed archives with stored entries,
//! either as plain ZIP32 or with ZIP64 end records and extra fields, so archive-backed roots can be exercised without checking binary
//! blobs into the repository. [`write_tree`] lays out plain resource trees.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const SIG_LFH: u32 = 0x0403_4b50;
const SIG_CDFH: u32 = 0x0201_4b50;
const SIG_EOCD: u32 = 0x0605_4b50;
const SIG_ZIP64_EOCD: u32 = 0x0606_4b50;
const SIG_ZIP64_LOCATOR: u32 = 0x0706_4b50;
const ZIP64_EXTRA_ID: u16 = 0x0001;
const ZIP64_VERSION: u16 = 45;

const VERSION: u16 = 20;
/// 1980-01-01, the earliest DOS date.
const DOS_DATE: u16 = 0x0021;
const DIR_ATTRIBUTE: u32 = 0x10;

struct Entry {
    name: Vec<u8>,
    data: Vec<u8>,
}

/// Builder for stored-only ZIP archives.
#[derive(Default)]
pub struct ZipBuilder {
    entries: Vec<Entry>,
    comment: Vec<u8>,
    zip64: bool,
}

impl ZipBuilder {
    /// Creates an empty archive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file entry.
    pub fn file(self, name: &str, data: &[u8]) -> Self {
        self.raw_file(name.as_bytes(), data)
    }

    /// Adds a file entry whose name bytes are written verbatim.
    pub fn raw_file(mut self, name: &[u8], data: &[u8]) -> Self {
        self.entries.push(Entry {
            name: name.to_vec(),
            data: data.to_vec(),
        });
        self
    }

    /// Adds a directory marker. A trailing `/` is appended when missing.
    pub fn dir(mut self, name: &str) -> Self {
        let mut name = name.as_bytes().to_vec();
        if name.last() != Some(&b'/') {
            name.push(b'/');
        }
        self.entries.push(Entry {
            name,
            data: Vec::new(),
        });
        self
    }

    /// Sets the archive comment stored after the end record.
    pub fn comment(mut self, comment: &[u8]) -> Self {
        self.comment = comment.to_vec();
        self
    }

    /// Writes ZIP64 end records, with sentinel values in the classic end
    /// record and every central header deferring to a ZIP64 extra field.
    pub fn zip64(mut self) -> Self {
        self.zip64 = true;
        self
    }

    /// Serializes the archive.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        let mut central = Vec::new();
        let version = if self.zip64 { ZIP64_VERSION } else { VERSION };

        for entry in &self.entries {
            let offset = out.len() as u64;
            let crc = crc32fast::hash(&entry.data);
            let size = entry.data.len() as u32;
            let name_len = entry.name.len() as u16;
            let is_dir = entry.name.last() == Some(&b'/');

            put_u32(&mut out, SIG_LFH);
            put_u16(&mut out, version);
            put_u16(&mut out, 0);
            put_u16(&mut out, 0);
            put_u16(&mut out, 0);
            put_u16(&mut out, DOS_DATE);
            put_u32(&mut out, crc);
            put_u32(&mut out, size);
            put_u32(&mut out, size);
            put_u16(&mut out, name_len);
            put_u16(&mut out, 0);
            out.extend_from_slice(&entry.name);
            out.extend_from_slice(&entry.data);

            let (stored_size, stored_offset, extra_len) = if self.zip64 {
                (u32::MAX, u32::MAX, 28)
            } else {
                (size, offset as u32, 0)
            };
            put_u32(&mut central, SIG_CDFH);
            put_u16(&mut central, version);
            put_u16(&mut central, version);
            put_u16(&mut central, 0);
            put_u16(&mut central, 0);
            put_u16(&mut central, 0);
            put_u16(&mut central, DOS_DATE);
            put_u32(&mut central, crc);
            put_u32(&mut central, stored_size);
            put_u32(&mut central, stored_size);
            put_u16(&mut central, name_len);
            put_u16(&mut central, extra_len);
            put_u16(&mut central, 0);
            put_u16(&mut central, 0);
            put_u16(&mut central, 0);
            put_u32(&mut central, if is_dir { DIR_ATTRIBUTE } else { 0 });
            put_u32(&mut central, stored_offset);
            central.extend_from_slice(&entry.name);
            if self.zip64 {
                put_u16(&mut central, ZIP64_EXTRA_ID);
                put_u16(&mut central, 24);
                put_u64(&mut central, u64::from(size));
                put_u64(&mut central, u64::from(size));
                put_u64(&mut central, offset);
            }
        }

        let cd_offset = out.len() as u64;
        let cd_size = central.len() as u64;
        let count = self.entries.len() as u64;
        out.extend_from_slice(&central);

        if self.zip64 {
            let record_offset = out.len() as u64;
            put_u32(&mut out, SIG_ZIP64_EOCD);
            put_u64(&mut out, 44);
            put_u16(&mut out, ZIP64_VERSION);
            put_u16(&mut out, ZIP64_VERSION);
            put_u32(&mut out, 0);
            put_u32(&mut out, 0);
            put_u64(&mut out, count);
            put_u64(&mut out, count);
            put_u64(&mut out, cd_size);
            put_u64(&mut out, cd_offset);

            put_u32(&mut out, SIG_ZIP64_LOCATOR);
            put_u32(&mut out, 0);
            put_u64(&mut out, record_offset);
            put_u32(&mut out, 1);
        }

        let (count, cd_size, cd_offset) = if self.zip64 {
            (u16::MAX, u32::MAX, u32::MAX)
        } else {
            (count as u16, cd_size as u32, cd_offset as u32)
        };
        put_u32(&mut out, SIG_EOCD);
        put_u16(&mut out, 0);
        put_u16(&mut out, 0);
        put_u16(&mut out, count);
        put_u16(&mut out, count);
        put_u32(&mut out, cd_size);
        put_u32(&mut out, cd_offset);
        put_u16(&mut out, self.comment.len() as u16);
        out.extend_from_slice(&self.comment);
        out
    }

    /// Writes the archive to `path`, creating parent directories.
    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_bytes())
    }
}

/// Writes `files` below `root`, creating intermediate directories.
///
/// Names use `/` as separator regardless of platform.
pub fn write_tree(root: &Path, files: &[(&str, &[u8])]) -> io::Result<()> {
    for (name, data) in files {
        let path = join_slash(root, name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, data)?;
    }
    Ok(())
}

/// Creates empty directories below `root`.
pub fn make_dirs(root: &Path, dirs: &[&str]) -> io::Result<()> {
    for dir in dirs {
        fs::create_dir_all(join_slash(root, dir))?;
    }
    Ok(())
}

/// Joins a `/`-separated relative name onto `root`.
pub fn join_slash(root: &Path, name: &str) -> PathBuf {
    name.split('/')
        .filter(|segment| !segment.is_empty())
        .fold(root.to_path_buf(), |path, segment| path.join(segment))
}

fn put_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_le_bytes());
}

fn put_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}

fn put_u64(out: &mut Vec<u8>, value: u64) {
    out.extend_from_slice(&value.to_le_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_archive_is_a_bare_end_record() {
        let bytes = ZipBuilder::new().to_bytes();
        assert_eq!(bytes.len(), 22);
        assert_eq!(&bytes[..4], b"PK\x05\x06");
    }

    #[test]
    fn directory_marker_gets_trailing_slash() {
        let bytes = ZipBuilder::new().dir("payloads").to_bytes();
        let needle = b"payloads/";
        assert!(bytes.windows(needle.len()).any(|window| window == needle));
    }

    #[test]
    fn comment_is_appended_after_end_record() {
        let bytes = ZipBuilder::new().comment(b"hello").to_bytes();
        assert!(bytes.ends_with(b"hello"));
        assert_eq!(bytes.len(), 27);
    }

    #[test]
    fn zip64_archive_ends_with_locator_and_sentinel_record() {
        let bytes = ZipBuilder::new().zip64().to_bytes();
        assert_eq!(bytes.len(), 56 + 20 + 22);
        assert_eq!(&bytes[..4], b"PK\x06\x06");
        assert_eq!(&bytes[56..60], b"PK\x06\x07");
        assert_eq!(&bytes[76..80], b"PK\x05\x06");
        assert_eq!(&bytes[92..96], &[0xFF; 4]);
    }

    #[test]
    fn write_tree_creates_nested_files() {
        let temp = tempfile::tempdir().expect("tempdir");
        write_tree(temp.path(), &[("a/b/c.bin", b"x")]).expect("write tree");
        assert_eq!(
            fs::read(temp.path().join("a").join("b").join("c.bin")).expect("read"),
            b"x"
        );
    }
}
