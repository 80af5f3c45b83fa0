use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Reports whether `header` starts with a ZIP record signature.
///
/// ZIP signatures are `PK` followed by a record type:
/// - Local file header:      PK 03 04
/// - Central directory:      PK 01 02
/// - End of central dir:     PK 05 06 (an empty archive)
/// - Data descriptor:        PK 07 08 (spanned archives)
///
/// ```
/// assert!(archive::is_zip_magic(b"PK\x03\x04rest"));
/// assert!(!archive::is_zip_magic(b"\x7fELF"));
/// ```
#[inline]
#[must_use]
pub fn is_zip_magic(header: &[u8]) -> bool {
    match header {
        [b'P', b'K', a, b, ..] => matches!((a, b), (1, 2) | (3, 4) | (5, 6) | (7, 8)),
        _ => false,
    }
}

/// Reads the first four bytes of `path` and checks them with [`is_zip_magic`].
///
/// Files shorter than four bytes are not archives. Directories and unreadable
/// files surface the I/O error.
pub fn looks_like_archive(path: &Path) -> io::Result<bool> {
    let mut file = File::open(path)?;
    let mut header = [0u8; 4];
    let mut filled = 0;
    while filled < header.len() {
        match file.read(&mut header[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(error) if error.kind() == io::ErrorKind::Interrupted => continue,
            Err(error) => return Err(error),
        }
    }
    Ok(is_zip_magic(&header[..filled]))
}
