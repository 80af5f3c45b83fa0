use crate::entry::ArchiveEntry;
use crate::error::ArchiveError;
use crate::format::{
    EOCD_MIN_LEN, EOCD_SEARCH_MAX, EndRecord, HeaderError, ZIP64_EOCD_LEN, ZIP64_LOCATOR_LEN,
    Zip64Locator, find_end_record, parse_central_header,
};
use logging::trace_archive;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// Central directory of one archive, loaded into memory.
///
/// The archive file is only open for the duration of [`ArchiveReader::open`].
#[derive(Debug)]
pub struct ArchiveReader {
    path: PathBuf,
    directory: Vec<u8>,
    entry_count: u64,
}

impl ArchiveReader {
    /// Opens `path` and loads its central directory.
    ///
    /// # Errors
    ///
    /// Fails with [`ArchiveErrorKind::Open`](crate::ArchiveErrorKind::Open) or
    /// [`ArchiveErrorKind::Read`](crate::ArchiveErrorKind::Read) on I/O
    /// failure, with `NotAnArchive` when no end record is present, and with
    /// `Malformed`/`Unsupported` when the end record cannot be honored.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ArchiveError> {
        let path = path.as_ref().to_path_buf();
        let mut file = File::open(&path).map_err(|error| ArchiveError::open(path.clone(), error))?;
        let file_len = file
            .metadata()
            .map_err(|error| ArchiveError::read(path.clone(), error))?
            .len();

        if file_len < EOCD_MIN_LEN as u64 {
            return Err(ArchiveError::not_an_archive(path));
        }

        let window_len =
            usize::try_from(file_len).map_or(EOCD_SEARCH_MAX, |len| len.min(EOCD_SEARCH_MAX));
        let window_offset = file_len - window_len as u64;
        let mut window = vec![0u8; window_len];
        read_at(&mut file, window_offset, &mut window)
            .map_err(|error| ArchiveError::read(path.clone(), error))?;

        let Some(end_pos) = find_end_record(&window) else {
            return Err(ArchiveError::not_an_archive(path));
        };
        let end_offset = window_offset + end_pos as u64;

        // A ZIP64 locator directly before the classic record takes precedence;
        // the central directory then ends where the ZIP64 record starts.
        let (end, directory_limit, zip64) = match Zip64Locator::parse_before(&window[..end_pos]) {
            Some(locator) => {
                if locator.is_multi_disk() {
                    return Err(ArchiveError::unsupported(path, "multi-disk archive"));
                }
                let locator_offset = end_offset - ZIP64_LOCATOR_LEN as u64;
                let record_offset = locator.record_offset;
                if record_offset
                    .checked_add(ZIP64_EOCD_LEN as u64)
                    .is_none_or(|record_end| record_end > locator_offset)
                {
                    return Err(ArchiveError::malformed(
                        path,
                        "zip64 end record overlaps its locator",
                    ));
                }
                let mut record = [0u8; ZIP64_EOCD_LEN];
                if record_offset >= window_offset {
                    let start = (record_offset - window_offset) as usize;
                    record.copy_from_slice(&window[start..start + ZIP64_EOCD_LEN]);
                } else {
                    read_at(&mut file, record_offset, &mut record)
                        .map_err(|error| ArchiveError::read(path.clone(), error))?;
                }
                let Some(end) = EndRecord::parse_zip64(&record) else {
                    return Err(ArchiveError::malformed(path, "bad zip64 end record signature"));
                };
                (end, record_offset, true)
            }
            None => (EndRecord::parse(&window[end_pos..]), end_offset, false),
        };

        if end.is_multi_disk() {
            return Err(ArchiveError::unsupported(path, "multi-disk archive"));
        }

        let cd_offset = end.cd_offset;
        let cd_len = end.cd_size;
        if cd_offset
            .checked_add(cd_len)
            .is_none_or(|cd_end| cd_end > directory_limit)
        {
            return Err(ArchiveError::malformed(
                path,
                "central directory overlaps the end record",
            ));
        }
        let Ok(cd_size) = usize::try_from(cd_len) else {
            return Err(ArchiveError::unsupported(
                path,
                "central directory larger than the address space",
            ));
        };

        let directory = if cd_offset >= window_offset {
            let start = (cd_offset - window_offset) as usize;
            window[start..start + cd_size].to_vec()
        } else {
            let mut directory = vec![0u8; cd_size];
            read_at(&mut file, cd_offset, &mut directory)
                .map_err(|error| ArchiveError::read(path.clone(), error))?;
            directory
        };

        trace_archive!(
            "{}: {} entries in a {} byte central directory at offset {}{}",
            path.display(),
            end.entries_total,
            cd_len,
            cd_offset,
            if zip64 { " (zip64)" } else { "" }
        );

        Ok(Self {
            path,
            directory,
            entry_count: end.entries_total,
        })
    }

    /// Returns the path the archive was opened from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of entries declared by the end record.
    #[must_use]
    pub fn len(&self) -> usize {
        usize::try_from(self.entry_count).unwrap_or(usize::MAX)
    }

    /// Reports whether the archive declares no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entry_count == 0
    }

    /// Iterates over the central-directory entries in storage order.
    ///
    /// Iteration stops after the first error.
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            reader: self,
            offset: 0,
            remaining: self.entry_count,
            failed: false,
        }
    }
}

/// Iterator returned by [`ArchiveReader::entries`].
#[derive(Debug)]
pub struct Entries<'a> {
    reader: &'a ArchiveReader,
    offset: usize,
    remaining: u64,
    failed: bool,
}

impl Iterator for Entries<'_> {
    type Item = Result<ArchiveEntry, ArchiveError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.remaining == 0 {
            return None;
        }

        let reader = self.reader;
        let header = reader
            .directory
            .get(self.offset..)
            .ok_or(HeaderError::Truncated)
            .and_then(parse_central_header);

        match header {
            Ok(header) => {
                self.offset += header.record_len;
                self.remaining -= 1;
                Some(Ok(ArchiveEntry::from_raw_name(header.name)))
            }
            Err(error) => {
                self.failed = true;
                let path = reader.path.clone();
                Some(Err(match error {
                    HeaderError::Truncated => {
                        ArchiveError::malformed(path, "truncated central directory header")
                    }
                    HeaderError::BadSignature => {
                        ArchiveError::malformed(path, "bad central directory signature")
                    }
                    HeaderError::MissingZip64Extra => {
                        ArchiveError::malformed(path, "missing zip64 extra field")
                    }
                }))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            (0, usize::try_from(self.remaining).ok())
        }
    }
}

fn read_at(file: &mut File, offset: u64, buf: &mut [u8]) -> std::io::Result<()> {
    file.seek(SeekFrom::Start(offset))?;
    file.read_exact(buf)
}
