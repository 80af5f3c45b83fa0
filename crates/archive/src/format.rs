//! ZIP record layouts, including the ZIP64 end structures.
//!
//! All multi-byte fields are little-endian. Offsets below are relative to the
//! start of each record.

pub(crate) const SIG_EOCD: u32 = 0x0605_4b50;
pub(crate) const SIG_CDFH: u32 = 0x0201_4b50;
pub(crate) const SIG_ZIP64_EOCD: u32 = 0x0606_4b50;
pub(crate) const SIG_ZIP64_LOCATOR: u32 = 0x0706_4b50;

pub(crate) const EOCD_MIN_LEN: usize = 22;
/// 64 KiB comment plus header margin.
pub(crate) const EOCD_SEARCH_MAX: usize = 66 * 1024;
pub(crate) const CDFH_LEN: usize = 46;
pub(crate) const ZIP64_EOCD_LEN: usize = 56;
pub(crate) const ZIP64_LOCATOR_LEN: usize = 20;

const ZIP64_EXTRA_ID: u16 = 0x0001;
const ZIP64_U16: u16 = 0xFFFF;
const ZIP64_U32: u32 = 0xFFFF_FFFF;

/// Fields shared by the classic and ZIP64 end-of-central-directory records,
/// widened to the ZIP64 sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct EndRecord {
    pub(crate) disk_no: u32,
    pub(crate) cd_disk: u32,
    pub(crate) entries_disk: u64,
    pub(crate) entries_total: u64,
    pub(crate) cd_size: u64,
    pub(crate) cd_offset: u64,
}

impl EndRecord {
    /// Parses the classic record at the start of `bytes`, which must hold at
    /// least [`EOCD_MIN_LEN`] bytes.
    pub(crate) fn parse(bytes: &[u8]) -> Self {
        Self {
            disk_no: u32::from(le_u16(&bytes[4..6])),
            cd_disk: u32::from(le_u16(&bytes[6..8])),
            entries_disk: u64::from(le_u16(&bytes[8..10])),
            entries_total: u64::from(le_u16(&bytes[10..12])),
            cd_size: u64::from(le_u32(&bytes[12..16])),
            cd_offset: u64::from(le_u32(&bytes[16..20])),
        }
    }

    /// Parses a ZIP64 end record, or `None` when `bytes` is short or carries
    /// another signature.
    pub(crate) fn parse_zip64(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < ZIP64_EOCD_LEN || le_u32(&bytes[0..4]) != SIG_ZIP64_EOCD {
            return None;
        }
        Some(Self {
            disk_no: le_u32(&bytes[16..20]),
            cd_disk: le_u32(&bytes[20..24]),
            entries_disk: le_u64(&bytes[24..32]),
            entries_total: le_u64(&bytes[32..40]),
            cd_size: le_u64(&bytes[40..48]),
            cd_offset: le_u64(&bytes[48..56]),
        })
    }

    pub(crate) fn is_multi_disk(&self) -> bool {
        self.disk_no != 0 || self.cd_disk != 0 || self.entries_disk != self.entries_total
    }
}

/// The ZIP64 end-of-central-directory locator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Zip64Locator {
    pub(crate) record_disk: u32,
    pub(crate) record_offset: u64,
    pub(crate) total_disks: u32,
}

impl Zip64Locator {
    /// Parses the locator that ends exactly where `bytes` ends.
    pub(crate) fn parse_before(bytes: &[u8]) -> Option<Self> {
        let start = bytes.len().checked_sub(ZIP64_LOCATOR_LEN)?;
        let locator = &bytes[start..];
        if le_u32(&locator[0..4]) != SIG_ZIP64_LOCATOR {
            return None;
        }
        Some(Self {
            record_disk: le_u32(&locator[4..8]),
            record_offset: le_u64(&locator[8..16]),
            total_disks: le_u32(&locator[16..20]),
        })
    }

    pub(crate) fn is_multi_disk(&self) -> bool {
        self.record_disk != 0 || self.total_disks > 1
    }
}

/// Scans `window` backward for an end record whose comment fits.
///
/// A signature whose declared comment runs past the window is treated as a
/// false positive inside comment or payload bytes, and the scan continues.
pub(crate) fn find_end_record(window: &[u8]) -> Option<usize> {
    if window.len() < EOCD_MIN_LEN {
        return None;
    }
    (0..=window.len() - EOCD_MIN_LEN).rev().find(|&pos| {
        le_u32(&window[pos..pos + 4]) == SIG_EOCD && {
            let comment_len = usize::from(le_u16(&window[pos + 20..pos + 22]));
            pos + EOCD_MIN_LEN + comment_len <= window.len()
        }
    })
}

/// One central-directory file header.
#[derive(Debug)]
pub(crate) struct CentralHeader<'a> {
    pub(crate) name: &'a [u8],
    /// Total bytes occupied by the header including variable fields.
    pub(crate) record_len: usize,
}

/// Why a central-directory header failed to parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum HeaderError {
    Truncated,
    BadSignature,
    /// A field holds the ZIP64 sentinel but no ZIP64 extra field carries the
    /// real value.
    MissingZip64Extra,
}

pub(crate) fn parse_central_header(buf: &[u8]) -> Result<CentralHeader<'_>, HeaderError> {
    if buf.len() < CDFH_LEN {
        return Err(HeaderError::Truncated);
    }
    if le_u32(&buf[0..4]) != SIG_CDFH {
        return Err(HeaderError::BadSignature);
    }

    let name_len = usize::from(le_u16(&buf[28..30]));
    let extra_len = usize::from(le_u16(&buf[30..32]));
    let comment_len = usize::from(le_u16(&buf[32..34]));

    let record_len = CDFH_LEN + name_len + extra_len + comment_len;
    if record_len > buf.len() {
        return Err(HeaderError::Truncated);
    }

    // The extra field stores, in order, each of these that is a sentinel.
    let widened = [
        le_u32(&buf[24..28]) == ZIP64_U32,
        le_u32(&buf[20..24]) == ZIP64_U32,
        le_u32(&buf[42..46]) == ZIP64_U32,
    ];
    let needed = widened.iter().filter(|&&flag| flag).count() * 8
        + if le_u16(&buf[34..36]) == ZIP64_U16 { 4 } else { 0 };
    if needed > 0 {
        let extra_start = CDFH_LEN + name_len;
        let extra = &buf[extra_start..extra_start + extra_len];
        if zip64_extra_len(extra).is_none_or(|len| len < needed) {
            return Err(HeaderError::MissingZip64Extra);
        }
    }

    Ok(CentralHeader {
        name: &buf[CDFH_LEN..CDFH_LEN + name_len],
        record_len,
    })
}

/// Length of the ZIP64 record's data within an extra field block.
fn zip64_extra_len(mut extra: &[u8]) -> Option<usize> {
    while extra.len() >= 4 {
        let id = le_u16(&extra[0..2]);
        let len = usize::from(le_u16(&extra[2..4]));
        let data_len = len.min(extra.len() - 4);
        if id == ZIP64_EXTRA_ID {
            return Some(data_len);
        }
        extra = &extra[4 + data_len..];
    }
    None
}

#[inline]
pub(crate) fn le_u16(b: &[u8]) -> u16 {
    u16::from_le_bytes([b[0], b[1]])
}

#[inline]
pub(crate) fn le_u32(b: &[u8]) -> u32 {
    u32::from_le_bytes([b[0], b[1], b[2], b[3]])
}

#[inline]
pub(crate) fn le_u64(b: &[u8]) -> u64 {
    u64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]])
}
