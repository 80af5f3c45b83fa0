/// One name recorded in an archive's central directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchiveEntry {
    name: String,
}

impl ArchiveEntry {
    pub(crate) fn from_raw_name(raw: &[u8]) -> Self {
        Self {
            name: String::from_utf8_lossy(raw).into_owned(),
        }
    }

    /// Returns the entry name exactly as stored, `/`-separated.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reports whether the entry is a directory marker (name ends in `/`).
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.name.ends_with('/')
    }

    /// Consumes the entry and returns its name.
    #[must_use]
    pub fn into_name(self) -> String {
        self.name
    }
}
