use std::borrow::Borrow;
use std::fmt;

/// Relative path of one leaf resource, with `/` as the only separator.
///
/// Equality and hashing use the normalized string, so `sub\file.bin` and
/// `sub/file.bin` are the same entry.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ResourceEntry(String);

impl ResourceEntry {
    /// Creates an entry, rewriting every `\` to `/`.
    ///
    /// ```
    /// use resources::ResourceEntry;
    ///
    /// assert_eq!(ResourceEntry::new("sub\\file.bin").as_str(), "sub/file.bin");
    /// ```
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        if path.contains('\\') {
            Self(path.replace('\\', "/"))
        } else {
            Self(path)
        }
    }

    /// Returns the normalized path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the entry and returns the normalized path.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ResourceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ResourceEntry {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ResourceEntry {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ResourceEntry {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for ResourceEntry {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}
