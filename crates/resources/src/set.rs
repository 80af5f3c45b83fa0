use crate::entry::ResourceEntry;
use logging::targets;
use rustc_hash::FxHashSet;

/// Unordered, duplicate-free collection of [`ResourceEntry`] values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResourceSet {
    entries: FxHashSet<ResourceEntry>,
}

impl ResourceSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry. Returns `false` when it was already present.
    pub fn insert(&mut self, entry: impl Into<ResourceEntry>) -> bool {
        self.entries.insert(entry.into())
    }

    /// Reports whether `path` is present. The lookup is not normalized.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains(path)
    }

    /// Number of distinct entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &ResourceEntry> {
        self.entries.iter()
    }

    /// Moves every entry of `other` into `self` and returns how many were
    /// already present.
    pub fn merge(&mut self, other: Self) -> usize {
        let mut duplicates = 0;
        for entry in other.entries {
            if self.entries.contains(&entry) {
                tracing::trace!(target: targets::DUP, "{} already listed", entry);
                duplicates += 1;
            } else {
                self.entries.insert(entry);
            }
        }
        duplicates
    }

    /// Returns the entries sorted by path.
    #[must_use]
    pub fn sorted(&self) -> Vec<&ResourceEntry> {
        let mut sorted: Vec<_> = self.entries.iter().collect();
        sorted.sort_unstable();
        sorted
    }

    /// Consumes the set and returns the paths sorted.
    #[must_use]
    pub fn into_sorted_vec(self) -> Vec<String> {
        let mut paths: Vec<_> = self
            .entries
            .into_iter()
            .map(ResourceEntry::into_string)
            .collect();
        paths.sort_unstable();
        paths
    }
}

impl<E: Into<ResourceEntry>> FromIterator<E> for ResourceSet {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<E: Into<ResourceEntry>> Extend<E> for ResourceSet {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.entries.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for ResourceSet {
    type Item = ResourceEntry;
    type IntoIter = std::collections::hash_set::IntoIter<ResourceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResourceSet {
    type Item = &'a ResourceEntry;
    type IntoIter = std::collections::hash_set::Iter<'a, ResourceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ResourceSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.sorted())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ResourceSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<ResourceEntry>::deserialize(deserializer).map(Self::from_iter)
    }
}
