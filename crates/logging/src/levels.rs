//! crates/logging/src/levels.rs
//! Flag enums and level structures for info and debug verbosity.

/// Info flags for user-facing diagnostic categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InfoFlag {
    /// Resources reported by each search root.
    Name,
    /// Search roots discovered for a virtual directory.
    Roots,
    /// Origins or search-path elements that contribute nothing.
    Skip,
    /// Totals gathered at the end of an enumeration.
    Stats,
}

impl InfoFlag {
    /// Every info flag, in token order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Roots, Self::Skip, Self::Stats];

    /// Token used on the command line (`--info=roots2`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Roots => "roots",
            Self::Skip => "skip",
            Self::Stats => "stats",
        }
    }

    /// Looks up a flag by its command-line token.
    #[must_use]
    pub fn from_token(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.as_str() == name)
    }
}

/// Debug flags for internal diagnostic categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DebugFlag {
    /// Archive central-directory parsing.
    Archive,
    /// Search-path discovery of origins.
    Discover,
    /// Duplicate paths collapsed while merging roots.
    Dup,
    /// Origin address resolution.
    Resolve,
    /// Directory tree traversal.
    Walk,
}

impl DebugFlag {
    /// Every debug flag, in token order.
    pub const ALL: [Self; 5] = [
        Self::Archive,
        Self::Discover,
        Self::Dup,
        Self::Resolve,
        Self::Walk,
    ];

    /// Token used on the command line (`--debug=walk2`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Archive => "archive",
            Self::Discover => "discover",
            Self::Dup => "dup",
            Self::Resolve => "resolve",
            Self::Walk => "walk",
        }
    }

    /// Looks up a flag by its command-line token.
    #[must_use]
    pub fn from_token(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.as_str() == name)
    }
}

/// Info verbosity levels for each flag.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InfoLevels {
    /// Per-root resource listing level.
    pub name: u8,
    /// Root discovery level.
    pub roots: u8,
    /// Skipped origin level.
    pub skip: u8,
    /// Enumeration statistics level.
    pub stats: u8,
}

impl InfoLevels {
    /// Get the level for a specific flag.
    pub fn get(&self, flag: InfoFlag) -> u8 {
        match flag {
            InfoFlag::Name => self.name,
            InfoFlag::Roots => self.roots,
            InfoFlag::Skip => self.skip,
            InfoFlag::Stats => self.stats,
        }
    }

    /// Set the level for a specific flag.
    pub fn set(&mut self, flag: InfoFlag, level: u8) {
        match flag {
            InfoFlag::Name => self.name = level,
            InfoFlag::Roots => self.roots = level,
            InfoFlag::Skip => self.skip = level,
            InfoFlag::Stats => self.stats = level,
        }
    }

    /// Set all flags to the specified level.
    pub fn set_all(&mut self, level: u8) {
        for flag in InfoFlag::ALL {
            self.set(flag, level);
        }
    }
}

/// Debug verbosity levels for each flag.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DebugLevels {
    /// Archive parsing level.
    pub archive: u8,
    /// Search-path discovery level.
    pub discover: u8,
    /// Duplicate detection level.
    pub dup: u8,
    /// Address resolution level.
    pub resolve: u8,
    /// Tree traversal level.
    pub walk: u8,
}

impl DebugLevels {
    /// Get the level for a specific flag.
    pub fn get(&self, flag: DebugFlag) -> u8 {
        match flag {
            DebugFlag::Archive => self.archive,
            DebugFlag::Discover => self.discover,
            DebugFlag::Dup => self.dup,
            DebugFlag::Resolve => self.resolve,
            DebugFlag::Walk => self.walk,
        }
    }

    /// Set the level for a specific flag.
    pub fn set(&mut self, flag: DebugFlag, level: u8) {
        match flag {
            DebugFlag::Archive => self.archive = level,
            DebugFlag::Discover => self.discover = level,
            DebugFlag::Dup => self.dup = level,
            DebugFlag::Resolve => self.resolve = level,
            DebugFlag::Walk => self.walk = level,
        }
    }

    /// Set all flags to the specified level.
    pub fn set_all(&mut self, level: u8) {
        for flag in DebugFlag::ALL {
            self.set(flag, level);
        }
    }
}
