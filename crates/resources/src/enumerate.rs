use crate::error::{AddressErrorReason, ResourceError, Result};
use crate::provider::RootProvider;
use crate::root::list_storage;
use crate::set::ResourceSet;
use logging::{InfoFlag, info_gte, trace_dup, trace_name, trace_roots, trace_stats};

/// Knobs for an enumeration call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumerateOptions {
    /// Descend into symlinks that point at directories inside plain trees.
    ///
    /// Symlinks to regular files are listed either way.
    pub follow_links: bool,
}

/// Enumerates the union of resources published under one virtual directory.
///
/// ```
/// use resources::{Enumerator, EnumerateOptions, StaticRoots};
///
/// # fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempfile::tempdir()?;
/// std::fs::write(temp.path().join("a.bin"), b"a")?;
/// let origin = resources::Origin::for_directory(temp.path())?;
///
/// let enumerator = Enumerator::with_options(EnumerateOptions { follow_links: true });
/// let set = enumerator.enumerate(&StaticRoots::new([origin]), "payloads")?;
/// assert_eq!(set.into_sorted_vec(), vec!["a.bin".to_string()]);
/// # Ok(())
/// # }
/// # demo().unwrap();
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Enumerator {
    options: EnumerateOptions,
}

impl Enumerator {
    /// Creates an enumerator with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an enumerator with explicit options.
    #[must_use]
    pub const fn with_options(options: EnumerateOptions) -> Self {
        Self { options }
    }

    /// Returns the active options.
    #[must_use]
    pub const fn options(&self) -> EnumerateOptions {
        self.options
    }

    /// Lists every leaf resource under `virtual_dir` across all origins the
    /// provider yields, without duplicates.
    ///
    /// Origins with an unknown scheme contribute nothing. The first failure
    /// aborts the call and discards whatever was collected so far.
    ///
    /// # Errors
    ///
    /// [`ResourceError::AddressResolution`] for an empty name or an origin
    /// that cannot be resolved, [`ResourceError::Io`] when a root's storage
    /// cannot be read. Errors from the provider are returned unchanged.
    pub fn enumerate<P>(&self, provider: &P, virtual_dir: &str) -> Result<ResourceSet>
    where
        P: RootProvider + ?Sized,
    {
        if virtual_dir.is_empty() {
            return Err(ResourceError::address(
                virtual_dir,
                AddressErrorReason::EmptyName,
            ));
        }

        let origins = provider.origins(virtual_dir)?;
        trace_roots!("{} origins publish '{}'", origins.len(), virtual_dir);

        let mut resources = ResourceSet::new();
        let mut listed_roots = 0usize;
        for origin in &origins {
            let Some(root) = origin.resolve()? else {
                continue;
            };
            let listed = list_storage(&root, self.options)
                .map_err(|source| ResourceError::io(origin.as_str(), source))?;
            listed_roots += 1;

            trace_roots!("{} lists {} resources", origin, listed.len());
            if info_gte(InfoFlag::Name, 1) {
                for entry in listed.sorted() {
                    trace_name!("{}: {}", origin, entry);
                }
            }

            let duplicates = resources.merge(listed);
            if duplicates > 0 {
                trace_dup!("{} resources from {} were already listed", duplicates, origin);
            }
        }

        trace_stats!(
            "{} resources under '{}' from {} of {} origins",
            resources.len(),
            virtual_dir,
            listed_roots,
            origins.len()
        );
        Ok(resources)
    }
}

/// Lists every leaf resource under `virtual_dir` with default options.
///
/// See [`Enumerator::enumerate`].
pub fn enumerate<P>(provider: &P, virtual_dir: &str) -> Result<ResourceSet>
where
    P: RootProvider + ?Sized,
{
    Enumerator::new().enumerate(provider, virtual_dir)
}
