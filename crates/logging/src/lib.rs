#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` provides the verbosity flag system shared by the resource-lister
//! workspace. Library crates emit ordinary [`tracing`](https://docs.rs/tracing)
//! events through the subsystem macros exported here (`trace_roots!`,
//! `trace_walk!`, `trace_archive!`, ...). Each macro pins the event to one of
//! the [`targets`], and the bridge layer maps that target onto an
//! [`InfoFlag`] or [`DebugFlag`].
//!
//! # Design
//!
//! - [`VerbosityConfig`] holds one level per flag. It is built from a `-v`
//!   count with [`VerbosityConfig::from_verbose_level`] and refined with
//!   `--info`/`--debug` tokens such as `roots2` or `walk`.
//! - The active configuration and the collected [`DiagnosticEvent`]s live in
//!   thread-local storage, so concurrent enumerations on different threads do
//!   not see each other's diagnostics.
//! - With the `tracing` feature, [`ListerLayer`] filters events against the
//!   thread-local configuration and records the accepted ones. Front-ends call
//!   [`drain_events`] and render them wherever they like.
//!
//! # Examples
//!
//! ```
//! use logging::{DebugFlag, InfoFlag, VerbosityConfig, debug_gte, info_gte, init};
//!
//! let mut config = VerbosityConfig::from_verbose_level(1);
//! config.apply_debug_list("walk2").unwrap();
//! init(config);
//!
//! assert!(info_gte(InfoFlag::Roots, 1));
//! assert!(debug_gte(DebugFlag::Walk, 2));
//! assert!(!debug_gte(DebugFlag::Archive, 1));
//! ```

mod config;
mod levels;
mod thread_local;
#[cfg(feature = "tracing")]
mod tracing_bridge;
mod tracing_macros;

pub use config::VerbosityConfig;
pub use levels::{DebugFlag, DebugLevels, InfoFlag, InfoLevels};
pub use thread_local::{
    DiagnosticEvent, apply_debug_flag, apply_info_flag, debug_gte, drain_events, emit_debug,
    emit_info, info_gte, init,
};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{ListerLayer, init_tracing, init_tracing_with_filter};

/// Tracing targets understood by the bridge layer.
pub mod targets {
    /// Per-root resource listing.
    pub const NAME: &str = "resources::name";
    /// Search-root discovery.
    pub const ROOTS: &str = "resources::roots";
    /// Origins that contribute nothing.
    pub const SKIP: &str = "resources::skip";
    /// Enumeration totals.
    pub const STATS: &str = "resources::stats";
    /// Archive parsing.
    pub const ARCHIVE: &str = "resources::archive";
    /// Search-path discovery.
    pub const DISCOVER: &str = "resources::discover";
    /// Duplicate collapse while merging.
    pub const DUP: &str = "resources::dup";
    /// Origin resolution.
    pub const RESOLVE: &str = "resources::resolve";
    /// Directory traversal.
    pub const WALK: &str = "resources::walk";
}
