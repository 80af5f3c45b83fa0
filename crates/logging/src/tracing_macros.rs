//! crates/logging/src/tracing_macros.rs
//! Convenience macros for subsystem tracing.
//!
//! These macros wrap the standard tracing macros with the targets listed in
//! [`crate::targets`], so the bridge layer can map each event onto an info or
//! debug flag. Callers must depend on `tracing` directly.

/// Emit a search-root discovery trace.
///
/// # Example
/// ```ignore
/// trace_roots!("{} search roots declare '{}'", count, name);
/// ```
#[macro_export]
macro_rules! trace_roots {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "resources::roots", $($arg)*);
    };
}

/// Emit a per-root resource listing trace.
///
/// # Example
/// ```ignore
/// trace_name!("{}: {}", origin, entry);
/// ```
#[macro_export]
macro_rules! trace_name {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "resources::name", $($arg)*);
    };
}

/// Emit a trace for an origin or search-path element that contributes nothing.
///
/// # Example
/// ```ignore
/// trace_skip!("ignoring origin with unsupported scheme {}", scheme);
/// ```
#[macro_export]
macro_rules! trace_skip {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "resources::skip", $($arg)*);
    };
}

/// Emit an enumeration statistics trace.
///
/// # Example
/// ```ignore
/// trace_stats!("{} resources from {} roots", total, roots);
/// ```
#[macro_export]
macro_rules! trace_stats {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "resources::stats", $($arg)*);
    };
}

/// Emit an archive parsing trace.
///
/// # Example
/// ```ignore
/// trace_archive!("central directory holds {} entries", count);
/// ```
#[macro_export]
macro_rules! trace_archive {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "resources::archive", $($arg)*);
    };
}

/// Emit a search-path discovery trace.
///
/// # Example
/// ```ignore
/// trace_discover!("checking search path element {}", path.display());
/// ```
#[macro_export]
macro_rules! trace_discover {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "resources::discover", $($arg)*);
    };
}

/// Emit a duplicate-collapse trace.
///
/// # Example
/// ```ignore
/// trace_dup!("{} already listed by an earlier root", entry);
/// ```
#[macro_export]
macro_rules! trace_dup {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "resources::dup", $($arg)*);
    };
}

/// Emit an origin resolution trace.
///
/// # Example
/// ```ignore
/// trace_resolve!("{} resolved to archive {}", origin, path.display());
/// ```
#[macro_export]
macro_rules! trace_resolve {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "resources::resolve", $($arg)*);
    };
}

/// Emit a directory traversal trace.
///
/// Per-entry events should use `tracing::trace!` with [`crate::targets::WALK`]
/// so they only surface at `--debug=walk2`.
///
/// # Example
/// ```ignore
/// trace_walk!("entering directory {}", path.display());
/// ```
#[macro_export]
macro_rules! trace_walk {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "resources::walk", $($arg)*);
    };
}
