#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the command-line front-end of `resource-lister`. It parses
//! the arguments, chooses a root provider, runs the enumeration and renders
//! the sorted result to standard output.
//!
//! # Design
//!
//! The crate exposes [`run`] as the primary entry point. The function accepts
//! an iterator of arguments together with handles for standard output and
//! error, so tests can drive the whole front-end in memory. A
//! [`clap`](https://docs.rs/clap/) command definition recognises the options;
//! help and version output use fixed text so the wording stays stable.
//!
//! The provider is chosen in this order: explicit `--root` origins, then an
//! explicit `--search-path`, then the `RESOURCE_LISTER_PATH` environment
//! variable.
//!
//! Diagnostics requested with `-v`, `--info` or `--debug` are collected by the
//! `logging` bridge while the enumeration runs and written to standard error
//! before the result.
//!
//! # Invariants
//!
//! - `run` never panics; failures surface as non-zero exit codes.
//! - Nothing is written to standard output when the enumeration fails.
//!
//! # Errors
//!
//! Usage errors exit with [`EXIT_USAGE`], unresolvable origins with
//! [`EXIT_ADDRESS_RESOLUTION`] and unreadable roots with [`EXIT_IO`].
//!
//! # Examples
//!
//! ```
//! use cli::run;
//!
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = run(["resource-lister", "--version"], &mut stdout, &mut stderr);
//!
//! assert_eq!(exit_code, 0);
//! assert!(String::from_utf8(stdout).unwrap().starts_with("resource-lister "));
//! assert!(stderr.is_empty());
//! ```

use std::ffi::OsString;
use std::io::Write;

mod command;
mod execute;
mod render;


pub use crate::execute::exit_status_for;

/// Exit status for a successful listing.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit status for invalid arguments.
pub const EXIT_USAGE: i32 = 1;
/// Exit status when an origin cannot be resolved.
pub const EXIT_ADDRESS_RESOLUTION: i32 = 2;
/// Exit status when a root's storage cannot be read.
pub const EXIT_IO: i32 = 3;

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Runs the CLI using the provided argument iterator and output handles.
///
/// The function returns the process exit code that should be used by the
/// caller.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    match command::parse_args(arguments) {
        Ok(parsed) => execute::execute(parsed, stdout, stderr),
        Err(error) => {
            let _ = write!(stderr, "{error}");
            EXIT_USAGE
        }
    }
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(clamped as u8)
}
