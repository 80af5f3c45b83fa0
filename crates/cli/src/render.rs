use std::io::{self, Write};

use logging::DiagnosticEvent;
use resources::ResourceSet;

use crate::command::PROGRAM_NAME;

/// Output layout for the listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    /// One path per line.
    Lines,
    /// A single JSON array followed by a newline.
    Json,
}

/// Writes the resources sorted by path.
pub(crate) fn render_resources<W: Write>(
    out: &mut W,
    resources: &ResourceSet,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Lines => {
            for entry in resources.sorted() {
                writeln!(out, "{entry}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, resources)?;
            writeln!(out)?;
        }
    }
    out.flush()
}

/// Writes collected diagnostics, one per line, prefixed with the program name.
pub(crate) fn render_diagnostics<W: Write>(
    err: &mut W,
    events: &[DiagnosticEvent],
) -> io::Result<()> {
    for event in events {
        writeln!(err, "{PROGRAM_NAME}: {event}")?;
    }
    Ok(())
}

/// Writes an error line followed by the help hint for usage problems.
pub(crate) fn render_error<W: Write>(
    err: &mut W,
    message: &dyn std::fmt::Display,
    hint: bool,
) -> io::Result<()> {
    writeln!(err, "{PROGRAM_NAME}: error: {message}")?;
    if hint {
        writeln!(err, "Try '{PROGRAM_NAME} --help' for more information.")?;
    }
    Ok(())
}
