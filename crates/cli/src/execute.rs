use std::io::Write;

use logging::{VerbosityConfig, drain_events, init_tracing, trace_roots};
use resources::{EnumerateOptions, Enumerator, ResourceError, RootProvider, SearchPath, StaticRoots};

use crate::command::{HELP_TEXT, PROGRAM_NAME, ParsedArgs};
use crate::render::{OutputFormat, render_diagnostics, render_error, render_resources};
use crate::{EXIT_ADDRESS_RESOLUTION, EXIT_IO, EXIT_SUCCESS, EXIT_USAGE};

pub(crate) fn execute<Out, Err>(parsed: ParsedArgs, stdout: &mut Out, stderr: &mut Err) -> i32
where
    Out: Write,
    Err: Write,
{
    let ParsedArgs {
        show_help,
        show_version,
        virtual_dir,
        roots,
        search_path,
        follow_links,
        json,
        verbose,
        info,
        debug,
    } = parsed;

    if show_help {
        return if stdout.write_all(HELP_TEXT.as_bytes()).is_ok() {
            EXIT_SUCCESS
        } else {
            EXIT_USAGE
        };
    }

    if show_version {
        return if writeln!(stdout, "{PROGRAM_NAME} {}", env!("CARGO_PKG_VERSION")).is_ok() {
            EXIT_SUCCESS
        } else {
            EXIT_USAGE
        };
    }

    let Some(virtual_dir) = virtual_dir else {
        let _ = render_error(stderr, &"missing VIRTUAL_DIR operand", true);
        return EXIT_USAGE;
    };

    let config = match verbosity_config(verbose, &info, &debug) {
        Ok(config) => config,
        Err(message) => {
            let _ = render_error(stderr, &message, true);
            return EXIT_USAGE;
        }
    };
    init_tracing(config);
    drain_events();

    let provider: Box<dyn RootProvider> = if !roots.is_empty() {
        trace_roots!("using {} explicit origins", roots.len());
        Box::new(StaticRoots::new(roots))
    } else if let Some(list) = search_path {
        let path = SearchPath::parse(&list);
        trace_roots!("searching {} path elements", path.elements().len());
        Box::new(path)
    } else {
        let path = SearchPath::from_env();
        trace_roots!(
            "searching {} path elements from {}",
            path.elements().len(),
            resources::SEARCH_PATH_ENV
        );
        Box::new(path)
    };

    let enumerator = Enumerator::with_options(EnumerateOptions { follow_links });
    let result = enumerator.enumerate(&*provider, &virtual_dir);
    let _ = render_diagnostics(stderr, &drain_events());

    match result {
        Ok(listed) => {
            let format = if json {
                OutputFormat::Json
            } else {
                OutputFormat::Lines
            };
            match render_resources(stdout, &listed, format) {
                Ok(()) => EXIT_SUCCESS,
                Err(error) => {
                    let _ = render_error(stderr, &error, false);
                    EXIT_IO
                }
            }
        }
        Err(error) => {
            let _ = render_error(stderr, &error, false);
            exit_status_for(&error)
        }
    }
}

/// Maps an enumeration failure onto the process exit status.
#[must_use]
pub fn exit_status_for(error: &ResourceError) -> i32 {
    match error {
        ResourceError::AddressResolution { .. } => EXIT_ADDRESS_RESOLUTION,
        ResourceError::Io { .. } => EXIT_IO,
    }
}

fn verbosity_config(
    verbose: u8,
    info: &[String],
    debug: &[String],
) -> Result<VerbosityConfig, String> {
    let mut config = VerbosityConfig::from_verbose_level(verbose);
    for list in info {
        config
            .apply_info_list(list)
            .map_err(|error| format!("invalid --info value '{list}': {error}"))?;
    }
    for list in debug {
        config
            .apply_debug_list(list)
            .map_err(|error| format!("invalid --debug value '{list}': {error}"))?;
    }
    Ok(config)
}
