use std::ffi::OsString;

use clap::{Arg, ArgAction, Command, builder::OsStringValueParser};

pub(crate) const PROGRAM_NAME: &str = "resource-lister";

/// Deterministic help text describing the command-line surface.
pub(crate) const HELP_TEXT: &str = concat!(
    "resource-lister ",
    env!("CARGO_PKG_VERSION"),
    "\n",
    "\n",
    "Usage: resource-lister [OPTIONS] VIRTUAL_DIR\n",
    "\n",
    "Lists every resource file published under VIRTUAL_DIR by the directory\n",
    "trees and ZIP/JAR archives on the search path. Paths are printed sorted,\n",
    "one per line, relative to VIRTUAL_DIR.\n",
    "\n",
    "Options:\n",
    "  -r, --root ORIGIN        Enumerate ORIGIN (file: or jar:file: URL) instead\n",
    "                           of searching; may be repeated.\n",
    "  -p, --search-path PATHS  Search PATHS (platform path list) instead of\n",
    "                           RESOURCE_LISTER_PATH.\n",
    "  -L, --follow-links       Descend into symlinked directories.\n",
    "      --json               Print a JSON array instead of one path per line.\n",
    "  -v, --verbose            Increase diagnostic output; may be repeated.\n",
    "      --info FLAGS         Enable info diagnostics (name, roots, skip, stats).\n",
    "      --debug FLAGS        Enable debug diagnostics (archive, discover, dup,\n",
    "                           resolve, walk).\n",
    "  -h, --help               Show this help message and exit.\n",
    "  -V, --version            Output version information and exit.\n",
    "\n",
    "Exit status is 0 on success, 1 for usage errors, 2 when an origin cannot\n",
    "be resolved and 3 when a root cannot be read.\n",
);

/// Parsed command produced by [`parse_args`].
#[derive(Debug, Default)]
pub(crate) struct ParsedArgs {
    pub(crate) show_help: bool,
    pub(crate) show_version: bool,
    pub(crate) virtual_dir: Option<String>,
    pub(crate) roots: Vec<String>,
    pub(crate) search_path: Option<OsString>,
    pub(crate) follow_links: bool,
    pub(crate) json: bool,
    pub(crate) verbose: u8,
    pub(crate) info: Vec<String>,
    pub(crate) debug: Vec<String>,
}

/// Builds the `clap` command used for parsing.
fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg_required_else_help(false)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .help("Output version information and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("root")
                .long("root")
                .short('r')
                .value_name("ORIGIN")
                .help("Enumerate ORIGIN instead of searching.")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("search-path")
                .long("search-path")
                .short('p')
                .value_name("PATHS")
                .help("Search PATHS instead of RESOURCE_LISTER_PATH.")
                .value_parser(OsStringValueParser::new())
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("follow-links")
                .long("follow-links")
                .short('L')
                .help("Descend into symlinked directories.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print a JSON array instead of one path per line.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase diagnostic output.")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("info")
                .long("info")
                .value_name("FLAGS")
                .help("Enable info diagnostics.")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .value_name("FLAGS")
                .help("Enable debug diagnostics.")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("virtual-dir")
                .value_name("VIRTUAL_DIR")
                .help("Virtual directory to enumerate.")
                .action(ArgAction::Set),
        )
}

pub(crate) fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();

    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    let show_help = matches.get_flag("help");
    let show_version = matches.get_flag("version");
    let follow_links = matches.get_flag("follow-links");
    let json = matches.get_flag("json");
    let verbose = matches.get_count("verbose");
    let virtual_dir = matches.remove_one::<String>("virtual-dir");
    let search_path = matches.remove_one::<OsString>("search-path");
    let roots = matches
        .remove_many::<String>("root")
        .map(Iterator::collect)
        .unwrap_or_default();
    let info = matches
        .remove_many::<String>("info")
        .map(Iterator::collect)
        .unwrap_or_default();
    let debug = matches
        .remove_many::<String>("debug")
        .map(Iterator::collect)
        .unwrap_or_default();

    Ok(ParsedArgs {
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
    })
}
