use crate::CLAP_STYLING;
use clap::builder::RangedU64ValueParser;
use clap::{arg, command};
use linkex::handlers::parse_page_url;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("linkex")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("linkex")
        .styles(CLAP_STYLING)
        .arg(
            arg!(-q --"quiet" "Hide progress bars and non-essential output")
                .required(false)
                .global(true),
        )
        .arg(
            arg!(-v --"verbosity" <LEVEL>)
                .required(false)
                .help("Logging level: error, warn, info, debug or trace")
                .value_parser(["error", "warn", "info", "debug", "trace"])
                .ignore_case(true)
                .default_value("warn")
                .global(true),
        )
        .arg(
            arg!(--"log-file" <PATH>)
                .required(false)
                .help("Write logs to this file instead of stderr")
                .value_parser(clap::value_parser!(std::path::PathBuf))
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            command!("extract")
                .about(
                    "Fetch pages concurrently and print the links found on them, grouped by \
                origin.",
                )
                .arg(
                    arg!(-u --"url" <URL>)
                        .required(false)
                        .help("A page to extract links from (repeat for several pages)")
                        .value_parser(parse_page_url)
                        .action(clap::ArgAction::Append),
                )
                .arg(
                    arg!(-f --"urls-file" <PATH>)
                        .required(false)
                        .help("Path to a newline-delimited file of pages to extract links from")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(-o --"output" <OUTPUT>)
                        .required(true)
                        .help("Output format: 'stdout' (one link per line) or 'json'")
                        .value_parser(["stdout", "json"])
                        .ignore_case(true),
                )
                .arg(
                    arg!(-t --"timeout" <SECONDS>)
                        .required(false)
                        .help("Request timeout in seconds")
                        .value_parser(clap::value_parser!(u64).range(1..))
                        .default_value("10"),
                )
                .arg(
                    arg!(-c --"concurrency" <NUM_REQUESTS>)
                        .required(false)
                        .help("Maximum number of pages fetched at once (default: all at once)")
                        .value_parser(RangedU64ValueParser::<usize>::new().range(1..)),
                ),
        )
}
