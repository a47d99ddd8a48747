use clap::arg;
use repohunt_scanner::DEFAULT_BASE_URL;
use url::Url;

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("repohunt")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("repohunt")
        .about("Search a code hosting site for keywords through a proxy and save the results as JSON")
        .styles(CLAP_STYLING)
        // Presence of -i/-o is checked by the handler so that a missing
        // file argument gets its own exit code
        .arg(
            arg!(-i --"ifile" <INPUT_FILE>)
                .required(false)
                .visible_alias("input")
                .help("JSON file with keywords, proxies and an optional search type"),
        )
        .arg(
            arg!(-o --"ofile" <OUTPUT_FILE>)
                .required(false)
                .visible_alias("output")
                .help("Where to write the JSON array of results"),
        )
        .arg(
            arg!(--"base-url" <URL>)
                .required(false)
                .help("Origin of the site to search")
                .value_parser(clap::value_parser!(Url))
                .default_value(DEFAULT_BASE_URL),
        )
        .arg(
            arg!(--"skip-failed")
                .required(false)
                .help("Keep going when a result's detail page cannot be fetched or parsed (default: abort)")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            arg!(-q --"quiet" "Suppress progress and non-essential output")
                .required(false)
                .action(clap::ArgAction::SetTrue),
        )
}
