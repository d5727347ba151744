use clap::{ArgAction, arg};
use vesstor_core::config::DEFAULT_OUTPUT_DIR;
use vesstor_core::wordlist::SECLISTS_BASE;

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("vesstor")
        .about("VesstoR - directory scanner")
        .bin_name("vesstor")
        .styles(CLAP_STYLING)
        // -v is ours, so clap's own version flag is off.
        .disable_version_flag(true)
        .arg(
            arg!(-v --"version" "Print the version and exit")
                .action(ArgAction::SetTrue)
                .required(false),
        )
        .arg(
            arg!(-u --"url" <URL>)
                .help("Target base URL (http:// is assumed when no scheme is given)")
                .required(false)
                .required_unless_present("version"),
        )
        .arg(
            arg!(--"quick")
                .help("Quick scan using a small wordlist")
                .action(ArgAction::SetTrue)
                .conflicts_with("deep"),
        )
        .arg(
            arg!(--"deep")
                .help("Deep scan using a large wordlist")
                .action(ArgAction::SetTrue)
                .conflicts_with("quick"),
        )
        .arg(
            arg!(-t --"threads" <NUM>)
                .required(false)
                .help("Number of probes per wave")
                .value_parser(clap::value_parser!(usize))
                .default_value("10"),
        )
        .arg(
            arg!(--"delay" <SECONDS>)
                .required(false)
                .help("Pause after each probe, in seconds")
                .value_parser(clap::value_parser!(f64))
                .default_value("0.1"),
        )
        .arg(
            arg!(--"timeout" <SECONDS>)
                .required(false)
                .help("Request timeout in seconds")
                .value_parser(clap::value_parser!(u64))
                .default_value("8"),
        )
        .arg(
            arg!(-w --"wordlist" <PATH>)
                .required(false)
                .help("Use this wordlist instead of the SecLists tier lookup"),
        )
        .arg(
            arg!(--"seclists" <DIR>)
                .required(false)
                .help("SecLists Discovery/Web-Content directory")
                .default_value(SECLISTS_BASE),
        )
        .arg(
            arg!(-o --"output-dir" <DIR>)
                .required(false)
                .help("Directory for the JSON and text results")
                .default_value(DEFAULT_OUTPUT_DIR),
        )
        .arg(arg!(-q --"quiet" "Suppress the banner").required(false))
        .arg(
            arg!(--"no-progress" "Disable the progress bar")
                .required(false)
                .action(ArgAction::SetTrue),
        )
}
