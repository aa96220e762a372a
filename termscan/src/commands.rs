use crate::CLAP_STYLING;
use clap::{arg, command};

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("termscan")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("termscan")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("discover")
                .about(
                    "Visit each seed page and collect the links that stay on the seed's own \
                site. Writes the links table consumed by extract.",
                )
                .arg(
                    arg!(-s --"seeds-file" <PATH>)
                        .required(false)
                        .help("Seed URLs: a JSON string array (.json) or one URL per line")
                        .default_value("seeds.json"),
                )
                .arg(
                    arg!(-l --"links-file" <PATH>)
                        .required(false)
                        .help("Where to write the collected links table")
                        .default_value("links.csv"),
                )
                .arg(
                    arg!(--"timeout" <SECONDS>)
                        .required(false)
                        .help("Per-page load timeout in seconds")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("60"),
                )
                .arg(
                    arg!(--"settle" <MILLIS>)
                        .required(false)
                        .help("Post-load settle delay in milliseconds")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("5000"),
                ),
        )
        .subcommand(
            command!("extract")
                .about(
                    "Visit each collected link, count vocabulary terms in its visible text, \
                and write the per-page term-frequency table. Requires the links table.",
                )
                .arg(
                    arg!(-t --"terms-file" <PATH>)
                        .required(false)
                        .help("Term vocabulary: a JSON string array (.json) or one term per line")
                        .default_value("terms.json"),
                )
                .arg(
                    arg!(-l --"links-file" <PATH>)
                        .required(false)
                        .help("Links table written by discover")
                        .default_value("links.csv"),
                )
                .arg(
                    arg!(-r --"results-file" <PATH>)
                        .required(false)
                        .help("Where to write the results table")
                        .default_value("results.csv"),
                )
                .arg(
                    arg!(-p --"pages-dir" <PATH>)
                        .required(false)
                        .help("Directory for the per-page text files")
                        .default_value("pages"),
                )
                .arg(
                    arg!(--"timeout" <SECONDS>)
                        .required(false)
                        .help("Per-page load timeout in seconds")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("60"),
                )
                .arg(
                    arg!(--"settle" <MILLIS>)
                        .required(false)
                        .help("Post-load settle delay in milliseconds")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("5000"),
                ),
        )
        .subcommand(
            command!("run")
                .about("Run discovery then extraction in one invocation")
                .arg(
                    arg!(-s --"seeds-file" <PATH>)
                        .required(false)
                        .help("Seed URLs: a JSON string array (.json) or one URL per line")
                        .default_value("seeds.json"),
                )
                .arg(
                    arg!(-t --"terms-file" <PATH>)
                        .required(false)
                        .help("Term vocabulary: a JSON string array (.json) or one term per line")
                        .default_value("terms.json"),
                )
                .arg(
                    arg!(-l --"links-file" <PATH>)
                        .required(false)
                        .help("Where the links table is written and then reloaded")
                        .default_value("links.csv"),
                )
                .arg(
                    arg!(-r --"results-file" <PATH>)
                        .required(false)
                        .help("Where to write the results table")
                        .default_value("results.csv"),
                )
                .arg(
                    arg!(-p --"pages-dir" <PATH>)
                        .required(false)
                        .help("Directory for the per-page text files")
                        .default_value("pages"),
                )
                .arg(
                    arg!(--"timeout" <SECONDS>)
                        .required(false)
                        .help("Per-page load timeout in seconds")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("60"),
                )
                .arg(
                    arg!(--"settle" <MILLIS>)
                        .required(false)
                        .help("Post-load settle delay in milliseconds")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("5000"),
                ),
        )
}
