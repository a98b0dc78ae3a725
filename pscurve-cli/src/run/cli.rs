use clap::{Arg, ArgAction, Command, arg, value_parser};

pub const RUN_CMD: &str = "run";
pub const DEFAULT_OUT: &str = ".";

pub fn create_run_cli() -> Command {
    Command::new(RUN_CMD)
        .about("Compute the contact probability curve of a contact file, fit power laws and plot it.")
        .arg(
            Arg::new("name")
                .required(true)
                .help("Experiment name, used as prefix of every output file"),
        )
        .arg(
            Arg::new("contacts")
                .required(true)
                .help("Contact file (strand1 chr1 pos1 strand2 chr2 pos2 ...), .gz or '-' for stdin"),
        )
        .arg(
            arg!(--genome <GENOME>)
                .required(true)
                .help("Genome assembly: hg19 or mm10"),
        )
        .arg(
            arg!(--output <OUTPUT>)
                .required(false)
                .default_value(DEFAULT_OUT)
                .help("Output directory"),
        )
        .arg(
            arg!(--config <CONFIG>)
                .required(false)
                .help("TOML file with run settings"),
        )
        .arg(
            arg!(--bins <BINS>)
                .required(false)
                .value_parser(value_parser!(usize))
                .help("Number of logarithmic distance bins (default 1000)"),
        )
        .arg(
            Arg::new("forward-token")
                .long("forward-token")
                .required(false)
                .help("Strand token of forward reads (default 0)"),
        )
        .arg(
            Arg::new("reverse-token")
                .long("reverse-token")
                .required(false)
                .help("Strand token of reverse reads (default 16)"),
        )
        .arg(
            Arg::new("gzip")
                .long("gzip")
                .action(ArgAction::SetTrue)
                .help("Gzip the per-bin tables"),
        )
        .arg(
            Arg::new("no-plot")
                .long("no-plot")
                .action(ArgAction::SetTrue)
                .help("Skip the SVG figures"),
        )
}
