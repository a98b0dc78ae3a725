use clap::{Command, arg, value_parser};

pub const POSSIBLE_CMD: &str = "possible";

pub fn create_possible_cli() -> Command {
    Command::new(POSSIBLE_CMD)
        .about("Write the genome-wide number of possible contacts per distance bin.")
        .arg(
            arg!(--genome <GENOME>)
                .required(true)
                .help("Genome assembly: hg19 or mm10"),
        )
        .arg(
            arg!(--bins <BINS>)
                .required(false)
                .default_value("1000")
                .value_parser(value_parser!(usize))
                .help("Number of logarithmic distance bins"),
        )
        .arg(
            arg!(--output <OUTPUT>)
                .required(false)
                .help("Output path (default: stdout)"),
        )
}
