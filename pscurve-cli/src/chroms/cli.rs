use clap::{Command, arg};

pub const CHROMS_CMD: &str = "chroms";

pub fn create_chroms_cli() -> Command {
    Command::new(CHROMS_CMD)
        .about("List the built-in chromosome table of a genome assembly.")
        .arg(
            arg!(--genome <GENOME>)
                .required(true)
                .help("Genome assembly: hg19 or mm10"),
        )
}
