use std::io::{self, Write};

use anyhow::Result;
use clap::ArgMatches;

use pscurve_core::models::{Assembly, ChromosomeTable};

pub fn run_chroms(matches: &ArgMatches) -> Result<()> {
    let genome: Assembly = matches
        .get_one::<String>("genome")
        .expect("--genome is required")
        .parse()?;

    let table = ChromosomeTable::from(genome);
    let mut stdout = io::stdout().lock();
    for (index, label, length) in table.iter() {
        writeln!(stdout, "{}\tchr{}\t{}", index, label, length)?;
    }

    Ok(())
}
