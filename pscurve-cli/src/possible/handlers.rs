use std::io;

use anyhow::Result;
use clap::ArgMatches;

use pscurve_core::models::{Assembly, ChromosomeTable};
use pscurve_io::{create_output, write_possible_table};
use pscurve_scaling::{BinEdges, PossibleHistogram};

pub fn run_possible(matches: &ArgMatches) -> Result<()> {
    let genome: Assembly = matches
        .get_one::<String>("genome")
        .expect("--genome is required")
        .parse()?;

    let n_bins = *matches
        .get_one::<usize>("bins")
        .expect("--bins has a default");

    let table = ChromosomeTable::from(genome);
    let edges = BinEdges::for_table(&table, n_bins)?;
    let possible = PossibleHistogram::compute(&table, &edges);

    match matches.get_one::<String>("output") {
        Some(path) => {
            let mut writer = create_output(path, path.ends_with(".gz"))?;
            write_possible_table(&edges, &possible, &mut writer)?;
            writer.finish()?;
            eprintln!("Output written to {}", path);
        }
        None => {
            let mut stdout = io::stdout().lock();
            write_possible_table(&edges, &possible, &mut stdout)?;
        }
    }

    Ok(())
}
