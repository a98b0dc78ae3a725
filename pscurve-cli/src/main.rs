mod chroms;
mod possible;
mod run;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use env_logger::Env;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "pscurve";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Contact probability vs. genomic distance curves from chromosome conformation capture contacts.")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log debug messages"),
        )
        .subcommand(run::cli::create_run_cli())
        .subcommand(possible::cli::create_possible_cli())
        .subcommand(chroms::cli::create_chroms_cli())
}

fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logger(matches.get_flag("verbose"));

    match matches.subcommand() {
        //
        // CONTACT PROBABILITY
        //
        Some((run::cli::RUN_CMD, matches)) => {
            run::handlers::run_contact_probability(matches)?;
        }

        //
        // POSSIBLE CONTACTS
        //
        Some((possible::cli::POSSIBLE_CMD, matches)) => {
            possible::handlers::run_possible(matches)?;
        }

        //
        // CHROMOSOME TABLE
        //
        Some((chroms::cli::CHROMS_CMD, matches)) => {
            chroms::handlers::run_chroms(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
