use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use pscurve_core::models::Assembly;
use pscurve_io::{
    FIT_SUMMARY_SUFFIX, FitSummary, GZ_EXTENSION, HIST_SUFFIX, IOLR_HIST_SUFFIX, ReportWrite,
    create_output, write_orientation_table,
};
use pscurve_plot::consts::{FIGURE_SUFFIX, IOLR_FIGURE_SUFFIX};
use pscurve_plot::{plot_contact_probability, plot_orientations};
use pscurve_scaling::{ScalingConfig, contact_probability_from_file};

///
/// Resolve the run settings: defaults, then the config file, then flags.
///
pub fn resolve_config(matches: &ArgMatches) -> Result<ScalingConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => ScalingConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to load config file: {}", path))?,
        None => ScalingConfig::default(),
    };

    if let Some(n_bins) = matches.get_one::<usize>("bins") {
        config.n_bins = *n_bins;
    }
    if let Some(token) = matches.get_one::<String>("forward-token") {
        config.strand_tokens.forward = token.clone();
    }
    if let Some(token) = matches.get_one::<String>("reverse-token") {
        config.strand_tokens.reverse = token.clone();
    }

    Ok(config)
}

pub fn run_contact_probability(matches: &ArgMatches) -> Result<()> {
    let name = matches
        .get_one::<String>("name")
        .expect("An experiment name is required.");

    let contacts = matches
        .get_one::<String>("contacts")
        .expect("A path to a contact file is required.");

    let genome: Assembly = matches
        .get_one::<String>("genome")
        .expect("--genome is required")
        .parse()?;

    let output = matches
        .get_one::<String>("output")
        .expect("--output has a default");
    let output = Path::new(output);

    let gzip = matches.get_flag("gzip");
    let config = resolve_config(matches)?;

    info!("Computing contact probability of {} ({})", contacts, genome);
    let result = contact_probability_from_file(contacts, genome, &config)?;

    // per-bin tables
    let gz_ext = if gzip { GZ_EXTENSION } else { "" };

    let hist_path = output.join(format!("{name}{HIST_SUFFIX}{gz_ext}"));
    match gzip {
        true => result.aggregate().write_report_gz(&hist_path)?,
        false => result.aggregate().write_report(&hist_path)?,
    }
    info!("Wrote {:?}", hist_path);

    let iolr_path = output.join(format!("{name}{IOLR_HIST_SUFFIX}{gz_ext}"));
    let mut writer = create_output(&iolr_path, gzip)?;
    write_orientation_table(&result, &mut writer)?;
    writer.finish()?;
    info!("Wrote {:?}", iolr_path);

    // power-law fits
    let fits = result.fits(&config);
    let summary_path = output.join(format!("{name}{FIT_SUMMARY_SUFFIX}"));
    FitSummary::new(name, &result, &fits).write_json(&summary_path)?;
    info!("Wrote {:?}", summary_path);

    // figures
    if !matches.get_flag("no-plot") {
        plot_contact_probability(
            output.join(format!("{name}{FIGURE_SUFFIX}")),
            name,
            &result,
            &fits,
            config.plot_range,
        )?;
        plot_orientations(
            output.join(format!("{name}{IOLR_FIGURE_SUFFIX}")),
            name,
            &result,
            config.plot_range,
        )?;
    }

    Ok(())
}
