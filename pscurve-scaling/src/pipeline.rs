use std::io::BufRead;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};

use pscurve_core::models::{Assembly, ChromosomeTable};
use pscurve_core::utils::get_dynamic_reader_w_stdin;

use crate::bins::BinEdges;
use crate::config::ScalingConfig;
use crate::errors::ScalingError;
use crate::fit::{PowerLawFit, fit_power_law};
use crate::normalize::{ProbabilityTable, normalize};
use crate::observed::{HistogramKind, ObservedHistograms, ReadSummary, aggregate_contacts};
use crate::possible::PossibleHistogram;

///
/// Everything computed for one input: the shared bins and possible counts,
/// the observed histograms and one probability table per [`HistogramKind`].
///
#[derive(Debug, Clone)]
pub struct ContactProbability {
    pub assembly: Assembly,
    pub edges: BinEdges,
    pub possible: PossibleHistogram,
    pub observed: ObservedHistograms,
    pub summary: ReadSummary,
    tables: Vec<ProbabilityTable>,
}

impl ContactProbability {
    pub fn table(&self, kind: HistogramKind) -> &ProbabilityTable {
        &self.tables[kind.index()]
    }

    /// Probability table of all contacts regardless of orientation.
    pub fn aggregate(&self) -> &ProbabilityTable {
        self.table(HistogramKind::All)
    }

    ///
    /// Fit a power law to the aggregate curve in each window.
    ///
    /// Windows without enough non-zero bins are logged and left out.
    ///
    pub fn fits(&self, config: &ScalingConfig) -> Vec<PowerLawFit> {
        let probabilities = self.aggregate().probabilities();

        config
            .fit_windows
            .iter()
            .filter_map(|&window| {
                match fit_power_law(&self.edges, &probabilities, window, config.fit_offset) {
                    Ok(fit) => {
                        info!(
                            "Fit [{}, {}]: slope {:.4}, r {:.4}",
                            window.left, window.right, fit.slope, fit.pearson_r
                        );
                        Some(fit)
                    }
                    Err(e) => {
                        warn!("Skipping fit: {}", e);
                        None
                    }
                }
            })
            .collect()
    }
}

///
/// Compute contact probability curves from a contact stream.
///
/// # Arguments
/// - reader: line-oriented contact input
/// - assembly: genome assembly the contacts were mapped to
/// - config: run settings
/// - progress: optional spinner to tick while reading
pub fn contact_probability<R: BufRead>(
    reader: R,
    assembly: Assembly,
    config: &ScalingConfig,
    progress: Option<&ProgressBar>,
) -> std::result::Result<ContactProbability, ScalingError> {
    let table = ChromosomeTable::from(assembly);
    let edges = BinEdges::for_table(&table, config.n_bins)?;

    let (observed, summary) = aggregate_contacts(
        reader,
        &table,
        &edges,
        &config.strand_tokens,
        &config.chrom_prefix,
        &config.excluded_chromosomes,
        progress,
    )?;

    let possible = PossibleHistogram::compute(&table, &edges);

    let tables = HistogramKind::ALL
        .iter()
        .map(|&kind| normalize(observed.get(kind), &possible, &edges))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(ContactProbability {
        assembly,
        edges,
        possible,
        observed,
        summary,
        tables,
    })
}

///
/// Compute contact probability curves from a contact file.
///
/// # Arguments
/// - path: plain or gzipped contact file, or `-` for stdin
/// - assembly: genome assembly the contacts were mapped to
/// - config: run settings
pub fn contact_probability_from_file(
    path: &str,
    assembly: Assembly,
    config: &ScalingConfig,
) -> Result<ContactProbability> {
    let reader = get_dynamic_reader_w_stdin(path)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed}] {msg} ({per_sec})")?
            .tick_strings(&["-", "\\", "|", "/"]),
    );
    spinner.set_message("Processing contacts...");

    let result = contact_probability(reader, assembly, config, Some(&spinner))
        .with_context(|| format!("Failed to compute contact probability for {}", path))?;

    spinner.finish_with_message("Done!");
    info!("{}", result.summary);

    Ok(result)
}
