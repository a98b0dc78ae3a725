use std::io::Write;
use std::path::Path;

use serde::Serialize;

use pscurve_scaling::{ContactProbability, PowerLawFit, ReadSummary};

use crate::error::Result;
use crate::report::create_output;

///
/// JSON summary of one run: what was read and the fitted scaling regimes.
///
#[derive(Debug, Serialize)]
pub struct FitSummary<'a> {
    pub experiment: &'a str,
    pub assembly: &'a str,
    pub n_bins: usize,
    pub reads: ReadSummary,
    pub fits: &'a [PowerLawFit],
}

impl<'a> FitSummary<'a> {
    pub fn new(experiment: &'a str, result: &ContactProbability, fits: &'a [PowerLawFit]) -> Self {
        FitSummary {
            experiment,
            assembly: result.assembly.name(),
            n_bins: result.edges.n_bins(),
            reads: result.summary,
            fits,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        let mut writer = create_output(path, false)?;
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        writer.finish()
    }
}
