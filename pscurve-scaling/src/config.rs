use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};

use pscurve_core::models::StrandTokens;

use crate::consts::*;
use crate::errors::ScalingError;

///
/// A closed distance interval in bp, used for fit windows and plot ranges.
///
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct DistanceWindow {
    pub left: f64,
    pub right: f64,
}

impl From<(f64, f64)> for DistanceWindow {
    fn from((left, right): (f64, f64)) -> Self {
        DistanceWindow { left, right }
    }
}

///
/// Settings of a contact-probability run.
///
/// Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```toml
/// n_bins = 500
/// excluded_chromosomes = ["M", "MT", "Y"]
///
/// [strand_tokens]
/// forward = "+"
/// reverse = "-"
///
/// [[fit_windows]]
/// left = 50000.0
/// right = 500000.0
/// ```
///
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScalingConfig {
    pub n_bins: usize,
    pub strand_tokens: StrandTokens,
    pub chrom_prefix: String,
    pub excluded_chromosomes: Vec<String>,
    pub fit_windows: Vec<DistanceWindow>,
    pub plot_range: DistanceWindow,
    pub fit_offset: f64,
}

impl Default for ScalingConfig {
    fn default() -> Self {
        ScalingConfig {
            n_bins: DEFAULT_N_BINS,
            strand_tokens: StrandTokens::default(),
            chrom_prefix: DEFAULT_CHROM_PREFIX.to_string(),
            excluded_chromosomes: DEFAULT_EXCLUDED_CHROMOSOMES
                .iter()
                .map(|c| c.to_string())
                .collect(),
            fit_windows: DEFAULT_FIT_WINDOWS
                .iter()
                .map(|&w| DistanceWindow::from(w))
                .collect(),
            plot_range: DistanceWindow::from(DEFAULT_PLOT_RANGE),
            fit_offset: DEFAULT_FIT_OFFSET,
        }
    }
}

impl TryFrom<&Path> for ScalingConfig {
    type Error = ScalingError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config = toml::from_str(&toml_str)?;
        Ok(config)
    }
}
