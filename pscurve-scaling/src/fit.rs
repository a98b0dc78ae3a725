//! Power-law fits of the contact probability curve.
//!
//! Within a distance window, `P(s) ~ s^a` is fitted as a straight line in
//! log-log space. The slope `a` is the scaling exponent of that regime.

use serde::Serialize;

use crate::bins::BinEdges;
use crate::config::DistanceWindow;
use crate::errors::{Result, ScalingError};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerLawFit {
    pub window: DistanceWindow,
    /// Scaling exponent
    pub slope: f64,
    pub intercept: f64,
    /// Pearson correlation between observed probabilities and the display curve
    pub pearson_r: f64,
    pub n_points: usize,
    /// Bin left edges used in the fit
    #[serde(skip)]
    pub x: Vec<f64>,
    /// Display curve `exp(slope * ln(x) + intercept + offset)`
    #[serde(skip)]
    pub y: Vec<f64>,
}

///
/// Ordinary least squares line through `(x, y)`; returns `(slope, intercept)`.
///
pub fn linear_fit(x: &[f64], y: &[f64]) -> (f64, f64) {
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    for (xi, yi) in x.iter().zip(y.iter()) {
        cov += (xi - mean_x) * (yi - mean_y);
        var_x += (xi - mean_x) * (xi - mean_x);
    }

    let slope = if var_x == 0.0 { 0.0 } else { cov / var_x };
    (slope, mean_y - slope * mean_x)
}

/// Pearson product-moment correlation coefficient between `x` and `y`.
///
/// Returns 0.0 if either series is constant (zero variance).
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len() as f64;
    let mean_x: f64 = x.iter().sum::<f64>() / n;
    let mean_y: f64 = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (xi, yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        return 0.0;
    }
    cov / denom
}

///
/// Fit a power law to the probabilities of the bins inside a window.
///
/// The bins used are `bisect_left(edges, left) .. bisect_right(edges, right)`;
/// bins with probability 0 have no logarithm and are left out.
///
/// # Arguments
/// - edges: distance bins
/// - probabilities: one probability per bin
/// - window: distance window in bp
/// - offset: log-space offset of the display curve
pub fn fit_power_law(
    edges: &BinEdges,
    probabilities: &[f64],
    window: DistanceWindow,
    offset: f64,
) -> Result<PowerLawFit> {
    if probabilities.len() != edges.n_bins() {
        return Err(ScalingError::BinCountMismatch {
            expected: edges.n_bins(),
            found: probabilities.len(),
        });
    }

    let lo = edges.bisect_left(window.left).min(edges.n_bins());
    let hi = edges.bisect_right(window.right).min(edges.n_bins());

    let (x, observed): (Vec<f64>, Vec<f64>) = (lo..hi.max(lo))
        .filter(|&bin| probabilities[bin] > 0.0)
        .map(|bin| (edges.left(bin), probabilities[bin]))
        .unzip();

    if x.len() < 2 {
        return Err(ScalingError::InsufficientFitPoints {
            left: window.left,
            right: window.right,
            found: x.len(),
        });
    }

    let log_x: Vec<f64> = x.iter().map(|v| v.ln()).collect();
    let log_y: Vec<f64> = observed.iter().map(|v| v.ln()).collect();
    let (slope, intercept) = linear_fit(&log_x, &log_y);

    let y: Vec<f64> = log_x
        .iter()
        .map(|lx| (slope * lx + intercept + offset).exp())
        .collect();
    let pearson_r = pearson(&observed, &y);

    Ok(PowerLawFit {
        window,
        slope,
        intercept,
        pearson_r,
        n_points: x.len(),
        x,
        y,
    })
}
