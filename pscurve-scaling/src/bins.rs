use pscurve_core::models::ChromosomeTable;

use crate::errors::{Result, ScalingError};

///
/// Logarithmically spaced distance-bin edges.
///
/// `n + 1` edges span `1..=L`, where `L` is the reference length (normally the
/// longest chromosome of the assembly). Exponents are evenly spaced,
/// `i * log10(L) / n`, with the last exponent set to exactly `log10(L)`.
///
/// Bin `i` holds the distances `d` with `edge[i] < d <= edge[i + 1]`.
///
#[derive(Debug, Clone, PartialEq)]
pub struct BinEdges {
    edges: Vec<f64>,
}

impl BinEdges {
    pub fn new(reference_length: u64, n_bins: usize) -> Result<Self> {
        if n_bins == 0 {
            return Err(ScalingError::InvalidBinning(
                "at least one bin is required".to_string(),
            ));
        }
        if reference_length < 2 {
            return Err(ScalingError::InvalidBinning(format!(
                "reference length must be at least 2, got {}",
                reference_length
            )));
        }

        let stop = (reference_length as f64).log10();
        let step = stop / n_bins as f64;

        let mut edges: Vec<f64> = (0..n_bins)
            .map(|i| 10f64.powf(i as f64 * step))
            .collect();
        edges.push(10f64.powf(stop));

        Ok(BinEdges { edges })
    }

    ///
    /// Build bin edges spanning the longest chromosome of a table.
    ///
    pub fn for_table(table: &ChromosomeTable, n_bins: usize) -> Result<Self> {
        BinEdges::new(table.longest(), n_bins)
    }

    pub fn n_bins(&self) -> usize {
        self.edges.len() - 1
    }

    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    pub fn left(&self, bin: usize) -> f64 {
        self.edges[bin]
    }

    pub fn right(&self, bin: usize) -> f64 {
        self.edges[bin + 1]
    }

    /// Left edges of every bin, in order.
    pub fn left_edges(&self) -> &[f64] {
        &self.edges[..self.n_bins()]
    }

    pub fn last(&self) -> f64 {
        self.edges[self.n_bins()]
    }

    /// Number of edges strictly less than `value` (lower bound).
    pub fn bisect_left(&self, value: f64) -> usize {
        self.edges.partition_point(|&e| e < value)
    }

    /// Number of edges less than or equal to `value` (upper bound).
    pub fn bisect_right(&self, value: f64) -> usize {
        self.edges.partition_point(|&e| e <= value)
    }

    ///
    /// Locate the bin of a distance: the number of edges strictly less than the
    /// distance, minus one.
    ///
    /// Returns `None` when the distance is not above the first edge or is
    /// above the last one.
    ///
    pub fn locate(&self, distance: u64) -> Option<usize> {
        self.bisect_left(distance as f64)
            .checked_sub(1)
            .filter(|&bin| bin < self.n_bins())
    }
}
