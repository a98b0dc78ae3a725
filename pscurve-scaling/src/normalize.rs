use log::warn;
use serde::Serialize;

use crate::bins::BinEdges;
use crate::errors::{Result, ScalingError};
use crate::possible::PossibleHistogram;

///
/// One row of the contact probability table.
///
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProbabilityBin {
    /// observed / possible; 0 when nothing is possible in the bin
    pub probability: f64,
    pub left_edge: f64,
    pub observed: u64,
    pub possible: u64,
}

///
/// Contact probability per distance bin. Immutable once built.
///
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityTable {
    bins: Vec<ProbabilityBin>,
}

impl ProbabilityTable {
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn get(&self, bin: usize) -> Option<&ProbabilityBin> {
        self.bins.get(bin)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProbabilityBin> {
        self.bins.iter()
    }

    pub fn bins(&self) -> &[ProbabilityBin] {
        &self.bins
    }

    pub fn probabilities(&self) -> Vec<f64> {
        self.bins.iter().map(|b| b.probability).collect()
    }
}

///
/// Divide observed counts by possible counts, bin by bin.
///
/// A bin with no possible pairs gets probability 0. That value keeps log-log
/// plots drawable but is not an estimate; observed contacts in such a bin
/// mean the input does not match the assembly and are reported as a warning.
///
pub fn normalize(
    observed: &[u64],
    possible: &PossibleHistogram,
    edges: &BinEdges,
) -> Result<ProbabilityTable> {
    let n_bins = edges.n_bins();
    for found in [observed.len(), possible.len()] {
        if found != n_bins {
            return Err(ScalingError::BinCountMismatch {
                expected: n_bins,
                found,
            });
        }
    }

    let mut masked = 0usize;
    let bins: Vec<ProbabilityBin> = observed
        .iter()
        .zip(possible.counts())
        .zip(edges.left_edges())
        .map(|((&observed, &possible), &left_edge)| {
            let probability = if possible == 0 {
                if observed > 0 {
                    masked += 1;
                }
                0.0
            } else {
                observed as f64 / possible as f64
            };

            ProbabilityBin {
                probability,
                left_edge,
                observed,
                possible,
            }
        })
        .collect();

    if masked > 0 {
        warn!(
            "{} bins have observed contacts but no possible pairs; their probability is set to 0",
            masked
        );
    }

    Ok(ProbabilityTable { bins })
}
