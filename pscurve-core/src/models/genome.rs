use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::{PscurveError, Result};

/// hg19 chrom.sizes for chr1..chr22 followed by chrX.
const HG19_CHROM_SIZES: [u64; 23] = [
    249_904_550, 243_199_373, 198_022_430, 191_535_534, 180_915_260, 171_115_067,
    159_321_559, 146_440_111, 141_696_573, 135_534_747, 135_046_619, 133_851_895,
    115_169_878, 107_349_540, 102_531_392, 90_354_753, 81_529_607, 78_081_510,
    59_380_841, 63_025_520, 48_157_577, 51_304_566, 155_270_560,
];

/// mm10 chrom.sizes for chr1..chr19 followed by chrX.
const MM10_CHROM_SIZES: [u64; 20] = [
    195_471_971, 182_113_224, 160_039_680, 156_508_116, 151_834_684, 149_736_546,
    145_441_459, 129_401_213, 124_595_110, 130_694_993, 122_082_543, 120_129_022,
    120_421_639, 124_902_244, 104_043_685, 98_207_768, 94_987_271, 90_702_639,
    61_431_566, 171_031_299,
];

pub const X_LABEL: &str = "X";

///
/// A reference genome assembly with a built-in chromosome table.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Assembly {
    Hg19,
    Mm10,
}

impl Assembly {
    pub fn name(&self) -> &'static str {
        match self {
            Assembly::Hg19 => "hg19",
            Assembly::Mm10 => "mm10",
        }
    }

    fn chrom_sizes(&self) -> &'static [u64] {
        match self {
            Assembly::Hg19 => &HG19_CHROM_SIZES,
            Assembly::Mm10 => &MM10_CHROM_SIZES,
        }
    }
}

impl FromStr for Assembly {
    type Err = PscurveError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "hg19" => Ok(Assembly::Hg19),
            "mm10" => Ok(Assembly::Mm10),
            _ => Err(PscurveError::UnknownAssembly(s.to_string())),
        }
    }
}

impl Display for Assembly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

///
/// Ordered chromosome-length table of one assembly.
///
/// Chromosomes are indexed 1..=N. Autosomes use their number as label and the
/// last entry is always chromosome X, so the numeric code behind `X` depends on
/// the assembly (23 for hg19, 20 for mm10). The table is immutable once built.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromosomeTable {
    assembly: Assembly,
    lengths: &'static [u64],
}

impl From<Assembly> for ChromosomeTable {
    fn from(assembly: Assembly) -> Self {
        ChromosomeTable {
            assembly,
            lengths: assembly.chrom_sizes(),
        }
    }
}

impl ChromosomeTable {
    pub fn assembly(&self) -> Assembly {
        self.assembly
    }

    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    ///
    /// Resolve a bare chromosome label (no `chr` prefix) to its 1-based index.
    ///
    /// # Arguments
    /// - label: a numeric id (`"1"`, `"17"`) or `"X"`
    pub fn resolve(&self, label: &str) -> Result<usize> {
        if label == X_LABEL {
            return Ok(self.lengths.len());
        }

        // canonical decimal ids only: no sign, no leading zero
        let canonical = !label.is_empty()
            && label.bytes().all(|b| b.is_ascii_digit())
            && !label.starts_with('0');

        match label.parse::<usize>() {
            Ok(index) if canonical && index <= self.lengths.len() => Ok(index),
            _ => Err(PscurveError::UnknownChromosome(label.to_string())),
        }
    }

    /// Length of the chromosome with the given label.
    pub fn length(&self, label: &str) -> Result<u64> {
        let index = self.resolve(label)?;
        Ok(self.lengths[index - 1])
    }

    /// Length of the chromosome at a 1-based index.
    pub fn length_at(&self, index: usize) -> Option<u64> {
        index
            .checked_sub(1)
            .and_then(|i| self.lengths.get(i))
            .copied()
    }

    /// Canonical label of the chromosome at a 1-based index.
    pub fn label_at(&self, index: usize) -> Option<String> {
        if index == 0 || index > self.lengths.len() {
            None
        } else if index == self.lengths.len() {
            Some(X_LABEL.to_string())
        } else {
            Some(index.to_string())
        }
    }

    /// Length of the longest chromosome; the reference length for distance binning.
    pub fn longest(&self) -> u64 {
        self.lengths.iter().copied().max().unwrap_or(0)
    }

    /// Chromosome lengths in table order.
    pub fn lengths(&self) -> &[u64] {
        self.lengths
    }

    ///
    /// Iterate over `(index, label, length)` in table order.
    ///
    pub fn iter(&self) -> impl Iterator<Item = (usize, String, u64)> + '_ {
        self.lengths.iter().enumerate().map(|(i, &len)| {
            let index = i + 1;
            let label = if index == self.lengths.len() {
                X_LABEL.to_string()
            } else {
                index.to_string()
            };
            (index, label, len)
        })
    }
}
