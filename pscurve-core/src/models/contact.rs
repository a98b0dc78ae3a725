use std::fmt::{self, Display};

use crate::errors::{PscurveError, Result};
use crate::utils::strip_chrom_prefix;

/// Minimum number of whitespace separated fields in a contact line.
pub const MIN_CONTACT_FIELDS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strand {
    Forward,
    Reverse,
}

///
/// Tokens that encode forward and reverse strands in the input.
///
/// The defaults follow the SAM flag convention used by juicer's
/// `merged_nodups` files: `0` for forward and `16` for reverse.
///
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrandTokens {
    pub forward: String,
    pub reverse: String,
}

impl Default for StrandTokens {
    fn default() -> Self {
        StrandTokens {
            forward: "0".to_string(),
            reverse: "16".to_string(),
        }
    }
}

impl StrandTokens {
    pub fn parse(&self, token: &str) -> Option<Strand> {
        if token == self.forward {
            Some(Strand::Forward)
        } else if token == self.reverse {
            Some(Strand::Reverse)
        } else {
            None
        }
    }
}

///
/// Read-pair orientation, derived from the strands once the pair is ordered
/// by position.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Inner,
    Outer,
    Left,
    Right,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Inner,
        Orientation::Outer,
        Orientation::Left,
        Orientation::Right,
    ];

    ///
    /// Classify a strand pair where `upstream` belongs to the smaller position.
    ///
    pub fn from_strands(upstream: Strand, downstream: Strand) -> Self {
        match (upstream, downstream) {
            (Strand::Forward, Strand::Forward) => Orientation::Right,
            (Strand::Reverse, Strand::Reverse) => Orientation::Left,
            (Strand::Forward, Strand::Reverse) => Orientation::Inner,
            (Strand::Reverse, Strand::Forward) => Orientation::Outer,
        }
    }

    /// Position of this class in [`Orientation::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Orientation::Inner => 0,
            Orientation::Outer => 1,
            Orientation::Left => 2,
            Orientation::Right => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Orientation::Inner => "inner",
            Orientation::Outer => "outer",
            Orientation::Left => "left",
            Orientation::Right => "right",
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

///
/// One contact: a pair of genomic loci found in proximity.
///
/// Chromosome labels are stored without their conventional prefix.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    pub strand1: Strand,
    pub chr1: String,
    pub pos1: u64,
    pub strand2: Strand,
    pub chr2: String,
    pub pos2: u64,
}

impl ContactRecord {
    ///
    /// Parse a whitespace separated contact line.
    ///
    /// Expected fields: `strand1 chr1 pos1 strand2 chr2 pos2`; anything after
    /// the sixth field is ignored.
    ///
    /// # Arguments
    /// - line: the raw line
    /// - line_no: 1-based line number, used in error messages
    /// - tokens: strand token convention of the input
    /// - prefix: chromosome prefix to strip from both labels (e.g. `chr`)
    pub fn parse_line(
        line: &str,
        line_no: usize,
        tokens: &StrandTokens,
        prefix: &str,
    ) -> Result<Self> {
        let fields: Vec<&str> = line.split_whitespace().take(MIN_CONTACT_FIELDS).collect();

        if fields.len() < MIN_CONTACT_FIELDS {
            return Err(PscurveError::MalformedRecord {
                line: line_no,
                reason: format!(
                    "expected at least {} fields, found {}",
                    MIN_CONTACT_FIELDS,
                    fields.len()
                ),
            });
        }

        let strand = |token: &str| {
            tokens.parse(token).ok_or_else(|| PscurveError::MalformedRecord {
                line: line_no,
                reason: format!(
                    "unrecognized strand '{}' (expected '{}' or '{}')",
                    token, tokens.forward, tokens.reverse
                ),
            })
        };

        let position = |token: &str| {
            token
                .parse::<u64>()
                .map_err(|_| PscurveError::MalformedRecord {
                    line: line_no,
                    reason: format!("invalid position '{}'", token),
                })
        };

        Ok(ContactRecord {
            strand1: strand(fields[0])?,
            chr1: strip_chrom_prefix(fields[1], prefix).to_string(),
            pos1: position(fields[2])?,
            strand2: strand(fields[3])?,
            chr2: strip_chrom_prefix(fields[4], prefix).to_string(),
            pos2: position(fields[5])?,
        })
    }

    pub fn is_intra_chromosomal(&self) -> bool {
        self.chr1 == self.chr2
    }

    /// Genomic separation `|pos2 - pos1|`.
    pub fn distance(&self) -> u64 {
        self.pos1.abs_diff(self.pos2)
    }

    ///
    /// Return `(upstream_strand, upstream_pos, downstream_strand, downstream_pos)`,
    /// swapping the two ends when `pos2 < pos1`.
    ///
    pub fn ordered(&self) -> (Strand, u64, Strand, u64) {
        if self.pos2 < self.pos1 {
            (self.strand2, self.pos2, self.strand1, self.pos1)
        } else {
            (self.strand1, self.pos1, self.strand2, self.pos2)
        }
    }

    pub fn orientation(&self) -> Orientation {
        let (upstream, _, downstream, _) = self.ordered();
        Orientation::from_strands(upstream, downstream)
    }
}
