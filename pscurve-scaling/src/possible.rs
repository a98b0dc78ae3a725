use rayon::prelude::*;

use pscurve_core::models::ChromosomeTable;

use crate::bins::BinEdges;

///
/// Number of coordinate pairs `(p, q)`, `1 <= p < q <= C`, whose separation
/// `s = q - p` satisfies `d1 < s < d2`.
///
/// Closed form: `(d2 - d1 - 1) * C - (d2 * (d2 - 1) - d1 * (d1 + 1)) / 2`,
/// which is the sum of `C - s` over the separations in range. `d2` is clamped
/// to `C` since no separation reaches `C`; the count is 0 when `d2 <= d1`.
///
/// # Arguments
/// - chrom_length: chromosome length `C`
/// - d1: exclusive lower separation bound
/// - d2: exclusive upper separation bound
pub fn possible_pairs(chrom_length: u64, d1: u64, d2: u64) -> u64 {
    let c = chrom_length as i128;
    let d1 = d1 as i128;
    let d2 = (d2 as i128).min(c);

    if d2 <= d1 {
        return 0;
    }

    let pairs = (d2 - d1 - 1) * c - (d2 * (d2 - 1) - d1 * (d1 + 1)) / 2;
    pairs as u64
}

///
/// Possible pairs of a single chromosome in every bin.
///
/// Bin `j` uses `d1 = floor(edge[j])` and `d2 = floor(edge[j + 1]) + 1`, so that
/// the integer separations counted are exactly those the binner assigns to
/// bin `j` (`edge[j] < s <= edge[j + 1]`).
///
pub fn possible_pairs_per_bin(chrom_length: u64, edges: &BinEdges) -> Vec<u64> {
    (0..edges.n_bins())
        .map(|bin| {
            let d1 = edges.left(bin).floor() as u64;
            let d2 = edges.right(bin).floor() as u64 + 1;
            possible_pairs(chrom_length, d1, d2)
        })
        .collect()
}

///
/// Genome-wide count of possible coordinate pairs per distance bin.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PossibleHistogram {
    counts: Vec<u64>,
}

impl PossibleHistogram {
    ///
    /// Sum the per-bin possible pairs over every chromosome of a table.
    ///
    /// Chromosomes are processed in parallel, each into its own accumulator;
    /// the partial histograms are merged by integer addition, so the result
    /// does not depend on thread scheduling.
    ///
    pub fn compute(table: &ChromosomeTable, edges: &BinEdges) -> Self {
        let n_bins = edges.n_bins();

        let counts = table
            .lengths()
            .par_iter()
            .map(|&chrom_length| possible_pairs_per_bin(chrom_length, edges))
            .reduce(
                || vec![0u64; n_bins],
                |mut acc, partial| {
                    acc.iter_mut().zip(partial).for_each(|(a, p)| *a += p);
                    acc
                },
            );

        PossibleHistogram { counts }
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn get(&self, bin: usize) -> Option<u64> {
        self.counts.get(bin).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

impl From<Vec<u64>> for PossibleHistogram {
    fn from(counts: Vec<u64>) -> Self {
        PossibleHistogram { counts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use pscurve_core::models::Assembly;
    use rstest::*;

    fn enumerate_pairs(c: u64, d1: u64, d2: u64) -> u64 {
        let mut n = 0;
        for p in 1..=c {
            for q in (p + 1)..=c {
                let s = q - p;
                if d1 < s && s < d2 {
                    n += 1;
                }
            }
        }
        n
    }

    #[rstest]
    fn test_small_chromosome_by_hand() {
        // separations 4 and 5 on a 10 bp chromosome: 6 + 5 pairs
        assert_eq!(possible_pairs(10, 3, 6), 11);
        assert_eq!(enumerate_pairs(10, 3, 6), 11);
    }

    #[rstest]
    fn test_closed_form_matches_enumeration() {
        for c in 1..25 {
            for d1 in 0..30 {
                for d2 in 0..30 {
                    assert_eq!(
                        possible_pairs(c, d1, d2),
                        enumerate_pairs(c, d1, d2),
                        "C={c} d1={d1} d2={d2}"
                    );
                }
            }
        }
    }

    #[rstest]
    #[case(100, 10, 10)]
    #[case(100, 50, 20)]
    #[case(100, 100, 150)]
    fn test_empty_range(#[case] c: u64, #[case] d1: u64, #[case] d2: u64) {
        assert_eq!(possible_pairs(c, d1, d2), 0);
    }

    #[rstest]
    fn test_upper_bound_beyond_chromosome_is_not_negative() {
        // only separations 8 and 9 remain on a 10 bp chromosome
        assert_eq!(possible_pairs(10, 7, 15), 3);
    }

    #[rstest]
    fn test_non_increasing_along_the_chromosome() {
        let c = 1_000;
        let width = 7;
        let counts: Vec<u64> = (0..c).map(|d1| possible_pairs(c, d1, d1 + width)).collect();
        assert!(counts.windows(2).all(|w| w[0] >= w[1]));
        assert!(counts.iter().all(|&n| n <= c * (c - 1) / 2));
    }

    #[rstest]
    #[case(1_000)]
    #[case(777)]
    #[case(10)]
    fn test_single_chromosome_total(#[case] c: u64) {
        let edges = BinEdges::new(1_000, 100).unwrap();
        let total: u64 = possible_pairs_per_bin(c, &edges).iter().sum();

        // every separation except 1, which sits on the first edge
        assert_eq!(total, c * (c - 1) / 2 - (c - 1));
    }

    #[rstest]
    fn test_genome_wide_histogram_sums_chromosomes() {
        let table = ChromosomeTable::from(Assembly::Mm10);
        let edges = BinEdges::for_table(&table, 1000).unwrap();
        let hist = PossibleHistogram::compute(&table, &edges);

        assert_eq!(hist.len(), 1000);

        let expected: u64 = table
            .lengths()
            .iter()
            .map(|&c| c * (c - 1) / 2 - (c - 1))
            .sum();
        assert_eq!(hist.total(), expected);
    }

    #[rstest]
    fn test_compute_is_deterministic() {
        let table = ChromosomeTable::from(Assembly::Hg19);
        let edges = BinEdges::for_table(&table, 1000).unwrap();
        assert_eq!(
            PossibleHistogram::compute(&table, &edges),
            PossibleHistogram::compute(&table, &edges)
        );
    }
}
