use std::collections::HashSet;
use std::fmt::{self, Display};
use std::io::BufRead;

use indicatif::ProgressBar;
use log::debug;
use serde::Serialize;

use pscurve_core::models::{ChromosomeTable, ContactRecord, Orientation, StrandTokens};

use crate::bins::BinEdges;
use crate::consts::PROGRESS_UPDATE_INTERVAL;
use crate::errors::{Result, ScalingError};

///
/// The observed histograms kept for one run: all contacts, and one per
/// orientation class.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HistogramKind {
    All,
    Inner,
    Outer,
    Left,
    Right,
}

impl HistogramKind {
    pub const ALL: [HistogramKind; 5] = [
        HistogramKind::All,
        HistogramKind::Inner,
        HistogramKind::Outer,
        HistogramKind::Left,
        HistogramKind::Right,
    ];

    pub fn index(&self) -> usize {
        match self {
            HistogramKind::All => 0,
            HistogramKind::Inner => 1,
            HistogramKind::Outer => 2,
            HistogramKind::Left => 3,
            HistogramKind::Right => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            HistogramKind::All => "all",
            HistogramKind::Inner => "inner",
            HistogramKind::Outer => "outer",
            HistogramKind::Left => "left",
            HistogramKind::Right => "right",
        }
    }
}

impl From<Orientation> for HistogramKind {
    fn from(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Inner => HistogramKind::Inner,
            Orientation::Outer => HistogramKind::Outer,
            Orientation::Left => HistogramKind::Left,
            Orientation::Right => HistogramKind::Right,
        }
    }
}

impl Display for HistogramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

///
/// Observed contact counts per distance bin, one array per [`HistogramKind`].
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedHistograms {
    counts: [Vec<u64>; 5],
}

impl ObservedHistograms {
    pub fn new(n_bins: usize) -> Self {
        ObservedHistograms {
            counts: std::array::from_fn(|_| vec![0u64; n_bins]),
        }
    }

    pub fn n_bins(&self) -> usize {
        self.counts[0].len()
    }

    pub fn get(&self, kind: HistogramKind) -> &[u64] {
        &self.counts[kind.index()]
    }

    ///
    /// Count one contact in the aggregate histogram and in its orientation's.
    ///
    pub fn increment(&mut self, bin: usize, orientation: Orientation) {
        self.counts[HistogramKind::All.index()][bin] += 1;
        self.counts[HistogramKind::from(orientation).index()][bin] += 1;
    }

    pub fn total(&self, kind: HistogramKind) -> u64 {
        self.get(kind).iter().sum()
    }
}

///
/// Bookkeeping of one pass over the input.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReadSummary {
    /// Records parsed
    pub records: u64,
    /// Inter-chromosomal records and records on excluded chromosomes
    pub filtered: u64,
    /// Records whose two ends share a position
    pub degenerate: u64,
    /// Records closer than the first bin edge
    pub below_first_bin: u64,
    /// Records counted in the histograms
    pub counted: u64,
}

impl Display for ReadSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records: {} counted, {} filtered, {} degenerate, {} below the first bin",
            self.records, self.counted, self.filtered, self.degenerate, self.below_first_bin
        )
    }
}

///
/// Accumulates contact records into observed histograms.
///
/// Only intra-chromosomal records on non-excluded chromosomes are counted.
/// Their chromosome must resolve in the table, otherwise the run fails.
///
pub struct ContactAggregator<'a> {
    table: &'a ChromosomeTable,
    edges: &'a BinEdges,
    excluded: HashSet<String>,
    histograms: ObservedHistograms,
    summary: ReadSummary,
}

impl<'a> ContactAggregator<'a> {
    pub fn new(table: &'a ChromosomeTable, edges: &'a BinEdges, excluded: &[String]) -> Self {
        ContactAggregator {
            table,
            edges,
            excluded: excluded.iter().cloned().collect(),
            histograms: ObservedHistograms::new(edges.n_bins()),
            summary: ReadSummary::default(),
        }
    }

    ///
    /// Add one record.
    ///
    /// # Arguments
    /// - record: the parsed contact
    /// - line_no: 1-based input line, used in error messages
    pub fn add(&mut self, record: &ContactRecord, line_no: usize) -> Result<()> {
        self.summary.records += 1;

        if !record.is_intra_chromosomal() || self.excluded.contains(&record.chr1) {
            self.summary.filtered += 1;
            return Ok(());
        }

        self.table.resolve(&record.chr1)?;

        let distance = record.distance();
        if distance == 0 {
            self.summary.degenerate += 1;
            return Ok(());
        }

        if distance as f64 > self.edges.last() {
            return Err(ScalingError::DistanceOutOfRange {
                line: line_no,
                distance,
                max: self.edges.last(),
            });
        }

        match self.edges.locate(distance) {
            Some(bin) => {
                self.histograms.increment(bin, record.orientation());
                self.summary.counted += 1;
            }
            None => {
                debug!("Line {}: distance {} is below the first bin", line_no, distance);
                self.summary.below_first_bin += 1;
            }
        }

        Ok(())
    }

    pub fn summary(&self) -> &ReadSummary {
        &self.summary
    }

    pub fn finish(self) -> (ObservedHistograms, ReadSummary) {
        (self.histograms, self.summary)
    }
}

///
/// Aggregate every contact line of a reader in a single linear pass.
///
/// Blank lines are skipped. Any malformed line, unknown chromosome or
/// out-of-range distance aborts the pass and discards what was accumulated.
///
/// # Arguments
/// - reader: line-oriented contact input
/// - table: chromosome table of the assembly
/// - edges: distance bins
/// - tokens: strand token convention
/// - chrom_prefix: prefix stripped from chromosome labels
/// - excluded: bare chromosome labels to drop (e.g. `M`, `MT`, `Y`)
/// - progress: optional spinner to tick while reading
pub fn aggregate_contacts<R: BufRead>(
    reader: R,
    table: &ChromosomeTable,
    edges: &BinEdges,
    tokens: &StrandTokens,
    chrom_prefix: &str,
    excluded: &[String],
    progress: Option<&ProgressBar>,
) -> Result<(ObservedHistograms, ReadSummary)> {
    let mut aggregator = ContactAggregator::new(table, edges, excluded);

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;

        if line.trim().is_empty() {
            continue;
        }

        let record = ContactRecord::parse_line(&line, line_no, tokens, chrom_prefix)?;
        aggregator.add(&record, line_no)?;

        if let Some(spinner) = progress {
            let processed = aggregator.summary().records;
            if processed % PROGRESS_UPDATE_INTERVAL == 0 {
                spinner.set_message(format!("Processed {} contacts", processed));
            }
            spinner.inc(1);
        }
    }

    Ok(aggregator.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use pscurve_core::PscurveError;
    use pscurve_core::models::Assembly;
    use rstest::*;

    struct Setup {
        table: ChromosomeTable,
        edges: BinEdges,
    }

    #[fixture]
    fn mm10() -> Setup {
        let table = ChromosomeTable::from(Assembly::Mm10);
        let edges = BinEdges::for_table(&table, 1000).unwrap();
        Setup { table, edges }
    }

    fn excluded() -> Vec<String> {
        vec!["M".to_string(), "MT".to_string(), "Y".to_string()]
    }

    fn run(setup: &Setup, input: &str) -> Result<(ObservedHistograms, ReadSummary)> {
        aggregate_contacts(
            input.as_bytes(),
            &setup.table,
            &setup.edges,
            &StrandTokens::default(),
            "chr",
            &excluded(),
            None,
        )
    }

    #[rstest]
    fn test_forward_forward_pair_is_right(mm10: Setup) {
        let (hist, summary) = run(&mm10, "0 chr1 1000 0 chr1 5000\n").unwrap();
        let bin = mm10.edges.locate(4000).unwrap();

        assert_eq!(hist.get(HistogramKind::All)[bin], 1);
        assert_eq!(hist.get(HistogramKind::Right)[bin], 1);
        for kind in [HistogramKind::Inner, HistogramKind::Outer, HistogramKind::Left] {
            assert_eq!(hist.total(kind), 0);
        }
        assert_eq!(hist.total(HistogramKind::All), 1);
        assert_eq!(summary.counted, 1);
    }

    #[rstest]
    fn test_swapped_positions_use_swapped_strands(mm10: Setup) {
        // upstream end is reverse, downstream end is forward once ordered
        let (hist, _) = run(&mm10, "0 chr2 5000 16 chr2 1000\n").unwrap();
        assert_eq!(hist.total(HistogramKind::Outer), 1);
        assert_eq!(hist.total(HistogramKind::Inner), 0);
    }

    #[rstest]
    #[case("0 chrY 1000 0 chrY 5000\n")]
    #[case("0 chrM 1000 16 chrM 5000\n")]
    #[case("0 MT 1000 16 MT 5000\n")]
    #[case("0 chr1 1000 16 chr2 5000\n")]
    fn test_filtered_records_count_nowhere(mm10: Setup, #[case] input: &str) {
        let (hist, summary) = run(&mm10, input).unwrap();
        for kind in HistogramKind::ALL {
            assert_eq!(hist.total(kind), 0);
        }
        assert_eq!(summary.filtered, 1);
    }

    #[rstest]
    fn test_y_is_filtered_for_hg19() {
        let table = ChromosomeTable::from(Assembly::Hg19);
        let edges = BinEdges::for_table(&table, 1000).unwrap();
        let setup = Setup { table, edges };

        let (hist, summary) = run(&setup, "16 chrY 10 0 chrY 900000\n").unwrap();
        assert_eq!(hist.total(HistogramKind::All), 0);
        assert_eq!(summary.filtered, 1);
    }

    #[rstest]
    fn test_same_position_counts_nowhere(mm10: Setup) {
        let (hist, summary) = run(&mm10, "0 chr3 7000 16 chr3 7000\n").unwrap();
        for kind in HistogramKind::ALL {
            assert_eq!(hist.total(kind), 0);
        }
        assert_eq!(summary.degenerate, 1);
        assert_eq!(summary.counted, 0);
    }

    #[rstest]
    fn test_adjacent_positions_are_below_first_bin(mm10: Setup) {
        let (hist, summary) = run(&mm10, "0 chr3 7000 16 chr3 7001\n").unwrap();
        assert_eq!(hist.total(HistogramKind::All), 0);
        assert_eq!(summary.below_first_bin, 1);
    }

    #[rstest]
    fn test_unknown_chromosome_is_fatal(mm10: Setup) {
        let result = run(&mm10, "0 chr1 10 0 chr1 500\n0 chrUn 10 0 chrUn 500\n");
        assert!(matches!(
            result,
            Err(ScalingError::Core(PscurveError::UnknownChromosome(_)))
        ));
    }

    #[rstest]
    fn test_unknown_strand_is_fatal(mm10: Setup) {
        let result = run(&mm10, "0 chr1 10 0 chr1 500\n0 chr1 10 2048 chr1 500\n");
        assert!(matches!(
            result,
            Err(ScalingError::Core(PscurveError::MalformedRecord { line: 2, .. }))
        ));
    }

    #[rstest]
    fn test_short_line_is_fatal(mm10: Setup) {
        let result = run(&mm10, "0 chr1 10 0 chr1\n");
        assert!(matches!(
            result,
            Err(ScalingError::Core(PscurveError::MalformedRecord { line: 1, .. }))
        ));
    }

    #[rstest]
    fn test_distance_beyond_last_edge_is_fatal(mm10: Setup) {
        let result = run(&mm10, "0 chr1 1 0 chr1 400000000\n");
        assert!(matches!(
            result,
            Err(ScalingError::DistanceOutOfRange { line: 1, .. })
        ));
    }

    #[rstest]
    fn test_blank_lines_are_skipped(mm10: Setup) {
        let (_, summary) = run(&mm10, "\n0 chr1 1000 0 chr1 5000\n\n").unwrap();
        assert_eq!(summary.records, 1);
    }

    #[rstest]
    fn test_orientations_partition_the_aggregate(mm10: Setup) {
        let input = "\
0 chr1 1000 0 chr1 5000
16 chr1 1000 16 chr1 9000
0 chr2 100 16 chr2 250000
16 chr2 100 0 chr2 250000
16 chrX 88000 0 chrX 100
0 chr19 5 0 chr19 50
0 chr7 1000 16 chr7 1000
";
        let (hist, summary) = run(&mm10, input).unwrap();
        assert_eq!(summary.counted, 6);

        for bin in 0..hist.n_bins() {
            let split: u64 = [
                HistogramKind::Inner,
                HistogramKind::Outer,
                HistogramKind::Left,
                HistogramKind::Right,
            ]
            .iter()
            .map(|&kind| hist.get(kind)[bin])
            .sum();
            assert_eq!(split, hist.get(HistogramKind::All)[bin]);
        }
    }
}
