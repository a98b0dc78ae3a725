pub const DEFAULT_N_BINS: usize = 1000;
pub const DEFAULT_CHROM_PREFIX: &str = "chr";
pub const DEFAULT_EXCLUDED_CHROMOSOMES: [&str; 3] = ["M", "MT", "Y"];

// scaling regimes fitted by default, in bp
pub const DEFAULT_FIT_WINDOWS: [(f64, f64); 2] = [(30_000.0, 300_000.0), (300_000.0, 3_000_000.0)];
pub const DEFAULT_PLOT_RANGE: (f64, f64) = (100.0, 100_000_000.0);

/// Offset added in log space to fitted lines so they sit above the data when drawn.
pub const DEFAULT_FIT_OFFSET: f64 = 0.5;

pub const PROGRESS_UPDATE_INTERVAL: u64 = 10_000;
