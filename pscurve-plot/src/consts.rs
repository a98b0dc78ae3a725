pub const FIGURE_SUFFIX: &str = "_genome_wide_cp.svg";
pub const IOLR_FIGURE_SUFFIX: &str = "_iolr_genome_wide_cp.svg";

pub const FIGURE_SIZE: (u32, u32) = (1024, 768);

// y axis of the orientation figure
pub const IOLR_Y_RANGE: (f64, f64) = (1e-9, 1e-2);

/// Fallback y axis when the data has no positive probability to anchor on.
pub const DEFAULT_Y_RANGE: (f64, f64) = (1e-12, 1.0);

pub const X_DESC: &str = "Distance(bp)";
pub const Y_DESC: &str = "Contact Probability";
