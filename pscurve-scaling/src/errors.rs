use pscurve_core::PscurveError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScalingError {
    #[error(
        "Distance {distance} at line {line} exceeds the largest bin edge ({max}). Does the input match the genome assembly?"
    )]
    DistanceOutOfRange { line: usize, distance: u64, max: f64 },

    #[error("Invalid binning: {0}")]
    InvalidBinning(String),

    #[error("Only {found} usable bins in fit window [{left}, {right}]; at least 2 are required")]
    InsufficientFitPoints { left: f64, right: f64, found: usize },

    #[error("Histogram has {found} bins but the bin edges define {expected}")]
    BinCountMismatch { expected: usize, found: usize },

    #[error(transparent)]
    Core(#[from] PscurveError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ScalingError>;
