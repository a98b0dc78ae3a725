//! Contact probability as a function of genomic distance.
//!
//! Given intra-chromosomal contact pairs (e.g. Hi-C read pairs), this crate
//! builds the classic P(s) curve:
//!
//! - Distances are binned on a logarithmic axis spanning 1 bp to the longest
//!   chromosome ([`BinEdges`])
//! - Observed contacts are counted per bin, in aggregate and per read-pair
//!   orientation ([`ContactAggregator`])
//! - The number of coordinate pairs that *could* fall in each bin is computed
//!   in closed form for every chromosome ([`PossibleHistogram`])
//! - Observed counts are divided by possible counts ([`normalize`]) and power
//!   laws are fitted over distance windows ([`fit_power_law`])
//!
//! # Example
//!
//! ```no_run
//! use pscurve_core::models::Assembly;
//! use pscurve_scaling::{ScalingConfig, contact_probability_from_file};
//!
//! let config = ScalingConfig::default();
//! let result = contact_probability_from_file("contacts.txt.gz", Assembly::Mm10, &config).unwrap();
//!
//! for bin in result.aggregate().iter().take(5) {
//!     println!("{} {}", bin.left_edge, bin.probability);
//! }
//! ```
pub mod bins;
pub mod config;
pub mod consts;
pub mod errors;
pub mod fit;
pub mod normalize;
pub mod observed;
pub mod pipeline;
pub mod possible;

// re-exports
pub use bins::BinEdges;
pub use config::{DistanceWindow, ScalingConfig};
pub use errors::ScalingError;
pub use fit::{PowerLawFit, fit_power_law};
pub use normalize::{ProbabilityBin, ProbabilityTable, normalize};
pub use observed::{ContactAggregator, HistogramKind, ObservedHistograms, ReadSummary};
pub use pipeline::{ContactProbability, contact_probability, contact_probability_from_file};
pub use possible::{PossibleHistogram, possible_pairs};
