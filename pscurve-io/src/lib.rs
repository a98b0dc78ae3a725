//! # Output utilities for contact probability runs.
//!
//! Writers for the per-bin tables a run produces (plain text or gzip) and for
//! the JSON summary of the power-law fits.
//!
pub mod consts;
pub mod error;
pub mod report;
pub mod summary;

// re-expose core functions
pub use consts::*;
pub use error::*;
pub use report::*;
pub use summary::*;
