//! Core data model for pscurve.
//!
//! This crate holds the pieces every other pscurve crate builds on:
//!
//! - The genome registry: built-in chromosome-length tables for the supported
//!   assemblies, with chromosome label resolution (numeric ids and `X`)
//! - Contact records: one intra- or inter-chromosomal read pair, with strand
//!   parsing and orientation classification
//! - Reader helpers for plain, gzipped and stdin inputs
//!
//! # Example
//!
//! ```rust
//! use pscurve_core::models::{Assembly, ChromosomeTable};
//!
//! let table = ChromosomeTable::from(Assembly::Mm10);
//! assert_eq!(table.length("1").unwrap(), 195_471_971);
//! assert_eq!(table.resolve("X").unwrap(), 20);
//! ```
pub mod errors;
pub mod models;
pub mod utils;

// re-exports
pub use errors::{PscurveError, Result};
