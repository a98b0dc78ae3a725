//! Log-log SVG plots of contact probability curves.
//!
//! Two figures are drawn per run: the aggregate curve with its fitted power
//! laws, and the four orientation curves side by side.
pub mod consts;
pub mod errors;
pub mod plot;

// re-exports
pub use errors::PlotError;
pub use plot::{plot_contact_probability, plot_orientations};
