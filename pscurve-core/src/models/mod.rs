pub mod contact;
pub mod genome;

// re-export for cleaner imports
pub use self::contact::{ContactRecord, Orientation, Strand, StrandTokens};
pub use self::genome::{Assembly, ChromosomeTable};
