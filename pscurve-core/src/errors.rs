use thiserror::Error;

#[derive(Error, Debug)]
pub enum PscurveError {
    #[error("Unknown chromosome: {0}")]
    UnknownChromosome(String),

    #[error("Unknown genome assembly: {0}. Expected one of: hg19, mm10")]
    UnknownAssembly(String),

    #[error("Malformed contact record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PscurveError>;
