//! Error type shared by the digest pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A required command line option was not given.
    #[error("Please specify {0}")]
    MissingArgument(&'static str),

    /// The enzyme name is not in the table. Names are case sensitive.
    #[error("No restriction enzyme \"{0}\" found!")]
    UnknownEnzyme(String),

    #[error("FASTA file {} not found", .0.display())]
    FastaNotFound(PathBuf),

    #[error("{} is FASTQ, expected FASTA", .0.display())]
    NotFasta(PathBuf),

    #[error("failed to parse FASTA: {0}")]
    Parse(#[from] needletail::errors::ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no cut sites in record {0}")]
    NoCutSites(String),

    #[error("cut position {position} outside record {contig} of length {len}")]
    CutOutOfRange {
        contig: String,
        position: usize,
        len: usize,
    },
}

impl Error {
    /// Errors caused by how the tool was invoked. These are reported together with
    /// the usage line, before any output is written.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Error::MissingArgument(_)
                | Error::UnknownEnzyme(_)
                | Error::FastaNotFound(_)
                | Error::NotFasta(_)
        )
    }
}
