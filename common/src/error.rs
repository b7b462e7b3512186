//! Error types for cidrex-common.
//!
//! [`ParseError`] is recoverable and scoped to a single input line.
//! [`Error`] is fatal and ends the run.

use std::io;

use crate::network::family::Family;

/// Result type alias for stream operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a line is neither an address nor a CIDR range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty line")]
    Empty,

    #[error("invalid address '{0}'")]
    InvalidAddress(String),

    #[error("invalid prefix length '{0}'")]
    InvalidPrefix(String),

    #[error("prefix length /{prefix} exceeds {} bits for {family}", .family.bits())]
    PrefixOutOfRange { prefix: u8, family: Family },
}

/// Fatal I/O failures while streaming.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input could not be read any further.
    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),

    /// The output sink rejected a write or flush.
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}

impl Error {
    /// True when the reader on the other end of the output pipe went away.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Error::Write(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}
