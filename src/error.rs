//! Error taxonomy shared by the sort engine, the parser and the I/O boundary.

use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by this crate.
pub enum Error {
    /// A selector produced a key above the declared histogram maximum.
    #[error("key {value} exceeds declared maximum {max}")]
    InvalidKeyRange { value: u32, max: u32 },
    /// Grammar violation at byte offset `pos`.
    #[error("malformed input at byte {pos}: {reason}")]
    MalformedInput { pos: usize, reason: &'static str },
    /// A field parsed, but its value lies outside the field's range.
    #[error("{field} out of range: {value}")]
    OutOfRangeField { field: &'static str, value: u32 },
    /// A runtime precondition of a public operation does not hold.
    #[error("precondition violated: {0}")]
    PreconditionViolated(String),
    /// I/O error at the ingestion or output boundary.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn malformed(pos: usize, reason: &'static str) -> Self {
        Error::MalformedInput { pos, reason }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
