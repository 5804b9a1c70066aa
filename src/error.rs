//! Error type for stream ingestion and document access.

use std::io;

/// Error type for YAML stream operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// I/O error while reading a source
    Io(String),
    /// Malformed YAML met while ingesting a stream
    Parse(String),
    /// Document shape incompatible with the requested destination
    Decode(String),
    /// Index outside of `[0, count)`
    Index { index: usize, count: usize },
}

impl Error {
    /// Highest valid index for a stream of `count` documents, if any.
    pub fn max_index(count: usize) -> Option<usize> {
        count.checked_sub(1)
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::Io(e) | Error::Parse(e) | Error::Decode(e) => write!(f, "{}", e),
            Error::Index { index, count } => match Error::max_index(*count) {
                Some(max) => write!(
                    f,
                    "{} is not a valid index for the YAML stream. Max index is {}",
                    index, max
                ),
                None => write!(
                    f,
                    "{} is not a valid index for the YAML stream. Stream is empty",
                    index
                ),
            },
        }
    }
}
