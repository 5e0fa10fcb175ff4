use std::fmt;

use crate::sink::SinkError;

/// Errors that can occur when building or rendering a page chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A constructor was handed an out-of-contract argument.
    InvalidArgument(String),
    /// Rendering failed because the sink rejected a line.
    Sink(SinkError),
}

impl Error {
    /// Creates an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            Error::Sink(e) => write!(f, "render failed: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidArgument(_) => None,
            Error::Sink(e) => Some(e),
        }
    }
}

impl From<SinkError> for Error {
    fn from(e: SinkError) -> Self {
        Error::Sink(e)
    }
}
