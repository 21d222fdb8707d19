//! Error types shared by both codecs and the command line tools.

use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// The two compressors provided by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Codec {
    Huffman,
    Lzw,
}

impl Display for Codec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Codec::Huffman => write!(f, "huffman"),
            Codec::Lzw => write!(f, "lzw"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// Wrong argument count or unrecognized mode.
    #[error("usage error: {0}")]
    Usage(String),

    /// The input path could not be opened for reading.
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Structural violation found while decoding.
    #[error("corrupt {codec} stream: {message}")]
    CorruptStream { codec: Codec, message: String },

    /// Any other I/O failure (reading stdin, writing the output).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn corrupt(codec: Codec, message: impl Into<String>) -> Self {
        Error::CorruptStream {
            codec,
            message: message.into(),
        }
    }

    /// Process exit status for this error. Usage errors follow the clap convention.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Usage(_) => 2,
            _ => 1,
        }
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, Error::CorruptStream { .. })
    }
}
