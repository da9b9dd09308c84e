//! Error types that can be emitted from this library
//!

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent wrapper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// unable to find requested file
    #[error("unable to find {0}")]
    FileNotFound(PathBuf),

    /// read past the end of the table
    #[error("read past the end of the table at offset {offset:#X}")]
    OutOfBounds {
        /// Offset at which the read started
        offset: usize,
    },

    /// table holds a different number of strings than it declares
    #[error("table declares {declared} entries but holds {found}")]
    CountMismatch {
        /// Count stored in the header
        declared: usize,
        /// Number of terminated strings found
        found: usize,
    },

    /// string data is not valid Shift-JIS
    #[error("invalid text at offset {offset:#X}")]
    InvalidText {
        /// Offset of the offending character
        offset: usize,
        /// Underlying text error
        #[source]
        source: eo_text::error::Error,
    },

    /// entry cannot be stored as Shift-JIS
    #[error("entry {index} cannot be encoded")]
    Unencodable {
        /// Index of the offending entry
        index: usize,
        /// Underlying text error
        #[source]
        source: eo_text::error::Error,
    },

    /// too many entries for the pointer width
    #[error("{0} entries do not fit in the entry count")]
    TooManyEntries(usize),

    /// string offset too large for the pointer width
    #[error("offset {offset:#X} does not fit in a {width}-byte pointer")]
    PointerOverflow {
        /// Offset that was to be written
        offset: u64,
        /// Pointer width in bytes
        width: usize,
    },

    /// index is outside of the table
    #[error("index {index} is out of range for a table of {len} entries")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of entries in the table
        len: usize,
    },
}

impl Error {
    pub(crate) fn from_io(error: std::io::Error, path: &std::path::Path) -> Error {
        match error.kind() {
            std::io::ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
            _ => Error::IOError(error),
        }
    }
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
