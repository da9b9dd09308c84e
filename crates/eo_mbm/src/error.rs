//! Error types that can be emitted from this library

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent wrapper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Transparent wrapper for [`binrw::Error`]
    #[error(transparent)]
    BinRWError(#[from] binrw::Error),

    /// file is not a message archive
    #[error("file is not a MSG2 message archive")]
    InvalidArchive,

    /// unable to find requested file
    #[error("unable to find {0}")]
    FileNotFound(PathBuf),

    /// read past the end of the archive
    #[error("read past the end of the archive at offset {offset:#X}")]
    OutOfBounds {
        /// Offset at which the read started
        offset: usize,
    },

    /// voice clip path is not followed by a second null byte
    #[error("voice clip path at offset {offset:#X} is missing its second null byte")]
    InvalidVoiceTerminator {
        /// Offset of the byte that should have been null
        offset: usize,
    },

    /// token does not name a control code and is not a byte pair
    #[error("entry {index} contains unknown token [{token}]")]
    UnknownToken {
        /// Index of the offending entry
        index: usize,
        /// Token text without brackets
        token: String,
    },

    /// character cannot be stored as a double-byte character
    #[error("entry {index} contains {character:?}, which has no double-byte form")]
    UnencodableCharacter {
        /// Index of the offending entry
        index: usize,
        /// Offending character
        character: char,
    },

    /// voice clip path has no `[00 00]` marker
    #[error("entry {index} has a voice clip path without a [00 00] terminator")]
    UnterminatedVoicePath {
        /// Index of the offending entry
        index: usize,
    },

    /// voice clip path contains a character that is not a single byte
    #[error("entry {index} has {character:?} in a voice clip path")]
    InvalidVoicePath {
        /// Index of the offending entry
        index: usize,
        /// Offending character
        character: char,
    },

    /// archive is too large for 32-bit offsets
    #[error("archive exceeds the 32-bit offset range")]
    TooLarge,

    /// index is outside of the archive
    #[error("index {index} is out of range for an archive of {len} entries")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of entries in the archive
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
