//! Error types that can be emitted from this library

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// character has no Shift-JIS representation
    #[error("character {0:?} has no Shift-JIS representation")]
    UnmappableCharacter(char),

    /// bytes are not a single valid Shift-JIS character
    #[error("bytes {0:02X?} are not a single valid Shift-JIS character")]
    InvalidSequence(Vec<u8>),
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
