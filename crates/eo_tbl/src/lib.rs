//! # TBL Format Documentation
//!
//! This crate provides utilities to read and create the **TBL** string tables used by the
//! *Etrian Odyssey* series for short lists of text such as skill, item and class names. TBL
//! files are typically identified with the `.tbl` extension.
//!
//! ## File Structure
//!
//! A TBL file consists of an entry count, a pointer array, and the string data.
//!
//! | Offset (bytes)      | Field          | Description                                          |
//! |---------------------|----------------|------------------------------------------------------|
//! | 0x0000              | Entry Count    | 2 or 4 bytes: Number of strings in the table         |
//! | 0x0002 / 0x0004     | Pointers       | Count × (2 or 4) bytes: End offset of each string    |
//! | after pointers      | String Data    | Null-terminated Shift-JIS strings                    |
//!
//! ### Pointer Width
//!
//! Tables come in two variants which differ only in the width of the count and of each
//! pointer. Nothing in the file identifies the variant, so the caller chooses it with
//! [`PointerWidth`].
//!
//! ### Pointers
//!
//! The first string always starts at offset 0 of the string data, so no pointer is stored for
//! it. Each stored pointer is the start of the following string, which is the previous
//! pointer plus the byte length of the previous string plus one for its terminator. The last
//! pointer is a sentinel pointing past the final string.
//!
//! The pointers are redundant with the terminators and are not consulted when reading.
//!
//! ### String Data
//!
//! Strings are stored as Shift-JIS with Latin letters, digits and common punctuation in their
//! fullwidth forms. Each string ends with a single `0x00` byte. Strings are exposed in their
//! halfwidth form, see [`eo_text::fold`].
//!
//! ## Additional Information
//!
//! - **File Extension**: `.tbl`
//! - **Endianness**: Little-endian for all multi-byte integers
//!

pub mod error;
pub mod read;
pub mod types;
pub mod write;

pub use types::{PointerWidth, Table};
