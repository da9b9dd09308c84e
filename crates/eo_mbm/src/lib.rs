//! This library handles reading from and creating **MBM** message archives used by *Etrian Odyssey*.
//!
//! # MBM Format Documentation
//!
//! MBM files hold the dialogue and descriptive text of the games. Unlike TBL tables their strings
//! carry control codes for line breaks, speaker names, voice clips and similar. MBM files are
//! typically identified with the `.mbm` extension.
//!
//! ## File Structure
//!
//! An MBM file consists of a header, an entry table of descriptors, and the string data.
//!
//! | Offset (bytes) | Field              | Description                                              |
//! |----------------|--------------------|----------------------------------------------------------|
//! | 0x0000         | Zero               | 4 bytes: Always 0                                        |
//! | 0x0004         | Magic number       | 4 bytes: "MSG2"                                          |
//! | 0x0008         | Version            | 4 bytes: Fixed value 0x00010000                          |
//! | 0x000C         | File Size          | 4 bytes: Size of the file in bytes, see below            |
//! | 0x0010         | Entry Count        | 4 bytes: Number of entries, often inaccurate             |
//! | 0x0014         | Entry Table Offset | 4 bytes: Offset to the first descriptor, always 0x20     |
//! | 0x0018         | Reserved           | 8 bytes: Always 0                                        |
//!
//! Most files store their total size. Some leave the descriptors of entries without text out
//! of the size. The convention is detected when reading and kept for writing.
//!
//! ### Entry Table
//!
//! Each entry is described by a 16 byte descriptor:
//!
//! | Offset (bytes) | Field    | Description                                                  |
//! |----------------|----------|--------------------------------------------------------------|
//! | 0x0000         | Index    | 4 bytes: Signed index of the entry                           |
//! | 0x0004         | Length   | 4 bytes: Length of the string data including its terminator  |
//! | 0x0008         | Offset   | 4 bytes: Offset of the string data from the start of file    |
//! | 0x000C         | Reserved | 4 bytes: Always 0                                            |
//!
//! Entries without text have a length and offset of 0.
//!
//! Since the entry count in the header cannot be trusted, the end of the entry table is found
//! from the data itself: descriptors are read until the offset of the first string is reached.
//!
//! ### Indices
//!
//! Games disagree on what index an entry without text carries. Some store 0 and number only the
//! entries with text, others number every entry by its position. The convention is detected
//! when reading and kept for writing, see [`MessageArchive::continuous_indices`].
//!
//! ### String Data
//!
//! Strings are a sequence of 2 byte units terminated by `FF FF`. A unit whose first byte is a
//! Shift-JIS lead byte is a character. Any other unit is a control code, which may be followed
//! by operand units. See [`control`] for the known codes.
//!
//! Decoded text renders characters in their halfwidth form (see [`eo_text::fold`]) and control
//! codes as bracketed tokens:
//!
//! - `[Alias]` for known control codes, e.g. `[LineBreak]`
//! - `[XX YY]` for other control codes, operands and units that are not valid characters
//!
//! The voice code `[Voice]` is followed by a null-terminated ASCII path and a second null
//! byte, rendered as `[Voice]path/to/clip[00 00]`.
//!
//! ## Additional Information
//!
//! - **File Extension**: `.mbm`
//! - **Endianness**: Little-endian for header and descriptors, control codes are stored high
//!   byte first
//!

pub mod archive;
pub mod control;
pub mod error;
pub mod read;
mod token;
pub mod types;
pub mod write;

pub use archive::MessageArchive;
