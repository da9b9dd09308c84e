//! Base types for structure of MBM file.

use binrw::{BinRead, BinWrite};

/// Size of [`MbmHeader`] in bytes
pub const HEADER_SIZE: u32 = 0x20;

/// Size of [`MbmDescriptor`] in bytes
pub const DESCRIPTOR_SIZE: u32 = 0x10;

/// MBM file header
///
/// Defines the header of the MBM file which always starts with a zero word, "MSG2" and the
/// version `0x00010000`. All data is stored in little endian format
#[derive(BinRead, BinWrite, Debug, Copy, Clone, PartialEq)]
#[brw(magic = b"\0\0\0\0MSG2\0\0\x01\0", little)]
pub struct MbmHeader {
    /// The size of the file in bytes
    pub file_size: u32,

    /// The number of entries, which most games do not keep accurate
    pub entry_count: u32,

    /// The offset from the beginning of the file where the entry table starts
    pub entry_table_offset: u32,

    /// Unused, always zero
    pub reserved: [u32; 2],
}

impl Default for MbmHeader {
    fn default() -> Self {
        Self {
            file_size: HEADER_SIZE,
            entry_count: Default::default(),
            entry_table_offset: HEADER_SIZE,
            reserved: Default::default(),
        }
    }
}

/// How the file size in the header relates to the actual file
///
/// Most files store their total size. Some leave the descriptors of absent entries out of the
/// count, and a few store a value that matches neither.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum SizeField {
    /// Total size of the file
    #[default]
    Total,

    /// Total size minus one descriptor for every absent entry
    ExcludingAbsent,

    /// A value unrelated to the contents, written back unchanged
    Fixed(u32),
}

impl SizeField {
    /// Work out which convention produced `declared` for a file of `total` bytes.
    pub fn detect(declared: u32, total: usize, absent: usize) -> Self {
        let excluding = absent
            .checked_mul(DESCRIPTOR_SIZE as usize)
            .and_then(|descriptors| total.checked_sub(descriptors));

        if declared as usize == total {
            SizeField::Total
        } else if absent > 0 && excluding == Some(declared as usize) {
            SizeField::ExcludingAbsent
        } else {
            SizeField::Fixed(declared)
        }
    }

    /// Value to store for a file of `total` bytes with `absent` absent entries.
    pub fn value(self, total: u32, absent: u32) -> u32 {
        match self {
            SizeField::Total => total,
            SizeField::ExcludingAbsent => {
                total.saturating_sub(absent.saturating_mul(DESCRIPTOR_SIZE))
            }
            SizeField::Fixed(value) => value,
        }
    }
}

/// MBM entry descriptor
///
/// Locates the string data of one entry. Entries without text have a length and offset of 0.
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[brw(little)]
pub struct MbmDescriptor {
    /// The index of this entry, see [`crate::MessageArchive::continuous_indices`]
    pub index: i32,

    /// The length of this entry's data in bytes, including its terminator
    pub length: u32,

    /// The offset to this entry's data from the start of the file
    pub offset: u32,

    /// Unused, always zero
    pub reserved: u32,
}

impl MbmDescriptor {
    /// Whether this descriptor points at string data
    pub fn is_present(&self) -> bool {
        self.length > 0 && self.offset > 0
    }
}
