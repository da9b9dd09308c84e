//! In-memory message archive.

use derive_more::derive::{Deref, Index, IndexMut, IntoIterator};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    types::SizeField,
};

/// An ordered list of messages stored in an MBM file
///
/// Each entry is either present text, possibly containing tokens, or absent. The archive also
/// remembers the details of its source file that are needed to write it back unchanged.
///
/// ```
/// use eo_mbm::MessageArchive;
///
/// let mut archive = MessageArchive::new();
/// archive.push(Some("[NpcTelop]Guild Master[00 00]Welcome![PageBreak]".into()));
/// archive.push(None);
///
/// let bytes = archive.to_bytes()?;
/// assert_eq!(MessageArchive::from_bytes(&bytes)?, archive);
/// # Ok::<(), eo_mbm::error::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deref, Index, IndexMut, IntoIterator)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MessageArchive {
    #[deref]
    #[index]
    #[index_mut]
    #[into_iterator(owned, ref, ref_mut)]
    entries: Vec<Option<String>>,

    continuous_indices: bool,

    /// Header entry count when it disagrees with the number of entries
    #[cfg_attr(feature = "serde", serde(skip))]
    declared_count: Option<u32>,

    #[cfg_attr(feature = "serde", serde(skip))]
    size_field: SizeField,
}

impl MessageArchive {
    /// Create an empty archive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an archive holding `entries`.
    pub fn from_entries(entries: Vec<Option<String>>) -> Self {
        Self {
            entries,
            ..Default::default()
        }
    }

    pub(crate) fn from_parts(
        entries: Vec<Option<String>>,
        continuous_indices: bool,
        declared_count: Option<u32>,
        size_field: SizeField,
    ) -> Self {
        Self {
            entries,
            continuous_indices,
            declared_count,
            size_field,
        }
    }

    /// Text of the entry at `index`, or `None` if the entry is absent or out of range.
    pub fn text(&self, index: usize) -> Option<&str> {
        self.entries.get(index)?.as_deref()
    }

    /// Replace the entry at `index`.
    pub fn set(&mut self, index: usize, value: Option<String>) -> Result<()> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        *entry = value;
        self.forget_fixed_size();
        Ok(())
    }

    /// Append an entry.
    pub fn push(&mut self, value: Option<String>) {
        self.entries.push(value);
        self.declared_count = None;
        self.forget_fixed_size();
    }

    fn forget_fixed_size(&mut self) {
        if let SizeField::Fixed(_) = self.size_field {
            self.size_field = SizeField::Total;
        }
    }

    /// Whether absent entries keep their position as their descriptor index.
    ///
    /// When `false`, present entries are numbered in order and absent entries get index 0.
    pub fn continuous_indices(&self) -> bool {
        self.continuous_indices
    }

    /// Choose how descriptor indices are written.
    pub fn set_continuous_indices(&mut self, continuous: bool) {
        self.continuous_indices = continuous;
    }

    /// Entry count to store in the header.
    pub(crate) fn header_count(&self) -> Result<u32> {
        match self.declared_count {
            Some(count) => Ok(count),
            None => u32::try_from(self.entries.len()).map_err(|_| Error::TooLarge),
        }
    }

    /// File size to store in the header for an encoded file of `total` bytes.
    pub(crate) fn header_size(&self, total: usize) -> Result<u32> {
        let total = u32::try_from(total).map_err(|_| Error::TooLarge)?;
        let absent = self.entries.iter().filter(|entry| entry.is_none()).count();
        let absent = u32::try_from(absent).map_err(|_| Error::TooLarge)?;

        Ok(self.size_field.value(total, absent))
    }

    /// Consume the archive, returning its entries.
    pub fn into_inner(self) -> Vec<Option<String>> {
        self.entries
    }
}

impl From<Vec<Option<String>>> for MessageArchive {
    fn from(value: Vec<Option<String>>) -> Self {
        Self::from_entries(value)
    }
}

impl FromIterator<Option<String>> for MessageArchive {
    fn from_iter<T: IntoIterator<Item = Option<String>>>(iter: T) -> Self {
        Self::from_entries(iter.into_iter().collect())
    }
}
