//! Base types for the structure of a TBL file.

use derive_more::derive::{Constructor, Deref, Index, IndexMut, IntoIterator};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Width of the entry count and of every pointer in a TBL file
///
/// The width is not stored in the file. Most tables use [`PointerWidth::Short`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum PointerWidth {
    /// Count and pointers are stored as `u16`
    #[default]
    Short,

    /// Count and pointers are stored as `u32`
    Long,
}

impl PointerWidth {
    /// Size in bytes of the count and of each pointer
    pub const fn size(self) -> usize {
        match self {
            PointerWidth::Short => 2,
            PointerWidth::Long => 4,
        }
    }

    /// Largest value that can be stored at this width
    pub const fn max_value(self) -> u64 {
        match self {
            PointerWidth::Short => u16::MAX as u64,
            PointerWidth::Long => u32::MAX as u64,
        }
    }
}

/// An ordered list of strings stored in a TBL file
///
/// Strings are held in their halfwidth form. The number of entries is fixed once the table
/// is built; entries are replaced in place with [`Table::set`] or through indexing.
///
/// ```
/// use eo_tbl::{PointerWidth, Table};
///
/// let mut table = Table::new(vec!["Attack Up".into(), "Defense Up".into()]);
/// table.set(1, "Guard")?;
///
/// let bytes = table.to_bytes(PointerWidth::Short)?;
/// assert_eq!(Table::from_bytes(&bytes, PointerWidth::Short)?, table);
/// # Ok::<(), eo_tbl::error::Error>(())
/// ```
#[derive(
    Constructor, Clone, Debug, Default, PartialEq, Eq, Deref, Index, IndexMut, IntoIterator,
)]
#[into_iterator(owned, ref, ref_mut)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Table(Vec<String>);

impl Table {
    /// Replace the entry at `index`.
    pub fn set(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        let len = self.0.len();
        let entry = self
            .0
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        *entry = value.into();
        Ok(())
    }

    /// Consume the table, returning its entries.
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for Table {
    fn from(value: Vec<String>) -> Self {
        Self::new(value)
    }
}

impl FromIterator<String> for Table {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
