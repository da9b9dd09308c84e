//! Types for reading TBL files
//!

use byteorder::{ByteOrder, LittleEndian};
use std::{io::Read, mem, path::Path};
use tracing::{debug, instrument, trace};

use eo_text::{fold, sjis};

use crate::{
    error::{Error, Result},
    types::{PointerWidth, Table},
};

impl Table {
    /// Read a TBL file from disk.
    #[instrument(skip_all, fields(path = %path.as_ref().display()), err)]
    pub fn open(path: impl AsRef<Path>, width: PointerWidth) -> Result<Table> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| Error::from_io(e, path))?;
        Self::from_bytes(&data, width)
    }

    /// Read a TBL file from `reader`, buffering it completely.
    pub fn read<R: Read>(mut reader: R, width: PointerWidth) -> Result<Table> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data, width)
    }

    /// Parse a TBL file held in memory.
    pub fn from_bytes(data: &[u8], width: PointerWidth) -> Result<Table> {
        let declared = read_count(data, width)?;

        let start = declared
            .checked_mul(width.size())
            .and_then(|pointers| pointers.checked_add(width.size()))
            .filter(|&start| start <= data.len())
            .ok_or(Error::OutOfBounds {
                offset: width.size(),
            })?;

        let mut entries = Vec::with_capacity(declared);
        let mut current = String::new();
        let mut entry_start = start;
        let mut position = start;

        while position < data.len() {
            let byte = data[position];
            if byte == 0x00 {
                trace!("entry {} at {:#X}: {:?}", entries.len(), entry_start, current);
                entries.push(mem::take(&mut current));
                position += 1;
                entry_start = position;
                continue;
            }

            let bytes = data
                .get(position..position + sjis::sequence_len(byte))
                .ok_or(Error::OutOfBounds { offset: position })?;
            let c = sjis::decode_char(bytes).map_err(|source| Error::InvalidText {
                offset: position,
                source,
            })?;

            current.push(fold::to_canonical(c));
            position += bytes.len();
        }

        if entry_start != data.len() {
            return Err(Error::OutOfBounds {
                offset: entry_start,
            });
        }

        if entries.len() != declared {
            return Err(Error::CountMismatch {
                declared,
                found: entries.len(),
            });
        }

        debug!("read {} entries with {:?} pointers", entries.len(), width);

        Ok(Table::new(entries))
    }
}

fn read_count(data: &[u8], width: PointerWidth) -> Result<usize> {
    let header = data
        .get(..width.size())
        .ok_or(Error::OutOfBounds { offset: 0 })?;

    Ok(match width {
        PointerWidth::Short => LittleEndian::read_u16(header) as usize,
        PointerWidth::Long => LittleEndian::read_u32(header) as usize,
    })
}
