//! Types for reading MBM files

use std::{
    io::{Cursor, Read},
    path::Path,
};

use binrw::BinRead;
use tracing::{debug, instrument, trace, warn};

use eo_text::{fold, sjis};

use crate::{
    archive::MessageArchive,
    control::{self, VOICE_OPCODE},
    error::{Error, Result},
    types::{MbmDescriptor, MbmHeader, SizeField, DESCRIPTOR_SIZE, HEADER_SIZE},
};

impl MessageArchive {
    /// Read an MBM file from disk.
    #[instrument(skip_all, fields(path = %path.as_ref().display()), err)]
    pub fn open(path: impl AsRef<Path>) -> Result<MessageArchive> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| Error::from_io(e, path))?;
        Self::from_bytes(&data)
    }

    /// Read an MBM file from `reader`, buffering it completely.
    pub fn read<R: Read>(mut reader: R) -> Result<MessageArchive> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Parse an MBM file held in memory.
    pub fn from_bytes(data: &[u8]) -> Result<MessageArchive> {
        if data.len() < HEADER_SIZE as usize {
            return Err(Error::OutOfBounds { offset: 0 });
        }

        let header = MbmHeader::read(&mut Cursor::new(data)).map_err(|e| match e {
            binrw::Error::BadMagic { .. } => Error::InvalidArchive,
            e => Error::BinRWError(e),
        })?;

        // The header count is unreliable, so the table ends where the first string starts
        let mut position = header.entry_table_offset as usize;
        let mut end = usize::MAX;
        let mut entries = Vec::new();
        let mut continuous_indices = false;

        while position < end && position != data.len() {
            let descriptor = read_descriptor(data, position)?;
            position += DESCRIPTOR_SIZE as usize;

            if !descriptor.is_present() {
                continuous_indices |= descriptor.index != 0;
                entries.push(None);
                continue;
            }

            let offset = descriptor.offset as usize;
            if end == usize::MAX {
                end = offset;
            }

            let text = decode_entry(data, offset)?;
            trace!("entry {} at {:#X}: {:?}", entries.len(), offset, text);
            entries.push(Some(text));
        }

        let declared_count = u32::try_from(entries.len())
            .map_or(true, |len| len != header.entry_count)
            .then_some(header.entry_count);

        let absent = entries.iter().filter(|entry| entry.is_none()).count();
        let size_field = SizeField::detect(header.file_size, data.len(), absent);
        if let SizeField::Fixed(size) = size_field {
            warn!(
                "header declares {:#X} bytes but the file has {:#X}",
                size,
                data.len()
            );
        }

        debug!(
            "read {} entries, header declares {}, continuous indices: {}",
            entries.len(),
            header.entry_count,
            continuous_indices
        );

        Ok(MessageArchive::from_parts(
            entries,
            continuous_indices,
            declared_count,
            size_field,
        ))
    }
}

fn read_descriptor(data: &[u8], position: usize) -> Result<MbmDescriptor> {
    let bytes = data
        .get(position..position + DESCRIPTOR_SIZE as usize)
        .ok_or(Error::OutOfBounds { offset: position })?;

    Ok(MbmDescriptor::read(&mut Cursor::new(bytes))?)
}

fn read_pair(data: &[u8], position: usize) -> Result<[u8; 2]> {
    match data.get(position..position + 2) {
        Some(&[high, low]) => Ok([high, low]),
        _ => Err(Error::OutOfBounds { offset: position }),
    }
}

/// Decode the string starting at `offset` up to its `FF` terminator.
pub(crate) fn decode_entry(data: &[u8], offset: usize) -> Result<String> {
    let mut text = String::new();
    let mut position = offset;

    loop {
        let lead = *data
            .get(position)
            .ok_or(Error::OutOfBounds { offset: position })?;
        if lead == 0xFF {
            return Ok(text);
        }

        let pair = read_pair(data, position)?;
        position += 2;

        if !control::is_control_lead(lead) {
            decode_character(pair, &mut text);
            continue;
        }

        let opcode = u16::from_be_bytes(pair);
        text.push_str(&control::render_opcode(opcode));

        if opcode == VOICE_OPCODE {
            position = decode_voice_path(data, position, &mut text)?;
        } else if let Some(code) = control::lookup(opcode) {
            for _ in 0..code.operand_units {
                let [high, low] = read_pair(data, position)?;
                text.push_str(&control::render_pair(high, low));
                position += 2;
            }
        }
    }
}

/// Append the character stored in `pair`, or its hex form when it would not encode back to
/// the same bytes.
fn decode_character(pair: [u8; 2], text: &mut String) {
    let mut encoded = Vec::with_capacity(2);
    match sjis::decode_char(&pair) {
        Ok(c) if sjis::encode_char(c, &mut encoded).is_ok() && encoded == pair => {
            text.push(fold::to_canonical(c));
        }
        _ => text.push_str(&control::render_pair(pair[0], pair[1])),
    }
}

/// Append the null-terminated path following a voice opcode, returning the position after it.
fn decode_voice_path(data: &[u8], mut position: usize, text: &mut String) -> Result<usize> {
    loop {
        let byte = *data
            .get(position)
            .ok_or(Error::OutOfBounds { offset: position })?;
        position += 1;

        if byte == 0x00 {
            break;
        }
        text.push(char::from(byte));
    }

    match data.get(position) {
        Some(0x00) => {}
        Some(_) => return Err(Error::InvalidVoiceTerminator { offset: position }),
        None => return Err(Error::OutOfBounds { offset: position }),
    }

    text.push_str(&control::render_pair(0x00, 0x00));
    Ok(position + 1)
}
