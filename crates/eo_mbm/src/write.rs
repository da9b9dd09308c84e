//! Types for writing MBM files

use std::{
    io::{Cursor, Write},
    path::Path,
};

use binrw::BinWrite;
use tracing::{debug, instrument, trace};

use eo_text::{fold, sjis};

use crate::{
    archive::MessageArchive,
    control::{self, VOICE_OPCODE},
    error::{Error, Result},
    token::{self, Segment},
    types::{MbmDescriptor, MbmHeader, DESCRIPTOR_SIZE, HEADER_SIZE},
};

impl MessageArchive {
    /// Encode the archive into the bytes of an MBM file.
    ///
    /// Every entry is encoded before anything is written, so an entry that cannot be
    /// represented fails the whole call.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut strings = Vec::new();
        let mut spans = Vec::with_capacity(self.len());
        for (index, entry) in self.iter().enumerate() {
            let span = match entry {
                Some(text) => {
                    let start = strings.len();
                    encode_entry(index, text, &mut strings)?;
                    trace!("entry {index}: {} bytes", strings.len() - start);
                    Some((start, strings.len() - start))
                }
                None => None,
            };
            spans.push(span);
        }

        let strings_offset = self
            .len()
            .checked_mul(DESCRIPTOR_SIZE as usize)
            .and_then(|table| table.checked_add(HEADER_SIZE as usize))
            .ok_or(Error::TooLarge)?;
        let file_size = strings_offset
            .checked_add(strings.len())
            .ok_or(Error::TooLarge)?;

        let header = MbmHeader {
            file_size: self.header_size(file_size)?,
            entry_count: self.header_count()?,
            ..Default::default()
        };

        let mut out = Cursor::new(Vec::with_capacity(file_size));
        header.write(&mut out)?;

        let mut present = 0;
        for (position, span) in spans.iter().enumerate() {
            let descriptor = match *span {
                Some((start, length)) => {
                    let index = if self.continuous_indices() {
                        position
                    } else {
                        present
                    };
                    present += 1;

                    MbmDescriptor {
                        index: to_i32(index)?,
                        length: to_u32(length)?,
                        offset: to_u32(strings_offset + start)?,
                        ..Default::default()
                    }
                }
                None if self.continuous_indices() => MbmDescriptor {
                    index: to_i32(position)?,
                    ..Default::default()
                },
                None => MbmDescriptor::default(),
            };
            descriptor.write(&mut out)?;
        }

        let mut out = out.into_inner();
        out.extend_from_slice(&strings);

        debug!(
            "encoded {} entries ({} present) into {} bytes",
            self.len(),
            present,
            out.len()
        );

        Ok(out)
    }

    /// Encode the archive and write it to `writer`.
    pub fn write<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(&self.to_bytes()?)?;
        Ok(())
    }

    /// Encode the archive and replace the file at `path` with it.
    ///
    /// The file is only touched once the whole archive has been encoded, and is replaced
    /// atomically.
    #[instrument(skip_all, fields(path = %path.as_ref().display()), err)]
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let data = self.to_bytes()?;
        eo_text::fs::write_atomic(path, &data)?;
        Ok(())
    }
}

fn to_u32(value: usize) -> Result<u32> {
    u32::try_from(value).map_err(|_| Error::TooLarge)
}

fn to_i32(value: usize) -> Result<i32> {
    i32::try_from(value).map_err(|_| Error::TooLarge)
}

/// Encode the text of entry `index` followed by its `FF FF` terminator.
pub(crate) fn encode_entry(index: usize, text: &str, out: &mut Vec<u8>) -> Result<()> {
    let segments = token::split(text).map_err(|rest| Error::UnknownToken {
        index,
        token: rest.strip_prefix('[').unwrap_or(rest).to_string(),
    })?;

    for segment in segments {
        match segment {
            Segment::Text(run) => encode_text(index, run, out)?,
            Segment::Token(name) => {
                let pair = token::resolve(name).ok_or_else(|| Error::UnknownToken {
                    index,
                    token: name.to_string(),
                })?;

                // A voice code only parses as a token when its path is not closed
                if u16::from_be_bytes(pair) == VOICE_OPCODE {
                    return Err(Error::UnterminatedVoicePath { index });
                }
                out.extend_from_slice(&pair);
            }
            Segment::Voice { path, .. } => {
                out.extend_from_slice(&VOICE_OPCODE.to_be_bytes());
                encode_voice_path(index, path, out)?;
            }
        }
    }

    out.extend_from_slice(&[0xFF, 0xFF]);
    Ok(())
}

fn encode_text(index: usize, run: &str, out: &mut Vec<u8>) -> Result<()> {
    for character in run.chars() {
        let start = out.len();
        let written = sjis::encode_char(fold::to_storage(character), out).unwrap_or(0);

        // Single-byte characters and anything starting like an opcode would be misread
        if written != 2 || control::is_control_lead(out[start]) {
            return Err(Error::UnencodableCharacter { index, character });
        }
    }
    Ok(())
}

/// Write the path following a voice opcode and its two null bytes.
fn encode_voice_path(index: usize, path: &str, out: &mut Vec<u8>) -> Result<()> {
    for character in path.chars() {
        let byte = u8::try_from(character)
            .ok()
            .filter(|&byte| byte != 0x00)
            .ok_or(Error::InvalidVoicePath { index, character })?;
        out.push(byte);
    }

    out.extend_from_slice(&[0x00, 0x00]);
    Ok(())
}
