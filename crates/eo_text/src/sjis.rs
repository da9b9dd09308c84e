//! Single-character Shift-JIS handling.
//!
//! Both codecs walk their string data one character at a time, so this module only deals with
//! individual characters.

use encoding_rs::SHIFT_JIS;

use crate::error::{Error, Result};

/// Whether `byte` opens a two-byte Shift-JIS sequence.
#[inline]
pub fn is_lead_byte(byte: u8) -> bool {
    matches!(byte, 0x81..=0x9F | 0xE0..=0xFC)
}

/// Number of bytes occupied by the character starting with `byte`.
#[inline]
pub fn sequence_len(byte: u8) -> usize {
    if is_lead_byte(byte) {
        2
    } else {
        1
    }
}

/// Decode `bytes` as exactly one Shift-JIS character.
pub fn decode_char(bytes: &[u8]) -> Result<char> {
    let decoded = SHIFT_JIS
        .decode_without_bom_handling_and_without_replacement(bytes)
        .ok_or_else(|| Error::InvalidSequence(bytes.to_vec()))?;

    let mut chars = decoded.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(Error::InvalidSequence(bytes.to_vec())),
    }
}

/// Encode `c` and append it to `out`, returning the number of bytes written.
pub fn encode_char(c: char, out: &mut Vec<u8>) -> Result<usize> {
    let mut buffer = [0u8; 4];
    let (bytes, _, unmappable) = SHIFT_JIS.encode(c.encode_utf8(&mut buffer));
    if unmappable {
        return Err(Error::UnmappableCharacter(c));
    }

    out.extend_from_slice(&bytes);
    Ok(bytes.len())
}
