//! Types for writing TBL files
//!

use byteorder::{LittleEndian, WriteBytesExt};
use std::{io::Write, path::Path};
use tracing::{debug, instrument};

use eo_text::{fold, sjis};

use crate::{
    error::{Error, Result},
    types::{PointerWidth, Table},
};

impl Table {
    /// Encode the table into the bytes of a TBL file.
    ///
    /// Every entry is encoded before anything is written, so an entry that cannot be
    /// represented fails the whole call.
    pub fn to_bytes(&self, width: PointerWidth) -> Result<Vec<u8>> {
        let encoded = self
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                encode_entry(entry).map_err(|source| Error::Unencodable { index, source })
            })
            .collect::<Result<Vec<_>>>()?;

        let data_len: usize = encoded.iter().map(|bytes| bytes.len() + 1).sum();
        let mut out = Vec::with_capacity(width.size() * (encoded.len() + 1) + data_len);

        let count = encoded.len() as u64;
        if count > width.max_value() {
            return Err(Error::TooManyEntries(encoded.len()));
        }
        write_value(&mut out, width, count)?;

        // The first string always starts at 0, every pointer marks the start of the next one.
        let mut offset = 0u64;
        for bytes in &encoded {
            offset += bytes.len() as u64 + 1;
            if offset > width.max_value() {
                return Err(Error::PointerOverflow {
                    offset,
                    width: width.size(),
                });
            }
            write_value(&mut out, width, offset)?;
        }

        for bytes in &encoded {
            out.extend_from_slice(bytes);
            out.push(0x00);
        }

        debug!("encoded {} entries into {} bytes", encoded.len(), out.len());

        Ok(out)
    }

    /// Encode the table and write it to `writer`.
    pub fn write<W: Write>(&self, mut writer: W, width: PointerWidth) -> Result<()> {
        writer.write_all(&self.to_bytes(width)?)?;
        Ok(())
    }

    /// Encode the table and replace the file at `path` with it.
    ///
    /// The file is only touched once the whole table has been encoded, and is replaced
    /// atomically.
    #[instrument(skip_all, fields(path = %path.as_ref().display()), err)]
    pub fn write_to_file(&self, path: impl AsRef<Path>, width: PointerWidth) -> Result<()> {
        let data = self.to_bytes(width)?;
        eo_text::fs::write_atomic(path, &data)?;
        Ok(())
    }
}

fn encode_entry(entry: &str) -> eo_text::error::Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(entry.len() * 2);
    for c in entry.chars() {
        sjis::encode_char(fold::to_storage(c), &mut bytes)?;
    }
    Ok(bytes)
}

fn write_value(out: &mut Vec<u8>, width: PointerWidth, value: u64) -> Result<()> {
    match width {
        PointerWidth::Short => out.write_u16::<LittleEndian>(value as u16)?,
        PointerWidth::Long => out.write_u32::<LittleEndian>(value as u32)?,
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use pretty_assertions::{assert_eq, assert_str_eq};
    use tracing_test::traced_test;

    use crate::error::{Error, Result};
    use crate::types::{PointerWidth, Table};

    #[traced_test]
    #[test]
    fn write_short_table() -> Result<()> {
        #[rustfmt::skip]
        let expected = vec![
            // Count
            0x02, 0x00,
            // Pointers
            0x07, 0x00,
            0x0C, 0x00,
            // "Ｆｉｒ"
            0x82, 0x65, 0x82, 0x89, 0x82, 0x92, 0x00,
            // "あい"
            0x82, 0xA0, 0x82, 0xA2, 0x00,
        ];

        let table = Table::new(vec!["Fir".into(), "あい".into()]);
        let actual = table.to_bytes(PointerWidth::Short)?;

        assert_str_eq!(format!("{:02X?}", actual), format!("{:02X?}", expected));

        Ok(())
    }

    #[traced_test]
    #[test]
    fn write_long_table() -> Result<()> {
        #[rustfmt::skip]
        let expected = vec![
            // Count
            0x02, 0x00, 0x00, 0x00,
            // Pointers
            0x07, 0x00, 0x00, 0x00,
            0x08, 0x00, 0x00, 0x00,
            // "Ｌｖ．"
            0x82, 0x6B, 0x82, 0x96, 0x81, 0x44, 0x00,
            // ""
            0x00,
        ];

        let table = Table::new(vec!["Lv.".into(), String::new()]);
        let actual = table.to_bytes(PointerWidth::Long)?;

        assert_str_eq!(format!("{:02X?}", actual), format!("{:02X?}", expected));

        Ok(())
    }

    #[test]
    fn write_empty_table() -> Result<()> {
        assert_eq!(Table::default().to_bytes(PointerWidth::Short)?, vec![0x00, 0x00]);
        assert_eq!(
            Table::default().to_bytes(PointerWidth::Long)?,
            vec![0x00, 0x00, 0x00, 0x00]
        );

        Ok(())
    }

    #[test]
    fn write_then_read() -> Result<()> {
        let table = Table::new(vec![
            "Attack Up".into(),
            "ファイア".into(),
            String::new(),
            "HP+10%".into(),
        ]);

        for width in [PointerWidth::Short, PointerWidth::Long] {
            let bytes = table.to_bytes(width)?;
            assert_eq!(Table::from_bytes(&bytes, width)?, table);
        }

        Ok(())
    }

    #[test]
    fn write_unencodable_entry() {
        let table = Table::new(vec!["Fire".into(), "\u{1F525}".into()]);

        assert!(matches!(
            table.to_bytes(PointerWidth::Short),
            Err(Error::Unencodable { index: 1, .. })
        ));
    }

    #[test]
    fn write_pointer_overflow() {
        // 0x8000 double-byte characters plus the terminator overflow a 16-bit pointer
        let table = Table::new(vec!["あ".repeat(0x8000)]);

        assert!(matches!(
            table.to_bytes(PointerWidth::Short),
            Err(Error::PointerOverflow {
                offset: 0x10001,
                width: 2
            })
        ));
        assert!(table.to_bytes(PointerWidth::Long).is_ok());
    }

    #[test]
    fn write_failure_leaves_file_untouched() -> Result<()> {
        let directory = tempfile::tempdir()?;
        let path = directory.path().join("names.tbl");

        let table = Table::new(vec!["Fire".into()]);
        table.write_to_file(&path, PointerWidth::Short)?;
        let before = std::fs::read(&path)?;

        let broken = Table::new(vec!["\u{1F525}".into()]);
        assert!(broken.write_to_file(&path, PointerWidth::Short).is_err());

        assert_eq!(std::fs::read(&path)?, before);
        assert_eq!(Table::open(&path, PointerWidth::Short)?, table);

        Ok(())
    }
}
