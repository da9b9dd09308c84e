//! File replacement helpers.

use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, instrument};

/// Replace the file at `path` with `data`.
///
/// The data is written to a temporary file next to `path` and moved over it once fully
/// flushed, so a failure never leaves a truncated file at `path`. The temporary file is
/// removed on every error path.
#[instrument(skip_all, fields(path = %path.as_ref().display(), size = data.len()), err)]
pub fn write_atomic(path: impl AsRef<Path>, data: &[u8]) -> io::Result<()> {
    let path = path.as_ref();
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(directory)?;
    file.write_all(data)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;

    debug!("replaced {}", path.display());

    Ok(())
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    use super::*;

    #[traced_test]
    #[test]
    fn write_then_replace() -> io::Result<()> {
        let directory = tempfile::tempdir()?;
        let path = directory.path().join("table.tbl");

        write_atomic(&path, &[0x01, 0x02])?;
        assert_eq!(std::fs::read(&path)?, vec![0x01, 0x02]);

        write_atomic(&path, &[0x03])?;
        assert_eq!(std::fs::read(&path)?, vec![0x03]);

        // Only the target remains, no temporary files.
        assert_eq!(std::fs::read_dir(directory.path())?.count(), 1);

        Ok(())
    }

    #[test]
    fn missing_directory_fails() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("missing").join("table.tbl");

        assert!(write_atomic(&path, &[0x01]).is_err());
        assert!(!path.exists());
    }
}
