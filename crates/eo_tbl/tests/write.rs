use std::path::{Path, PathBuf};

use eo_tbl::error::Result;
use eo_tbl::{PointerWidth, Table};
use pretty_assertions::{assert_eq, assert_str_eq};
use tracing::{info, instrument};
use tracing_test::traced_test;

fn resource(name: &str) -> PathBuf {
    PathBuf::from(format!("{}/resources/{}", env!("CARGO_MANIFEST_DIR"), name))
}

fn assert_same_bytes(actual: &Path, expected: &Path) -> Result<()> {
    let actual = std::fs::read(actual)?;
    let expected = std::fs::read(expected)?;

    assert_eq!(actual.len(), expected.len());
    assert_str_eq!(format!("{:02X?}", actual), format!("{:02X?}", expected));

    Ok(())
}

#[instrument(skip_all, fields(file = name))]
fn validate_rewrite(name: &str, width: PointerWidth) -> Result<()> {
    let directory = tempfile::tempdir()?;
    let output = directory.path().join(name);

    let table = Table::open(resource(name), width)?;
    table.write_to_file(&output, width)?;
    info!("rewrote {} entries", table.len());

    assert_same_bytes(&output, &resource(name))
}

#[instrument(skip_all, fields(file = name))]
fn validate_modification(
    name: &str,
    modified: &str,
    width: PointerWidth,
    index: usize,
    value: &str,
) -> Result<()> {
    let directory = tempfile::tempdir()?;
    let output = directory.path().join(name);

    let mut table = Table::open(resource(name), width)?;
    table.set(index, value)?;
    table.write_to_file(&output, width)?;

    assert_same_bytes(&output, &resource(modified))?;
    assert_eq!(Table::open(&output, width)?[index], value);

    Ok(())
}

#[traced_test]
#[test]
fn rewrite_short_pointer_table() -> Result<()> {
    validate_rewrite("skills.tbl", PointerWidth::Short)
}

#[traced_test]
#[test]
fn rewrite_long_pointer_table() -> Result<()> {
    validate_rewrite("custom.tbl", PointerWidth::Long)
}

#[traced_test]
#[test]
fn modify_short_pointer_table() -> Result<()> {
    validate_modification(
        "skills.tbl",
        "skills_modified.tbl",
        PointerWidth::Short,
        4,
        "MODIFIED NAME",
    )
}

#[traced_test]
#[test]
fn modify_long_pointer_table() -> Result<()> {
    validate_modification(
        "custom.tbl",
        "custom_modified.tbl",
        PointerWidth::Long,
        23,
        "MODIFIED LEVEL UP",
    )
}

#[traced_test]
#[test]
fn write_to_writer_matches_file() -> Result<()> {
    let table = Table::open(resource("skills.tbl"), PointerWidth::Short)?;

    let mut buffer = Vec::new();
    table.write(&mut buffer, PointerWidth::Short)?;

    assert_eq!(buffer, std::fs::read(resource("skills.tbl"))?);

    Ok(())
}
