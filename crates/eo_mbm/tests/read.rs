use std::fs::File;
use std::path::PathBuf;

use eo_mbm::error::{Error, Result};
use eo_mbm::MessageArchive;
use pretty_assertions::assert_eq;
use tracing_test::traced_test;

fn resource(name: &str) -> PathBuf {
    PathBuf::from(format!("{}/resources/{}", env!("CARGO_MANIFEST_DIR"), name))
}

#[traced_test]
#[test]
fn parse_messages() -> Result<()> {
    let archive = MessageArchive::open(resource("messages.mbm"))?;

    let expected = vec![
        Some("[NpcTelop]Guild Master[00 00]Welcome to the guild![LineBreak]Register your party here."),
        None,
        Some("[Voice]voice/gm_001.bin[00 00]ようこそ、冒険者よ"),
        Some("[SkillSubheader][00 03]Damage up by 15%[PageBreak]Lv.10"),
        None,
        Some("[F8 20][85 40]Strange noise..."),
        Some("[NpcTelopId][00 2A]Hello![VoiceClip][00 01][00 02][00 03][00 04]"),
    ];

    assert_eq!(archive.len(), expected.len());
    for (index, expected) in expected.into_iter().enumerate() {
        assert_eq!(archive.text(index), expected, "entry {index}");
    }
    assert!(!archive.continuous_indices());

    Ok(())
}

#[traced_test]
#[test]
fn parse_continuous_indices() -> Result<()> {
    let archive = MessageArchive::open(resource("continuous.mbm"))?;

    assert_eq!(
        archive.into_inner(),
        vec![
            None,
            Some("Hi".to_string()),
            None,
            None,
            Some("[Voice]vo/b.bin[00 00]Bye".to_string()),
        ]
    );

    Ok(())
}

#[traced_test]
#[test]
fn parse_from_reader() -> Result<()> {
    let mut file = File::open(resource("continuous.mbm"))?;
    let archive = MessageArchive::read(&mut file)?;

    assert_eq!(archive.len(), 5);
    assert!(archive.continuous_indices());
    assert_eq!(archive.text(1), Some("Hi"));

    Ok(())
}

#[test]
fn parse_table_file_fails() {
    let path = PathBuf::from(format!(
        "{}/../eo_tbl/resources/skills.tbl",
        env!("CARGO_MANIFEST_DIR")
    ));

    assert!(matches!(
        MessageArchive::open(path),
        Err(Error::InvalidArchive)
    ));
}
