//! Tests for the language pack commands

#![allow(clippy::expect_used)]

use crate::commands::pak::lang;
use grdhash_core::pak::{LangRecord, PakEntry, PakFile};
use std::fs;
use tempfile::TempDir;

fn locale_pak() -> PakFile {
    PakFile {
        entries: vec![
            PakEntry {
                resource_id: 100,
                data: "Nouvel onglet".as_bytes().to_vec(),
            },
            PakEntry {
                resource_id: 101,
                data: "Paramètres".as_bytes().to_vec(),
            },
        ],
        aliases: Vec::new(),
    }
}

#[test]
fn test_lang_unpack_writes_text_record() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let pak_path = temp_dir.path().join("fr.pak");
    fs::write(&pak_path, locale_pak().to_bytes().expect("Failed to encode"))
        .expect("Failed to write pak");

    let record_path = lang::unpack(&pak_path).expect("Unpack failed");

    assert_eq!(record_path, temp_dir.path().join("fr.json"));
    let record: LangRecord =
        serde_json::from_slice(&fs::read(&record_path).expect("Failed to read record"))
            .expect("Failed to parse record");
    assert_eq!(record.entry[1].resource_id, 101);
    assert_eq!(record.entry[1].text, "Paramètres");
}

#[test]
fn test_lang_repack_applies_edited_text() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let pak_path = temp_dir.path().join("fr.pak");
    fs::write(&pak_path, locale_pak().to_bytes().expect("Failed to encode"))
        .expect("Failed to write pak");
    let record_path = lang::unpack(&pak_path).expect("Unpack failed");

    let edited = fs::read_to_string(&record_path)
        .expect("Failed to read record")
        .replace("Nouvel onglet", "Nouvel onglet privé");
    fs::write(&record_path, edited).expect("Failed to write record");
    lang::repack(&record_path).expect("Repack failed");

    let pak = PakFile::parse(&fs::read(&pak_path).expect("Failed to read pak")).expect("Invalid pak");
    assert_eq!(pak.entries[0].data, "Nouvel onglet privé".as_bytes());
    assert_eq!(pak.entries[1].data, "Paramètres".as_bytes());
}

#[test]
fn test_lang_repack_invalid_record_is_an_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let record_path = temp_dir.path().join("de.json");
    fs::write(&record_path, "[1, 2, 3]").expect("Failed to write record");

    assert!(lang::repack(&record_path).is_err());
}
