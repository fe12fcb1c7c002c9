//! Tests for JSON pack records

#![allow(clippy::unwrap_used)]

use crate::pak::{
    to_tab_json, AliasRecord, EntryRecord, LangRecord, MetaRecord, PakAlias, PakEntry, PakFile,
};

#[test]
fn test_meta_record_field_names() {
    let record = MetaRecord {
        entry: vec![EntryRecord {
            resource_id: 3,
            path: "resources/unknown/3".to_string(),
        }],
        alias: vec![AliasRecord {
            resource_id: 4,
            entry_index: 0,
        }],
    };

    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "entry": [{"id": 3, "path": "resources/unknown/3"}],
            "alias": [{"id": 4, "index": 0}]
        })
    );
}

#[test]
fn test_records_accept_null_lists() {
    let meta: MetaRecord = serde_json::from_str(r#"{"entry": null, "alias": null}"#).unwrap();
    let lang: LangRecord = serde_json::from_str(r#"{"entry": [{"id": 1, "text": "Hi"}]}"#).unwrap();

    assert!(meta.entry.is_empty());
    assert!(meta.alias.is_empty());
    assert_eq!(lang.entry.len(), 1);
    assert!(lang.alias.is_empty());
}

#[test]
fn test_lang_record_from_pak_and_back() {
    let pak = PakFile {
        entries: vec![
            PakEntry {
                resource_id: 1,
                data: "Bonjour".as_bytes().to_vec(),
            },
            PakEntry {
                resource_id: 2,
                data: "日本語".as_bytes().to_vec(),
            },
        ],
        aliases: vec![PakAlias {
            resource_id: 3,
            entry_index: 1,
        }],
    };

    let record = LangRecord::from_pak(&pak);

    assert_eq!(record.entry[1].text, "日本語");
    assert_eq!(record.alias[0].entry_index, 1);
    assert_eq!(record.to_pak(), pak);
}

#[test]
fn test_lang_record_replaces_invalid_utf8() {
    let pak = PakFile {
        entries: vec![PakEntry {
            resource_id: 1,
            data: vec![b'o', b'k', 0xFF],
        }],
        aliases: Vec::new(),
    };

    let record = LangRecord::from_pak(&pak);

    assert_eq!(record.entry[0].text, "ok\u{FFFD}");
}

#[test]
fn test_to_tab_json_indents_with_tabs() {
    let record = MetaRecord {
        entry: Vec::new(),
        alias: vec![AliasRecord {
            resource_id: 1,
            entry_index: 2,
        }],
    };

    let json = String::from_utf8(to_tab_json(&record).unwrap()).unwrap();

    assert_eq!(
        json,
        "{\n\t\"entry\": [],\n\t\"alias\": [\n\t\t{\n\t\t\t\"id\": 1,\n\t\t\t\"index\": 2\n\t\t}\n\t]\n}\n"
    );
}
