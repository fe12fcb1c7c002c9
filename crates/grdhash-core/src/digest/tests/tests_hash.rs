//! Tests for SHA1 hashing

#![allow(clippy::expect_used)]

use crate::digest::{compute_file_hash, digest_resource, sha1_hex};
use rstest::rstest;
use std::fs;
use tempfile::TempDir;

#[rstest]
#[case(b"hello", "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d")]
#[case(b"", "da39a3ee5e6b4b0d3255bfef95601890afd80709")]
#[case(b"abc", "a9993e364706816aba3e25717850c26c9cd0d89d")]
fn test_sha1_hex_known_values(#[case] data: &[u8], #[case] expected: &str) {
    assert_eq!(sha1_hex(data), expected);
}

#[test]
fn test_sha1_hex_is_lowercase_hex() {
    let digest = sha1_hex(b"some resource bytes");

    assert_eq!(digest.len(), 40);
    assert!(digest
        .chars()
        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
}

#[test]
fn test_compute_file_hash_matches_content_hash() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("greeting.xml");
    fs::write(&path, b"hello").expect("Failed to write file");

    let hash = compute_file_hash(&path).expect("Failed to compute hash");

    assert_eq!(hash, sha1_hex(b"hello"));
}

#[test]
fn test_compute_file_hash_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let result = compute_file_hash(&temp_dir.path().join("missing.xml"));

    assert!(result.is_err());
}

#[test]
fn test_digest_resource_normalizes_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path().join("pkg").join("en");
    fs::create_dir_all(&dir).expect("Failed to create dir");
    fs::write(dir.join("greeting.xml"), b"hello").expect("Failed to write file");

    let hashed = digest_resource(temp_dir.path(), "pkg/sub/../en/./greeting.xml")
        .expect("Failed to digest resource");

    assert_eq!(hashed.path, "pkg/en/greeting.xml");
    assert_eq!(hashed.digest, "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d");
}

#[test]
fn test_digest_resource_directory_is_an_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::create_dir(temp_dir.path().join("pkg")).expect("Failed to create dir");

    let result = digest_resource(temp_dir.path(), "pkg");

    assert!(result.is_err());
}
