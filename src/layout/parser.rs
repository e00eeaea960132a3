// SPDX-License-Identifier: GPL-3.0-only

//! Parsing logic for loading the JSON key list.
//!
//! The key list is an ordered array of descriptors, each with a stable
//! `code`, a `text` label (string or `{en, ru}` object), and an optional
//! `shiftText` label. Parsing distinguishes I/O errors from JSON errors and
//! validates the list before handing out resolved descriptors.

use crate::layout::types::{Key, KeyCode, LabelText, LayoutError, ValidationIssue};
use serde::Deserialize;
use std::fs;

/// The bundled EN/RU key list.
const DEFAULT_KEYS_JSON: &str = include_str!("../../resources/keys.json");

/// Wire shape of the layout file.
#[derive(Debug, Deserialize)]
struct RawLayout {
    keys: Vec<RawKey>,
}

/// Wire shape of a single key entry.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawKey {
    code: KeyCode,
    text: LabelText,
    #[serde(default)]
    shift_text: Option<LabelText>,
}

/// Parses the key list from a JSON file.
///
/// I/O failures (missing file, permissions) and JSON failures (syntax,
/// wrong shape) are reported as distinct [`LayoutError`] variants, both
/// carrying the file path. The parsed list is validated before descriptors
/// are returned.
pub fn parse_layout_file(path: &str) -> Result<Vec<Key>, LayoutError> {
    let json_str = fs::read_to_string(path).map_err(|e| LayoutError::io(e, path))?;

    parse_layout_from_string(&json_str).map_err(|e| e.with_path(path))
}

/// Parses the key list from a pre-loaded JSON string.
///
/// Use this when the content is already in memory, or for testing.
pub fn parse_layout_from_string(json: &str) -> Result<Vec<Key>, LayoutError> {
    let raw: RawLayout = serde_json::from_str(json).map_err(LayoutError::json)?;

    validate_keys(&raw.keys)?;

    Ok(raw
        .keys
        .into_iter()
        .map(|raw| Key::new(raw.code, raw.text, raw.shift_text))
        .collect())
}

/// The key list bundled with the crate (full 64-key EN/RU board).
pub fn default_layout() -> Result<Vec<Key>, LayoutError> {
    parse_layout_from_string(DEFAULT_KEYS_JSON)
}

/// Checks the parsed key list for structural problems.
///
/// All issues found are fatal: an empty list, duplicate codes, or a
/// printable key with an empty label each make the keyboard unusable.
fn validate_keys(keys: &[RawKey]) -> Result<(), LayoutError> {
    let mut issues = Vec::new();

    if keys.is_empty() {
        issues.push(
            ValidationIssue::new("key list is empty", "keys")
                .with_suggestion("Provide at least one key descriptor"),
        );
    }

    let mut seen: Vec<&KeyCode> = Vec::with_capacity(keys.len());
    for (i, key) in keys.iter().enumerate() {
        if seen.contains(&&key.code) {
            issues.push(
                ValidationIssue::new(
                    format!("duplicate code '{}'", key.code),
                    format!("keys[{i}].code"),
                )
                .with_suggestion("Remove the duplicate entry"),
            );
        } else {
            seen.push(&key.code);
        }

        if matches!(key.code, KeyCode::Printable(_)) && label_is_empty(&key.text) {
            issues.push(
                ValidationIssue::new("printable key has an empty label", format!("keys[{i}].text"))
                    .with_suggestion("Give the key a visible glyph"),
            );
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(LayoutError::validation(issues))
    }
}

fn label_is_empty(label: &LabelText) -> bool {
    match label {
        LabelText::Plain(text) => text.is_empty(),
        LabelText::Localized { en, ru } => en.is_empty() || ru.is_empty(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::types::Language;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// A minimal valid key list parses into resolved descriptors.
    #[test]
    fn test_parse_valid_string() {
        let json = r#"{
            "keys": [
                { "code": "KeyQ", "text": { "en": "q", "ru": "й" }, "shiftText": { "en": "Q", "ru": "Й" } },
                { "code": "Digit1", "text": "1", "shiftText": { "en": "!", "ru": "!" } },
                { "code": "Enter", "text": "Enter" }
            ]
        }"#;

        let keys = parse_layout_from_string(json).expect("valid key list");
        assert_eq!(keys.len(), 3);

        assert_eq!(keys[0].code, KeyCode::Printable("KeyQ".to_string()));
        assert_eq!(keys[0].base(Language::Ru), "й");
        assert_eq!(keys[0].shift(Language::En), Some("Q"));

        assert_eq!(keys[1].base(Language::En), "1");
        assert_eq!(keys[1].base(Language::Ru), "1");

        assert_eq!(keys[2].code, KeyCode::Enter);
        assert_eq!(keys[2].shift(Language::En), None);
    }

    /// Malformed JSON reports a JSON error, not a panic.
    #[test]
    fn test_parse_malformed_json() {
        let result = parse_layout_from_string("{ \"keys\": [ broken ] }");
        assert!(matches!(result, Err(LayoutError::Json { .. })));
    }

    /// An empty key list fails validation.
    #[test]
    fn test_parse_empty_key_list() {
        let result = parse_layout_from_string(r#"{ "keys": [] }"#);
        match result {
            Err(LayoutError::Validation { issues, .. }) => {
                assert_eq!(issues.len(), 1);
                assert_eq!(issues[0].field_path, "keys");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    /// Duplicate codes fail validation with the duplicate's index.
    #[test]
    fn test_parse_duplicate_codes() {
        let json = r#"{
            "keys": [
                { "code": "KeyA", "text": { "en": "a", "ru": "ф" } },
                { "code": "KeyA", "text": { "en": "a", "ru": "ф" } }
            ]
        }"#;

        match parse_layout_from_string(json) {
            Err(LayoutError::Validation { issues, .. }) => {
                assert_eq!(issues.len(), 1);
                assert_eq!(issues[0].field_path, "keys[1].code");
                assert!(issues[0].message.contains("KeyA"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    /// A printable key with an empty label fails validation.
    #[test]
    fn test_parse_empty_printable_label() {
        let json = r#"{
            "keys": [
                { "code": "KeyB", "text": "" }
            ]
        }"#;

        match parse_layout_from_string(json) {
            Err(LayoutError::Validation { issues, .. }) => {
                assert_eq!(issues[0].field_path, "keys[0].text");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    /// File loading works and attaches the path to errors.
    #[test]
    fn test_parse_file_roundtrip_and_missing() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{ "keys": [ {{ "code": "Space", "text": " " }} ] }}"#
        )
        .expect("write temp layout");

        let keys = parse_layout_file(file.path().to_str().unwrap()).expect("parse temp layout");
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].code, KeyCode::Space);

        let missing = parse_layout_file("/nonexistent/keys.json");
        match missing {
            Err(LayoutError::Io { file_path, .. }) => {
                assert_eq!(file_path.as_deref(), Some("/nonexistent/keys.json"));
            }
            other => panic!("expected I/O error, got {other:?}"),
        }
    }

    /// The bundled layout parses and contains the expected board.
    #[test]
    fn test_default_layout() {
        let keys = default_layout().expect("bundled layout must parse");

        assert!(keys.len() >= 60, "full board expected, got {}", keys.len());
        assert!(keys.iter().any(|k| k.code == KeyCode::CapsLock));
        assert!(keys.iter().any(|k| k.code == KeyCode::Space));
        assert!(keys.iter().any(|k| k.code == KeyCode::ArrowDown));

        let q = keys
            .iter()
            .find(|k| k.code == KeyCode::Printable("KeyQ".to_string()))
            .expect("KeyQ present");
        assert_eq!(q.base(Language::En), "q");
        assert_eq!(q.base(Language::Ru), "й");
        assert_eq!(q.shift(Language::Ru), Some("Й"));
    }
}
