// SPDX-License-Identifier: GPL-3.0-only

//! Core data types for the keyboard layout.
//!
//! This module defines the key descriptor model parsed from the JSON key
//! list, the language and modifier snapshot types shared across the crate,
//! and the error types for layout loading.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Key codes
// ============================================================================

/// Stable identifier for a physical key, distinct from its display glyph.
///
/// Control and modifier keys have dedicated variants; glyph-producing keys
/// carry their layout code (e.g. `"KeyQ"`, `"Digit1"`, `"Backquote"`) in the
/// `Printable` variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum KeyCode {
    Backspace,
    Tab,
    Delete,
    CapsLock,
    Enter,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    /// The Meta/Super key (`"MetaLeft"` in layout files).
    Win,
    AltLeft,
    AltRight,
    ArrowUp,
    ArrowLeft,
    ArrowDown,
    ArrowRight,
    Space,
    /// A glyph-producing key, identified by its layout code string.
    Printable(String),
}

impl KeyCode {
    /// Returns `true` for keys that only affect modifier state and never
    /// mutate the text buffer.
    #[must_use]
    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            KeyCode::CapsLock
                | KeyCode::ShiftLeft
                | KeyCode::ShiftRight
                | KeyCode::ControlLeft
                | KeyCode::ControlRight
                | KeyCode::Win
                | KeyCode::AltLeft
                | KeyCode::AltRight
        )
    }

    /// Returns `true` for either shift key.
    #[must_use]
    pub fn is_shift(&self) -> bool {
        matches!(self, KeyCode::ShiftLeft | KeyCode::ShiftRight)
    }

    /// Returns `true` for either alt key.
    #[must_use]
    pub fn is_alt(&self) -> bool {
        matches!(self, KeyCode::AltLeft | KeyCode::AltRight)
    }

    /// The layout-file string form of this code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            KeyCode::Backspace => "Backspace",
            KeyCode::Tab => "Tab",
            KeyCode::Delete => "Delete",
            KeyCode::CapsLock => "CapsLock",
            KeyCode::Enter => "Enter",
            KeyCode::ShiftLeft => "ShiftLeft",
            KeyCode::ShiftRight => "ShiftRight",
            KeyCode::ControlLeft => "ControlLeft",
            KeyCode::ControlRight => "ControlRight",
            KeyCode::Win => "MetaLeft",
            KeyCode::AltLeft => "AltLeft",
            KeyCode::AltRight => "AltRight",
            KeyCode::ArrowUp => "ArrowUp",
            KeyCode::ArrowLeft => "ArrowLeft",
            KeyCode::ArrowDown => "ArrowDown",
            KeyCode::ArrowRight => "ArrowRight",
            KeyCode::Space => "Space",
            KeyCode::Printable(code) => code,
        }
    }
}

impl From<String> for KeyCode {
    fn from(code: String) -> Self {
        match code.as_str() {
            "Backspace" => KeyCode::Backspace,
            "Tab" => KeyCode::Tab,
            "Delete" => KeyCode::Delete,
            "CapsLock" => KeyCode::CapsLock,
            "Enter" => KeyCode::Enter,
            "ShiftLeft" => KeyCode::ShiftLeft,
            "ShiftRight" => KeyCode::ShiftRight,
            "ControlLeft" => KeyCode::ControlLeft,
            "ControlRight" => KeyCode::ControlRight,
            "MetaLeft" => KeyCode::Win,
            "AltLeft" => KeyCode::AltLeft,
            "AltRight" => KeyCode::AltRight,
            "ArrowUp" => KeyCode::ArrowUp,
            "ArrowLeft" => KeyCode::ArrowLeft,
            "ArrowDown" => KeyCode::ArrowDown,
            "ArrowRight" => KeyCode::ArrowRight,
            "Space" => KeyCode::Space,
            _ => KeyCode::Printable(code),
        }
    }
}

impl From<KeyCode> for String {
    fn from(code: KeyCode) -> Self {
        code.as_str().to_string()
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Languages and modifier snapshot
// ============================================================================

/// Active layout language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
}

impl Language {
    /// The other language.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ru,
            Language::Ru => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::En => f.write_str("en"),
            Language::Ru => f.write_str("ru"),
        }
    }
}

/// Snapshot of the modifier state read by the text variant resolver.
///
/// `shift` and `alt` are level states ("currently held"); `caps_lock` is the
/// latched toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub alt: bool,
    pub caps_lock: bool,
}

// ============================================================================
// Key descriptors
// ============================================================================

/// Raw label text as it appears in the layout file.
///
/// Locale-invariant keys (digits, most punctuation, control-key captions)
/// use a plain string; keys whose glyph differs by language use the
/// `{en, ru}` object form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelText {
    Plain(String),
    Localized { en: String, ru: String },
}

impl LabelText {
    /// Splits the label into its `(en, ru)` pair, duplicating plain labels
    /// into both slots.
    fn into_pair(self) -> (String, String) {
        match self {
            LabelText::Plain(text) => (text.clone(), text),
            LabelText::Localized { en, ru } => (en, ru),
        }
    }
}

/// A key descriptor with its text variants resolved at construction time.
///
/// Immutable once built. The four variant slots replace per-event lookups
/// into the raw label objects: a plain base label fills both language slots,
/// and the shift slots are `None` for keys whose glyph does not change under
/// shift.
#[derive(Debug, Clone, PartialEq)]
pub struct Key {
    pub code: KeyCode,
    base_en: String,
    base_ru: String,
    shift_en: Option<String>,
    shift_ru: Option<String>,
}

impl Key {
    /// Builds a descriptor from the raw layout-file fields.
    #[must_use]
    pub fn new(code: KeyCode, text: LabelText, shift_text: Option<LabelText>) -> Self {
        let (base_en, base_ru) = text.into_pair();
        let (shift_en, shift_ru) = match shift_text {
            Some(label) => {
                let (en, ru) = label.into_pair();
                (Some(en), Some(ru))
            }
            None => (None, None),
        };

        Self {
            code,
            base_en,
            base_ru,
            shift_en,
            shift_ru,
        }
    }

    /// The base (unshifted) label for a language.
    #[must_use]
    pub fn base(&self, language: Language) -> &str {
        match language {
            Language::En => &self.base_en,
            Language::Ru => &self.base_ru,
        }
    }

    /// The shift label for a language, if this key has a shift variant.
    #[must_use]
    pub fn shift(&self, language: Language) -> Option<&str> {
        match language {
            Language::En => self.shift_en.as_deref(),
            Language::Ru => self.shift_ru.as_deref(),
        }
    }
}

// ============================================================================
// Error types
// ============================================================================

/// A validation problem discovered in the key list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Human-readable description of the issue.
    pub message: String,
    /// Path to the offending field (e.g. `keys[3].text`).
    pub field_path: String,
    /// Optional hint for fixing the issue.
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    pub fn new(message: impl Into<String>, field_path: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field_path: field_path.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field_path, self.message)?;
        if let Some(hint) = &self.suggestion {
            write!(f, "\n  Suggestion: {hint}")?;
        }
        Ok(())
    }
}

/// Error type for layout loading.
///
/// Loading failures are recoverable: callers get a typed error with file
/// context rather than a silently missing keyboard.
#[derive(Debug)]
pub enum LayoutError {
    /// I/O error while reading the layout file.
    Io {
        source: std::io::Error,
        file_path: Option<String>,
    },

    /// JSON syntax or shape error.
    Json {
        source: serde_json::Error,
        file_path: Option<String>,
        /// Line number reported by the JSON parser.
        line_number: Option<usize>,
    },

    /// The key list parsed but failed validation.
    Validation {
        issues: Vec<ValidationIssue>,
        file_path: Option<String>,
    },
}

impl LayoutError {
    pub fn io(source: std::io::Error, file_path: impl Into<String>) -> Self {
        Self::Io {
            source,
            file_path: Some(file_path.into()),
        }
    }

    pub fn json(source: serde_json::Error) -> Self {
        let line_number = Some(source.line());
        Self::Json {
            source,
            file_path: None,
            line_number,
        }
    }

    pub fn json_with_path(source: serde_json::Error, file_path: impl Into<String>) -> Self {
        let line_number = Some(source.line());
        Self::Json {
            source,
            file_path: Some(file_path.into()),
            line_number,
        }
    }

    pub fn validation(issues: Vec<ValidationIssue>) -> Self {
        Self::Validation {
            issues,
            file_path: None,
        }
    }

    /// Attaches a file path to an error that lacks one.
    #[must_use]
    pub fn with_path(self, path: &str) -> Self {
        match self {
            Self::Io {
                source,
                file_path: None,
            } => Self::Io {
                source,
                file_path: Some(path.to_string()),
            },
            Self::Json {
                source,
                file_path: None,
                line_number,
            } => Self::Json {
                source,
                file_path: Some(path.to_string()),
                line_number,
            },
            Self::Validation {
                issues,
                file_path: None,
            } => Self::Validation {
                issues,
                file_path: Some(path.to_string()),
            },
            other => other,
        }
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::Io { source, file_path } => {
                write!(f, "I/O error")?;
                if let Some(path) = file_path {
                    write!(f, " reading layout file '{path}'")?;
                }
                write!(f, ": {source}")
            }
            LayoutError::Json {
                source,
                file_path,
                line_number,
            } => {
                write!(f, "JSON error")?;
                if let Some(path) = file_path {
                    write!(f, " in layout file '{path}'")?;
                }
                if let Some(line) = line_number {
                    write!(f, " at line {line}")?;
                }
                write!(f, ": {source}")
            }
            LayoutError::Validation { issues, file_path } => {
                write!(f, "Layout validation failed")?;
                if let Some(path) = file_path {
                    write!(f, " for '{path}'")?;
                }
                writeln!(f, " with {} issue(s):", issues.len())?;
                for (i, issue) in issues.iter().enumerate() {
                    write!(f, "  {}. {}", i + 1, issue)?;
                    if i < issues.len() - 1 {
                        writeln!(f)?;
                    }
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LayoutError::Io { source, .. } => Some(source),
            LayoutError::Json { source, .. } => Some(source),
            LayoutError::Validation { .. } => None,
        }
    }
}

impl From<std::io::Error> for LayoutError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            source: err,
            file_path: None,
        }
    }
}

impl From<serde_json::Error> for LayoutError {
    fn from(err: serde_json::Error) -> Self {
        Self::json(err)
    }
}

// ============================================================================
// Tests
// ============================================================================
