// SPDX-License-Identifier: GPL-3.0-only

//! Text variant resolution: which string a key displays and inserts.
//!
//! `resolve` is a pure function of the descriptor, the modifier snapshot,
//! and the active language. It must be recomputed for every rendered key
//! whenever modifiers or language change.

use crate::layout::{Key, Language, Modifiers};

/// Computes the display/insert string for a key.
///
/// 1. Pick the variant family: shift text if shift is active and the key has
///    one, otherwise base text.
/// 2. Select the family's string for the active language (plain labels fill
///    both language slots at parse time).
/// 3. If caps-lock is latched and the result is a single Latin or Cyrillic
///    letter, invert its case relative to shift: shifted letters go
///    lowercase, unshifted ones uppercase. Caps-lock XOR shift decides
///    letter case; everything else passes through unchanged.
#[must_use]
pub fn resolve(key: &Key, modifiers: &Modifiers, language: Language) -> String {
    let label = if modifiers.shift {
        key.shift(language).unwrap_or_else(|| key.base(language))
    } else {
        key.base(language)
    };

    if modifiers.caps_lock && is_single_letter(label) {
        if modifiers.shift {
            label.to_lowercase()
        } else {
            label.to_uppercase()
        }
    } else {
        label.to_string()
    }
}

/// True for a single Latin or Cyrillic letter (`[a-zA-Zа-яА-ЯёЁ]`).
fn is_single_letter(s: &str) -> bool {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            c.is_ascii_alphabetic()
                || ('а'..='я').contains(&c)
                || ('А'..='Я').contains(&c)
                || c == 'ё'
                || c == 'Ё'
        }
        _ => false,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{KeyCode, LabelText};

    fn letter_key() -> Key {
        Key::new(
            KeyCode::Printable("KeyQ".to_string()),
            LabelText::Localized {
                en: "q".to_string(),
                ru: "й".to_string(),
            },
            Some(LabelText::Localized {
                en: "Q".to_string(),
                ru: "Й".to_string(),
            }),
        )
    }

    fn digit_key() -> Key {
        Key::new(
            KeyCode::Printable("Digit2".to_string()),
            LabelText::Plain("2".to_string()),
            Some(LabelText::Localized {
                en: "@".to_string(),
                ru: "\"".to_string(),
            }),
        )
    }

    fn enter_key() -> Key {
        Key::new(KeyCode::Enter, LabelText::Plain("Enter".to_string()), None)
    }

    fn mods(shift: bool, caps_lock: bool) -> Modifiers {
        Modifiers {
            shift,
            alt: false,
            caps_lock,
        }
    }

    /// Base and shift families select by language.
    #[test]
    fn test_family_and_language_selection() {
        let key = letter_key();

        assert_eq!(resolve(&key, &mods(false, false), Language::En), "q");
        assert_eq!(resolve(&key, &mods(false, false), Language::Ru), "й");
        assert_eq!(resolve(&key, &mods(true, false), Language::En), "Q");
        assert_eq!(resolve(&key, &mods(true, false), Language::Ru), "Й");

        let digit = digit_key();
        assert_eq!(resolve(&digit, &mods(false, false), Language::Ru), "2");
        assert_eq!(resolve(&digit, &mods(true, false), Language::En), "@");
        assert_eq!(resolve(&digit, &mods(true, false), Language::Ru), "\"");
    }

    /// A key without a shift variant falls back to its base text.
    #[test]
    fn test_missing_shift_family_falls_back() {
        let key = enter_key();
        assert_eq!(resolve(&key, &mods(true, false), Language::En), "Enter");
    }

    /// Caps-lock XOR shift decides letter case, for both alphabets.
    #[test]
    fn test_caps_shift_case_law() {
        let key = letter_key();

        // caps only: uppercase
        assert_eq!(resolve(&key, &mods(false, true), Language::En), "Q");
        assert_eq!(resolve(&key, &mods(false, true), Language::Ru), "Й");
        // caps + shift: lowercase
        assert_eq!(resolve(&key, &mods(true, true), Language::En), "q");
        assert_eq!(resolve(&key, &mods(true, true), Language::Ru), "й");
        // neither: base case
        assert_eq!(resolve(&key, &mods(false, false), Language::En), "q");
    }

    /// Caps-lock leaves non-letters and multi-char labels alone.
    #[test]
    fn test_caps_ignores_non_letters() {
        let digit = digit_key();
        assert_eq!(resolve(&digit, &mods(false, true), Language::En), "2");
        assert_eq!(resolve(&digit, &mods(true, true), Language::En), "@");

        let enter = enter_key();
        assert_eq!(resolve(&enter, &mods(false, true), Language::En), "Enter");
    }

    /// Same inputs always produce the same output.
    #[test]
    fn test_resolve_is_pure() {
        let key = letter_key();
        let m = mods(true, true);

        let first = resolve(&key, &m, Language::Ru);
        for _ in 0..5 {
            assert_eq!(resolve(&key, &m, Language::Ru), first);
        }
    }

    /// The letter test matches exactly the two alphabets.
    #[test]
    fn test_is_single_letter() {
        assert!(is_single_letter("a"));
        assert!(is_single_letter("Z"));
        assert!(is_single_letter("ж"));
        assert!(is_single_letter("Ю"));
        assert!(is_single_letter("ё"));
        assert!(!is_single_letter("5"));
        assert!(!is_single_letter("@"));
        assert!(!is_single_letter("Enter"));
        assert!(!is_single_letter(""));
    }
}
