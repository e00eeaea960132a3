// SPDX-License-Identifier: GPL-3.0-only

//! Edge-triggered EN/RU language switching on the Shift+Alt chord.
//!
//! The switch fires exactly once per rising edge of "shift and alt both
//! active". While the chord stays held, further events do not re-fire;
//! releasing and re-pressing one half of the chord arms it again.

use crate::layout::{Language, Modifiers};

/// Tracks the active language and the Shift+Alt chord edge.
#[derive(Debug, Clone)]
pub struct LanguageSwitch {
    current: Language,
    /// Whether the chord was active at the previous evaluation.
    chord_active: bool,
}

impl LanguageSwitch {
    /// Starts from a restored (or default) language.
    #[must_use]
    pub fn new(initial: Language) -> Self {
        Self {
            current: initial,
            chord_active: false,
        }
    }

    #[must_use]
    pub fn current(&self) -> Language {
        self.current
    }

    /// Re-evaluates the chord against a fresh modifier snapshot.
    ///
    /// Returns the new language when a flip fired, `None` otherwise. The
    /// caller persists the returned value.
    pub fn evaluate(&mut self, modifiers: &Modifiers) -> Option<Language> {
        let chord = modifiers.shift && modifiers.alt;
        let rising_edge = chord && !self.chord_active;
        self.chord_active = chord;

        if rising_edge {
            self.current = self.current.toggled();
            Some(self.current)
        } else {
            None
        }
    }
}

impl Default for LanguageSwitch {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

// ============================================================================
// Tests
// ============================================================================
