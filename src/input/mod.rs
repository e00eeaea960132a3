// SPDX-License-Identifier: GPL-3.0-only

//! Input handling: modifier tracking, language switching, and text variant
//! resolution.
//!
//! Events flow through this module in a fixed order: the
//! [`ModifierTracker`] reconciles press/release events from the physical and
//! pointer channels into a [`Modifiers`](crate::layout::Modifiers) snapshot,
//! the [`LanguageSwitch`] watches that snapshot for the Shift+Alt chord, and
//! [`resolve`] turns a descriptor plus snapshot plus language into the exact
//! string a key displays and inserts.

pub mod language;
pub mod modifier;
pub mod resolver;

pub use language::LanguageSwitch;
pub use modifier::{EventFlags, InputSource, KeyEvent, KeyState, ModifierTracker};
pub use resolver::resolve;

// ============================================================================
// Module tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Key, KeyCode, LabelText, Language};

    /// Tracker snapshot feeds straight into the resolver: holding shift via
    /// pointer changes what a physical letter key resolves to.
    #[test]
    fn test_tracker_snapshot_drives_resolution() {
        let key = Key::new(
            KeyCode::Printable("KeyW".to_string()),
            LabelText::Localized {
                en: "w".to_string(),
                ru: "ц".to_string(),
            },
            Some(LabelText::Localized {
                en: "W".to_string(),
                ru: "Ц".to_string(),
            }),
        );

        let mut tracker = ModifierTracker::new();
        assert_eq!(resolve(&key, &tracker.modifiers(), Language::En), "w");

        tracker.handle(&KeyEvent::pointer(KeyCode::ShiftLeft, KeyState::Pressed));
        assert_eq!(resolve(&key, &tracker.modifiers(), Language::En), "W");
        assert_eq!(resolve(&key, &tracker.modifiers(), Language::Ru), "Ц");
    }

    /// The chord detected from tracked modifiers flips the language once,
    /// and re-pressing alt while shift stays held flips again only after the
    /// chord dropped.
    #[test]
    fn test_chord_from_tracked_modifiers() {
        let mut tracker = ModifierTracker::new();
        let mut switch = LanguageSwitch::new(Language::En);

        tracker.handle(&KeyEvent::physical(
            KeyCode::ShiftLeft,
            KeyState::Pressed,
            EventFlags {
                shift: true,
                alt: false,
            },
        ));
        assert_eq!(switch.evaluate(&tracker.modifiers()), None);

        tracker.handle(&KeyEvent::physical(
            KeyCode::AltLeft,
            KeyState::Pressed,
            EventFlags {
                shift: true,
                alt: true,
            },
        ));
        assert_eq!(switch.evaluate(&tracker.modifiers()), Some(Language::Ru));

        // Alt released, shift still held: no flip.
        tracker.handle(&KeyEvent::physical(
            KeyCode::AltLeft,
            KeyState::Released,
            EventFlags {
                shift: true,
                alt: false,
            },
        ));
        assert_eq!(switch.evaluate(&tracker.modifiers()), None);

        // Alt pressed again: a fresh rising edge.
        tracker.handle(&KeyEvent::physical(
            KeyCode::AltLeft,
            KeyState::Pressed,
            EventFlags {
                shift: true,
                alt: true,
            },
        ));
        assert_eq!(switch.evaluate(&tracker.modifiers()), Some(Language::En));
    }
}
