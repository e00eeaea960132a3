// SPDX-License-Identifier: GPL-3.0-only

//! The keyboard session: one object owning all mutable keyboard state.
//!
//! [`KeyboardSession`] ties the pieces together per input event, in a fixed
//! synchronous order: modifier tracking, language switching, label
//! resolution, buffer editing, surface updates. Each event is processed to
//! completion before the next one is accepted; there is no background work.

use crate::editor::TextBuffer;
use crate::input::{resolve, InputSource, KeyEvent, KeyState, LanguageSwitch, ModifierTracker};
use crate::layout::{Key, KeyCode, Language, Modifiers};
use crate::prefs::PrefsStore;
use crate::surface::RenderSurface;

/// Owns the modifier state, the language state, and the text buffer.
#[derive(Debug)]
pub struct KeyboardSession {
    keys: Vec<Key>,
    tracker: ModifierTracker,
    switch: LanguageSwitch,
    buffer: TextBuffer,
    prefs: Option<PrefsStore>,
}

impl KeyboardSession {
    /// A session over a key list, starting in the default language.
    #[must_use]
    pub fn new(keys: Vec<Key>) -> Self {
        Self {
            keys,
            tracker: ModifierTracker::new(),
            switch: LanguageSwitch::default(),
            buffer: TextBuffer::new(),
            prefs: None,
        }
    }

    /// A session that restores the language from the preference store and
    /// persists every switch back to it.
    #[must_use]
    pub fn with_prefs(keys: Vec<Key>, prefs: PrefsStore) -> Self {
        let initial = prefs.load_language().unwrap_or_default();
        Self {
            keys,
            tracker: ModifierTracker::new(),
            switch: LanguageSwitch::new(initial),
            buffer: TextBuffer::new(),
            prefs: Some(prefs),
        }
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.switch.current()
    }

    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        self.tracker.modifiers()
    }

    #[must_use]
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Paints the full keyboard and buffer onto a surface.
    ///
    /// Called once after construction; afterwards `handle_event` pushes
    /// incremental updates.
    pub fn render_all(&self, surface: &mut dyn RenderSurface) {
        self.render_labels(surface);
        let (start, end) = self.buffer.selection();
        surface.set_buffer(self.buffer.content(), start, end);
    }

    /// Processes one input event to completion.
    ///
    /// Unknown key codes are ignored with a debug log and no state change.
    pub fn handle_event(&mut self, event: &KeyEvent, surface: &mut dyn RenderSurface) {
        let Some(key) = self.keys.iter().find(|k| k.code == event.code).cloned() else {
            tracing::debug!(code = %event.code, "ignoring event for unknown key");
            return;
        };

        let modifiers_changed = self.tracker.handle(event);
        self.mark_key(&event.code, event.state, surface);

        let modifiers = self.tracker.modifiers();
        let language_changed = match self.switch.evaluate(&modifiers) {
            Some(language) => {
                tracing::info!(%language, "layout language switched");
                self.persist_language(language);
                true
            }
            None => false,
        };

        if modifiers_changed || language_changed {
            self.render_labels(surface);
        }

        if commits(event) && !key.code.is_modifier() {
            let resolved = resolve(&key, &modifiers, self.switch.current());
            self.buffer.apply(&key.code, &resolved);
            let (start, end) = self.buffer.selection();
            surface.set_buffer(self.buffer.content(), start, end);
        }
    }

    /// Marks the key active on press and inactive on release, except
    /// caps-lock, which stays marked while latched.
    fn mark_key(&self, code: &KeyCode, state: KeyState, surface: &mut dyn RenderSurface) {
        match state {
            KeyState::Pressed => surface.set_key_active(code, true),
            KeyState::Released => {
                let active = *code == KeyCode::CapsLock && self.tracker.modifiers().caps_lock;
                surface.set_key_active(code, active);
            }
        }
    }

    /// Re-resolves and pushes every key label.
    fn render_labels(&self, surface: &mut dyn RenderSurface) {
        let modifiers = self.tracker.modifiers();
        let language = self.switch.current();
        for key in &self.keys {
            surface.set_key_label(&key.code, &resolve(key, &modifiers, language));
        }
    }

    fn persist_language(&self, language: Language) {
        if let Some(prefs) = &self.prefs {
            if let Err(err) = prefs.store_language(language) {
                tracing::warn!(%err, "failed to persist language preference");
            }
        }
    }
}

/// Whether this event commits an editing action.
///
/// Physical keys commit on release, pointer keys on press, matching the
/// keyup/mousedown split of the original interaction model.
fn commits(event: &KeyEvent) -> bool {
    matches!(
        (event.source, event.state),
        (InputSource::Physical, KeyState::Released) | (InputSource::Pointer, KeyState::Pressed)
    )
}

// ============================================================================
// Tests
// ============================================================================
