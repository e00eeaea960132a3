// SPDX-License-Identifier: GPL-3.0-only

//! Modifier state tracking across the two input channels.
//!
//! Press/release events arrive from a physical keyboard and from pointer
//! clicks on rendered keys. The two channels are reconciled with one fixed
//! policy:
//!
//! - **Physical events** carry their own modifier flags, and those flags are
//!   ground truth: every physical event re-derives the physical shift/alt
//!   level from them. A physical event without flags falls back to discrete
//!   press/release pairing.
//! - **Pointer events** use explicit press/release pairing: a press of a
//!   shift/alt key records which code is held, and only a release of that
//!   same code clears it.
//!
//! The effective level of each modifier is the OR of the two channels, so a
//! key held via pointer and "released" through a physical event's flags (or
//! vice versa) cannot leave a stuck state in the other channel.
//!
//! CapsLock is a latch: every release event flips it, from either channel.

use crate::layout::{KeyCode, Modifiers};

/// Which channel reported an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    /// A real key on the physical keyboard.
    Physical,
    /// A simulated press via a pointer click on a rendered key.
    Pointer,
}

/// Key transition carried by an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// The modifier flags a physical event reports about itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventFlags {
    pub shift: bool,
    pub alt: bool,
}

/// A discrete input event fed into the keyboard core.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub state: KeyState,
    pub source: InputSource,
    /// Present for physical events; pointer events have no flags.
    pub flags: Option<EventFlags>,
}

impl KeyEvent {
    /// A physical event with its own modifier flags.
    #[must_use]
    pub fn physical(code: KeyCode, state: KeyState, flags: EventFlags) -> Self {
        Self {
            code,
            state,
            source: InputSource::Physical,
            flags: Some(flags),
        }
    }

    /// A pointer-simulated event.
    #[must_use]
    pub fn pointer(code: KeyCode, state: KeyState) -> Self {
        Self {
            code,
            state,
            source: InputSource::Pointer,
            flags: None,
        }
    }
}

/// Tracks shift, alt, and caps-lock across both input channels.
#[derive(Debug, Clone, Default)]
pub struct ModifierTracker {
    /// Shift level reported by the physical channel.
    shift_physical: bool,
    /// Alt level reported by the physical channel.
    alt_physical: bool,
    /// Which shift code (left or right) is held via pointer, if any.
    shift_pointer: Option<KeyCode>,
    /// Which alt code is held via pointer, if any.
    alt_pointer: Option<KeyCode>,
    /// CapsLock latch.
    caps_lock: bool,
}

impl ModifierTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot for the resolver.
    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        Modifiers {
            shift: self.shift_physical || self.shift_pointer.is_some(),
            alt: self.alt_physical || self.alt_pointer.is_some(),
            caps_lock: self.caps_lock,
        }
    }

    /// Feeds one event into the tracker.
    ///
    /// Returns `true` if the snapshot changed, so the caller knows to
    /// re-resolve key labels.
    pub fn handle(&mut self, event: &KeyEvent) -> bool {
        let before = self.modifiers();

        match event.source {
            InputSource::Physical => self.handle_physical(event),
            InputSource::Pointer => self.handle_pointer(event),
        }

        if event.state == KeyState::Released && event.code == KeyCode::CapsLock {
            self.caps_lock = !self.caps_lock;
        }

        self.modifiers() != before
    }

    fn handle_physical(&mut self, event: &KeyEvent) {
        if let Some(flags) = event.flags {
            self.shift_physical = flags.shift;
            self.alt_physical = flags.alt;
            return;
        }

        // No flags available: pair discrete press/release like the pointer
        // channel.
        let held = event.state == KeyState::Pressed;
        if event.code.is_shift() {
            self.shift_physical = held;
        } else if event.code.is_alt() {
            self.alt_physical = held;
        }
    }

    fn handle_pointer(&mut self, event: &KeyEvent) {
        match event.state {
            KeyState::Pressed => {
                if event.code.is_shift() {
                    self.shift_pointer = Some(event.code.clone());
                } else if event.code.is_alt() {
                    self.alt_pointer = Some(event.code.clone());
                }
            }
            KeyState::Released => {
                if self.shift_pointer.as_ref() == Some(&event.code) {
                    self.shift_pointer = None;
                }
                if self.alt_pointer.as_ref() == Some(&event.code) {
                    self.alt_pointer = None;
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
