// SPDX-License-Identifier: GPL-3.0-only

//! Duoboard - a bilingual (EN/RU) virtual keyboard core.
//!
//! This crate implements the state and editing logic behind an on-screen
//! keyboard that mirrors physical key presses, switches between an English
//! and a Russian layout on the Shift+Alt chord, and edits a text buffer with
//! a selection range.
//!
//! # Architecture
//!
//! Input events from two channels (physical keys and pointer clicks on
//! rendered keys) flow through a fixed synchronous pipeline:
//!
//! 1. the modifier tracker reconciles press/release events into a snapshot
//!    of shift, alt, and caps-lock;
//! 2. the language switch watches that snapshot for the Shift+Alt rising
//!    edge and persists every flip;
//! 3. the text variant resolver recomputes each key's display string;
//! 4. committing keys mutate the text buffer;
//! 5. results are pushed to an external rendering surface.
//!
//! Widget construction, event registration, and styling stay on the host
//! side of the [`surface::RenderSurface`] trait.
//!
//! # Modules
//!
//! - `app_settings`: centralized application constants
//! - `editor`: text buffer with selection, editing and navigation commands
//! - `input`: modifier tracking, language switching, variant resolution
//! - `layout`: key descriptor model and the JSON key-list parser
//! - `prefs`: persisted language preference
//! - `session`: the `KeyboardSession` owning all mutable keyboard state
//! - `surface`: the rendering-surface trait and a recording test double

pub mod app_settings;
pub mod editor;
pub mod input;
pub mod layout;
pub mod prefs;
pub mod session;
pub mod surface;

pub use editor::TextBuffer;
pub use input::{EventFlags, InputSource, KeyEvent, KeyState};
pub use layout::{Key, KeyCode, Language, LayoutError, Modifiers};
pub use session::KeyboardSession;
pub use surface::RenderSurface;

// ============================================================================
// Integration Tests
// ============================================================================
