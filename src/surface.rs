// SPDX-License-Identifier: GPL-3.0-only

//! The rendering surface the keyboard core writes to.
//!
//! The core never builds widgets itself; it pushes per-key labels, per-key
//! active flags, and the text buffer state through this trait. A host embeds
//! the core by implementing [`RenderSurface`] over its own widget tree.

use crate::layout::KeyCode;
use std::collections::HashMap;

/// External sink for everything the keyboard core renders.
pub trait RenderSurface {
    /// Updates the display string of one key.
    fn set_key_label(&mut self, code: &KeyCode, label: &str);

    /// Marks or unmarks one key as visually active.
    fn set_key_active(&mut self, code: &KeyCode, active: bool);

    /// Reflects the buffer content and selection in the text widget.
    fn set_buffer(&mut self, content: &str, selection_start: usize, selection_end: usize);
}

/// An in-memory surface that records the latest state pushed to it.
///
/// Used by the tests and the demo binary; doubles as a reference for what a
/// real surface implementation receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    labels: HashMap<KeyCode, String>,
    active: HashMap<KeyCode, bool>,
    buffer: String,
    selection: (usize, usize),
    /// Number of individual label updates received.
    label_updates: usize,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The last label pushed for a key.
    #[must_use]
    pub fn label(&self, code: &KeyCode) -> Option<&str> {
        self.labels.get(code).map(String::as_str)
    }

    /// Whether a key is currently marked active.
    #[must_use]
    pub fn is_active(&self, code: &KeyCode) -> bool {
        self.active.get(code).copied().unwrap_or(false)
    }

    /// The last buffer content pushed.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// The last selection range pushed.
    #[must_use]
    pub fn selection(&self) -> (usize, usize) {
        self.selection
    }

    /// Total label updates seen, across all keys.
    #[must_use]
    pub fn label_updates(&self) -> usize {
        self.label_updates
    }
}

impl RenderSurface for RecordingSurface {
    fn set_key_label(&mut self, code: &KeyCode, label: &str) {
        self.labels.insert(code.clone(), label.to_string());
        self.label_updates += 1;
    }

    fn set_key_active(&mut self, code: &KeyCode, active: bool) {
        self.active.insert(code.clone(), active);
    }

    fn set_buffer(&mut self, content: &str, selection_start: usize, selection_end: usize) {
        self.buffer = content.to_string();
        self.selection = (selection_start, selection_end);
    }
}

// ============================================================================
// Tests
// ============================================================================
