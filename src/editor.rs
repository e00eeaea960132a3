// SPDX-License-Identifier: GPL-3.0-only

//! Text buffer editing: insertion, deletion, and cursor navigation.
//!
//! The buffer owns its content and a selection range. All positions are
//! counted in characters (the content mixes Latin and Cyrillic, so byte
//! offsets are an internal detail) and every operation clamps into
//! `[0, len]`; out-of-range navigation saturates at the buffer boundaries
//! instead of failing.
//!
//! Each mutation computes the new content and the new cursor together, then
//! publishes both, so observers never see a half-applied edit.

use crate::layout::KeyCode;

/// A mutable text buffer with a selection range.
///
/// Invariant: `0 <= selection_start <= selection_end <= content chars`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    content: String,
    selection_start: usize,
    selection_end: usize,
}

impl TextBuffer {
    /// An empty buffer with a collapsed cursor at 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a buffer from existing content and a selection, clamping the
    /// range into the content and ordering start before end.
    #[must_use]
    pub fn from_parts(content: impl Into<String>, start: usize, end: usize) -> Self {
        let content = content.into();
        let len = content.chars().count();
        let start = start.min(len);
        let end = end.min(len);

        Self {
            content,
            selection_start: start.min(end),
            selection_end: start.max(end),
        }
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The selection range in characters.
    #[must_use]
    pub fn selection(&self) -> (usize, usize) {
        (self.selection_start, self.selection_end)
    }

    /// Content length in characters.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.content.chars().count()
    }

    /// Moves the collapsed cursor, clamped to the content.
    pub fn set_cursor(&mut self, position: usize) {
        let position = position.min(self.len_chars());
        self.selection_start = position;
        self.selection_end = position;
    }

    /// Sets the selection range, clamped and ordered.
    pub fn set_selection(&mut self, start: usize, end: usize) {
        let len = self.len_chars();
        let start = start.min(len);
        let end = end.min(len);
        self.selection_start = start.min(end);
        self.selection_end = start.max(end);
    }

    /// Applies one key action.
    ///
    /// `resolved` is the string the resolver computed for the key; it is
    /// consumed only by printable keys. Modifier and system codes leave the
    /// buffer untouched.
    pub fn apply(&mut self, code: &KeyCode, resolved: &str) {
        match code {
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete_forward(),
            KeyCode::Tab => self.insert("\t"),
            KeyCode::Enter => self.insert("\n"),
            KeyCode::Space => self.insert(" "),
            KeyCode::ArrowLeft => self.arrow_left(),
            KeyCode::ArrowRight => self.arrow_right(),
            KeyCode::ArrowUp => self.arrow_up(),
            KeyCode::ArrowDown => self.arrow_down(),
            KeyCode::Printable(_) => self.insert(resolved),
            KeyCode::CapsLock
            | KeyCode::ShiftLeft
            | KeyCode::ShiftRight
            | KeyCode::ControlLeft
            | KeyCode::ControlRight
            | KeyCode::Win
            | KeyCode::AltLeft
            | KeyCode::AltRight => {}
        }
    }

    /// Replaces the selection with `text` and collapses the cursor after it.
    pub fn insert(&mut self, text: &str) {
        let start = self.selection_start;
        let start_byte = self.byte_offset(start);
        let end_byte = self.byte_offset(self.selection_end);

        let mut next = String::with_capacity(self.content.len() + text.len());
        next.push_str(&self.content[..start_byte]);
        next.push_str(text);
        next.push_str(&self.content[end_byte..]);

        self.content = next;
        self.set_cursor(start + text.chars().count());
    }

    /// Deletes the selection, or the character before the cursor.
    ///
    /// No-op at the start of the buffer with a collapsed cursor.
    pub fn backspace(&mut self) {
        let (start, end) = (self.selection_start, self.selection_end);
        if start == end {
            if start == 0 {
                return;
            }
            self.remove_range(start - 1, end);
            self.set_cursor(start - 1);
        } else {
            self.remove_range(start, end);
            self.set_cursor(start);
        }
    }

    /// Deletes the selection, or the character after the cursor.
    ///
    /// No-op at the end of the buffer with a collapsed cursor.
    pub fn delete_forward(&mut self) {
        let (start, end) = (self.selection_start, self.selection_end);
        if start == end {
            if end == self.len_chars() {
                return;
            }
            self.remove_range(start, end + 1);
        } else {
            self.remove_range(start, end);
        }
        self.set_cursor(start);
    }

    /// One character left, saturating at 0.
    pub fn arrow_left(&mut self) {
        self.set_cursor(self.selection_start.saturating_sub(1));
    }

    /// One character right, clamped to the content length.
    pub fn arrow_right(&mut self) {
        self.set_cursor(self.selection_start + 1);
    }

    /// Moves to the nearest newline strictly before the selection start, or
    /// to 0 if the cursor is on the first line.
    ///
    /// The cursor lands on the newline index itself, not on a
    /// column-preserving position in the previous line.
    pub fn arrow_up(&mut self) {
        let target = self
            .content
            .chars()
            .take(self.selection_start)
            .enumerate()
            .filter(|(_, c)| *c == '\n')
            .map(|(i, _)| i)
            .last()
            .unwrap_or(0);
        self.set_cursor(target);
    }

    /// Moves one past the nearest newline at or after the selection end, or
    /// to the end of the content if there is none.
    pub fn arrow_down(&mut self) {
        let target = self
            .content
            .chars()
            .enumerate()
            .skip(self.selection_end)
            .find(|(_, c)| *c == '\n')
            .map_or(self.len_chars(), |(i, _)| i + 1);
        self.set_cursor(target);
    }

    /// Removes the character range `[start, end)`, both in characters.
    fn remove_range(&mut self, start: usize, end: usize) {
        let start_byte = self.byte_offset(start);
        let end_byte = self.byte_offset(end);
        self.content.replace_range(start_byte..end_byte, "");
    }

    /// Byte offset of a character position; `len` maps to the content end.
    fn byte_offset(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map_or(self.content.len(), |(byte, _)| byte)
    }
}

// ============================================================================
// Tests
// ============================================================================
