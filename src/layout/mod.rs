// SPDX-License-Identifier: GPL-3.0-only

//! Keyboard layout: key descriptors and the JSON key-list parser.
//!
//! A layout is an ordered list of [`Key`] descriptors. Each descriptor pairs
//! a stable [`KeyCode`] with up to four text variants (base/shift for each of
//! EN and RU), resolved once at parse time.

pub mod parser;
pub mod types;

pub use parser::{default_layout, parse_layout_file, parse_layout_from_string};
pub use types::{Key, KeyCode, LabelText, Language, LayoutError, Modifiers, ValidationIssue};
