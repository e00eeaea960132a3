// SPDX-License-Identifier: GPL-3.0-only

//! Centralized application constants.

/// Application ID in RDNN (reverse domain name notation) format.
pub const APP_ID: &str = "io.github.duoboard.Duoboard";

/// File name of the persisted preference store.
pub const PREFS_FILE_NAME: &str = "duoboard-prefs.json";

/// Human-readable description of the language-switch chord.
pub const LANGUAGE_CHORD_HINT: &str = "shift + alt";
