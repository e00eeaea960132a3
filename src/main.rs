// SPDX-License-Identifier: GPL-3.0-only

//! Demo binary: loads a key layout, replays a scripted input session, and
//! prints the resulting board and buffer.
//!
//! Pass a layout file path as the first argument to use a custom key list;
//! without arguments the bundled EN/RU board is used. The language
//! preference is persisted next to the working directory and restored on the
//! next run.

use duoboard::app_settings;
use duoboard::input::{EventFlags, KeyEvent, KeyState};
use duoboard::layout::{self, KeyCode};
use duoboard::prefs::PrefsStore;
use duoboard::session::KeyboardSession;
use duoboard::surface::RecordingSurface;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let keys = match std::env::args().nth(1) {
        Some(path) => layout::parse_layout_file(&path)?,
        None => layout::default_layout()?,
    };

    let prefs = PrefsStore::new(app_settings::PREFS_FILE_NAME);
    let mut session = KeyboardSession::with_prefs(keys, prefs);
    let mut surface = RecordingSurface::new();
    session.render_all(&mut surface);

    tracing::info!(language = %session.language(), "session started");

    // A short scripted session: type "Hi", switch language with the chord,
    // type one Russian letter, then clean it up again.
    let shift = EventFlags {
        shift: true,
        alt: false,
    };
    let chord = EventFlags {
        shift: true,
        alt: true,
    };
    let quiet = EventFlags::default();

    let script = [
        KeyEvent::physical(KeyCode::ShiftLeft, KeyState::Pressed, shift),
        KeyEvent::physical(key("KeyH"), KeyState::Pressed, shift),
        KeyEvent::physical(key("KeyH"), KeyState::Released, shift),
        KeyEvent::physical(KeyCode::ShiftLeft, KeyState::Released, quiet),
        KeyEvent::physical(key("KeyI"), KeyState::Pressed, quiet),
        KeyEvent::physical(key("KeyI"), KeyState::Released, quiet),
        // Language chord: shift down, alt down.
        KeyEvent::physical(KeyCode::ShiftLeft, KeyState::Pressed, shift),
        KeyEvent::physical(KeyCode::AltLeft, KeyState::Pressed, chord),
        KeyEvent::physical(KeyCode::AltLeft, KeyState::Released, shift),
        KeyEvent::physical(KeyCode::ShiftLeft, KeyState::Released, quiet),
        KeyEvent::physical(key("Space"), KeyState::Pressed, quiet),
        KeyEvent::physical(key("Space"), KeyState::Released, quiet),
        KeyEvent::physical(key("KeyF"), KeyState::Pressed, quiet),
        KeyEvent::physical(key("KeyF"), KeyState::Released, quiet),
        KeyEvent::physical(KeyCode::Backspace, KeyState::Pressed, quiet),
        KeyEvent::physical(KeyCode::Backspace, KeyState::Released, quiet),
    ];

    for event in &script {
        session.handle_event(event, &mut surface);
    }

    println!("language: {}", session.language());
    println!("switch chord: {}", app_settings::LANGUAGE_CHORD_HINT);
    println!("buffer: {:?}", session.buffer().content());
    let (start, end) = session.buffer().selection();
    println!("selection: ({start}, {end})");

    Ok(())
}

fn key(code: &str) -> KeyCode {
    KeyCode::from(code.to_string())
}
