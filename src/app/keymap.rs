//! Terminal key to DOM key code translation

use ratatui::crossterm::event::KeyCode;

use crate::suggest::{KEY_DOWN, KEY_ENTER, KEY_ESCAPE, KEY_UP};

pub const KEY_BACKSPACE: u32 = 8;
pub const KEY_TAB: u32 = 9;
pub const KEY_END: u32 = 35;
pub const KEY_HOME: u32 = 36;
pub const KEY_LEFT: u32 = 37;
pub const KEY_RIGHT: u32 = 39;
pub const KEY_DELETE: u32 = 46;

/// Key code a browser would report on keydown/keyup, if the key has one
///
/// Letters and digits report their uppercase ASCII code. Other printable
/// characters report 0, so `&` or `(` can never look like an arrow key.
pub fn dom_key_code(code: KeyCode) -> Option<u32> {
    match code {
        KeyCode::Enter => Some(KEY_ENTER),
        KeyCode::Esc => Some(KEY_ESCAPE),
        KeyCode::Up => Some(KEY_UP),
        KeyCode::Down => Some(KEY_DOWN),
        KeyCode::Left => Some(KEY_LEFT),
        KeyCode::Right => Some(KEY_RIGHT),
        KeyCode::Home => Some(KEY_HOME),
        KeyCode::End => Some(KEY_END),
        KeyCode::Backspace => Some(KEY_BACKSPACE),
        KeyCode::Delete => Some(KEY_DELETE),
        KeyCode::Tab => Some(KEY_TAB),
        KeyCode::Char(c) if c.is_ascii_alphanumeric() => Some(c.to_ascii_uppercase() as u32),
        KeyCode::Char(_) => Some(0),
        _ => None,
    }
}
