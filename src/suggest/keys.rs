//! Key codes the widget reacts to

pub const KEY_ENTER: u32 = 13;
pub const KEY_ESCAPE: u32 = 27;
pub const KEY_UP: u32 = 38;
pub const KEY_DOWN: u32 = 40;

/// Character codes seen by keypress
pub const CHAR_AT: u32 = 64;
pub const CHAR_SPACE: u32 = 32;

/// What a keydown means to the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Commit,
    Dismiss,
    SelectPrevious,
    SelectNext,
}

impl KeyAction {
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            KEY_ENTER => Some(KeyAction::Commit),
            KEY_ESCAPE => Some(KeyAction::Dismiss),
            KEY_UP => Some(KeyAction::SelectPrevious),
            KEY_DOWN => Some(KeyAction::SelectNext),
            _ => None,
        }
    }

    /// Keyup of these keys leaves the filter alone
    pub fn skips_filter(code: u32) -> bool {
        matches!(code, KEY_ENTER | KEY_ESCAPE)
    }
}
