use super::ElementId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Key went down, before any character is inserted
    KeyDown,
    /// Key released, after the host applied its default action
    KeyUp,
    /// Printable character about to be inserted
    KeyPress,
    Click,
}

/// A single dispatched event
///
/// `key_code` carries the key code for `KeyDown`/`KeyUp` and the character
/// code for `KeyPress`; it is 0 for clicks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomEvent {
    pub kind: EventKind,
    pub target: ElementId,
    pub key_code: u32,
    default_prevented: bool,
}

impl DomEvent {
    pub fn new(kind: EventKind, target: ElementId, key_code: u32) -> Self {
        Self {
            kind,
            target,
            key_code,
            default_prevented: false,
        }
    }

    pub fn key_down(target: ElementId, key_code: u32) -> Self {
        Self::new(EventKind::KeyDown, target, key_code)
    }

    pub fn key_up(target: ElementId, key_code: u32) -> Self {
        Self::new(EventKind::KeyUp, target, key_code)
    }

    pub fn key_press(target: ElementId, ch: char) -> Self {
        Self::new(EventKind::KeyPress, target, ch as u32)
    }

    pub fn click(target: ElementId) -> Self {
        Self::new(EventKind::Click, target, 0)
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// The pressed character, for `KeyPress` events
    pub fn char(&self) -> Option<char> {
        char::from_u32(self.key_code)
    }
}
