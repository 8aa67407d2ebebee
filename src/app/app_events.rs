use std::io;

use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use super::app_state::App;
use super::keymap::dom_key_code;
use super::mouse_click;
use crate::dom::DomEvent;

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
            _ => {}
        }
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }
        let Some(code) = dom_key_code(key.code) else {
            return;
        };

        let before = self.value().to_string();
        let mut down = DomEvent::key_down(self.input, code);
        self.dispatch(&mut down);
        if !down.is_default_prevented() {
            self.apply_default_action(key);
        } else if self.value() != before {
            // The widget rewrote the value
            self.cursor = self.char_len();
        }

        let mut up = DomEvent::key_up(self.input, code);
        self.dispatch(&mut up);
    }

    /// Handle keys that belong to the host rather than the field
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C: Exit without submitting
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        // Enter with no open list: submit the field
        if key.code == KeyCode::Enter && !self.is_list_visible() {
            self.submitted = true;
            self.should_quit = true;
            return true;
        }

        false
    }

    /// What the field does with a key nobody prevented
    fn apply_default_action(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let mut press = DomEvent::key_press(self.input, c);
                self.dispatch(&mut press);
                if !press.is_default_prevented() {
                    self.insert_char(c);
                }
            }
            KeyCode::Backspace => self.delete_before_cursor(),
            KeyCode::Delete => self.delete_at_cursor(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.char_len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.char_len(),
            _ => {}
        }
    }

    fn insert_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        let mut value = self.value().to_string();
        value.insert(at, c);
        self.set_value(&value);
        self.cursor += 1;
    }

    fn delete_before_cursor(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.delete_at_cursor();
    }

    fn delete_at_cursor(&mut self) {
        if self.cursor >= self.char_len() {
            return;
        }
        let at = self.byte_offset(self.cursor);
        let mut value = self.value().to_string();
        value.remove(at);
        self.set_value(&value);
    }

    /// Handle mouse events; only left clicks do anything
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            mouse_click::handle_click(self, mouse.column, mouse.row);
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
