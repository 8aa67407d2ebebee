use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::app_state::App;
use crate::suggest::render_list;

const INPUT_HEIGHT: u16 = 3;
const KEY_HINTS: &str = " ↑/↓ choose  Enter accept  Esc close  Ctrl+C quit";

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let [input_area, _, status_area] = Layout::vertical([
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.render_input(frame, input_area);
        self.render_status(frame, status_area);

        // Popup goes last so it draws over everything else
        self.list_layout = self
            .widget()
            .and_then(|widget| render_list(frame, &self.document, widget, input_area));
    }

    fn render_input(&self, frame: &mut Frame, area: Rect) {
        let border_color = if self.is_list_visible() {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Email ")
            .border_style(Style::default().fg(border_color));

        let inner_width = area.width.saturating_sub(2) as usize;
        let before_cursor = &self.value()[..self.byte_offset(self.cursor)];
        let cursor_col = before_cursor.width();
        // Scroll horizontally so the cursor stays inside the box
        let scroll = (cursor_col + 1).saturating_sub(inner_width) as u16;

        let input = Paragraph::new(self.value())
            .block(block)
            .scroll((0, scroll));
        frame.render_widget(input, area);

        if area.width > 2 && area.height > 2 {
            let x = area.x + 1 + (cursor_col as u16).saturating_sub(scroll);
            frame.set_cursor_position(Position::new(x, area.y + 1));
        }
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.warning {
            Some(warning) => Line::from(Span::styled(
                format!(" {}", warning),
                Style::default().fg(Color::Yellow),
            )),
            None => Line::from(Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray))),
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
