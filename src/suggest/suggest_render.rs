//! Suggestion list rendering
//!
//! Draws the widget's visible options in a popup under the input field.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use crate::dom::{Document, ElementId};
use crate::widgets::popup;

use super::suggest_state::{DomainOption, DomainSuggest};

// Suggestion popup display constants
const MAX_VISIBLE_SUGGESTIONS: usize = 8;
const MAX_POPUP_WIDTH: usize = 48;
const MIN_POPUP_WIDTH: usize = 12;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 1;

/// Where the list ended up on screen and which option sits on each row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedList {
    pub area: Rect,
    pub rows: Vec<ElementId>,
}

impl RenderedList {
    /// Option under a screen position, if any
    pub fn option_at(&self, column: u16, row: u16) -> Option<ElementId> {
        let inner_top = self.area.y + 1;
        let inner_bottom = self.area.y + self.area.height.saturating_sub(1);
        let inside_x = column > self.area.x && column < self.area.x + self.area.width.saturating_sub(1);
        if !inside_x || row < inner_top || row >= inner_bottom {
            return None;
        }
        self.rows.get((row - inner_top) as usize).copied()
    }
}

/// Popup width and height needed for the given visible options
pub fn suggestion_list_size(visible: &[&DomainOption]) -> (u16, u16) {
    let text_width = visible
        .iter()
        .map(|o| o.domain.width())
        .max()
        .unwrap_or(0)
        .clamp(MIN_POPUP_WIDTH, MAX_POPUP_WIDTH);
    let rows = visible.len().min(MAX_VISIBLE_SUGGESTIONS) as u16;
    (text_width as u16 + POPUP_PADDING, rows + POPUP_BORDER_HEIGHT)
}

/// First visible row that keeps the selection within `rows` drawn rows
fn scroll_offset(visible: &[&DomainOption], rows: usize) -> usize {
    visible
        .iter()
        .position(|o| o.selected)
        .map_or(0, |pos| pos.saturating_sub(rows.saturating_sub(1)))
}

/// Render the suggestion list below `input_area`; nothing is drawn while hidden
pub fn render_list(
    frame: &mut Frame,
    doc: &Document,
    widget: &DomainSuggest,
    input_area: Rect,
) -> Option<RenderedList> {
    if !widget.is_list_visible(doc) {
        return None;
    }
    let views = widget.option_views(doc);
    let visible: Vec<&DomainOption> = views.iter().filter(|o| o.visible).collect();
    if visible.is_empty() {
        return None;
    }

    let (width, height) = suggestion_list_size(&visible);
    let area = popup::popup_below_anchor(input_area, frame.area(), width, height, POPUP_OFFSET_X);
    if area.height <= POPUP_BORDER_HEIGHT {
        return None;
    }

    // The popup may be clipped at the screen bottom
    let inner_rows = area.height.saturating_sub(POPUP_BORDER_HEIGHT) as usize;
    let offset = scroll_offset(&visible, inner_rows);
    let shown: Vec<&DomainOption> = visible
        .iter()
        .skip(offset)
        .take(inner_rows)
        .copied()
        .collect();

    let items: Vec<ListItem> = shown
        .iter()
        .map(|option| {
            let line = if option.selected {
                // Highlight selected item with high contrast colors
                Line::from(Span::styled(
                    format!("► {}", option.domain),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}", option.domain),
                    Style::default().fg(Color::White).bg(Color::Black),
                ))
            };
            ListItem::new(line)
        })
        .collect();

    // Clear the background area to prevent transparency
    popup::clear_area(frame, area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Domains ")
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(list, area);

    Some(RenderedList {
        area,
        rows: shown.iter().map(|o| o.element).collect(),
    })
}

#[cfg(test)]
#[path = "suggest_render_tests.rs"]
mod suggest_render_tests;
