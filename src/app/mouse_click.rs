//! Mouse click handling
//!
//! Clicks on a rendered suggestion row become DOM clicks on that entry.

use super::app_state::App;
use crate::dom::DomEvent;

/// Handle left mouse button click at the given screen cell
pub fn handle_click(app: &mut App, column: u16, row: u16) {
    let Some(option) = app
        .list_layout
        .as_ref()
        .and_then(|list| list.option_at(column, row))
    else {
        return;
    };

    let mut click = DomEvent::click(option);
    app.dispatch(&mut click);
    app.cursor = app.char_len();
    app.list_layout = None;
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
