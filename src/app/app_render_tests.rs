//! Tests for App rendering

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::test_utils::test_helpers::{app_with_value, test_app};

const TEST_WIDTH: u16 = 60;
const TEST_HEIGHT: u16 = 16;

fn render(app: &mut crate::app::App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(TEST_WIDTH, TEST_HEIGHT)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_render_shows_input_and_hints() {
    let mut app = app_with_value("john");
    let output = render(&mut app);
    assert!(output.contains("Email"));
    assert!(output.contains("john"));
    assert!(output.contains("Enter accept"));
    assert!(!output.contains("Domains"));
    assert!(app.list_layout.is_none());
}

#[test]
fn test_render_shows_suggestions_below_input() {
    let mut app = app_with_value("jo@");
    let output = render(&mut app);
    assert!(output.contains("Domains"));
    assert!(output.contains("gmail.com"));
    assert!(output.contains("example.com"));

    let list = app.list_layout.clone().unwrap();
    assert_eq!(list.area.y, 3);
    assert_eq!(list.rows.len(), 4);
}

#[test]
fn test_render_shows_warning_instead_of_hints() {
    let mut app = test_app();
    app.warning = Some("Invalid config file: boom".to_string());
    let output = render(&mut app);
    assert!(output.contains("Invalid config file: boom"));
    assert!(!output.contains("Enter accept"));
}

#[test]
fn test_render_long_value_keeps_tail_visible() {
    let long = format!("{}@example.com", "a".repeat(80));
    let mut app = app_with_value(&long);
    let output = render(&mut app);
    assert!(output.contains("@example.com"));
}
