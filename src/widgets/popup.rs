use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Area directly under `anchor`, clipped to the bottom of `bounds`
pub fn popup_below_anchor(anchor: Rect, bounds: Rect, width: u16, height: u16, x_offset: u16) -> Rect {
    let popup_x = anchor.x + x_offset;
    let popup_y = anchor.y.saturating_add(anchor.height);
    let bottom = bounds.y.saturating_add(bounds.height);

    Rect {
        x: popup_x,
        y: popup_y,
        width: width.min(anchor.width.saturating_sub(x_offset * 2)),
        height: height.min(bottom.saturating_sub(popup_y)),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
