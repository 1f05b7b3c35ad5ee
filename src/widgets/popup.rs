use ratatui::{Frame, layout::Rect, widgets::Clear};

pub fn popup_below_anchor(
    anchor: Rect,
    frame_area: Rect,
    width: u16,
    height: u16,
    x_offset: u16,
) -> Rect {
    let popup_x = anchor.x + x_offset;
    let popup_y = (anchor.y + anchor.height).min(frame_area.height);
    let available_below = frame_area.height.saturating_sub(popup_y);

    Rect {
        x: popup_x,
        y: popup_y,
        width: width.min(frame_area.width.saturating_sub(popup_x)),
        height: height.min(available_below),
    }
}

pub fn bottom_right_popup(frame_area: Rect, width: u16, height: u16, margin: u16) -> Rect {
    let popup_width = width.min(frame_area.width);
    let popup_height = height.min(frame_area.height);

    Rect {
        x: frame_area.width.saturating_sub(popup_width + margin),
        y: frame_area.height.saturating_sub(popup_height + margin),
        width: popup_width,
        height: popup_height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
