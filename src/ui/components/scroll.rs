//! Section scroll indicator

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};

pub fn scroll_icon(offset: usize, max: usize) -> Option<&'static str> {
    if max == 0 {
        return None;
    }
    Some(match (offset == 0, offset >= max) {
        (true, _) => " ▼ more ",
        (_, true) => " ▲ ",
        _ => " ▲▼ ",
    })
}

/// Renders a vertical scroll indicator centered on the bottom row of `area`.
pub fn render_v_scroll_indicator(buf: &mut Buffer, area: Rect, offset: usize, max: usize, color: Color) {
    let Some(icon) = scroll_icon(offset, max) else { return };
    if area.height == 0 {
        return;
    }
    let width = icon.chars().count() as u16;
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height - 1;
    buf.set_stringn(x, y, icon, area.width as usize, Style::default().fg(color));
}
