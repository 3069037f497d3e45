//! Layout helpers and common rendering utilities

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
};

pub fn section_block(title: &str, color: Color) -> Block<'static> {
    Block::default()
        .title(Span::styled(format!(" {} ", title), Style::default().fg(color).add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

/// Greedy word wrap on char counts. Words longer than `width` are left
/// for the paragraph to clip.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

pub fn wrapped_lines(text: &str, width: u16, indent: &str, style: Style) -> Vec<Line<'static>> {
    let avail = (width as usize).saturating_sub(indent.chars().count());
    wrap_text(text, avail)
        .into_iter()
        .map(|row| Line::from(vec![Span::raw(indent.to_string()), Span::styled(row, style)]))
        .collect()
}

pub fn truncate_with_ellipsis(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}

pub fn label_value(label: &str, value: Span<'static>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<16}", label), Style::default().fg(Color::White)),
        value,
    ])
}

pub fn separator(width: u16) -> Line<'static> {
    Line::styled("─".repeat(width as usize), Style::default().fg(Color::DarkGray))
}
