//! Input field widget

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const MASK: char = '•';

pub struct InputField<'a> {
    label: &'a str,
    value: &'a str,
    cursor: usize,
    masked: bool,
    focused: bool,
}

impl<'a> InputField<'a> {
    pub fn new(label: &'a str, value: &'a str, cursor: usize) -> Self {
        Self { label, value, cursor, masked: false, focused: false }
    }

    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Label row plus one value row exactly `width` cells wide.
    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let label_style = if self.focused {
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        vec![Line::styled(self.label.to_string(), label_style), self.value_line(width as usize)]
    }

    fn value_line(&self, width: usize) -> Line<'static> {
        let chars: Vec<char> = if self.masked {
            vec![MASK; self.value.chars().count()]
        } else {
            self.value.chars().collect()
        };

        let offset = visible_offset(self.cursor, width);
        let visible: Vec<char> = chars.iter().skip(offset).take(width).copied().collect();
        let cursor_col = self.cursor - offset;

        let field = Style::default().bg(Color::DarkGray).fg(Color::White);
        let mut spans = Vec::new();

        if self.focused {
            let before: String = visible.iter().take(cursor_col).collect();
            let at = visible.get(cursor_col).copied().unwrap_or(' ');
            let after: String = visible.iter().skip(cursor_col + 1).collect();
            spans.push(Span::styled(before, field));
            spans.push(Span::styled(at.to_string(), Style::default().bg(Color::White).fg(Color::Black)));
            spans.push(Span::styled(after, field));
        } else {
            spans.push(Span::styled(visible.iter().collect::<String>(), field));
        }

        let used: usize = spans.iter().map(|s| s.width()).sum();
        if used < width {
            spans.push(Span::styled(" ".repeat(width - used), field));
        }
        Line::from(spans)
    }
}

/// First visible char index so that the cursor stays inside `width` cells.
pub fn visible_offset(cursor: usize, width: usize) -> usize {
    if width == 0 || cursor < width {
        0
    } else {
        cursor + 1 - width
    }
}
