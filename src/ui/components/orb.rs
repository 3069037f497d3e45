//! Activity orb overlay.

use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::app::OrbState;

const PULSE: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub fn orb_color(state: OrbState) -> Color {
    match state {
        OrbState::Idle => Color::Cyan,
        OrbState::Processing => Color::Magenta,
        OrbState::Success => Color::Green,
        OrbState::Error => Color::Red,
    }
}

pub fn orb_glyph(state: OrbState, elapsed: Duration) -> &'static str {
    match state {
        OrbState::Processing => PULSE[(elapsed.as_millis() / 150) as usize % PULSE.len()],
        _ => "●",
    }
}

pub struct AiOrb {
    state: OrbState,
    elapsed: Duration,
}

impl AiOrb {
    pub fn new(state: OrbState, elapsed: Duration) -> Self {
        Self { state, elapsed }
    }

    /// Glyph, gap, message, two padding cells and the border.
    pub fn width(&self) -> u16 {
        self.state.message().chars().count() as u16 + 6
    }
}

impl Widget for AiOrb {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = orb_color(self.state);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color));
        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(orb_glyph(self.state, self.elapsed), Style::default().fg(color)),
            Span::raw(" "),
            Span::styled(self.state.message(), Style::default().fg(Color::White)),
        ]);

        Clear.render(area, buf);
        Paragraph::new(line).block(block).render(area, buf);
    }
}
