use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use super::PageSection;

pub const REPOSITORY_URL: &str = "https://github.com/TheAyushTandon/sentinel-pass-suite";

pub fn copyright(year: i32) -> String {
    format!("© {} Sentinel Pass. All rights reserved.", year)
}

pub struct Footer {
    year: i32,
}

impl Footer {
    pub fn new(year: i32) -> Self {
        Self { year }
    }
}

impl PageSection for Footer {
    fn block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray))
    }

    fn lines(&self, _width: u16) -> Vec<Line<'static>> {
        vec![
            Line::from(vec![
                Span::styled("made by ", Style::default().fg(Color::Gray)),
                Span::styled("team AI-Vault", Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)),
            ]),
            Line::styled(REPOSITORY_URL, Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED)),
            Line::styled(copyright(self.year), Style::default().fg(Color::DarkGray)),
        ]
    }
}
