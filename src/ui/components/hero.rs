//! Hero section: title, tagline, call-to-action keys and the lock.

use std::time::Duration;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
};

use super::{
    lock::{lock_lines, LOCK_HEIGHT, LOCK_WIDTH},
    PageSection,
};

pub const TITLE: &str = "Sentinel Pass";
pub const TAGLINE: &str = "Enterprise-Grade Password Security Platform";
pub const SUBTITLE: &str = "Advanced AI-powered password analysis and generation";

const TEXT_COLUMN: usize = 56;

pub struct Hero {
    elapsed: Duration,
}

impl Hero {
    pub fn new(elapsed: Duration) -> Self {
        Self { elapsed }
    }
}

fn key_hint(key: &'static str, label: &'static str, color: Color) -> Vec<Span<'static>> {
    vec![
        Span::styled(format!("[{}]", key), Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD)),
        Span::styled(format!(" {}", label), Style::default().fg(color)),
    ]
}

fn stat(value: &'static str, label: &'static str) -> Vec<Span<'static>> {
    vec![
        Span::styled(value, Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)),
        Span::styled(format!(" {}", label), Style::default().fg(Color::Gray)),
    ]
}

fn text_column() -> Vec<Line<'static>> {
    let mut cta = key_hint("a", "Analyze Password", Color::Cyan);
    cta.push(Span::raw("    "));
    cta.extend(key_hint("g", "Generate Password", Color::Magenta));

    let mut stats = stat("4", "AI Models");
    stats.push(Span::raw("   "));
    stats.extend(stat("∞", "Passwords Analyzed"));
    stats.push(Span::raw("   "));
    stats.extend(stat("99%", "Accuracy"));

    vec![
        Line::default(),
        Line::styled(TITLE, Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)),
        Line::styled(TAGLINE, Style::default().fg(Color::Cyan)),
        Line::default(),
        Line::styled(SUBTITLE, Style::default().fg(Color::Gray)),
        Line::default(),
        Line::from(cta),
        Line::default(),
        Line::from(stats),
    ]
}

impl PageSection for Hero {
    fn block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let mut text = text_column();
        if (width as usize) < TEXT_COLUMN + LOCK_WIDTH {
            return text;
        }

        let lock = lock_lines(self.elapsed);
        text.resize(LOCK_HEIGHT.max(text.len()), Line::default());

        text.into_iter()
            .enumerate()
            .map(|(i, mut line)| {
                let pad = TEXT_COLUMN.saturating_sub(line.width());
                line.spans.push(Span::raw(" ".repeat(pad)));
                if let Some(art) = lock.get(i) {
                    line.spans.extend(art.spans.iter().cloned());
                }
                line
            })
            .collect()
    }
}
