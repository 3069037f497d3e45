//! Floating lock art for the hero section.

use std::time::Duration;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

pub const LOCK_ART: [&str; 10] = [
    "    .-------.    ",
    "   /  .---.  \\   ",
    "   | |     | |   ",
    "   | |     | |   ",
    " __|_|_____|_|__ ",
    "|               |",
    "|      (@)      |",
    "|       ||      |",
    "|               |",
    "'---------------'",
];

pub const LOCK_WIDTH: usize = 17;

/// Rows are this height plus the bob amplitude.
pub const LOCK_HEIGHT: usize = LOCK_ART.len() + 1;

const BOB_PERIOD_MS: u128 = 1500;
const GLOW_PERIOD_MS: u128 = 600;

/// Vertical offset of the lock; alternates between 0 and 1.
pub fn float_offset(elapsed: Duration) -> usize {
    ((elapsed.as_millis() / BOB_PERIOD_MS) % 2) as usize
}

pub fn lock_lines(elapsed: Duration) -> Vec<Line<'static>> {
    let glow = if (elapsed.as_millis() / GLOW_PERIOD_MS) % 2 == 0 {
        Color::Magenta
    } else {
        Color::LightMagenta
    };
    let body = Style::default().fg(Color::Cyan);

    let mut lines = vec![Line::default(); float_offset(elapsed)];
    for (i, row) in LOCK_ART.iter().enumerate() {
        let line = if i == 6 || i == 7 {
            Line::from(Span::styled(*row, Style::default().fg(glow).add_modifier(Modifier::BOLD)))
        } else {
            Line::from(Span::styled(*row, body))
        };
        lines.push(line);
    }
    lines
}
