//! Strength Meter
//!
//! Classifier verdict plus one probability bar per strength class. Bars
//! grow from zero with an ease-out curve after a new result lands.

use std::time::{Duration, Instant};

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::api::{ClassifierProbabilities, StrengthLevel};

pub const METER_HEIGHT: usize = 1 + 2 * StrengthLevel::ALL.len();

pub fn level_color(level: StrengthLevel) -> Color {
    match level {
        StrengthLevel::Weak => Color::Red,
        StrengthLevel::Medium => Color::Yellow,
        StrengthLevel::Strong => Color::Green,
    }
}

fn level_icon(level: Option<StrengthLevel>) -> &'static str {
    match level {
        Some(StrengthLevel::Weak) => "⚠",
        Some(StrengthLevel::Medium) => "◆",
        Some(StrengthLevel::Strong) => "✔",
        None => "?",
    }
}

pub fn format_percent(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}

/// Filled cells for a probability bar. Out-of-range inputs are clamped.
pub fn bar_width(probability: f64, width: u16, progress: f64) -> u16 {
    let fill = probability.clamp(0.0, 1.0) * progress.clamp(0.0, 1.0) * width as f64;
    (fill.round() as u16).min(width)
}

pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Animation progress for a result that arrived at `started`.
pub fn meter_progress(started: Option<Instant>, now: Instant, duration: Duration) -> f64 {
    let Some(started) = started else { return 1.0 };
    if duration.is_zero() {
        return 1.0;
    }
    ease_out(now.saturating_duration_since(started).as_secs_f64() / duration.as_secs_f64())
}

pub struct StrengthMeter<'a> {
    strength: &'a str,
    probabilities: &'a ClassifierProbabilities,
    progress: f64,
}

impl<'a> StrengthMeter<'a> {
    pub fn new(strength: &'a str, probabilities: &'a ClassifierProbabilities, progress: f64) -> Self {
        Self { strength, probabilities, progress }
    }

    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let level = StrengthLevel::parse(self.strength);
        let verdict = level.map(level_color).unwrap_or(Color::Gray);

        let mut lines = vec![Line::from(vec![
            Span::styled(format!("{} ", level_icon(level)), Style::default().fg(verdict)),
            Span::styled(self.strength.to_string(), Style::default().fg(verdict).add_modifier(Modifier::BOLD)),
        ])];

        for level in StrengthLevel::ALL {
            let p = self.probabilities.get(level);
            let pct = format_percent(p);
            let gap = (width as usize).saturating_sub(level.as_str().len() + pct.len());
            lines.push(Line::from(vec![
                Span::styled(level.as_str(), Style::default().fg(Color::Gray)),
                Span::raw(" ".repeat(gap)),
                Span::styled(pct, Style::default().fg(Color::White)),
            ]));

            let filled = bar_width(p, width, self.progress);
            lines.push(Line::from(vec![
                Span::styled("█".repeat(filled as usize), Style::default().fg(level_color(level))),
                Span::styled("░".repeat((width - filled) as usize), Style::default().fg(Color::DarkGray)),
            ]));
        }
        lines
    }
}
