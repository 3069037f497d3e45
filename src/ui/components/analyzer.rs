//! Password analyzer section.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Block,
};

use crate::api::{AlertLevel, AnomalyDetection, LeakRisk};
use crate::app::AnalyzerPanel;
use crate::input::TextEditing;

use super::{
    input_field::InputField,
    layout::{label_value, section_block, separator, wrapped_lines},
    strength_meter::StrengthMeter,
    PageSection,
};

pub fn alert_color(level: AlertLevel) -> Color {
    match level {
        AlertLevel::High => Color::Red,
        AlertLevel::Elevated => Color::Yellow,
        AlertLevel::Low => Color::Green,
    }
}

/// Whole scores print without decimals ("95%"), others with one.
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.0}%", score)
    } else {
        format!("{:.1}%", score)
    }
}

pub struct AnalyzerView<'a> {
    panel: &'a AnalyzerPanel,
    focused: bool,
    progress: f64,
    spinner: &'static str,
}

impl<'a> AnalyzerView<'a> {
    pub fn new(panel: &'a AnalyzerPanel, focused: bool, progress: f64, spinner: &'static str) -> Self {
        Self { panel, focused, progress, spinner }
    }
}

fn leak_lines(leak: &LeakRisk, width: u16) -> Vec<Line<'static>> {
    let color = alert_color(leak.alert_level());
    let mut lines = vec![label_value(
        "Leak Risk",
        Span::styled(format_score(leak.score), Style::default().fg(color).add_modifier(Modifier::BOLD)),
    )];
    if !leak.message.is_empty() {
        lines.extend(wrapped_lines(&leak.message, width, "  ", Style::default().fg(Color::Gray)));
    }
    lines
}

fn anomaly_line(anomaly: &AnomalyDetection) -> Line<'static> {
    let color = if anomaly.is_anomaly { Color::Yellow } else { Color::Green };
    Line::from(vec![
        Span::styled(format!("{:<16}", "Anomaly Score"), Style::default().fg(Color::White)),
        Span::styled(format!("{:.2}", anomaly.score), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(anomaly.summary(), Style::default().fg(color)),
    ])
}

impl PageSection for AnalyzerView<'_> {
    fn block(&self) -> Block<'static> {
        section_block("Password Analyzer", if self.focused { Color::Magenta } else { Color::Cyan })
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let panel = self.panel;
        let label = if panel.reveal { "Password (ctrl+s to hide)" } else { "Password (ctrl+s to show)" };
        let mut lines = InputField::new(label, panel.password.content(), panel.password.cursor())
            .masked(!panel.reveal)
            .focused(self.focused)
            .lines(width);
        lines.push(Line::default());

        if panel.status.is_loading() {
            lines.push(Line::styled(
                format!("{} Analyzing...", self.spinner),
                Style::default().fg(Color::Magenta),
            ));
        }

        let Some(result) = &panel.result else {
            if !panel.status.is_loading() {
                lines.push(Line::styled("Press enter to analyze", Style::default().fg(Color::DarkGray)));
            }
            return lines;
        };

        lines.extend(StrengthMeter::new(&result.strength, &result.classifier_probabilities, self.progress).lines(width));
        lines.push(separator(width));

        if let Some(leak) = &result.leak_risk {
            lines.extend(leak_lines(leak, width));
        }
        if let Some(anomaly) = &result.anomaly_detection {
            lines.push(Line::default());
            lines.push(anomaly_line(anomaly));
        }

        if !result.feedback.is_empty() {
            lines.push(Line::default());
            lines.push(Line::styled(
                "Recommendations",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ));
            for item in &result.feedback {
                lines.extend(wrapped_lines(item, width, "• ", Style::default().fg(Color::White)));
            }
        }
        lines
    }
}
