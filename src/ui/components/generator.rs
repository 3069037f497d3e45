//! Password generator section.

use std::time::Instant;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Block,
};

use crate::api::SecurityProfile;
use crate::app::{GeneratorFocus, GeneratorPanel};
use crate::input::TextEditing;

use super::{
    input_field::InputField,
    layout::{section_block, truncate_with_ellipsis},
    PageSection,
};

/// Pointer, star and copied marker around each suggestion.
const SUGGESTION_CHROME: usize = 14;

pub struct GeneratorView<'a> {
    panel: &'a GeneratorPanel,
    focused: bool,
    now: Instant,
    spinner: &'static str,
}

impl<'a> GeneratorView<'a> {
    pub fn new(panel: &'a GeneratorPanel, focused: bool, now: Instant, spinner: &'static str) -> Self {
        Self { panel, focused, now, spinner }
    }

    fn has_focus(&self, field: GeneratorFocus) -> bool {
        self.focused && self.panel.focus == field
    }
}

fn profile_spans(selected: SecurityProfile, focused: bool) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, profile) in SecurityProfile::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        let (mark, style) = if *profile == selected {
            let color = if focused { Color::Magenta } else { Color::Cyan };
            ("(•)", Style::default().fg(color).add_modifier(Modifier::BOLD))
        } else {
            ("( )", Style::default().fg(Color::Gray))
        };
        spans.push(Span::styled(format!("{} {}", mark, profile.label()), style));
    }
    spans
}

impl GeneratorView<'_> {
    fn suggestion_line(&self, index: usize, password: &str, best: bool, width: u16) -> Line<'static> {
        let selected = self.has_focus(GeneratorFocus::Suggestions) && index == self.panel.selected;
        let row_bg = if selected { Color::DarkGray } else { Color::Reset };

        let pointer = if selected { "▸ " } else { "  " };
        let star = if best {
            Span::styled("★ ", Style::default().fg(Color::Yellow).bg(row_bg))
        } else {
            Span::styled("  ", Style::default().bg(row_bg))
        };
        let pw_style = if best {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let shown = truncate_with_ellipsis(password, (width as usize).saturating_sub(SUGGESTION_CHROME));
        let mut spans = vec![
            Span::styled(pointer, Style::default().fg(Color::Magenta).bg(row_bg)),
            star,
            Span::styled(shown, pw_style.bg(row_bg)),
        ];
        if self.panel.is_copied(index, self.now) {
            spans.push(Span::styled("  ✓ copied", Style::default().fg(Color::Green)));
        }
        Line::from(spans)
    }
}

impl PageSection for GeneratorView<'_> {
    fn block(&self) -> Block<'static> {
        section_block("Password Generator", if self.focused { Color::Magenta } else { Color::Cyan })
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let panel = self.panel;
        let mut lines = InputField::new("Base word (optional)", panel.base_word.content(), panel.base_word.cursor())
            .focused(self.has_focus(GeneratorFocus::BaseWord))
            .lines(width);
        lines.push(Line::default());

        let profile_focused = self.has_focus(GeneratorFocus::Profile);
        let heading = if profile_focused {
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        lines.push(Line::styled("Security profile", heading));
        lines.push(Line::from(profile_spans(panel.profile, profile_focused)));
        lines.push(Line::styled(
            format!("  {}", panel.profile.description()),
            Style::default().fg(Color::DarkGray),
        ));
        lines.push(Line::default());

        if panel.status.is_loading() {
            lines.push(Line::styled(
                format!("{} Generating...", self.spinner),
                Style::default().fg(Color::Magenta),
            ));
        }

        let Some(result) = &panel.result else {
            if !panel.status.is_loading() {
                lines.push(Line::styled("Press enter to generate", Style::default().fg(Color::DarkGray)));
            }
            return lines;
        };

        lines.push(Line::styled(
            "Suggestions",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
        for (i, password) in result.suggestions.iter().enumerate() {
            lines.push(self.suggestion_line(i, password, result.is_best(i), width));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::GeneratePasswordResponse;
    use crate::app::PanelStatus;
    use std::time::Duration;

    fn flatten(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn panel_with(suggestions: &[&str], best: &str) -> GeneratorPanel {
        let mut panel = GeneratorPanel::new();
        panel.status = PanelStatus::Success;
        panel.result = Some(GeneratePasswordResponse {
            status: "success".into(),
            base: String::new(),
            best_password: best.into(),
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
        });
        panel
    }

    #[test]
    fn test_best_password_starred() {
        let panel = panel_with(&["Tr0ub4dor&3", "c0rrect-h0rse"], "c0rrect-h0rse");
        let view = GeneratorView::new(&panel, false, Instant::now(), "-");
        let lines: Vec<String> = view.lines(40).iter().map(flatten).collect();

        assert!(lines.contains(&"    Tr0ub4dor&3".to_string()));
        assert!(lines.contains(&"  ★ c0rrect-h0rse".to_string()));
    }

    #[test]
    fn test_copied_marker_per_index() {
        let now = Instant::now();
        let mut panel = panel_with(&["one", "two"], "one");
        panel.mark_copied(1, now, Duration::from_secs(2));

        let view = GeneratorView::new(&panel, false, now, "-");
        let lines: Vec<String> = view.lines(40).iter().map(flatten).collect();
        assert!(lines.iter().any(|l| l.ends_with("two  ✓ copied")));
        assert!(lines.iter().any(|l| l.ends_with("one")));
    }

    #[test]
    fn test_profile_row_marks_selection() {
        let text: String = profile_spans(SecurityProfile::Memorable, false)
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(text, "( ) Balanced   (•) Memorable   ( ) Maximum Security");
    }
}
