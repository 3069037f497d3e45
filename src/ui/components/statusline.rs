//! Status Line Component
//!
//! Displays mode indicator, the current notification and service reachability.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::app::{GeneratorFocus, Panel, ServiceStatus};
use crate::input::InputMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Success,
    Warning,
    Error,
}

impl MessageType {
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

pub struct StatusLine<'a> {
    mode: InputMode,
    message: Option<(&'a str, MessageType)>,
    service: ServiceStatus,
    api_url: &'a str,
}

impl<'a> StatusLine<'a> {
    pub fn new(mode: InputMode, service: ServiceStatus, api_url: &'a str) -> Self {
        Self { mode, message: None, service, api_url }
    }

    pub fn message(mut self, msg: &'a str, msg_type: MessageType) -> Self {
        self.message = Some((msg, msg_type));
        self
    }
}

fn mode_style(mode: InputMode) -> Style {
    let base = Style::default().fg(Color::Black);
    match mode {
        InputMode::Normal => base.bg(Color::Magenta),
        InputMode::Insert => base.bg(Color::Blue),
    }
}

fn render_mode_indicator(buf: &mut Buffer, area: Rect, mode: InputMode) -> u16 {
    let style = mode_style(mode).add_modifier(Modifier::BOLD);
    let mode_text = format!(" {} ", mode.indicator());
    buf.set_string(area.x, area.y, &mode_text, style);
    mode_text.len() as u16
}

fn service_spans(service: ServiceStatus, api_url: &str) -> Vec<Span<'_>> {
    let bg = Style::default().bg(Color::DarkGray);
    let (dot, label) = match service {
        ServiceStatus::Unknown => (bg.fg(Color::Gray), "checking"),
        ServiceStatus::Online => (bg.fg(Color::Green), "online"),
        ServiceStatus::Offline => (bg.fg(Color::Red), "offline"),
    };
    vec![
        Span::styled("● ", dot),
        Span::styled(label, dot.add_modifier(Modifier::BOLD)),
        Span::styled(" | ", bg.fg(Color::White)),
        Span::styled(api_url, bg.fg(Color::Gray)),
    ]
}

impl<'a> Widget for StatusLine<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.set_style(area, Style::default().bg(Color::DarkGray));

        let mode_width = render_mode_indicator(buf, area, self.mode);
        let x = area.x + mode_width + 1;

        let right = Line::from(service_spans(self.service, self.api_url));
        let right_width = right.width() as u16;
        let right_x = area.x + area.width.saturating_sub(right_width + 1);

        if let Some((msg, msg_type)) = self.message {
            let room = right_x.saturating_sub(x + 1) as usize;
            buf.set_stringn(x, area.y, msg, room, Style::default().bg(Color::DarkGray).fg(msg_type.color()));
        }

        if right_x > x {
            buf.set_line(right_x, area.y, &right, right_width);
        }
    }
}

pub struct HelpBar {
    hints: Vec<(&'static str, &'static str)>,
}

impl HelpBar {
    pub fn for_context(mode: InputMode, panel: Option<Panel>, focus: GeneratorFocus) -> Self {
        Self { hints: hints_for(mode, panel, focus) }
    }
}

fn hints_for(mode: InputMode, panel: Option<Panel>, focus: GeneratorFocus) -> Vec<(&'static str, &'static str)> {
    match (mode, panel) {
        (InputMode::Normal, None) => vec![
            ("a", "analyze"),
            ("g", "generate"),
            ("j/k", "scroll"),
            ("h/l", "models"),
            ("r", "check service"),
            ("q", "quit"),
        ],
        (InputMode::Normal, Some(_)) => vec![
            ("i", "edit"),
            ("a/g", "switch panel"),
            ("j/k", "scroll"),
            ("h/l", "models"),
            ("esc", "dismiss"),
            ("q", "quit"),
        ],
        (InputMode::Insert, Some(Panel::Analyzer)) => vec![
            ("esc", "normal"),
            ("enter", "analyze"),
            ("ctrl+s", "show/hide"),
            ("ctrl+u", "clear"),
        ],
        (InputMode::Insert, Some(Panel::Generator)) => match focus {
            GeneratorFocus::BaseWord => vec![
                ("esc", "normal"),
                ("tab/shift+tab", "next/prev field"),
                ("enter", "generate"),
            ],
            GeneratorFocus::Profile => vec![
                ("esc", "normal"),
                ("h/l", "cycle profile"),
                ("1-3", "pick"),
                ("tab/shift+tab", "next/prev field"),
                ("enter", "generate"),
            ],
            GeneratorFocus::Suggestions => vec![
                ("esc", "normal"),
                ("j/k", "select"),
                ("y/enter", "copy"),
                ("ctrl+g", "regenerate"),
                ("tab/shift+tab", "next/prev field"),
            ],
        },
        (InputMode::Insert, None) => vec![("esc", "normal")],
    }
}

fn build_hint_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let mut spans: Vec<Span> = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)));
        spans.push(Span::styled(format!(" {}", desc), Style::default().fg(Color::Gray)));
    }

    spans
}

impl Widget for HelpBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let line = Line::from(build_hint_spans(&self.hints));
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
