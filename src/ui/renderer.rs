//! Renderer
//!
//! Snapshots the app into a [`UiState`] and draws the page: the sections
//! from the scroll anchor downward, the orb in the top-right corner, then
//! the help bar and status line.

use std::time::{Duration, Instant};

use chrono::Datelike;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    Frame,
};

use crate::app::{AnalyzerPanel, App, GeneratorPanel, Notification, OrbState, Panel, Section, ServiceStatus};
use crate::input::InputMode;

use super::components::{
    render_section, scroll::render_v_scroll_indicator, strength_meter::meter_progress, AiOrb, AnalyzerView,
    Footer, GeneratorView, HelpBar, Hero, ModelTabs, PageSection, StatusLine,
};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const ORB_HEIGHT: u16 = 3;

pub struct UiState<'a> {
    pub mode: InputMode,
    pub sections: Vec<Section>,
    pub scroll_anchor: usize,
    pub visible_panel: Option<Panel>,
    pub analyzer: &'a AnalyzerPanel,
    pub generator: &'a GeneratorPanel,
    pub meter_progress: f64,
    pub model_tab: usize,
    pub orb: OrbState,
    pub notification: Option<&'a Notification>,
    pub service: ServiceStatus,
    pub api_url: &'a str,
    pub elapsed: Duration,
    pub now: Instant,
    pub year: i32,
}

impl<'a> UiState<'a> {
    pub fn from_app(app: &'a App, now: Instant) -> Self {
        let sections = app.sections();
        Self {
            mode: app.mode,
            scroll_anchor: app.scroll_anchor.min(sections.len() - 1),
            sections,
            visible_panel: app.visible_panel,
            analyzer: &app.analyzer,
            generator: &app.generator,
            meter_progress: meter_progress(app.analyzer.result_at, now, app.config.meter_animation),
            model_tab: app.model_tab,
            orb: app.orb.state(),
            notification: app.notification.as_ref(),
            service: app.service,
            api_url: &app.config.api_url,
            elapsed: app.elapsed(now),
            now,
            year: chrono::Local::now().year(),
        }
    }

    fn spinner(&self) -> &'static str {
        SPINNER[(self.elapsed.as_millis() / 80) as usize % SPINNER.len()]
    }

    fn editing(&self, panel: Panel) -> bool {
        self.mode.is_text_input() && self.visible_panel == Some(panel)
    }

    fn section_view(&self, section: Section) -> Box<dyn PageSection + 'a> {
        match section {
            Section::Hero => Box::new(Hero::new(self.elapsed)),
            Section::Analyzer => Box::new(AnalyzerView::new(
                self.analyzer,
                self.editing(Panel::Analyzer),
                self.meter_progress,
                self.spinner(),
            )),
            Section::Generator => Box::new(GeneratorView::new(
                self.generator,
                self.editing(Panel::Generator),
                self.now,
                self.spinner(),
            )),
            Section::Models => Box::new(ModelTabs::new(self.model_tab)),
            Section::Footer => Box::new(Footer::new(self.year)),
        }
    }
}

pub struct Renderer;

impl Renderer {
    pub fn render(frame: &mut Frame, state: &UiState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
            .split(frame.area());

        Self::render_page(frame, chunks[0], state);
        Self::render_orb(frame, chunks[0], state);

        frame.render_widget(
            HelpBar::for_context(state.mode, state.visible_panel, state.generator.focus),
            chunks[1],
        );

        let mut status = StatusLine::new(state.mode, state.service, state.api_url);
        let text = state.notification.map(Notification::text);
        if let (Some(text), Some(note)) = (text.as_deref(), state.notification) {
            status = status.message(text, note.kind);
        }
        frame.render_widget(status, chunks[2]);
    }

    fn render_page(frame: &mut Frame, area: Rect, state: &UiState) {
        let buf = frame.buffer_mut();
        let bottom = area.y + area.height;
        let mut y = area.y;

        for section in state.sections.iter().skip(state.scroll_anchor) {
            if y >= bottom {
                break;
            }
            let view = state.section_view(*section);
            let height = view.height(area.width).min(bottom - y);
            render_section(view.as_ref(), Rect::new(area.x, y, area.width, height), buf);
            y += height;
        }

        render_v_scroll_indicator(buf, area, state.scroll_anchor, state.sections.len() - 1, Color::DarkGray);
    }

    fn render_orb(frame: &mut Frame, area: Rect, state: &UiState) {
        let orb = AiOrb::new(state.orb, state.elapsed);
        let width = orb.width().min(area.width);
        if area.height < ORB_HEIGHT || width == 0 {
            return;
        }
        let rect = Rect::new(area.x + area.width - width, area.y, width, ORB_HEIGHT);
        frame.render_widget(orb, rect);
    }
}
