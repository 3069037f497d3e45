//! Application State
//!
//! The page controller: owns panel visibility, the section scroll anchor,
//! notifications and the activity orb, and routes API responses to the
//! panel that asked for them.

mod actions;
mod analyzer;
mod clipboard;
mod config;
mod dispatch;
mod generator;
mod input;
mod orb;
mod panel;

use std::time::{Duration, Instant};

use ratatui::{layout::Rect, Frame};

use crate::input::InputMode;
use crate::ui::components::MessageType;
use crate::ui::renderer::{Renderer, UiState};

pub use analyzer::{AnalyzerPanel, ValidationError};
pub use clipboard::{ClipboardError, ClipboardSink, SystemClipboard};
pub use config::{normalize_api_url, AppConfig, ConfigError, DEFAULT_API_URL};
pub use dispatch::{ApiEvent, Dispatch, Dispatcher};
pub use generator::{GeneratorFocus, GeneratorPanel};
pub use orb::{ActivityBus, ActivityEvent, Orb, OrbState};
pub use panel::{PanelStatus, Settlement, Ticket};

/// The two feature panels; at most one is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Analyzer,
    Generator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    Analyzer,
    Generator,
    Models,
    Footer,
}

impl From<Panel> for Section {
    fn from(panel: Panel) -> Self {
        match panel {
            Panel::Analyzer => Section::Analyzer,
            Panel::Generator => Section::Generator,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub kind: MessageType,
    pub at: Instant,
}

impl Notification {
    pub fn text(&self) -> String {
        format!("{}: {}", self.title, self.body)
    }
}

/// Whether the service answered the startup health probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceStatus {
    #[default]
    Unknown,
    Online,
    Offline,
}

pub struct App {
    pub config: AppConfig,
    pub mode: InputMode,
    pub visible_panel: Option<Panel>,
    pub scroll_anchor: usize,
    pending_scroll: Option<(Section, Instant)>,
    pub analyzer: AnalyzerPanel,
    pub generator: GeneratorPanel,
    pub model_tab: usize,
    pub orb: Orb,
    bus: ActivityBus,
    pub notification: Option<Notification>,
    pub service: ServiceStatus,
    tickets: panel::TicketCounter,
    clipboard: Box<dyn ClipboardSink>,
    started_at: Instant,
    pub terminal_size: Rect,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self::with_clipboard(config, Box::new(SystemClipboard::new()))
    }

    pub fn with_clipboard(config: AppConfig, clipboard: Box<dyn ClipboardSink>) -> Self {
        Self {
            orb: Orb::new(config.orb_hold),
            config,
            mode: InputMode::Normal,
            visible_panel: None,
            scroll_anchor: 0,
            pending_scroll: None,
            analyzer: AnalyzerPanel::new(),
            generator: GeneratorPanel::new(),
            model_tab: 0,
            bus: ActivityBus::default(),
            notification: None,
            service: ServiceStatus::Unknown,
            tickets: panel::TicketCounter::default(),
            clipboard,
            started_at: Instant::now(),
            terminal_size: Rect::default(),
            should_quit: false,
        }
    }

    // ------------------------------------------------------------------
    // Page layout
    // ------------------------------------------------------------------

    pub fn sections(&self) -> Vec<Section> {
        let mut sections = vec![Section::Hero];
        if let Some(panel) = self.visible_panel {
            sections.push(panel.into());
        }
        sections.push(Section::Models);
        sections.push(Section::Footer);
        sections
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        self.visible_panel == Some(panel)
    }

    /// Shows one panel and hides the other, then scrolls to it once
    /// the layout has had time to settle.
    pub fn show_panel(&mut self, panel: Panel, now: Instant) {
        self.visible_panel = Some(panel);
        self.mode = InputMode::Insert;
        self.pending_scroll = Some((panel.into(), now + self.config.scroll_settle_delay));
        tracing::debug!(?panel, "panel shown");
    }

    pub fn scroll_into_view(&mut self, section: Section) {
        if let Some(idx) = self.sections().iter().position(|s| *s == section) {
            self.scroll_anchor = idx;
        }
    }

    pub fn anchored_section(&self) -> Section {
        let sections = self.sections();
        sections[self.scroll_anchor.min(sections.len() - 1)]
    }

    pub fn scroll_down(&mut self) {
        self.scroll_anchor = (self.scroll_anchor + 1).min(self.sections().len() - 1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_anchor = self.scroll_anchor.saturating_sub(1);
    }

    pub fn scroll_bottom(&mut self) {
        self.scroll_anchor = self.sections().len() - 1;
    }

    // ------------------------------------------------------------------
    // Requests
    // ------------------------------------------------------------------

    pub fn begin_analyze(&mut self, now: Instant) -> Option<Dispatch> {
        let ticket = self.tickets.next();
        match self.analyzer.begin(ticket) {
            Ok(password) => {
                tracing::info!(ticket = ticket.0, "evaluating password");
                self.bus.publish(ActivityEvent::Started);
                Some(Dispatch::Evaluate { ticket, password })
            }
            Err(err) => {
                tracing::debug!(%err, "analyze rejected");
                self.notify("Error", &err.to_string(), MessageType::Error, now);
                None
            }
        }
    }

    pub fn begin_generate(&mut self) -> Dispatch {
        let ticket = self.tickets.next();
        let request = self.generator.begin(ticket);
        tracing::info!(ticket = ticket.0, mode = request.mode.as_str(), "generating passwords");
        self.bus.publish(ActivityEvent::Started);
        Dispatch::Generate { ticket, request }
    }

    pub fn apply_api_event(&mut self, event: ApiEvent, now: Instant) {
        match event {
            ApiEvent::Evaluated { ticket, result } => {
                if let Err(err) = &result {
                    tracing::warn!(ticket = ticket.0, error = ?err, "password evaluation failed");
                }
                let settlement = self.analyzer.apply(ticket, result, now);
                self.settle(settlement, "Analysis Failed", now);
            }
            ApiEvent::Generated { ticket, result } => {
                if let Err(err) = &result {
                    tracing::warn!(ticket = ticket.0, error = ?err, "password generation failed");
                }
                let settlement = self.generator.apply(ticket, result);
                self.settle(settlement, "Generation Failed", now);
            }
            ApiEvent::Health(Ok(health)) => {
                tracing::info!(message = %health.message, endpoints = ?health.endpoints, "service reachable");
                self.service = ServiceStatus::Online;
            }
            ApiEvent::Health(Err(err)) => {
                tracing::warn!(error = ?err, url = %self.config.api_url, "service unreachable");
                self.service = ServiceStatus::Offline;
            }
        }
    }

    fn settle(&mut self, settlement: Settlement, failure_title: &str, now: Instant) {
        match settlement {
            Settlement::Succeeded => self.bus.publish(ActivityEvent::Succeeded),
            Settlement::Failed(message) => {
                self.notify(failure_title, &message, MessageType::Error, now);
                self.bus.publish(ActivityEvent::Failed);
            }
            Settlement::Stale => {
                tracing::debug!("dropping superseded response");
                self.bus.publish(ActivityEvent::Discarded);
            }
        }
    }

    pub fn copy_selected(&mut self, now: Instant) {
        let index = self.generator.selected;
        let Some(password) = self.generator.selected_password().map(str::to_owned) else {
            return;
        };

        match self.clipboard.set_text(&password) {
            Ok(()) => {
                self.generator.mark_copied(index, now, self.config.copy_feedback_timeout);
                self.notify("Copied!", "Password copied to clipboard", MessageType::Success, now);
            }
            Err(err) => {
                tracing::warn!(%err, "copy failed");
                self.notify("Copy Failed", "Failed to copy password", MessageType::Error, now);
            }
        }
    }

    // ------------------------------------------------------------------
    // Notifications / timers
    // ------------------------------------------------------------------

    pub fn notify(&mut self, title: &str, body: &str, kind: MessageType, now: Instant) {
        self.notification = Some(Notification {
            title: title.to_string(),
            body: body.to_string(),
            kind,
            at: now,
        });
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Advances every timer: notification expiry, deferred scroll, copy
    /// indicators and the orb.
    pub fn tick(&mut self, now: Instant) {
        let expired = self
            .notification
            .as_ref()
            .is_some_and(|n| now.duration_since(n.at) > self.config.message_timeout);
        if expired {
            self.notification = None;
        }

        if let Some((section, due)) = self.pending_scroll {
            if now >= due {
                self.pending_scroll = None;
                self.scroll_into_view(section);
            }
        }

        self.generator.expire_copied(now);

        for event in self.bus.drain() {
            self.orb.apply(event, now);
        }
        self.orb.tick(now);
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    pub fn render(&mut self, frame: &mut Frame, now: Instant) {
        self.terminal_size = frame.area();
        let state = UiState::from_app(self, now);
        Renderer::render(frame, &state);
    }
}
