//! Password generator panel state.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::api::{ApiError, GeneratePasswordResponse, GenerateRequest, SecurityProfile};
use crate::input::{TextBuffer, TextEditing};

use super::panel::{PanelStatus, Settlement, Ticket};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeneratorFocus {
    #[default]
    BaseWord,
    Profile,
    Suggestions,
}

impl GeneratorFocus {
    fn next(self, has_suggestions: bool) -> Self {
        match self {
            Self::BaseWord => Self::Profile,
            Self::Profile if has_suggestions => Self::Suggestions,
            Self::Profile | Self::Suggestions => Self::BaseWord,
        }
    }

    fn prev(self, has_suggestions: bool) -> Self {
        match self {
            Self::BaseWord if has_suggestions => Self::Suggestions,
            Self::BaseWord | Self::Suggestions => Self::Profile,
            Self::Profile => Self::BaseWord,
        }
    }
}

#[derive(Debug, Default)]
pub struct GeneratorPanel {
    pub base_word: TextBuffer,
    pub profile: SecurityProfile,
    pub focus: GeneratorFocus,
    pub status: PanelStatus,
    pub result: Option<GeneratePasswordResponse>,
    pub selected: usize,
    /// Per-index expiry of the "copied" indicator.
    copied_until: HashMap<usize, Instant>,
    latest: Option<Ticket>,
}

impl GeneratorPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn suggestions(&self) -> &[String] {
        self.result.as_ref().map(|r| r.suggestions.as_slice()).unwrap_or_default()
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next(!self.suggestions().is_empty());
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev(!self.suggestions().is_empty());
    }

    pub fn cycle_profile(&mut self, forward: bool) {
        self.profile = if forward { self.profile.next() } else { self.profile.prev() };
    }

    pub fn select_next(&mut self) {
        let len = self.suggestions().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_password(&self) -> Option<&str> {
        self.suggestions().get(self.selected).map(String::as_str)
    }

    pub fn begin(&mut self, ticket: Ticket) -> GenerateRequest {
        self.status = PanelStatus::Loading;
        self.latest = Some(ticket);
        GenerateRequest::new(self.base_word.content(), self.profile)
    }

    pub fn apply(&mut self, ticket: Ticket, result: Result<GeneratePasswordResponse, ApiError>) -> Settlement {
        if self.latest != Some(ticket) {
            return Settlement::Stale;
        }

        self.selected = 0;
        self.copied_until.clear();

        match result {
            Ok(response) => {
                self.result = Some(response);
                self.status = PanelStatus::Success;
                Settlement::Succeeded
            }
            Err(err) => {
                self.result = None;
                self.status = PanelStatus::Error;
                if self.focus == GeneratorFocus::Suggestions {
                    self.focus = GeneratorFocus::BaseWord;
                }
                Settlement::Failed(err.to_string())
            }
        }
    }

    pub fn mark_copied(&mut self, index: usize, now: Instant, hold: Duration) {
        self.copied_until.insert(index, now + hold);
    }

    pub fn is_copied(&self, index: usize, now: Instant) -> bool {
        self.copied_until.get(&index).is_some_and(|until| now < *until)
    }

    pub fn expire_copied(&mut self, now: Instant) {
        self.copied_until.retain(|_, until| now < *until);
    }
}
