use std::time::Instant;

use crate::input::{Action, InputMode};
use crate::ui::components::model_tabs::MODEL_COUNT;

use super::{App, Dispatch, Panel};

impl App {
    /// Applies an action; returns the request to send, if it produced one.
    pub fn execute(&mut self, action: Action, now: Instant) -> Option<Dispatch> {
        match action {
            Action::None => {}
            Action::Quit => self.should_quit = true,
            Action::ShowAnalyzer => self.show_panel(Panel::Analyzer, now),
            Action::ShowGenerator => self.show_panel(Panel::Generator, now),
            Action::EnterInsert => self.enter_insert(),
            Action::ExitInsert => self.mode = InputMode::Normal,
            Action::ScrollDown => self.scroll_down(),
            Action::ScrollUp => self.scroll_up(),
            Action::ScrollTop => self.scroll_anchor = 0,
            Action::ScrollBottom => self.scroll_bottom(),
            Action::NextModel => self.model_tab = (self.model_tab + 1) % MODEL_COUNT,
            Action::PrevModel => self.model_tab = (self.model_tab + MODEL_COUNT - 1) % MODEL_COUNT,
            Action::SelectModel(idx) if idx < MODEL_COUNT => self.model_tab = idx,
            Action::SelectModel(_) => {}
            Action::DismissNotification => self.dismiss_notification(),
            Action::CheckService => return Some(Dispatch::Health),
            Action::Analyze => return self.begin_analyze(now),
            Action::ToggleReveal => self.analyzer.toggle_reveal(),
            Action::Generate => return Some(self.begin_generate()),
            Action::NextField => self.generator.focus_next(),
            Action::PrevField => self.generator.focus_prev(),
            Action::CycleProfile { forward } => self.generator.cycle_profile(forward),
            Action::SelectProfile(profile) => self.generator.profile = profile,
            Action::SelectNext => self.generator.select_next(),
            Action::SelectPrev => self.generator.select_prev(),
            Action::CopySelected => self.copy_selected(now),
        }
        None
    }

    fn enter_insert(&mut self) {
        let Some(panel) = self.visible_panel else {
            return;
        };
        self.mode = InputMode::Insert;
        self.scroll_into_view(panel.into());
    }
}
