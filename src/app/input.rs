use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::input::{
    handle_text_key,
    keymap::{is_quit, normal_mode_action, profile_action, suggestion_action},
    Action, InputMode,
};

use super::{AnalyzerPanel, App, Dispatch, GeneratorFocus, GeneratorPanel, Panel};

impl App {
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) -> Option<Dispatch> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if is_quit(&key) {
            self.should_quit = true;
            return None;
        }

        let action = match self.mode {
            InputMode::Normal => normal_mode_action(key),
            InputMode::Insert => self.resolve_insert_action(key),
        };
        self.execute(action, now)
    }

    fn resolve_insert_action(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Esc {
            return Action::ExitInsert;
        }

        match self.visible_panel {
            Some(Panel::Analyzer) => analyzer_key(&mut self.analyzer, key.code, key.modifiers),
            Some(Panel::Generator) => generator_key(&mut self.generator, key.code, key.modifiers),
            None => Action::ExitInsert,
        }
    }
}

fn analyzer_key(panel: &mut AnalyzerPanel, code: KeyCode, mods: KeyModifiers) -> Action {
    match (code, mods) {
        (KeyCode::Enter, _) => Action::Analyze,
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => Action::ToggleReveal,
        _ => {
            handle_text_key(&mut panel.password, code, mods);
            Action::None
        }
    }
}

fn generator_key(panel: &mut GeneratorPanel, code: KeyCode, mods: KeyModifiers) -> Action {
    match (code, mods) {
        (KeyCode::Tab, _) => return Action::NextField,
        (KeyCode::BackTab, _) => return Action::PrevField,
        (KeyCode::Char('g'), KeyModifiers::CONTROL) => return Action::Generate,
        (KeyCode::Enter, _) if panel.focus == GeneratorFocus::Suggestions => return Action::CopySelected,
        (KeyCode::Enter, _) => return Action::Generate,
        _ => {}
    }

    match panel.focus {
        GeneratorFocus::BaseWord => {
            handle_text_key(&mut panel.base_word, code, mods);
            Action::None
        }
        GeneratorFocus::Profile => profile_action(code),
        GeneratorFocus::Suggestions => suggestion_action(code),
    }
}
