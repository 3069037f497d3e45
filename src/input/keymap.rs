//! Keymap
//!
//! Maps key events to page actions. Insert-mode keys are resolved by the
//! app against the focused panel; only the panel-independent parts live here.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::api::SecurityProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    ShowAnalyzer,
    ShowGenerator,
    EnterInsert,
    ExitInsert,
    ScrollDown,
    ScrollUp,
    ScrollTop,
    ScrollBottom,
    NextModel,
    PrevModel,
    SelectModel(usize),
    DismissNotification,
    CheckService,
    Analyze,
    ToggleReveal,
    Generate,
    NextField,
    PrevField,
    CycleProfile { forward: bool },
    SelectProfile(SecurityProfile),
    SelectNext,
    SelectPrev,
    CopySelected,
}

pub fn is_quit(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

pub fn normal_mode_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('a'), KeyModifiers::NONE) => Action::ShowAnalyzer,
        (KeyCode::Char('g'), KeyModifiers::NONE) => Action::ShowGenerator,
        (KeyCode::Char('i'), KeyModifiers::NONE) | (KeyCode::Enter, _) => Action::EnterInsert,
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => Action::ScrollDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => Action::ScrollUp,
        (KeyCode::Home, _) => Action::ScrollTop,
        (KeyCode::Char('G'), _) | (KeyCode::End, _) => Action::ScrollBottom,
        (KeyCode::Char('l'), KeyModifiers::NONE) | (KeyCode::Right, _) | (KeyCode::Tab, _) => Action::NextModel,
        (KeyCode::Char('h'), KeyModifiers::NONE) | (KeyCode::Left, _) | (KeyCode::BackTab, _) => Action::PrevModel,
        (KeyCode::Char(c @ '1'..='4'), KeyModifiers::NONE) => Action::SelectModel(c as usize - '1' as usize),
        (KeyCode::Char('r'), KeyModifiers::NONE) => Action::CheckService,
        (KeyCode::Esc, _) => Action::DismissNotification,
        _ => Action::None,
    }
}

pub fn profile_action(code: KeyCode) -> Action {
    match code {
        KeyCode::Left | KeyCode::Char('h') => Action::CycleProfile { forward: false },
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => Action::CycleProfile { forward: true },
        KeyCode::Char('1') => Action::SelectProfile(SecurityProfile::Balanced),
        KeyCode::Char('2') => Action::SelectProfile(SecurityProfile::Memorable),
        KeyCode::Char('3') => Action::SelectProfile(SecurityProfile::HackerProof),
        _ => Action::None,
    }
}

pub fn suggestion_action(code: KeyCode) -> Action {
    match code {
        KeyCode::Down | KeyCode::Char('j') => Action::SelectNext,
        KeyCode::Up | KeyCode::Char('k') => Action::SelectPrev,
        KeyCode::Char('y') | KeyCode::Char('c') => Action::CopySelected,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_panel_toggles() {
        assert_eq!(normal_mode_action(key(KeyCode::Char('a'))), Action::ShowAnalyzer);
        assert_eq!(normal_mode_action(key(KeyCode::Char('g'))), Action::ShowGenerator);
    }

    #[test]
    fn test_model_selection_digits() {
        assert_eq!(normal_mode_action(key(KeyCode::Char('1'))), Action::SelectModel(0));
        assert_eq!(normal_mode_action(key(KeyCode::Char('4'))), Action::SelectModel(3));
        assert_eq!(normal_mode_action(key(KeyCode::Char('5'))), Action::None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        assert!(is_quit(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_quit(&key(KeyCode::Char('c'))));
    }

    #[test]
    fn test_profile_keys() {
        assert_eq!(profile_action(KeyCode::Char('3')), Action::SelectProfile(SecurityProfile::HackerProof));
        assert_eq!(profile_action(KeyCode::Left), Action::CycleProfile { forward: false });
        assert_eq!(profile_action(KeyCode::Char('x')), Action::None);
    }

    #[test]
    fn test_suggestion_keys() {
        assert_eq!(suggestion_action(KeyCode::Char('y')), Action::CopySelected);
        assert_eq!(suggestion_action(KeyCode::Down), Action::SelectNext);
    }
}
