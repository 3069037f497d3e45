//! Input Modes
//!
//! Normal mode navigates the page; insert mode edits the visible panel.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Insert,
}

impl InputMode {
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Insert => "INSERT",
        }
    }

    pub fn is_text_input(&self) -> bool {
        matches!(self, Self::Insert)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_normal() {
        assert_eq!(InputMode::default(), InputMode::Normal);
    }

    #[test]
    fn test_indicators() {
        assert_eq!(InputMode::Normal.indicator(), "NORMAL");
        assert_eq!(InputMode::Insert.indicator(), "INSERT");
        assert!(InputMode::Insert.is_text_input());
        assert!(!InputMode::Normal.is_text_input());
    }
}
