//! Input Module
//!
//! Handles keyboard input with vim-style modal editing.

pub mod keymap;
pub mod modes;
pub mod text_buffer;

// Re-exports
pub use keymap::Action;
pub use modes::InputMode;
pub use text_buffer::{handle_text_key, Edit, LineBuffer, SecureTextBuffer, TextBuffer, TextEditing};
